//! Output formatting

use std::fmt::Write;

use miette::{IntoDiagnostic, Result};
use migcheck_core::{ChangeKind, MigrationReport};

use crate::args::OutputFormat;

/// Output formatter for a check run
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Print the report in the configured format
    pub fn print_report(&self, report: &MigrationReport) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Human => self.render_human(report),
            OutputFormat::Json => render_json(report)?,
        };
        print!("{}", rendered);
        Ok(())
    }

    fn render_human(&self, report: &MigrationReport) -> String {
        let mut out = String::new();

        if !self.quiet {
            out.push_str("Analyzing:\n");
            for file in report.files.keys() {
                let _ = writeln!(out, "  {}", file);
            }
        }

        let failures: Vec<_> = report.parse_failures().collect();
        if !failures.is_empty() {
            out.push_str("Parse errors:\n");
            for (file, error) in failures {
                let _ = writeln!(out, "  {}: {}", file, error);
            }
        }

        let diagnostics: Vec<_> = report.diagnostics().collect();
        if !diagnostics.is_empty() {
            out.push_str("Naming violations:\n");
            for (file, diag) in diagnostics {
                let _ = writeln!(out, "  {}: {}", file, diag);
            }
        }

        for change in [ChangeKind::Destructive, ChangeKind::Incompatible] {
            let warnings: Vec<_> = report.warnings_of(change).collect();
            if warnings.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{} changes:", capitalize(change.label()));
            for (_, warning) in warnings {
                let _ = writeln!(out, " {}", warning);
            }
        }

        out
    }
}

fn render_json(report: &MigrationReport) -> Result<String> {
    let output = serde_json::json!({
        "files": report.files,
        "summary": {
            "files": report.files.len(),
            "warnings": report.warning_count(),
            "naming_violations": report.diagnostics().count(),
            "parse_errors": report.parse_failures().count(),
        }
    });
    let mut rendered = serde_json::to_string_pretty(&output).into_diagnostic()?;
    rendered.push('\n');
    Ok(rendered)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migcheck_core::{analyze, Checker, Config};
    use pretty_assertions::assert_eq;

    fn sample_report() -> MigrationReport {
        let config = Config::new(vec![Checker::SnakeCase]);
        let mut report = MigrationReport::new();
        report.record(
            "001_users.sql",
            analyze(&config, "CREATE TABLE Users (id INT)"),
        );
        report.record("002_drop.sql", analyze(&config, "DROP TABLE accounts"));
        report.record("003_view.sql", analyze(&config, "DROP VIEW active_accounts"));
        report.record("004_broken.sql", analyze(&config, "DROP TABLE"));
        report
    }

    #[test]
    fn test_render_human() {
        let formatter = OutputFormatter::new(OutputFormat::Human, false);
        let rendered = formatter.render_human(&sample_report());

        assert!(rendered.starts_with("Analyzing:\n  001_users.sql\n  002_drop.sql\n"));
        assert!(rendered.contains(
            "Naming violations:\n  001_users.sql: Users is not a valid name (snake-case)\n"
        ));
        assert!(rendered.contains("  004_broken.sql: parse error:"));
        assert!(rendered.ends_with(concat!(
            "Destructive changes:\n",
            " drop accounts\ttable\n",
            "Incompatible changes:\n",
            " drop active_accounts\tview\n",
        )));
    }

    #[test]
    fn test_render_human_quiet() {
        let formatter = OutputFormatter::new(OutputFormat::Human, true);
        let mut report = MigrationReport::new();
        report.record("001.sql", analyze(&Config::default(), "DROP TABLE t"));

        assert_eq!(
            formatter.render_human(&report),
            "Destructive changes:\n drop t\ttable\n"
        );
    }

    #[test]
    fn test_render_json() {
        let rendered = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["summary"]["warnings"], 2);
        assert_eq!(value["summary"]["parse_errors"], 1);
        assert_eq!(value["files"]["002_drop.sql"]["status"], "analyzed");
        assert_eq!(
            value["files"]["002_drop.sql"]["warnings"][0]["change"],
            "destructive"
        );
        assert_eq!(value["files"]["004_broken.sql"]["status"], "parse_failed");
    }
}
