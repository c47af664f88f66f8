//! Per-file results of a migration check run

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analyzer::Analysis;
use crate::error::ParseError;
use crate::warning::{ChangeKind, NameDiagnostic, Warning};

/// Outcome of analyzing one migration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Analyzed(Analysis),
    ParseFailed { error: ParseError },
}

impl From<Result<Analysis, ParseError>> for FileOutcome {
    fn from(result: Result<Analysis, ParseError>) -> Self {
        match result {
            Ok(analysis) => FileOutcome::Analyzed(analysis),
            Err(error) => FileOutcome::ParseFailed { error },
        }
    }
}

/// Results of a run, keyed by file name in the order files were analyzed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrationReport {
    pub files: IndexMap<String, FileOutcome>,
}

impl MigrationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `file`, replacing an earlier one
    pub fn record(&mut self, file: impl Into<String>, outcome: impl Into<FileOutcome>) {
        self.files.insert(file.into(), outcome.into());
    }

    /// All warnings with the file they came from, in run order
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &Warning)> {
        self.analyses()
            .flat_map(|(file, analysis)| analysis.warnings.iter().map(move |w| (file, w)))
    }

    /// Warnings of one change class
    pub fn warnings_of(&self, change: ChangeKind) -> impl Iterator<Item = (&str, &Warning)> {
        self.warnings().filter(move |(_, w)| w.change == change)
    }

    /// All naming diagnostics with the file they came from
    pub fn diagnostics(&self) -> impl Iterator<Item = (&str, &NameDiagnostic)> {
        self.analyses()
            .flat_map(|(file, analysis)| analysis.diagnostics.iter().map(move |d| (file, d)))
    }

    /// Files that failed to parse
    pub fn parse_failures(&self) -> impl Iterator<Item = (&str, &ParseError)> {
        self.files.iter().filter_map(|(file, outcome)| match outcome {
            FileOutcome::ParseFailed { error } => Some((file.as_str(), error)),
            FileOutcome::Analyzed(_) => None,
        })
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True if any file produced a warning, a diagnostic, or a parse failure
    pub fn has_findings(&self) -> bool {
        self.files.values().any(|outcome| match outcome {
            FileOutcome::Analyzed(analysis) => !analysis.is_empty(),
            FileOutcome::ParseFailed { .. } => true,
        })
    }

    fn analyses(&self) -> impl Iterator<Item = (&str, &Analysis)> {
        self.files.iter().filter_map(|(file, outcome)| match outcome {
            FileOutcome::Analyzed(analysis) => Some((file.as_str(), analysis)),
            FileOutcome::ParseFailed { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::checker::Checker;
    use crate::config::Config;

    fn sample_report() -> MigrationReport {
        let config = Config::new(vec![Checker::SnakeCase]);
        let mut report = MigrationReport::new();
        report.record("002_drop_view.sql", analyze(&config, "DROP VIEW active_users"));
        report.record("001_drop_table.sql", analyze(&config, "DROP TABLE users"));
        report.record("003_broken.sql", analyze(&config, "DROP TABLE"));
        report.record(
            "004_create.sql",
            analyze(&config, "CREATE TABLE BadName (id INT)"),
        );
        report
    }

    #[test]
    fn test_report_keeps_insertion_order() {
        let report = sample_report();
        let files: Vec<_> = report.warnings().map(|(file, _)| file).collect();
        assert_eq!(files, vec!["002_drop_view.sql", "001_drop_table.sql"]);
    }

    #[test]
    fn test_report_groups_by_change() {
        let report = sample_report();
        let destructive: Vec<_> = report
            .warnings_of(ChangeKind::Destructive)
            .map(|(_, w)| w.name.as_str())
            .collect();
        assert_eq!(destructive, vec!["users"]);
        assert_eq!(report.warning_count(), 2);
    }

    #[test]
    fn test_report_tracks_failures_and_diagnostics() {
        let report = sample_report();
        let failed: Vec<_> = report.parse_failures().map(|(file, _)| file).collect();
        assert_eq!(failed, vec!["003_broken.sql"]);

        let diags: Vec<_> = report.diagnostics().collect();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].1.name, "BadName");
        assert!(report.has_findings());
    }

    #[test]
    fn test_clean_report() {
        let mut report = MigrationReport::new();
        report.record("001.sql", FileOutcome::Analyzed(Analysis::default()));
        assert!(!report.has_findings());
    }
}
