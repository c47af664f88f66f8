//! migcheck CLI - SQL migration safety checker

mod args;
mod config;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use migcheck_core::checker::registry_kinds;
use migcheck_core::{split_sections, Analyzer, MigrationReport, SqlDialect};
use tracing::Level;

use crate::args::{Args, Command};
use crate::config::Config;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(has_findings) => {
            if has_findings {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let quiet = args.quiet;

    match args.command {
        Command::Check {
            paths,
            config: config_path,
            dialect,
            format,
        } => {
            // Load configuration
            let config = if let Some(path) = config_path {
                Config::from_file(&path)?
            } else {
                Config::find_and_load()?.unwrap_or_default()
            };

            // Merge CLI args with config (CLI takes precedence)
            let config = config.merge_with_args(&paths, &dialect, &format);

            let dialect: SqlDialect = match &config.dialect {
                Some(name) => name.parse().map_err(|e: String| miette::miette!(e))?,
                None => SqlDialect::default(),
            };
            let analysis_config = config.analysis_config()?;

            let migration_files = collect_migration_files(&config.paths)?;
            if migration_files.is_empty() {
                miette::bail!(
                    "No migration files found. Pass files or directories, or configure paths in migcheck.toml"
                );
            }

            let analyzer = Analyzer::with_dialect(&analysis_config, dialect);
            let mut report = MigrationReport::new();

            for file in &migration_files {
                let content = fs::read_to_string(file)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("failed to read {}", file.display()))?;
                let sections = split_sections(&content);
                tracing::debug!(file = %file.display(), "analyzing up section");
                report.record(file.display().to_string(), analyzer.analyze(&sections.up));
            }

            let formatter = OutputFormatter::new(config.format.unwrap_or_default(), quiet);
            formatter.print_report(&report)?;

            if !quiet {
                let failures = report.parse_failures().count();
                let violations = report.diagnostics().count();
                eprintln!();
                if report.has_findings() {
                    eprintln!(
                        "Found {} warning(s), {} naming violation(s), {} parse error(s) in {} file(s)",
                        report.warning_count(),
                        violations,
                        failures,
                        migration_files.len()
                    );
                } else {
                    eprintln!("All {} file(s) passed", migration_files.len());
                }
            }

            Ok(report.has_findings())
        }

        Command::Parse { file, dialect } => {
            // Parse and display AST (for debugging)
            let dialect: SqlDialect = dialect.parse().map_err(|e: String| miette::miette!(e))?;
            let content = fs::read_to_string(&file).into_diagnostic()?;

            let sections = split_sections(&content);
            let sql = if sections.up.is_empty() {
                content.as_str()
            } else {
                sections.up.as_str()
            };

            match dialect.parse(sql) {
                Ok(statements) => {
                    for (i, stmt) in statements.iter().enumerate() {
                        println!("Statement {}:", i + 1);
                        println!("{:#?}", stmt);
                        println!();
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(true);
                }
            }

            Ok(false)
        }

        Command::Checkers => {
            for kind in registry_kinds() {
                println!("{}", kind);
            }
            Ok(false)
        }
    }
}

/// Expand the configured paths into migration files
///
/// Directories contribute their `*.sql` files in name order; files are taken
/// as given.
fn collect_migration_files(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = Path::new(path);
        if path.is_dir() {
            let pattern = format!("{}/*.sql", path.display());
            let mut found: Vec<PathBuf> =
                glob::glob(&pattern).into_diagnostic()?.flatten().collect();
            found.sort();
            files.extend(found);
        } else if path.display().to_string().contains('*') {
            let pattern = path.display().to_string();
            for entry in glob::glob(&pattern).into_diagnostic()?.flatten() {
                files.push(entry);
            }
        } else {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
