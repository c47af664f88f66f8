//! Configuration file handling

use miette::{IntoDiagnostic, Result, WrapErr};
use migcheck_core::{CheckerSpec, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;

pub const CONFIG_FILE_NAME: &str = "migcheck.toml";

/// Configuration for migcheck
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Migration files or directories to check
    #[serde(default)]
    pub paths: Vec<String>,

    /// SQL dialect (postgresql or mysql)
    #[serde(default)]
    pub dialect: Option<String>,

    /// Output format (human, json)
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Naming checkers applied to created tables, in order
    #[serde(default)]
    pub checkers: Vec<CheckerSpec>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .into_diagnostic()
            .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Try to find and load migcheck.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let mut current_dir = std::env::current_dir().into_diagnostic()?;

        loop {
            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "using configuration file");
                return Ok(Some(Self::from_file(&config_path)?));
            }

            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Merge CLI arguments into configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_with_args(
        mut self,
        paths: &[PathBuf],
        dialect: &Option<String>,
        format: &Option<OutputFormat>,
    ) -> Self {
        if !paths.is_empty() {
            self.paths = paths.iter().map(|p| p.display().to_string()).collect();
        }

        if dialect.is_some() {
            self.dialect = dialect.clone();
        }

        if format.is_some() {
            self.format = *format;
        }

        self
    }

    /// Instantiate the configured naming checkers
    pub fn analysis_config(&self) -> std::result::Result<migcheck_core::Config, ConfigError> {
        migcheck_core::Config::from_specs(&self.checkers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        paths = ["db/migrations"]
        dialect = "postgresql"
        format = "json"

        [[checkers]]
        type = "snake-case"

        [[checkers]]
        type = "maximum-length"
        maxlength = 63

        [[checkers]]
        type = "regex"
        pattern = "^[a-z]"
    "#;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.paths, vec!["db/migrations".to_string()]);
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.checkers.len(), 3);
        assert_eq!(config.checkers[1].maxlength, Some(63));

        let analysis_config = config.analysis_config().unwrap();
        assert_eq!(analysis_config.checkers.len(), 3);
    }

    #[test]
    fn test_missing_parameter_is_config_error() {
        let config: Config = toml::from_str(
            r#"
            [[checkers]]
            type = "minimum-length"
            "#,
        )
        .unwrap();
        let err = config.analysis_config().unwrap_err();
        assert_eq!(err.index(), 0);
    }

    #[test]
    fn test_cli_args_take_precedence() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let merged = config.merge_with_args(
            &[PathBuf::from("other/001.sql")],
            &Some("mysql".to_string()),
            &None,
        );
        assert_eq!(merged.paths, vec!["other/001.sql".to_string()]);
        assert_eq!(merged.dialect.as_deref(), Some("mysql"));
        assert_eq!(merged.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.checkers.is_empty());
        assert!(config.analysis_config().unwrap().checkers.is_empty());
    }
}
