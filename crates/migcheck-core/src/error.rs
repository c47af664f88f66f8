//! Error types

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Migration SQL could not be parsed
///
/// Recoverable: the caller records it against the migration file and moves
/// on to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize, Deserialize)]
#[error("parse error: {message}")]
#[diagnostic(
    code(migcheck::parse_error),
    help("only the first statement of the up section is analyzed; check its syntax")
)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<sqlparser::parser::ParserError> for ParseError {
    fn from(err: sqlparser::parser::ParserError) -> Self {
        Self::new(err.to_string())
    }
}

/// A checker specification could not be turned into a checker
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// E.g. `minimum-length` without `minlength`
    #[error("checker #{index} ({kind}) requires a `{parameter}` field")]
    #[diagnostic(code(migcheck::config::missing_parameter))]
    MissingParameter {
        index: usize,
        kind: String,
        parameter: &'static str,
    },

    #[error("checker #{index} (regex) has an invalid pattern `{pattern}`")]
    #[diagnostic(code(migcheck::config::invalid_pattern))]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Position of the offending specification in the configured list
    pub fn index(&self) -> usize {
        match self {
            ConfigError::MissingParameter { index, .. }
            | ConfigError::InvalidPattern { index, .. } => *index,
        }
    }
}
