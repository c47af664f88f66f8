//! Findings produced by the analyzers

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a change affects existing data and consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Discards data irrecoverably
    Destructive,
    /// Keeps data but may break running consumers
    Incompatible,
}

impl ChangeKind {
    /// Short code ("D", "IC")
    pub fn code(&self) -> &'static str {
        match self {
            ChangeKind::Destructive => "D",
            ChangeKind::Incompatible => "IC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Destructive => "destructive",
            ChangeKind::Incompatible => "incompatible",
        }
    }
}

/// The operation a migration performs on an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Drop,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Drop => write!(f, "drop"),
        }
    }
}

/// The kind of database object affected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Table,
    View,
    Column,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Table => write!(f, "table"),
            ObjectKind::View => write!(f, "view"),
            ObjectKind::Column => write!(f, "column"),
        }
    }
}

/// One risky operation detected in a statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Warning {
    pub change: ChangeKind,
    pub operation: OperationKind,
    pub object: ObjectKind,
    /// Qualified object name; `table.column` for columns
    pub name: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\t{}", self.operation, self.name, self.object)
    }
}

/// A name rejected by the configured naming checkers
///
/// Reported next to the warnings rather than as one: a bad name is a style
/// problem, not a risky change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDiagnostic {
    pub object: ObjectKind,
    pub name: String,
    /// Kind tag of the first checker that rejected the name
    pub checker: String,
}

impl fmt::Display for NameDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid name ({})", self.name, self.checker)
    }
}
