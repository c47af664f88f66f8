//! migcheck-core: migration safety analysis library
//!
//! This library inspects SQL migration statements and reports changes that
//! destroy data (dropped tables and columns), changes that may break running
//! consumers (dropped views), and created tables whose names break the
//! configured naming conventions.

pub mod analyzer;
pub mod checker;
pub mod config;
pub mod dialect;
pub mod error;
pub mod migration;
pub mod report;
pub mod warning;

pub use analyzer::{analyze, Analysis, Analyzer, Finding, StatementAnalyzer};
pub use checker::{first_violation, validate_name, Checker, CheckerSpec};
pub use config::Config;
pub use dialect::SqlDialect;
pub use error::{ConfigError, ParseError};
pub use migration::{split_sections, MigrationSections};
pub use report::{FileOutcome, MigrationReport};
pub use warning::{ChangeKind, NameDiagnostic, ObjectKind, OperationKind, Warning};
