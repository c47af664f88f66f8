//! Migration analyzer module

mod rules;

use serde::{Deserialize, Serialize};
use sqlparser::ast::Statement;
use tracing::debug;

use crate::config::Config;
use crate::dialect::SqlDialect;
use crate::error::ParseError;
use crate::warning::{NameDiagnostic, Warning};

pub use rules::{AlterAnalyzer, DropAnalyzer, NamingAnalyzer};

/// What a single analyzer reports for a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Warning(Warning),
    Name(NameDiagnostic),
}

/// Inspects one parsed statement
///
/// Implementations must be pure: no mutation of the statement, the config,
/// or any shared state. Statements an analyzer does not understand yield
/// `None`.
pub trait StatementAnalyzer: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn analyze(&self, config: &Config, stmt: &Statement) -> Option<Finding>;
}

/// The built-in analyzers, in reporting order
pub fn default_analyzers() -> Vec<Box<dyn StatementAnalyzer>> {
    vec![
        Box::new(DropAnalyzer),
        Box::new(AlterAnalyzer),
        Box::new(NamingAnalyzer),
    ]
}

/// Findings for one statement, in analyzer order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub warnings: Vec<Warning>,
    /// Naming-convention violations, kept apart from the warnings
    pub diagnostics: Vec<NameDiagnostic>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.diagnostics.is_empty()
    }

    fn push(&mut self, finding: Finding) {
        match finding {
            Finding::Warning(warning) => self.warnings.push(warning),
            Finding::Name(diag) => self.diagnostics.push(diag),
        }
    }
}

/// Migration analyzer - runs every analyzer against a migration statement
pub struct Analyzer<'a> {
    config: &'a Config,
    dialect: SqlDialect,
    analyzers: Vec<Box<dyn StatementAnalyzer>>,
}

impl<'a> Analyzer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_dialect(config, SqlDialect::default())
    }

    pub fn with_dialect(config: &'a Config, dialect: SqlDialect) -> Self {
        Self {
            config,
            dialect,
            analyzers: default_analyzers(),
        }
    }

    /// Replace the analyzer set
    pub fn with_analyzers(mut self, analyzers: Vec<Box<dyn StatementAnalyzer>>) -> Self {
        self.analyzers = analyzers;
        self
    }

    /// Parse migration SQL and analyze its first statement
    ///
    /// Statements after the first are not analyzed. Input without any
    /// statement yields an empty analysis.
    pub fn analyze(&self, sql: &str) -> Result<Analysis, ParseError> {
        let statements = self.dialect.parse(sql)?;

        let Some(first) = statements.first() else {
            return Ok(Analysis::default());
        };
        if statements.len() > 1 {
            debug!(
                ignored = statements.len() - 1,
                "only the first statement of a migration is analyzed"
            );
        }

        Ok(self.analyze_statement(first))
    }

    /// Run every analyzer against `stmt`, collecting all findings
    pub fn analyze_statement(&self, stmt: &Statement) -> Analysis {
        let mut analysis = Analysis::default();
        for analyzer in &self.analyzers {
            if let Some(finding) = analyzer.analyze(self.config, stmt) {
                debug!(analyzer = analyzer.name(), ?finding, "analyzer matched");
                analysis.push(finding);
            }
        }
        analysis
    }
}

/// Analyze migration SQL with the default dialect and analyzers
pub fn analyze(config: &Config, sql: &str) -> Result<Analysis, ParseError> {
    Analyzer::new(config).analyze(sql)
}
