//! Built-in statement analyzers

use sqlparser::ast::{AlterTableOperation, ObjectName, ObjectType, Statement};
use tracing::info;

use super::{Finding, StatementAnalyzer};
use crate::checker::first_violation;
use crate::config::Config;
use crate::warning::{ChangeKind, NameDiagnostic, ObjectKind, OperationKind, Warning};

/// Flags `DROP TABLE` (destructive) and `DROP VIEW` (incompatible)
///
/// Only the first name of a multi-object drop (`DROP TABLE a, b`) is looked
/// at. Other object types are not classified.
pub struct DropAnalyzer;

impl StatementAnalyzer for DropAnalyzer {
    fn name(&self) -> &'static str {
        "drop"
    }

    fn analyze(&self, _config: &Config, stmt: &Statement) -> Option<Finding> {
        let Statement::Drop {
            object_type, names, ..
        } = stmt
        else {
            return None;
        };

        let (change, object) = match object_type {
            ObjectType::Table => (ChangeKind::Destructive, ObjectKind::Table),
            ObjectType::View => (ChangeKind::Incompatible, ObjectKind::View),
            _ => return None,
        };
        let name = names.first()?;

        Some(Finding::Warning(Warning {
            change,
            operation: OperationKind::Drop,
            object,
            name: dotted_name(name),
        }))
    }
}

/// Flags the first `DROP COLUMN` of an `ALTER TABLE`
pub struct AlterAnalyzer;

impl StatementAnalyzer for AlterAnalyzer {
    fn name(&self) -> &'static str {
        "alter"
    }

    fn analyze(&self, _config: &Config, stmt: &Statement) -> Option<Finding> {
        let Statement::AlterTable {
            name, operations, ..
        } = stmt
        else {
            return None;
        };

        operations.iter().find_map(|op| match op {
            AlterTableOperation::DropColumn { column_name, .. } => {
                Some(Finding::Warning(Warning {
                    change: ChangeKind::Destructive,
                    operation: OperationKind::Drop,
                    object: ObjectKind::Column,
                    name: format!("{}.{}", dotted_name(name), column_name.value),
                }))
            }
            _ => None,
        })
    }
}

/// Checks the name of a created table against the configured checkers
pub struct NamingAnalyzer;

impl StatementAnalyzer for NamingAnalyzer {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn analyze(&self, config: &Config, stmt: &Statement) -> Option<Finding> {
        let Statement::CreateTable(create) = stmt else {
            return None;
        };
        let relation = create.name.0.last()?.value.as_str();

        let checker = first_violation(relation, &config.checkers)?;
        info!(table = relation, checker = checker.kind(), "invalid table name");
        Some(Finding::Name(NameDiagnostic {
            object: ObjectKind::Table,
            name: relation.to_string(),
            checker: checker.kind().to_string(),
        }))
    }
}

/// `schema.table` style rendering of an object name, without quoting
fn dotted_name(name: &ObjectName) -> String {
    name.0
        .iter()
        .map(|ident| ident.value.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Checker;
    use crate::dialect::SqlDialect;

    fn parse_one(sql: &str) -> Statement {
        SqlDialect::default().parse(sql).unwrap().remove(0)
    }

    fn warning_of(finding: Option<Finding>) -> Warning {
        match finding {
            Some(Finding::Warning(w)) => w,
            other => panic!("expected a warning, got {other:?}"),
        }
    }

    #[test]
    fn test_drop_ignores_other_statements() {
        let config = Config::default();
        assert!(DropAnalyzer
            .analyze(&config, &parse_one("ALTER TABLE t DROP COLUMN c"))
            .is_none());
        assert!(DropAnalyzer
            .analyze(&config, &parse_one("DROP INDEX idx_users"))
            .is_none());
    }

    #[test]
    fn test_drop_keeps_schema_qualifier() {
        let config = Config::default();
        let stmt = parse_one("DROP TABLE app.users");
        let warning = warning_of(DropAnalyzer.analyze(&config, &stmt));
        assert_eq!(warning.name, "app.users");
    }

    #[test]
    fn test_drop_if_exists() {
        let config = Config::default();
        let stmt = parse_one("DROP TABLE IF EXISTS users CASCADE");
        let warning = warning_of(DropAnalyzer.analyze(&config, &stmt));
        assert_eq!(warning.name, "users");
        assert_eq!(warning.object, ObjectKind::Table);
    }

    #[test]
    fn test_alter_reports_first_drop_column() {
        let config = Config::default();
        let stmt = parse_one(
            "ALTER TABLE users ADD COLUMN age INT, DROP COLUMN email, DROP COLUMN phone",
        );
        let warning = warning_of(AlterAnalyzer.analyze(&config, &stmt));
        assert_eq!(warning.name, "users.email");
    }

    #[test]
    fn test_alter_without_drop_column() {
        let config = Config::default();
        let stmt = parse_one("ALTER TABLE users ADD COLUMN age INT");
        assert!(AlterAnalyzer.analyze(&config, &stmt).is_none());
    }

    #[test]
    fn test_naming_uses_unqualified_relation() {
        let config = Config::new(vec![Checker::SnakeCase]);
        let stmt = parse_one("CREATE TABLE app.user_accounts (id INT)");
        assert!(NamingAnalyzer.analyze(&config, &stmt).is_none());
    }

    #[test]
    fn test_naming_reports_failing_checker() {
        let config = Config::new(vec![Checker::MinimumLength(3), Checker::PascalCase]);
        let stmt = parse_one("CREATE TABLE orders (id INT)");
        match NamingAnalyzer.analyze(&config, &stmt) {
            Some(Finding::Name(diag)) => {
                assert_eq!(diag.name, "orders");
                assert_eq!(diag.checker, "pascal-case");
            }
            other => panic!("expected a name diagnostic, got {other:?}"),
        }
    }
}
