//! Declarative checker specifications and the kind lookup table

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Checker;
use crate::error::ConfigError;

/// A checker as written in a configuration file
///
/// ```toml
/// [[checkers]]
/// type = "minimum-length"
/// minlength = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerSpec {
    /// Kind tag, e.g. `"snake-case"`
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minlength: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowedchars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

type Builder = fn(&CheckerSpec, usize) -> Result<Checker, ConfigError>;

/// Kind tag -> builder. Each builder pulls and validates its own parameters.
const REGISTRY: &[(&str, Builder)] = &[
    ("snake-case", |_, _| Ok(Checker::SnakeCase)),
    ("upper-snake-case", |_, _| Ok(Checker::UpperSnakeCase)),
    ("camel-case", |_, _| Ok(Checker::CamelCase)),
    ("lower-case", |_, _| Ok(Checker::LowerCase)),
    ("upper-case", |_, _| Ok(Checker::UpperCase)),
    ("kebab-case", |_, _| Ok(Checker::KebabCase)),
    ("pascal-case", |_, _| Ok(Checker::PascalCase)),
    ("alphanumeric", |_, _| Ok(Checker::Alphanumeric)),
    ("no-sql-reserved-words", |_, _| Ok(Checker::NoSqlReservedWords)),
    ("minimum-length", build_minimum_length),
    ("maximum-length", build_maximum_length),
    ("allowed-special-characters", build_allowed_special_characters),
    ("regex", build_regex),
    ("prefix", build_prefix),
];

/// Kind tags accepted in configuration, in registry order
pub fn registry_kinds() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(kind, _)| *kind)
}

impl CheckerSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Instantiate the checker this spec describes
    ///
    /// `index` is the spec's position in the configured list and is only used
    /// to attribute errors. Unknown kinds are skipped with a warning and
    /// yield `Ok(None)`.
    pub fn build(&self, index: usize) -> Result<Option<Checker>, ConfigError> {
        match REGISTRY.iter().find(|(kind, _)| *kind == self.kind) {
            Some((_, build)) => build(self, index).map(Some),
            None => {
                warn!(index, kind = %self.kind, "unknown checker kind, ignoring");
                Ok(None)
            }
        }
    }

    fn require<T: Clone>(
        &self,
        value: &Option<T>,
        index: usize,
        parameter: &'static str,
    ) -> Result<T, ConfigError> {
        value.clone().ok_or_else(|| ConfigError::MissingParameter {
            index,
            kind: self.kind.clone(),
            parameter,
        })
    }
}

fn build_minimum_length(spec: &CheckerSpec, index: usize) -> Result<Checker, ConfigError> {
    let min = spec.require(&spec.minlength, index, "minlength")?;
    Ok(Checker::MinimumLength(min))
}

fn build_maximum_length(spec: &CheckerSpec, index: usize) -> Result<Checker, ConfigError> {
    let max = spec.require(&spec.maxlength, index, "maxlength")?;
    Ok(Checker::MaximumLength(max))
}

fn build_allowed_special_characters(
    spec: &CheckerSpec,
    index: usize,
) -> Result<Checker, ConfigError> {
    let allowed = spec.require(&spec.allowedchars, index, "allowedchars")?;
    Ok(Checker::AllowedSpecialCharacters(allowed))
}

fn build_regex(spec: &CheckerSpec, index: usize) -> Result<Checker, ConfigError> {
    let pattern = spec.require(&spec.pattern, index, "pattern")?;
    let re = Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
        index,
        pattern: pattern.clone(),
        source,
    })?;
    Ok(Checker::Regex(re))
}

fn build_prefix(spec: &CheckerSpec, index: usize) -> Result<Checker, ConfigError> {
    let prefix = spec.require(&spec.prefix, index, "prefix")?;
    Ok(Checker::Prefix(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parameterless_kinds() {
        for kind in [
            "snake-case",
            "upper-snake-case",
            "camel-case",
            "lower-case",
            "upper-case",
            "kebab-case",
            "pascal-case",
            "alphanumeric",
            "no-sql-reserved-words",
        ] {
            let checker = CheckerSpec::new(kind).build(0).unwrap().unwrap();
            assert_eq!(checker.kind(), kind);
        }
    }

    #[test]
    fn test_build_parameterized_kinds() {
        let spec = CheckerSpec {
            minlength: Some(3),
            ..CheckerSpec::new("minimum-length")
        };
        assert!(matches!(
            spec.build(0).unwrap(),
            Some(Checker::MinimumLength(3))
        ));

        let spec = CheckerSpec {
            prefix: Some("app_".to_string()),
            ..CheckerSpec::new("prefix")
        };
        let checker = spec.build(0).unwrap().unwrap();
        assert!(checker.check("app_users"));
        assert!(!checker.check("users"));
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        assert!(CheckerSpec::new("screaming-case").build(0).unwrap().is_none());
    }

    #[test]
    fn test_missing_parameter_is_attributed() {
        let err = CheckerSpec::new("minimum-length").build(4).unwrap_err();
        match err {
            ConfigError::MissingParameter {
                index,
                kind,
                parameter,
            } => {
                assert_eq!(index, 4);
                assert_eq!(kind, "minimum-length");
                assert_eq!(parameter, "minlength");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        for (kind, parameter) in [
            ("maximum-length", "maxlength"),
            ("allowed-special-characters", "allowedchars"),
            ("regex", "pattern"),
            ("prefix", "prefix"),
        ] {
            let err = CheckerSpec::new(kind).build(0).unwrap_err();
            assert!(
                err.to_string().contains(parameter),
                "{kind}: unexpected message {err}"
            );
        }
    }

    #[test]
    fn test_invalid_regex_pattern() {
        let spec = CheckerSpec {
            pattern: Some("([a-z]".to_string()),
            ..CheckerSpec::new("regex")
        };
        let err = spec.build(2).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { index: 2, .. }));
    }

    #[test]
    fn test_registry_lists_every_kind() {
        let kinds: Vec<_> = registry_kinds().collect();
        assert_eq!(kinds.len(), 14);
        assert!(kinds.contains(&"no-sql-reserved-words"));
        assert!(kinds.contains(&"allowed-special-characters"));
    }
}
