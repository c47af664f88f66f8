//! Naming-convention checkers
//!
//! A [`Checker`] is a predicate over an object name. Checkers are combined by
//! conjunction through [`validate_name`]: a name is valid when every configured
//! checker accepts it. Checkers never fail; any string, including the empty
//! string, is a valid input.

mod registry;

use std::sync::LazyLock;

use regex::Regex;

pub use registry::{registry_kinds, CheckerSpec};

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(_[a-z]+)*$").expect("static regex must compile"));
static UPPER_SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+(_[A-Z]+)*$").expect("static regex must compile"));
static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+([A-Z][a-z]*)*$").expect("static regex must compile"));
static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*$").expect("static regex must compile"));
static PASCAL_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+([A-Z][a-z]*)*$").expect("static regex must compile")
});
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("static regex must compile"));

/// Words rejected by [`Checker::NoSqlReservedWords`], compared case-insensitively
pub const SQL_RESERVED_WORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "CREATE", "DROP", "ALTER",
];

/// A single naming rule
#[derive(Debug, Clone)]
pub enum Checker {
    /// `snake_case`
    SnakeCase,
    /// `UPPER_SNAKE_CASE`
    UpperSnakeCase,
    /// `camelCase`
    CamelCase,
    /// Name is unchanged by lowercasing
    LowerCase,
    /// Name is unchanged by uppercasing
    UpperCase,
    /// `kebab-case`
    KebabCase,
    /// `PascalCase`
    PascalCase,
    /// ASCII letters and digits only
    Alphanumeric,
    /// Name is not one of [`SQL_RESERVED_WORDS`]
    NoSqlReservedWords,
    /// At least this many bytes
    MinimumLength(usize),
    /// At most this many bytes
    MaximumLength(usize),
    /// Letters, digits, and the listed characters only
    AllowedSpecialCharacters(String),
    /// User pattern, matched anywhere in the name unless anchored
    Regex(Regex),
    /// Literal prefix
    Prefix(String),
}

impl Checker {
    /// Returns true if `name` satisfies this rule
    pub fn check(&self, name: &str) -> bool {
        match self {
            Checker::SnakeCase => SNAKE_CASE.is_match(name),
            Checker::UpperSnakeCase => UPPER_SNAKE_CASE.is_match(name),
            Checker::CamelCase => CAMEL_CASE.is_match(name),
            Checker::LowerCase => name == name.to_lowercase(),
            Checker::UpperCase => name == name.to_uppercase(),
            Checker::KebabCase => KEBAB_CASE.is_match(name),
            Checker::PascalCase => PASCAL_CASE.is_match(name),
            Checker::Alphanumeric => ALPHANUMERIC.is_match(name),
            Checker::NoSqlReservedWords => {
                let upper = name.to_uppercase();
                !SQL_RESERVED_WORDS.contains(&upper.as_str())
            }
            Checker::MinimumLength(min) => name.len() >= *min,
            Checker::MaximumLength(max) => name.len() <= *max,
            Checker::AllowedSpecialCharacters(allowed) => name
                .chars()
                .all(|ch| ch.is_alphabetic() || ch.is_numeric() || allowed.contains(ch)),
            Checker::Regex(re) => re.is_match(name),
            Checker::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }

    /// Kind tag used in configuration files (e.g. `"snake-case"`)
    pub fn kind(&self) -> &'static str {
        match self {
            Checker::SnakeCase => "snake-case",
            Checker::UpperSnakeCase => "upper-snake-case",
            Checker::CamelCase => "camel-case",
            Checker::LowerCase => "lower-case",
            Checker::UpperCase => "upper-case",
            Checker::KebabCase => "kebab-case",
            Checker::PascalCase => "pascal-case",
            Checker::Alphanumeric => "alphanumeric",
            Checker::NoSqlReservedWords => "no-sql-reserved-words",
            Checker::MinimumLength(_) => "minimum-length",
            Checker::MaximumLength(_) => "maximum-length",
            Checker::AllowedSpecialCharacters(_) => "allowed-special-characters",
            Checker::Regex(_) => "regex",
            Checker::Prefix(_) => "prefix",
        }
    }
}

/// Returns the first checker (in order) that rejects `name`
pub fn first_violation<'c>(name: &str, checkers: &'c [Checker]) -> Option<&'c Checker> {
    checkers.iter().find(|checker| !checker.check(name))
}

/// Returns true iff every checker accepts `name`
///
/// Stops at the first rejection. An empty checker list accepts any name.
pub fn validate_name(name: &str, checkers: &[Checker]) -> bool {
    first_violation(name, checkers).is_none()
}
