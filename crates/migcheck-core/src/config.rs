//! Analysis configuration

use crate::checker::{Checker, CheckerSpec};
use crate::error::ConfigError;

/// Settings shared read-only by every analysis of a run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Naming rules applied to created relations, in declaration order
    pub checkers: Vec<Checker>,
}

impl Config {
    pub fn new(checkers: Vec<Checker>) -> Self {
        Self { checkers }
    }

    /// Build the checker list from declarative specs
    ///
    /// Fails on the first spec with a missing or invalid parameter. Specs of
    /// unknown kind are skipped.
    pub fn from_specs(specs: &[CheckerSpec]) -> Result<Self, ConfigError> {
        let mut checkers = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            if let Some(checker) = spec.build(index)? {
                checkers.push(checker);
            }
        }
        Ok(Self { checkers })
    }
}
