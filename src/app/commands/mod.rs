//! Command implementations.

pub mod render;
pub mod resolve;
pub mod update;

use std::fmt;

/// How catalog and schema are resolved for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Read defaults from the bundle configuration file.
    Static,
    /// Ask the bundle CLI to validate the bundle and read the resolved values.
    Bundle,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Static => f.write_str("static"),
            Strategy::Bundle => f.write_str("bundle"),
        }
    }
}

/// Target environment and credentials to resolve variables for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRequest {
    pub target: String,
    pub profile: String,
    pub strategy: Strategy,
}

impl VariableRequest {
    pub fn new(target: impl Into<String>, profile: impl Into<String>, strategy: Strategy) -> Self {
        Self { target: target.into(), profile: profile.into(), strategy }
    }
}
