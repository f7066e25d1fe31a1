//! Crate-level error types.

use std::fmt;

/// Errors produced by the skillscape crate.
///
/// Only construction-time work (catalog validation, option loading, window
/// creation) can fail. The per-frame path never returns an error.
#[derive(Debug)]
pub enum SkillscapeError {
    /// Two catalog nodes share the same name.
    DuplicateNode(String),
    /// A catalog node violates a data-model invariant.
    InvalidNode {
        /// Name of the offending node (may be empty).
        name: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Catalog TOML parsing failure.
    CatalogParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold inconsistent values.
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for SkillscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(name) => {
                write!(f, "duplicate catalog node: {name}")
            }
            Self::InvalidNode { name, reason } => {
                write!(f, "invalid catalog node {name:?}: {reason}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for SkillscapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SkillscapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
