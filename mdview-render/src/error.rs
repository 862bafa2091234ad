//! Error types for format operations

use std::fmt;

/// Errors that can occur when selecting an output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
        }
    }
}

impl std::error::Error for FormatError {}
