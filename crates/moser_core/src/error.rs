//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised while building grids or rulesets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A grid needs at least one column and one row.
    #[error("Invalid grid dimensions: {cols}x{rows} (both must be at least 1)")]
    InvalidDimensions { cols: usize, rows: usize },

    /// A `B…/S…` rule string could not be parsed.
    #[error("Invalid rule notation: {0}")]
    InvalidNotation(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new notation error.
    #[must_use]
    pub fn notation<S: Into<String>>(msg: S) -> Self {
        Self::InvalidNotation(msg.into())
    }
}
