//! Error types for moser_io crate.
//!
//! Covers ruleset persistence and the registry's own rejections.

use thiserror::Error;

/// Main error type for moser_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Built-in rulesets can be neither replaced nor deleted.
    #[error("Cannot modify predefined ruleset '{name}'")]
    PredefinedRuleset { name: String },

    /// Another ruleset already carries the same birth and survival rules.
    #[error(
        "A ruleset with these exact rules already exists with name '{existing}'. Rule pattern: {notation}"
    )]
    DuplicateRules { existing: String, notation: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for moser_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new serialization error.
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn predefined<S: Into<String>>(name: S) -> Self {
        Self::PredefinedRuleset { name: name.into() }
    }

    #[must_use]
    pub fn duplicate_rules<S: Into<String>, N: Into<String>>(existing: S, notation: N) -> Self {
        Self::DuplicateRules {
            existing: existing.into(),
            notation: notation.into(),
        }
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Looks through any context wrappers.
    #[must_use]
    pub fn root(&self) -> &IoError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::serialization("test error");
        assert_eq!(err.to_string(), "Serialization error: test error");
    }

    #[test]
    fn test_error_context() {
        let err = IoError::predefined("Seeds").with_context("deleting ruleset");
        assert!(err.to_string().contains("deleting ruleset"));
        assert!(matches!(err.root(), IoError::PredefinedRuleset { .. }));
    }

    #[test]
    fn test_duplicate_rules_message_names_existing() {
        let err = IoError::duplicate_rules("HighLife", "B36/S23");
        let msg = err.to_string();
        assert!(msg.contains("'HighLife'"));
        assert!(msg.contains("B36/S23"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::FileSystem(_)));
    }
}
