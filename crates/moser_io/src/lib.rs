//! # Moser IO
//!
//! I/O and persistence layer for Moser Life.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers with atomic file writes
//! - The ruleset registry and its on-disk store

/// Error types and result aliases for I/O operations
pub mod error;
/// Predefined and user-defined rulesets with JSON persistence
pub mod registry;
/// Validated serialization helpers for JSON
pub mod serialization;

pub use error::{IoError, Result};
pub use registry::{
    apply_ruleset, current_ruleset, predefined_rulesets, DuplicateResolution, RulesetRegistry,
};
pub use serialization::{from_json, read_json_file, write_json_file};
