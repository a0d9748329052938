//! # Moser Core
//!
//! The simulation engine for Moser Life, a colored variant of Conway's Game of Life.
//!
//! This crate contains:
//! - Cells with RGB color and a fading death trail
//! - A double-buffered toroidal grid with a Rayon-parallel update pass
//! - Birth/survival rulesets in `B…/S…` notation
//! - Color inheritance for newborn cells (fixed, average, majority)
//! - Configuration, metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use moser_core::{ColorBehavior, Grid, Ruleset, SharedColorBehavior};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let behavior = SharedColorBehavior::new(ColorBehavior::MajorityColor);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut grid = Grid::random(64, 32, behavior, &mut rng, 0.2).unwrap();
//!
//! grid.apply_ruleset(&Ruleset::from_notation("HighLife", "B36/S23", "").unwrap());
//! grid.step(10);
//! assert_eq!(grid.generation(), 10);
//! ```

/// Cell state and trail fading
pub mod cell;
/// Color behaviors and neighbor color aggregation
pub mod color;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for grid construction and rule parsing
pub mod error;
/// The double-buffered toroidal grid
pub mod grid;
/// Generation metrics collection and logging
pub mod metrics;
/// Birth/survival rulesets
pub mod ruleset;

pub use cell::{Cell, TrailSettings};
pub use color::{ColorBehavior, NeighborTally, Rgb, SharedColorBehavior};
pub use error::{CoreError, Result};
pub use grid::{GenerationStats, Grid};
pub use metrics::{init_file_logging, init_logging, Metrics};
pub use ruleset::{NeighborCounts, Ruleset};
