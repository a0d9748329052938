//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! cols = 120
//! rows = 60
//! spawn_chance = 0.2
//! seed = 42
//!
//! [trail]
//! death_opacity = 254
//! fade_step = 10
//! color_fade_step = 5
//!
//! [simulation]
//! tick_interval_ms = 50
//! ruleset = "HighLife"
//! color_behavior = "MajorityColor"
//! rulesets_path = "rulesets.json"
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cell::{TrailSettings, DEFAULT_SPAWN_CHANCE};
use crate::color::ColorBehavior;

/// Grid dimensions and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    pub spawn_chance: f64,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 40,
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Seeding generator: deterministic when `seed` is set.
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Driver-level settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    /// Name of the ruleset applied at startup.
    pub ruleset: String,
    pub color_behavior: ColorBehavior,
    /// Where user-defined rulesets are persisted.
    pub rulesets_path: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            ruleset: "Conway's Game of Life".to_string(),
            color_behavior: ColorBehavior::Default,
            rulesets_path: "rulesets.json".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub trail: TrailSettings,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Grid dimensions must be positive and reasonable (<= 1000)
    /// - Spawn chance must be in [0.0, 1.0]
    /// - Trails must start visible and fade by at least one step
    /// - Tick interval must be in 1..=10000 ms
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.grid.cols > 0, "Grid cols must be positive");
        anyhow::ensure!(self.grid.cols <= 1000, "Grid cols too large (max 1000)");
        anyhow::ensure!(self.grid.rows > 0, "Grid rows must be positive");
        anyhow::ensure!(self.grid.rows <= 1000, "Grid rows too large (max 1000)");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.grid.spawn_chance),
            "Spawn chance must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            self.trail.death_opacity > 0,
            "Trail death opacity must be positive"
        );
        anyhow::ensure!(self.trail.fade_step > 0, "Trail fade step must be positive");

        anyhow::ensure!(
            self.simulation.tick_interval_ms > 0,
            "Tick interval must be positive"
        );
        anyhow::ensure!(
            self.simulation.tick_interval_ms <= 10_000,
            "Tick interval too long (max 10000 ms)"
        );
        anyhow::ensure!(
            !self.simulation.ruleset.trim().is_empty(),
            "Initial ruleset name must not be empty"
        );
        Ok(())
    }

    /// Parses and validates a `config.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of everything that changes simulation outcomes.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(format!("{:?}", self.trail).as_bytes());
        hasher.update(format!("{:?}", self.simulation.color_behavior).as_bytes());
        hasher.update(self.simulation.ruleset.as_bytes());
        hex::encode(hasher.finalize())
    }
}
