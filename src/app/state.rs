use anyhow::{Context, Result};
use rand_chacha::ChaCha8Rng;
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use moser_core::config::AppConfig;
use moser_core::{ColorBehavior, Grid, Metrics, Ruleset, SharedColorBehavior};
use moser_io::{DuplicateResolution, IoError, RulesetRegistry};

pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 2000;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub grid: Grid,
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub registry: RulesetRegistry,
    /// Index into `registry.rulesets()` of the ruleset in force, if any.
    pub active_ruleset: Option<usize>,
    pub color_behavior: SharedColorBehavior,
    pub metrics: Metrics,
    pub tick_interval: Duration,
    /// Last notice shown in the status panel.
    pub message: Option<String>,
    pub last_grid_rect: Rect,
    rng: ChaCha8Rng,
}

impl App {
    /// Reads `path`, falling back to defaults. A missing file is created
    /// with the defaults so users have something to edit.
    pub fn load_config<P: AsRef<Path>>(path: P) -> AppConfig {
        let path = path.as_ref();
        if let Ok(content) = std::fs::read_to_string(path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load config");
                }
            }
        }
        let default = AppConfig::default();
        if !path.exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    /// Builds the app from a loaded configuration.
    ///
    /// The saved rulesets live next to the config file unless
    /// `rulesets_path` is absolute.
    pub fn new(config: AppConfig, config_path: impl Into<PathBuf>) -> Result<Self> {
        config.validate()?;
        let config_path = config_path.into();
        let rulesets_path = resolve_beside(&config_path, &config.simulation.rulesets_path);
        match RulesetRegistry::load(&rulesets_path) {
            Ok(registry) => Self::with_registry(config, config_path, registry),
            Err(e) => {
                tracing::error!(error = %e, "Ignoring unreadable ruleset file");
                let mut app = Self::with_registry(config, config_path, RulesetRegistry::new())?;
                app.notify(format!(
                    "Cannot read {}, ruleset changes will not be saved",
                    rulesets_path.display()
                ));
                Ok(app)
            }
        }
    }

    pub fn with_registry(
        config: AppConfig,
        config_path: impl Into<PathBuf>,
        registry: RulesetRegistry,
    ) -> Result<Self> {
        let color_behavior = SharedColorBehavior::new(config.simulation.color_behavior);
        let mut rng = config.grid.rng();
        let grid = Grid::random(
            config.grid.cols,
            config.grid.rows,
            color_behavior.clone(),
            &mut rng,
            config.grid.spawn_chance,
        )
        .context("creating grid")?
        .with_trail_settings(config.trail);

        let mut app = Self {
            running: true,
            paused: false,
            grid,
            tick_interval: Duration::from_millis(config.simulation.tick_interval_ms),
            config_path: config_path.into(),
            registry,
            active_ruleset: None,
            color_behavior,
            metrics: Metrics::new(),
            message: None,
            last_grid_rect: Rect::default(),
            rng,
            config,
        };

        let initial = app.config.simulation.ruleset.clone();
        if !app.select_ruleset_by_name(&initial) {
            tracing::warn!(ruleset = %initial, "Unknown ruleset, keeping B3/S23");
            app.select_ruleset(0);
        }
        Ok(app)
    }

    /// Advances one generation and records its metrics.
    pub fn step_generation(&mut self) {
        let started = Instant::now();
        self.grid.update();
        self.metrics
            .record_generation(started.elapsed(), self.grid.last_stats());
    }

    /// Reseeds the grid with the configured spawn chance.
    pub fn new_grid(&mut self) -> Result<()> {
        let rules = self.grid.current_ruleset();
        self.grid = Grid::random(
            self.config.grid.cols,
            self.config.grid.rows,
            self.color_behavior.clone(),
            &mut self.rng,
            self.config.grid.spawn_chance,
        )?
        .with_trail_settings(self.config.trail);
        self.grid.apply_ruleset(&rules);
        self.notify("New grid");
        Ok(())
    }

    pub fn select_ruleset(&mut self, index: usize) {
        let Some(ruleset) = self.registry.rulesets().get(index) else {
            return;
        };
        self.grid.apply_ruleset(ruleset);
        self.active_ruleset = Some(index);
    }

    /// Switches to the registered ruleset called `name`.
    pub fn use_ruleset(&mut self, name: &str) -> Result<()> {
        if !self.select_ruleset_by_name(name) {
            anyhow::bail!("Unknown ruleset '{name}'");
        }
        Ok(())
    }

    pub fn select_ruleset_by_name(&mut self, name: &str) -> bool {
        match self.registry.rulesets().iter().position(|r| r.name() == name) {
            Some(index) => {
                self.select_ruleset(index);
                true
            }
            None => false,
        }
    }

    pub fn next_ruleset(&mut self) {
        let len = self.registry.rulesets().len();
        let next = self.active_ruleset.map_or(0, |i| (i + 1) % len);
        self.select_ruleset(next);
    }

    pub fn previous_ruleset(&mut self) {
        let len = self.registry.rulesets().len();
        let previous = self.active_ruleset.map_or(0, |i| (i + len - 1) % len);
        self.select_ruleset(previous);
    }

    /// Runs an ad-hoc rule without registering it.
    pub fn apply_rules(&mut self, ruleset: &Ruleset) {
        self.grid.apply_ruleset(ruleset);
        self.active_ruleset = self
            .registry
            .rulesets()
            .iter()
            .position(|r| r.has_same_rules(ruleset));
    }

    /// Name and notation of the rules in force.
    pub fn ruleset_label(&self) -> (String, String) {
        let current = self.grid.current_ruleset();
        let name = self
            .active_ruleset
            .and_then(|i| self.registry.rulesets().get(i))
            .map_or_else(|| current.name().to_string(), |r| r.name().to_string());
        (name, current.notation())
    }

    /// Saves the rules in force under `name`.
    ///
    /// When another ruleset already has these rules, `on_duplicate` decides.
    /// Returns the ruleset now selected, or `None` if the save was cancelled.
    pub fn save_current_ruleset(
        &mut self,
        name: &str,
        description: &str,
        on_duplicate: DuplicateResolution,
    ) -> Result<Option<Ruleset>> {
        let candidate = self.grid.current_ruleset().renamed(name, description);
        let outcome = match self.registry.add(candidate.clone()) {
            Ok(()) => Some(candidate),
            Err(IoError::DuplicateRules { existing, notation }) => {
                self.notify(format!("'{existing}' already uses {notation}"));
                self.registry.resolve_duplicate(candidate, on_duplicate)?
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(ruleset) = &outcome {
            self.select_ruleset_by_name(ruleset.name());
            let notice = format!("Using ruleset '{}'", ruleset.name());
            if ruleset.name() == name {
                self.notify_unsaved(notice);
            } else {
                self.notify(notice);
            }
        }
        Ok(outcome)
    }

    /// Deletes the selected ruleset; built-in ones are refused.
    pub fn delete_active_ruleset(&mut self) {
        let Some(name) = self
            .active_ruleset
            .and_then(|i| self.registry.rulesets().get(i))
            .map(|r| r.name().to_string())
        else {
            return;
        };
        match self.registry.delete(&name) {
            Ok(()) => {
                let rules = self.grid.current_ruleset();
                self.apply_rules(&rules);
                self.notify_unsaved(format!("Deleted '{name}'"));
            }
            Err(e) => self.notify(e.to_string()),
        }
    }

    pub fn cycle_color_behavior(&mut self) -> ColorBehavior {
        let behavior = self.color_behavior.cycle();
        self.notify(format!("Color: {behavior}"));
        behavior
    }

    pub fn speed_up(&mut self) {
        let ms = (self.tick_interval.as_millis() as u64 / 2).max(MIN_TICK_INTERVAL_MS);
        self.tick_interval = Duration::from_millis(ms);
    }

    pub fn slow_down(&mut self) {
        let ms = (self.tick_interval.as_millis() as u64 * 2).min(MAX_TICK_INTERVAL_MS);
        self.tick_interval = Duration::from_millis(ms);
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "Notice");
        self.message = Some(message);
    }

    /// Like [`App::notify`], flagging changes the registry cannot persist.
    fn notify_unsaved(&mut self, message: String) {
        if self.registry.path().is_some() {
            self.notify(message);
        } else {
            self.notify(format!("{message} (not saved to disk)"));
        }
    }
}

fn resolve_beside(config_path: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    if target.is_absolute() {
        return target.to_path_buf();
    }
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(target),
        _ => target.to_path_buf(),
    }
}
