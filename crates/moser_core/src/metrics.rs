//! Generation metrics and structured logging.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::grid::GenerationStats;

/// How often `record_generation` emits an info event by default.
pub const DEFAULT_LOG_INTERVAL: u64 = 100;

/// Collects per-generation counters for a running simulation.
pub struct Metrics {
    generations: AtomicU64,
    population: AtomicU64,
    total_births: AtomicU64,
    total_deaths: AtomicU64,
    busy_nanos: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_log_interval(DEFAULT_LOG_INTERVAL)
    }

    #[must_use]
    pub fn with_log_interval(log_interval: u64) -> Self {
        Self {
            generations: AtomicU64::new(0),
            population: AtomicU64::new(0),
            total_births: AtomicU64::new(0),
            total_deaths: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation and the time its pass took.
    pub fn record_generation(&self, duration: Duration, stats: GenerationStats) {
        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        self.population
            .store(stats.population as u64, Ordering::Relaxed);
        self.total_births
            .fetch_add(stats.births as u64, Ordering::Relaxed);
        self.total_deaths
            .fetch_add(stats.deaths as u64, Ordering::Relaxed);
        self.busy_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if generation % self.log_interval == 0 {
            tracing::info!(
                generation = generation,
                population = stats.population,
                births = stats.births,
                deaths = stats.deaths,
                trails = stats.trails,
                duration_us = duration.as_micros() as u64,
                "Generation"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.total_births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.total_deaths.load(Ordering::Relaxed)
    }

    /// Mean time spent inside `Grid::update`.
    #[must_use]
    pub fn mean_generation_time(&self) -> Duration {
        let n = self.generations();
        if n == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed) / n)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`, falling back to `info`. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

/// Like [`init_logging`], but appends plain-text events to `path`.
///
/// The terminal UI owns stdout and stderr, so it logs here instead.
pub fn init_file_logging<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    use tracing_subscriber::EnvFilter;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish(),
    )
    .ok();
    Ok(())
}
