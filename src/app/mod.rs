pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use moser_tui::Tui;

/// Summary of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub generations: u64,
    pub population: usize,
    pub births: u64,
    pub deaths: u64,
}

impl App {
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        let frame_budget = Duration::from_millis(16);

        while self.running {
            tui.draw(|f| self.draw(f))?;

            let timeout = self
                .tick_interval
                .saturating_sub(last_tick.elapsed())
                .min(frame_budget);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.tick_interval {
                if !self.paused {
                    self.step_generation();
                }
                last_tick = Instant::now();
            }
        }

        tracing::info!(
            generations = self.metrics.generations(),
            mean_us = self.metrics.mean_generation_time().as_micros() as u64,
            "Simulation stopped"
        );
        Ok(())
    }

    /// Runs `generations` updates without a terminal.
    ///
    /// Stops early once every cell is dead, since nothing can be born from an
    /// empty grid unless 0 is a birth count.
    pub fn run_headless(&mut self, generations: u64) -> HeadlessReport {
        let can_spontaneously_birth = self.grid.birth_rules().contains(0);
        for _ in 0..generations {
            self.step_generation();
            if self.grid.population() == 0 && !can_spontaneously_birth {
                tracing::info!(generation = self.grid.generation(), "Population died out");
                break;
            }
        }

        let report = HeadlessReport {
            generations: self.grid.generation(),
            population: self.grid.population(),
            births: self.metrics.total_births(),
            deaths: self.metrics.total_deaths(),
        };
        tracing::info!(
            generations = report.generations,
            population = report.population,
            births = report.births,
            deaths = report.deaths,
            mean_us = self.metrics.mean_generation_time().as_micros() as u64,
            "Headless run finished"
        );
        report
    }
}
