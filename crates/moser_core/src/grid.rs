//! Double-buffered toroidal grid.
//!
//! `update` swaps the two arenas, then rebuilds every cell of the new
//! generation from the frozen previous one. Each output slot depends only on
//! the previous arena, so rows are computed in parallel with no locking.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::ops::AddAssign;

use crate::cell::{Cell, TrailSettings, DEFAULT_SPAWN_CHANCE};
use crate::color::{ColorBehavior, NeighborTally, SharedColorBehavior};
use crate::error::{CoreError, Result};
use crate::ruleset::{NeighborCounts, Ruleset};

/// Moore neighborhood offsets as `(dx, dy)`, dx outermost.
///
/// The order is part of the majority-color contract: ties go to the color
/// met first along this sequence.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Name given to the ruleset returned by [`Grid::current_ruleset`].
pub const CURRENT_RULESET_NAME: &str = "Current";

/// Per-generation counters, computed inside the parallel pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
    pub trails: usize,
}

impl AddAssign for GenerationStats {
    fn add_assign(&mut self, rhs: Self) {
        self.population += rhs.population;
        self.births += rhs.births;
        self.deaths += rhs.deaths;
        self.trails += rhs.trails;
    }
}

/// Read-only inputs shared by every row of one pass.
struct Pass<'a> {
    prev: &'a [Cell],
    cols: usize,
    rows: usize,
    birth: NeighborCounts,
    survival: NeighborCounts,
    behavior: ColorBehavior,
    trail: TrailSettings,
}

impl Pass<'_> {
    #[inline(always)]
    fn wrapped(&self, col: usize, row: usize, dx: isize, dy: isize) -> usize {
        let nx = (col as isize + dx).rem_euclid(self.cols as isize) as usize;
        let ny = (row as isize + dy).rem_euclid(self.rows as isize) as usize;
        ny * self.cols + nx
    }

    fn count_alive(&self, col: usize, row: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.prev[self.wrapped(col, row, dx, dy)].is_alive)
            .count() as u8
    }

    fn tally(&self, col: usize, row: usize) -> NeighborTally {
        let mut tally = NeighborTally::new();
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let neighbor = &self.prev[self.wrapped(col, row, dx, dy)];
            if neighbor.is_alive {
                tally.add(neighbor.rgb());
            }
        }
        tally
    }

    fn next_cell(&self, col: usize, row: usize, stats: &mut GenerationStats) -> Cell {
        let prior = self.prev[row * self.cols + col];

        let (alive_neighbors, tally) = if self.behavior.needs_aggregation() {
            let tally = self.tally(col, row);
            (tally.count() as u8, Some(tally))
        } else {
            (self.count_alive(col, row), None)
        };

        let mut next = prior;
        if !prior.is_alive && self.birth.contains(alive_neighbors) {
            next.come_alive();
            next.set_rgb(self.behavior.birth_color(&tally.unwrap_or_default()));
            stats.births += 1;
        } else if prior.is_alive && !self.survival.contains(alive_neighbors) {
            next.die_with(&self.trail);
            stats.deaths += 1;
        } else if next.has_trail() {
            next.fade_trail_with(&self.trail);
        }

        if next.is_alive {
            stats.population += 1;
        } else if next.has_trail() {
            stats.trails += 1;
        }
        next
    }

    fn fill_row(&self, row: usize, out: &mut [Cell]) -> GenerationStats {
        let mut stats = GenerationStats::default();
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = self.next_cell(col, row, &mut stats);
        }
        stats
    }
}

/// A fixed-size toroidal cellular automaton.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    buffer: Vec<Cell>,
    birth_rules: NeighborCounts,
    survival_rules: NeighborCounts,
    color_behavior: SharedColorBehavior,
    trail: TrailSettings,
    generation: u64,
    last_stats: GenerationStats,
}

impl Grid {
    /// An all-dead grid running B3/S23.
    pub fn new(cols: usize, rows: usize, color_behavior: SharedColorBehavior) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(CoreError::InvalidDimensions { cols, rows });
        }
        let cells = vec![Cell::dead(); cols * rows];
        let conway = Ruleset::conway();
        tracing::debug!(cols, rows, "Grid created");
        Ok(Self {
            cols,
            rows,
            buffer: cells.clone(),
            cells,
            birth_rules: conway.birth_rules(),
            survival_rules: conway.survival_rules(),
            color_behavior,
            trail: TrailSettings::default(),
            generation: 0,
            last_stats: GenerationStats::default(),
        })
    }

    /// A freshly seeded grid.
    ///
    /// Both arenas receive the same sample per position. Cells get the fixed
    /// birth color when the color behavior does not aggregate, random RGB
    /// otherwise.
    pub fn random<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        color_behavior: SharedColorBehavior,
        rng: &mut R,
        spawn_chance: f64,
    ) -> Result<Self> {
        let mut grid = Self::new(cols, rows, color_behavior)?;
        let fixed_color = !grid.color_behavior.get().needs_aggregation();
        for (cell, scratch) in grid.cells.iter_mut().zip(grid.buffer.iter_mut()) {
            let sample = Cell::random(rng, fixed_color, spawn_chance);
            *cell = sample;
            *scratch = sample;
        }
        grid.last_stats.population = grid.population();
        tracing::info!(
            cols,
            rows,
            population = grid.last_stats.population,
            "Seeded random grid"
        );
        Ok(grid)
    }

    /// [`Grid::random`] with the default spawn chance.
    pub fn random_default<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        color_behavior: SharedColorBehavior,
        rng: &mut R,
    ) -> Result<Self> {
        Self::random(cols, rows, color_behavior, rng, DEFAULT_SPAWN_CHANCE)
    }

    #[must_use]
    pub fn with_trail_settings(mut self, trail: TrailSettings) -> Self {
        self.trail = trail;
        self
    }

    /// Advances one generation.
    pub fn update(&mut self) {
        let behavior = self.color_behavior.get();
        std::mem::swap(&mut self.cells, &mut self.buffer);

        let pass = Pass {
            prev: &self.buffer,
            cols: self.cols,
            rows: self.rows,
            birth: self.birth_rules,
            survival: self.survival_rules,
            behavior,
            trail: self.trail,
        };

        #[cfg(feature = "parallel")]
        let stats = self
            .cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .map(|(row, out)| pass.fill_row(row, out))
            .reduce(GenerationStats::default, |mut a, b| {
                a += b;
                a
            });

        #[cfg(not(feature = "parallel"))]
        let stats = self
            .cells
            .chunks_mut(self.cols)
            .enumerate()
            .fold(GenerationStats::default(), |mut acc, (row, out)| {
                acc += pass.fill_row(row, out);
                acc
            });

        self.generation += 1;
        self.last_stats = stats;
    }

    /// Advances `n` generations.
    pub fn step(&mut self, n: usize) {
        for _ in 0..n {
            self.update();
        }
    }

    /// Paints one cell, keeping the edit across the next buffer swap.
    ///
    /// Out-of-range coordinates are ignored.
    #[allow(clippy::too_many_arguments)]
    pub fn set_cell_state(
        &mut self,
        col: usize,
        row: usize,
        is_alive: bool,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) {
        let Some(idx) = self.index(col, row) else {
            tracing::trace!(col, row, "Ignoring out-of-range cell edit");
            return;
        };
        let cell = &mut self.cells[idx];
        if is_alive {
            cell.come_alive();
        } else {
            cell.die_with(&self.trail);
        }
        cell.set_color(r, g, b, a);
        self.buffer[idx] = *cell;
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| row * self.cols + col)
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current generation, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.index(col, row).map(|idx| &self.cells[idx])
    }

    /// Iterates `(col, row, cell)` over the current generation.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % cols, idx / cols, cell))
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive).count()
    }

    /// Counters from the most recent `update`.
    #[must_use]
    pub fn last_stats(&self) -> GenerationStats {
        self.last_stats
    }

    #[must_use]
    pub fn birth_rules(&self) -> NeighborCounts {
        self.birth_rules
    }

    #[must_use]
    pub fn survival_rules(&self) -> NeighborCounts {
        self.survival_rules
    }

    pub fn set_birth_rules(&mut self, rules: NeighborCounts) {
        self.birth_rules = rules;
    }

    pub fn set_survival_rules(&mut self, rules: NeighborCounts) {
        self.survival_rules = rules;
    }

    /// Copies the ruleset's birth and survival sets into the grid.
    pub fn apply_ruleset(&mut self, ruleset: &Ruleset) {
        self.birth_rules = ruleset.birth_rules();
        self.survival_rules = ruleset.survival_rules();
        tracing::info!(
            ruleset = ruleset.name(),
            notation = %ruleset.notation(),
            "Applied ruleset"
        );
    }

    /// The rules currently in force, named `"Current"`.
    #[must_use]
    pub fn current_ruleset(&self) -> Ruleset {
        Ruleset::new(
            CURRENT_RULESET_NAME,
            self.birth_rules,
            self.survival_rules,
            "",
        )
    }

    #[must_use]
    pub fn color_behavior(&self) -> &SharedColorBehavior {
        &self.color_behavior
    }

    #[must_use]
    pub fn trail_settings(&self) -> TrailSettings {
        self.trail
    }
}
