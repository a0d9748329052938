pub mod macros;

use moser_core::color::DEFAULT_BIRTH_COLOR;
use moser_core::{ColorBehavior, Grid, Rgb, Ruleset, SharedColorBehavior, TrailSettings};
use std::path::PathBuf;

#[allow(dead_code)]
pub struct GridBuilder {
    cols: usize,
    rows: usize,
    behavior: SharedColorBehavior,
    ruleset: Option<Ruleset>,
    trail: TrailSettings,
    cells: Vec<(usize, usize, Rgb)>,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            behavior: SharedColorBehavior::default(),
            ruleset: None,
            trail: TrailSettings::default(),
            cells: Vec::new(),
        }
    }

    pub fn with_behavior(mut self, behavior: ColorBehavior) -> Self {
        self.behavior = SharedColorBehavior::new(behavior);
        self
    }

    pub fn with_shared_behavior(mut self, behavior: SharedColorBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_rules(mut self, notation: &str) -> Self {
        self.ruleset = Some(Ruleset::from_notation("Test", notation, "").expect("valid notation"));
        self
    }

    pub fn with_trail(mut self, trail: TrailSettings) -> Self {
        self.trail = trail;
        self
    }

    pub fn with_cell(mut self, col: usize, row: usize, color: Rgb) -> Self {
        self.cells.push((col, row, color));
        self
    }

    /// Adds living cells in the default birth color.
    pub fn with_pattern(mut self, cells: &[(usize, usize)]) -> Self {
        self.cells
            .extend(cells.iter().map(|&(c, r)| (c, r, DEFAULT_BIRTH_COLOR)));
        self
    }

    pub fn build(self) -> Grid {
        let mut grid = Grid::new(self.cols, self.rows, self.behavior)
            .expect("valid dimensions")
            .with_trail_settings(self.trail);
        if let Some(ruleset) = &self.ruleset {
            grid.apply_ruleset(ruleset);
        }
        for (col, row, color) in self.cells {
            grid.set_cell_state(col, row, true, color.r, color.g, color.b, u8::MAX);
        }
        grid
    }
}

/// Living cell coordinates in row-major order.
#[allow(dead_code)]
pub fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, cell)| cell.is_alive)
        .map(|(col, row, _)| (col, row))
        .collect()
}

/// A fresh scratch directory unique to this test process.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("moser_life_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
