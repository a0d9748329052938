//! Newborn color policies and neighbor color tallying.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Color given to newborn cells in [`ColorBehavior::Default`] mode.
pub const DEFAULT_BIRTH_COLOR: Rgb = Rgb::new(0, 255, 0);

/// Aggregated color when a cell has no living neighbors.
pub const NO_NEIGHBOR_COLOR: Rgb = Rgb::new(128, 128, 128);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How a newborn cell picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorBehavior {
    /// Fixed birth color; neighbor colors are never aggregated.
    #[default]
    Default,
    /// Per-channel arithmetic mean of living neighbors, truncated.
    AverageColor,
    /// Most frequent exact color among living neighbors.
    MajorityColor,
}

impl ColorBehavior {
    pub const ALL: [ColorBehavior; 3] = [
        ColorBehavior::Default,
        ColorBehavior::AverageColor,
        ColorBehavior::MajorityColor,
    ];

    #[inline]
    #[must_use]
    pub fn needs_aggregation(self) -> bool {
        !matches!(self, ColorBehavior::Default)
    }

    /// Next mode in UI cycling order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ColorBehavior::Default => ColorBehavior::AverageColor,
            ColorBehavior::AverageColor => ColorBehavior::MajorityColor,
            ColorBehavior::MajorityColor => ColorBehavior::Default,
        }
    }

    /// Color for a cell born next to the neighbors summarized by `tally`.
    #[must_use]
    pub fn birth_color(self, tally: &NeighborTally) -> Rgb {
        match self {
            ColorBehavior::Default => DEFAULT_BIRTH_COLOR,
            ColorBehavior::AverageColor => tally.average(),
            ColorBehavior::MajorityColor => tally.majority(),
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            ColorBehavior::Default => 0,
            ColorBehavior::AverageColor => 1,
            ColorBehavior::MajorityColor => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => ColorBehavior::AverageColor,
            2 => ColorBehavior::MajorityColor,
            _ => ColorBehavior::Default,
        }
    }
}

impl fmt::Display for ColorBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorBehavior::Default => "Default",
            ColorBehavior::AverageColor => "Average Color",
            ColorBehavior::MajorityColor => "Majority Color",
        };
        f.write_str(label)
    }
}

impl FromStr for ColorBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "default" => Ok(ColorBehavior::Default),
            "average" | "averagecolor" => Ok(ColorBehavior::AverageColor),
            "majority" | "majoritycolor" => Ok(ColorBehavior::MajorityColor),
            other => Err(format!("unknown color behavior '{other}'")),
        }
    }
}

/// Shared, cheaply cloneable handle to one color behavior setting.
///
/// Every grid holding a clone sees writes made through any other clone.
/// Grids read it once at the start of each generation, so writes should land
/// between generations.
#[derive(Debug, Clone, Default)]
pub struct SharedColorBehavior(Arc<AtomicU8>);

impl SharedColorBehavior {
    #[must_use]
    pub fn new(behavior: ColorBehavior) -> Self {
        Self(Arc::new(AtomicU8::new(behavior.to_u8())))
    }

    #[must_use]
    pub fn get(&self) -> ColorBehavior {
        ColorBehavior::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, behavior: ColorBehavior) {
        self.0.store(behavior.to_u8(), Ordering::Release);
    }

    /// Advances to the next mode and returns it.
    pub fn cycle(&self) -> ColorBehavior {
        let next = self.get().next();
        self.set(next);
        next
    }
}

impl From<ColorBehavior> for SharedColorBehavior {
    fn from(behavior: ColorBehavior) -> Self {
        Self::new(behavior)
    }
}

const MAX_NEIGHBORS: usize = 8;

/// Running summary of living neighbor colors for one cell.
///
/// Distinct colors are kept in first-seen order so majority ties resolve to
/// the color met first along the neighbor offset sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborTally {
    count: u32,
    sum_r: u32,
    sum_g: u32,
    sum_b: u32,
    distinct: [(Rgb, u8); MAX_NEIGHBORS],
    distinct_len: usize,
}

impl NeighborTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of living neighbors recorded.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn add(&mut self, color: Rgb) {
        self.count += 1;
        self.sum_r += color.r as u32;
        self.sum_g += color.g as u32;
        self.sum_b += color.b as u32;

        let seen = &mut self.distinct[..self.distinct_len];
        if let Some(slot) = seen.iter_mut().find(|(c, _)| *c == color) {
            slot.1 += 1;
        } else if self.distinct_len < MAX_NEIGHBORS {
            self.distinct[self.distinct_len] = (color, 1);
            self.distinct_len += 1;
        }
    }

    #[must_use]
    pub fn average(&self) -> Rgb {
        if self.count == 0 {
            return NO_NEIGHBOR_COLOR;
        }
        Rgb::new(
            (self.sum_r / self.count) as u8,
            (self.sum_g / self.count) as u8,
            (self.sum_b / self.count) as u8,
        )
    }

    #[must_use]
    pub fn majority(&self) -> Rgb {
        let mut best: Option<(Rgb, u8)> = None;
        for &(color, n) in &self.distinct[..self.distinct_len] {
            match best {
                Some((_, best_n)) if n <= best_n => {}
                _ => best = Some((color, n)),
            }
        }
        best.map_or(NO_NEIGHBOR_COLOR, |(color, _)| color)
    }
}
