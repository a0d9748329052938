//! Cell state: alive flag, color, and the fading trail left after death.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{Rgb, DEFAULT_BIRTH_COLOR};

/// Probability that a randomly seeded cell starts alive.
pub const DEFAULT_SPAWN_CHANCE: f64 = 0.1;

/// Tunable constants for the death trail.
///
/// A cell that dies keeps its color and gets `death_opacity` as alpha. Every
/// generation it stays dead the alpha drops by `fade_step` and each color
/// channel by `color_fade_step`, saturating at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailSettings {
    pub death_opacity: u8,
    pub fade_step: u8,
    pub color_fade_step: u8,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            death_opacity: 254,
            fade_step: 10,
            color_fade_step: 5,
        }
    }
}

impl TrailSettings {
    /// Upper bound on the number of fade steps before a trail is invisible.
    #[must_use]
    pub fn max_fade_generations(&self) -> u32 {
        let step = self.fade_step.max(1) as u32;
        (self.death_opacity as u32).div_ceil(step)
    }
}

/// A single grid cell.
///
/// Alpha doubles as trail opacity for dead cells; a living cell is drawn from
/// its RGB regardless of alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    pub is_alive: bool,
}

impl Cell {
    /// Creates a cell with a transparent alpha.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, is_alive: bool) -> Self {
        Self {
            r,
            g,
            b,
            a: 0,
            is_alive,
        }
    }

    #[must_use]
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8, is_alive: bool) -> Self {
        Self {
            r,
            g,
            b,
            a,
            is_alive,
        }
    }

    /// A dead, black, fully transparent cell.
    #[must_use]
    pub fn dead() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn has_trail(&self) -> bool {
        !self.is_alive && self.a > 0
    }

    #[inline]
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;
    }

    /// Sets an opaque color.
    pub fn set_rgb(&mut self, color: Rgb) {
        self.set_color(color.r, color.g, color.b, u8::MAX);
    }

    /// Kills the cell and starts its trail at the default opacity.
    pub fn die(&mut self) {
        self.die_with(&TrailSettings::default());
    }

    pub fn die_with(&mut self, trail: &TrailSettings) {
        self.is_alive = false;
        self.a = trail.death_opacity;
    }

    pub fn come_alive(&mut self) {
        self.is_alive = true;
        self.a = 0;
    }

    /// One fade step with the default settings.
    pub fn fade_trail(&mut self) {
        self.fade_trail_with(&TrailSettings::default());
    }

    pub fn fade_trail_with(&mut self, trail: &TrailSettings) {
        if !self.has_trail() {
            return;
        }
        self.a = self.a.saturating_sub(trail.fade_step);
        self.r = self.r.saturating_sub(trail.color_fade_step);
        self.g = self.g.saturating_sub(trail.color_fade_step);
        self.b = self.b.saturating_sub(trail.color_fade_step);
    }

    /// Samples a seed cell.
    ///
    /// With `fixed_color` every cell gets [`DEFAULT_BIRTH_COLOR`]; otherwise the
    /// RGB channels are drawn uniformly. Living cells are opaque.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, fixed_color: bool, spawn_chance: f64) -> Self {
        let is_alive = rng.gen_bool(spawn_chance.clamp(0.0, 1.0));
        let color = if fixed_color {
            DEFAULT_BIRTH_COLOR
        } else {
            Rgb::new(rng.gen(), rng.gen(), rng.gen())
        };
        let a = if is_alive { u8::MAX } else { 0 };
        Self::with_alpha(color.r, color.g, color.b, a, is_alive)
    }
}
