//! Level curve definition
//!
//! Each level needs more XP than the one before it: the previous increment is
//! scaled by a growth factor and snapped to a rounding step, so thresholds land
//! on round numbers (1000, 1500, 2250, 3400, ...).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// XP needed to clear level 1
pub const BASE_INCREMENT: f64 = 1000.0;
/// Per-level growth of the increment
pub const GROWTH_FACTOR: f64 = 1.5;
/// Increments are snapped to multiples of this
pub const ROUNDING_STEP: f64 = 50.0;

/// Errors raised while building or loading a level curve
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("failed to read curve file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse curve file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid level curve: {0}")]
    Invalid(String),
}

/// A validated level curve.
///
/// Fields are private so every curve in circulation has passed [`LevelCurve::new`]
/// (deserialization goes through the same check). That guarantees increments
/// grow from level 2 onwards, which keeps level lookups logarithmic in XP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct LevelCurve {
    base_increment: f64,
    growth_factor: f64,
    rounding_step: f64,
}

/// Unchecked curve as written in a config file; missing fields take the defaults
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
struct RawCurve {
    base_increment: f64,
    growth_factor: f64,
    rounding_step: f64,
}

impl Default for RawCurve {
    fn default() -> Self {
        Self {
            base_increment: BASE_INCREMENT,
            growth_factor: GROWTH_FACTOR,
            rounding_step: ROUNDING_STEP,
        }
    }
}

impl TryFrom<RawCurve> for LevelCurve {
    type Error = CurveError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        LevelCurve::new(raw.base_increment, raw.growth_factor, raw.rounding_step)
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            base_increment: BASE_INCREMENT,
            growth_factor: GROWTH_FACTOR,
            rounding_step: ROUNDING_STEP,
        }
    }
}

impl LevelCurve {
    /// Build a curve, rejecting parameters that would stall or shrink increments
    pub fn new(base_increment: f64, growth_factor: f64, rounding_step: f64) -> Result<Self, CurveError> {
        if !base_increment.is_finite() || base_increment <= 0.0 {
            return Err(CurveError::Invalid(format!(
                "base_increment must be a positive number, got {}",
                base_increment
            )));
        }
        if !rounding_step.is_finite() || rounding_step <= 0.0 {
            return Err(CurveError::Invalid(format!(
                "rounding_step must be a positive number, got {}",
                rounding_step
            )));
        }
        if !growth_factor.is_finite() || growth_factor <= 1.0 {
            return Err(CurveError::Invalid(format!(
                "growth_factor must be greater than 1, got {}",
                growth_factor
            )));
        }

        let curve = Self { base_increment, growth_factor, rounding_step };

        // Once an increment sits on the rounding grid and still grows, every later
        // one does too. Check the first snapped increment.
        let second = curve.next_increment(base_increment);
        if second <= 0.0 || curve.next_increment(second) <= second {
            return Err(CurveError::Invalid(format!(
                "growth_factor {} is too small to grow an increment of {} in steps of {}",
                growth_factor, second, rounding_step
            )));
        }

        Ok(curve)
    }

    pub fn base_increment(&self) -> f64 {
        self.base_increment
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    pub fn rounding_step(&self) -> f64 {
        self.rounding_step
    }

    /// Increment of the level after one with `increment`.
    ///
    /// `f64::round` rounds half away from zero; half-even would drift from the
    /// published thresholds after a few levels.
    pub fn next_increment(&self, increment: f64) -> f64 {
        (increment * self.growth_factor / self.rounding_step).round() * self.rounding_step
    }

    /// XP span of `level` (levels below 1 are treated as level 1)
    pub fn increment(&self, level: u32) -> f64 {
        (1..level).fold(self.base_increment, |increment, _| self.next_increment(increment))
    }

    /// Cumulative XP at which `level` starts
    pub fn threshold(&self, level: u32) -> f64 {
        let mut increment = self.base_increment;
        let mut start = 0.0;
        for _ in 1..level {
            start += increment;
            increment = self.next_increment(increment);
        }
        start
    }

    /// Walk the curve level by level, starting at level 1
    pub fn steps(&self) -> CurveSteps {
        CurveSteps {
            curve: *self,
            level: 1,
            start_xp: 0.0,
            increment: self.base_increment,
        }
    }
}

/// One level of the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelStep {
    pub level: u32,
    /// Cumulative XP at which the level starts
    pub start_xp: f64,
    /// XP needed to clear the level
    pub increment: f64,
}

impl LevelStep {
    /// Cumulative XP at which the next level starts
    pub fn end_xp(&self) -> f64 {
        self.start_xp + self.increment
    }
}

/// Unbounded iterator over a curve's levels
#[derive(Debug, Clone)]
pub struct CurveSteps {
    curve: LevelCurve,
    level: u32,
    start_xp: f64,
    increment: f64,
}

impl Iterator for CurveSteps {
    type Item = LevelStep;

    fn next(&mut self) -> Option<LevelStep> {
        let step = LevelStep {
            level: self.level,
            start_xp: self.start_xp,
            increment: self.increment,
        };
        self.start_xp += self.increment;
        self.increment = self.curve.next_increment(self.increment);
        self.level = self.level.saturating_add(1);
        Some(step)
    }
}
