//! Experience and leveling
//!
//! Converts cumulative XP into a level, the XP earned inside that level, the
//! level's span and a completion percentage. Only cumulative XP is ever
//! stored; everything here is recomputed from it on demand.
//!
//! Input handling:
//! - negative XP is passed through: level 1 with negative in-level XP and
//!   negative progress, left to the caller to clamp for display
//! - non-finite XP (NaN, infinity) yields a level 1 sentinel from
//!   [`LevelCurve::level_data`], or [`ProgressionError::NonFiniteXp`] from
//!   [`LevelCurve::try_level_data`]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::curve::LevelCurve;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProgressionError {
    #[error("XP value must be finite, got {0}")]
    NonFiniteXp(f64),
}

/// Level and progress derived from a cumulative XP total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Level reached, starting at 1
    pub level: u32,
    /// XP earned since the current level started
    #[serde(rename = "currentXPInLevel")]
    pub current_xp_in_level: f64,
    /// Span of the current level (not a cumulative total)
    #[serde(rename = "nextLevelXPRequired")]
    pub next_level_xp_required: f64,
    /// The input, unchanged
    #[serde(rename = "totalXP")]
    pub total_xp: f64,
    /// Percentage of the current level completed
    pub progress: f64,
}

impl LevelData {
    fn sentinel(total_xp: f64, span: f64) -> Self {
        Self {
            level: 1,
            current_xp_in_level: 0.0,
            next_level_xp_required: span,
            total_xp,
            progress: 0.0,
        }
    }

    /// Cumulative XP at which the current level started
    pub fn level_start_xp(&self) -> f64 {
        self.total_xp - self.current_xp_in_level
    }

    /// XP still missing before the next level
    pub fn xp_to_next_level(&self) -> f64 {
        self.next_level_xp_required - self.current_xp_in_level
    }
}

impl fmt::Display for LevelData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level {} | {}/{} XP ({:.1}%) | {} total",
            self.level, self.current_xp_in_level, self.next_level_xp_required, self.progress, self.total_xp
        )
    }
}

impl LevelCurve {
    /// Level data for `total_xp` on this curve. Non-finite input gets a level 1
    /// sentinel with zero progress.
    pub fn level_data(&self, total_xp: f64) -> LevelData {
        if !total_xp.is_finite() {
            log::warn!("Non-finite XP total {}, reporting level 1", total_xp);
            return LevelData::sentinel(total_xp, self.base_increment());
        }

        let mut level = 1u32;
        let mut level_goal = self.base_increment();
        let mut next_level_xp = level_goal;
        let mut level_start_xp = 0.0;

        // Levels are closed-open: landing exactly on a threshold starts the next level
        while total_xp >= next_level_xp {
            level_start_xp = next_level_xp;
            level_goal = self.next_increment(level_goal);
            next_level_xp += level_goal;
            level = level.saturating_add(1);
        }

        let current_xp_in_level = total_xp - level_start_xp;
        let next_level_xp_required = next_level_xp - level_start_xp;

        LevelData {
            level,
            current_xp_in_level,
            next_level_xp_required,
            total_xp,
            progress: 100.0 * current_xp_in_level / next_level_xp_required,
        }
    }

    /// Like [`LevelCurve::level_data`], but non-finite input is an error
    pub fn try_level_data(&self, total_xp: f64) -> Result<LevelData, ProgressionError> {
        if !total_xp.is_finite() {
            return Err(ProgressionError::NonFiniteXp(total_xp));
        }
        Ok(self.level_data(total_xp))
    }
}

/// Level data on the default curve (1000 XP for level 1, x1.5 per level, steps of 50)
pub fn calculate_level_data(total_xp: f64) -> LevelData {
    LevelCurve::default().level_data(total_xp)
}
