//! Levelup - level and XP progression engine
//!
//! Turns a user's cumulative XP into a level, in-level XP, the level's span
//! and a completion percentage, the same way on every page that shows it.

pub mod progression;
pub mod data;

// Re-export commonly used types
pub use progression::{calculate_level_data, Experience, LevelCurve, LevelData, ProgressDelta};
