//! Progression systems

pub mod curve;
pub mod xp;
pub mod tracker;

pub use curve::{CurveError, CurveSteps, LevelCurve, LevelStep};
pub use curve::{BASE_INCREMENT, GROWTH_FACTOR, ROUNDING_STEP};
pub use xp::{calculate_level_data, LevelData, ProgressionError};
pub use tracker::{Experience, ProgressDelta};
