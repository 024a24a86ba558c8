//! Experience snapshots and the changes between them
//!
//! Level-up banners and XP deduction notices react to the difference between
//! two snapshots. This module computes that difference; rendering it is up to
//! the caller.

use serde::{Deserialize, Serialize};

use super::curve::LevelCurve;
use super::xp::LevelData;

/// Change between two level snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressDelta {
    pub from_level: u32,
    pub to_level: u32,
    /// Signed difference in cumulative XP
    pub xp_change: f64,
}

impl ProgressDelta {
    pub fn between(previous: &LevelData, current: &LevelData) -> Self {
        Self {
            from_level: previous.level,
            to_level: current.level,
            xp_change: current.total_xp - previous.total_xp,
        }
    }

    /// Signed number of levels crossed
    pub fn levels_changed(&self) -> i64 {
        i64::from(self.to_level) - i64::from(self.from_level)
    }

    pub fn leveled_up(&self) -> bool {
        self.to_level > self.from_level
    }

    pub fn leveled_down(&self) -> bool {
        self.to_level < self.from_level
    }

    pub fn xp_deducted(&self) -> bool {
        self.xp_change < 0.0
    }

    pub fn is_unchanged(&self) -> bool {
        self.xp_change == 0.0 && self.from_level == self.to_level
    }
}

/// Cumulative XP for one user. This is the only value worth persisting;
/// level and progress are derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub total_xp: f64,
}

impl Experience {
    pub fn new(total_xp: f64) -> Self {
        Self { total_xp }
    }

    pub fn level_data(&self, curve: &LevelCurve) -> LevelData {
        curve.level_data(self.total_xp)
    }

    /// Add XP and report what changed
    pub fn add_xp(&mut self, amount: f64, curve: &LevelCurve) -> ProgressDelta {
        let before = self.level_data(curve);
        self.total_xp += amount;
        let after = self.level_data(curve);

        let delta = ProgressDelta::between(&before, &after);
        if delta.leveled_up() {
            log::info!("Level up: {} -> {}", delta.from_level, delta.to_level);
        }
        delta
    }

    /// Remove XP and report what changed. The total is not clamped at zero.
    pub fn deduct_xp(&mut self, amount: f64, curve: &LevelCurve) -> ProgressDelta {
        let delta = self.add_xp(-amount, curve);
        if delta.leveled_down() {
            log::info!("Level lost: {} -> {}", delta.from_level, delta.to_level);
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::calculate_level_data;

    #[test]
    fn test_add_xp_levels_up() {
        let curve = LevelCurve::default();
        let mut exp = Experience::new(900.0);
        let delta = exp.add_xp(100.0, &curve);
        assert!(delta.leveled_up());
        assert_eq!(delta.from_level, 1);
        assert_eq!(delta.to_level, 2);
        assert_eq!(delta.xp_change, 100.0);
        assert_eq!(exp.total_xp, 1000.0);
    }

    #[test]
    fn test_add_xp_multiple_levels() {
        let curve = LevelCurve::default();
        let mut exp = Experience::default();
        let delta = exp.add_xp(4750.0, &curve);
        assert_eq!(delta.levels_changed(), 3);
        assert_eq!(exp.level_data(&curve).level, 4);
    }

    #[test]
    fn test_add_xp_within_level() {
        let curve = LevelCurve::default();
        let mut exp = Experience::new(1000.0);
        let delta = exp.add_xp(200.0, &curve);
        assert!(!delta.leveled_up());
        assert!(!delta.is_unchanged());
        assert_eq!(delta.levels_changed(), 0);
    }

    #[test]
    fn test_deduct_xp() {
        let curve = LevelCurve::default();
        let mut exp = Experience::new(2600.0);
        let delta = exp.deduct_xp(200.0, &curve);
        assert!(delta.xp_deducted());
        assert!(delta.leveled_down());
        assert_eq!(delta.levels_changed(), -1);
        assert_eq!(exp.total_xp, 2400.0);
    }

    #[test]
    fn test_deduct_below_zero_not_clamped() {
        let curve = LevelCurve::default();
        let mut exp = Experience::new(50.0);
        exp.deduct_xp(80.0, &curve);
        assert_eq!(exp.total_xp, -30.0);
        assert_eq!(exp.level_data(&curve).progress, -3.0);
    }

    #[test]
    fn test_unchanged_snapshots() {
        let a = calculate_level_data(1234.0);
        let b = calculate_level_data(1234.0);
        assert!(ProgressDelta::between(&a, &b).is_unchanged());
    }

    #[test]
    fn test_restored_experience_matches() {
        // Only total_xp is persisted; a reload recomputes the same level
        let curve = LevelCurve::default();
        let mut exp = Experience::default();
        exp.add_xp(3000.0, &curve);
        exp.add_xp(2100.0, &curve);

        let json = serde_json::to_string(&exp).unwrap();
        let restored: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.level_data(&curve), exp.level_data(&curve));
        assert_eq!(restored.level_data(&curve), calculate_level_data(5100.0));
    }
}
