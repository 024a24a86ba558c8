//! RON curve loader
//!
//! Loads the level curve from an external RON file, with fallback to the
//! built-in defaults. A file only needs the fields it overrides:
//!
//! ```ron
//! (base_increment: 1200.0, growth_factor: 1.4)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::progression::{CurveError, LevelCurve};

/// Default location of the curve file
pub fn curve_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "levelup", "Levelup") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("curve.ron");
        path
    } else {
        PathBuf::from("./curve.ron")
    }
}

/// Load and validate a curve from a RON file
pub fn load_curve_from(path: &Path) -> Result<LevelCurve, CurveError> {
    let content = fs::read_to_string(path).map_err(|source| CurveError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let curve: LevelCurve = ron::from_str(&content).map_err(|source| CurveError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Level curve loaded from {:?}: {:?}", path, curve);
    Ok(curve)
}

/// Load the curve from the default location, or fall back to the defaults
pub fn load_curve() -> LevelCurve {
    let path = curve_path();

    if path.exists() {
        match load_curve_from(&path) {
            Ok(curve) => return curve,
            Err(e) => log::warn!("{}, using default curve", e),
        }
    }

    LevelCurve::default()
}
