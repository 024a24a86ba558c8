//! Curve configuration
//!
//! Lets deployments tune the level curve from an external RON file.

pub mod loader;

pub use loader::{curve_path, load_curve, load_curve_from};
