//! Alpha World - Ambient world systems
//!
//! Provides the day/night clock with per-hour sun intensity, and the wind
//! paths that drive drifting particles and leaves.

pub mod day_night;
pub mod error;
pub mod wind;

pub use day_night::{SunLight, TimeOfDay};
pub use error::WorldError;
pub use wind::{WindMotion, WindPath};
