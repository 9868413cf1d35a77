//! Alpha Core - Core types and utilities shared by the Alpha crates
//!
//! This crate provides the foundational types used throughout the game:
//! - Mathematical primitives (re-exported from glam)
//! - Entity identifiers and facing direction
//! - Fixed-timestep game clock

pub mod error;
pub mod time;
pub mod types;

pub use glam::Vec2;
pub use error::TimeConfigError;
pub use time::{GameTime, TimeConfig};
pub use types::{EntityId, Facing};
