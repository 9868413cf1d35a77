//! Collision flags and the mover contract consumed by the player controller

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// Which sides of the body touched geometry during the last move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionInfo {
    pub is_above: bool,
    pub is_below: bool,
    pub is_left: bool,
    pub is_right: bool,
}

impl CollisionInfo {
    /// Flags for a body resting on the ground
    pub fn grounded() -> Self {
        Self {
            is_below: true,
            ..Default::default()
        }
    }

    /// Clear all flags (start of a move)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the body touches a wall on either side
    pub fn is_against_wall(&self) -> bool {
        self.is_left || self.is_right
    }

    /// -1 when the wall is on the left, 1 otherwise
    pub fn wall_dir_x(&self) -> f32 {
        if self.is_left {
            -1.0
        } else {
            1.0
        }
    }
}

/// Moves a body through level geometry and reports what it hit
///
/// The controller only ever sees this trait; how contacts are found is up to
/// the implementation.
pub trait CollisionResolver {
    /// Collision flags produced by the most recent move
    fn collisions(&self) -> CollisionInfo;

    /// Current body position (center)
    fn position(&self) -> Vec2;

    /// Current body bounds
    fn bounds(&self) -> Aabb;

    /// Attempt to move by `delta`, returning the displacement actually achieved.
    /// `input` is the raw input vector for the tick.
    fn resolve_move(&mut self, delta: Vec2, input: Vec2) -> Vec2;
}
