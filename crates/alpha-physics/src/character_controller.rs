//! Kinematic box controller that slides through a `Stage`

use alpha_core::Facing;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Aabb, CollisionInfo, CollisionResolver, Stage};

/// Tolerance for treating an edge as touching
const CONTACT_EPSILON: f32 = 1e-4;

/// Character controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterControllerConfig {
    /// Half size of the body box (default: 0.5 x 1.0)
    pub half_extents: Vec2,
    /// Distance at which a surface counts as touched even without moving into it
    pub skin_width: f32,
}

impl Default for CharacterControllerConfig {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(0.5, 1.0),
            skin_width: 0.015,
        }
    }
}

/// Box body resolved against static geometry, X axis first, then Y
#[derive(Debug, Clone)]
pub struct CharacterController2D {
    /// Configuration
    pub config: CharacterControllerConfig,
    /// Current position (center of the box)
    pub position: Vec2,
    stage: Stage,
    collisions: CollisionInfo,
    /// Direction horizontal probes look when the move has no X component
    face_dir: Facing,
}

impl CharacterController2D {
    /// Create a controller with default config
    pub fn new(stage: Stage) -> Self {
        Self::with_config(stage, CharacterControllerConfig::default())
    }

    /// Create a controller with custom config
    pub fn with_config(stage: Stage, config: CharacterControllerConfig) -> Self {
        Self {
            config,
            position: Vec2::ZERO,
            stage,
            collisions: CollisionInfo::default(),
            face_dir: Facing::Right,
        }
    }

    /// Place the body so its feet rest at `feet`
    pub fn spawn(&mut self, feet: Vec2) {
        self.position = feet + Vec2::new(0.0, self.config.half_extents.y);
        self.collisions.reset();
    }

    /// Distance the body may travel along X before touching a solid, and
    /// whether a solid lies within `reach` of the leading edge.
    fn probe_horizontal(&self, dir: Facing, reach: f32) -> Option<f32> {
        let body = self.bounds();
        self.stage
            .solids()
            .iter()
            .filter(|solid| {
                solid.min.y < body.max.y - CONTACT_EPSILON
                    && solid.max.y > body.min.y + CONTACT_EPSILON
            })
            .filter_map(|solid| match dir {
                Facing::Right if solid.min.x >= body.max.x - CONTACT_EPSILON => {
                    Some((solid.min.x - body.max.x).max(0.0))
                }
                Facing::Left if solid.max.x <= body.min.x + CONTACT_EPSILON => {
                    Some((body.min.x - solid.max.x).max(0.0))
                }
                _ => None,
            })
            .filter(|gap| *gap <= reach)
            .reduce(f32::min)
    }

    /// Same as `probe_horizontal`, along Y. `up` selects the probe direction.
    fn probe_vertical(&self, up: bool, reach: f32) -> Option<f32> {
        let body = self.bounds();
        self.stage
            .solids()
            .iter()
            .filter(|solid| {
                solid.min.x < body.max.x - CONTACT_EPSILON
                    && solid.max.x > body.min.x + CONTACT_EPSILON
            })
            .filter_map(|solid| {
                if up && solid.min.y >= body.max.y - CONTACT_EPSILON {
                    Some((solid.min.y - body.max.y).max(0.0))
                } else if !up && solid.max.y <= body.min.y + CONTACT_EPSILON {
                    Some((body.min.y - solid.max.y).max(0.0))
                } else {
                    None
                }
            })
            .filter(|gap| *gap <= reach)
            .reduce(f32::min)
    }

    fn move_horizontal(&mut self, dx: f32) -> f32 {
        if let Some(facing) = Facing::from_axis(dx) {
            self.face_dir = facing;
        }

        let distance = dx.abs();
        let reach = distance + self.config.skin_width;
        let travelled = match self.probe_horizontal(self.face_dir, reach) {
            Some(gap) => {
                match self.face_dir {
                    Facing::Left => self.collisions.is_left = true,
                    Facing::Right => self.collisions.is_right = true,
                }
                distance.min(gap)
            }
            None => distance,
        };

        let moved = if dx == 0.0 {
            0.0
        } else {
            travelled * self.face_dir.sign()
        };
        self.position.x += moved;
        moved
    }

    fn move_vertical(&mut self, dy: f32) -> f32 {
        // A motionless body still probes downward so resting contact is reported
        let up = dy > 0.0;
        let distance = dy.abs();
        let reach = distance + self.config.skin_width;
        let travelled = match self.probe_vertical(up, reach) {
            Some(gap) => {
                if up {
                    self.collisions.is_above = true;
                } else {
                    self.collisions.is_below = true;
                }
                distance.min(gap)
            }
            None => distance,
        };

        let moved = if up { travelled } else { -travelled };
        self.position.y += moved;
        moved
    }
}

impl CollisionResolver for CharacterController2D {
    fn collisions(&self) -> CollisionInfo {
        self.collisions
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.config.half_extents)
    }

    fn resolve_move(&mut self, delta: Vec2, _input: Vec2) -> Vec2 {
        self.collisions.reset();
        let dx = self.move_horizontal(delta.x);
        let dy = self.move_vertical(delta.y);
        Vec2::new(dx, dy)
    }
}
