//! Alpha Physics - Engine-agnostic 2D collision for platformer bodies
//!
//! Provides static level geometry, collision flags, a kinematic box mover,
//! and the projectile-motion helpers used to derive jump constants.

mod character_controller;
mod collision;
pub mod kinematics;

pub use character_controller::{CharacterController2D, CharacterControllerConfig};
pub use collision::{CollisionInfo, CollisionResolver};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from two corners (order does not matter)
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box from its center and half extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Whether the two boxes share interior area (touching edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Static level geometry the character moves through
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stage {
    solids: Vec<Aabb>,
}

impl Stage {
    /// Create an empty stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solid box
    pub fn add_solid(&mut self, solid: Aabb) -> usize {
        self.solids.push(solid);
        self.solids.len() - 1
    }

    /// Create a ground slab whose top surface sits at `y`
    pub fn create_ground(&mut self, y: f32, half_width: f32) -> usize {
        self.add_solid(Aabb::new(
            Vec2::new(-half_width, y - 1.0),
            Vec2::new(half_width, y),
        ))
    }

    /// Create a static box (walls, ledges, ceilings)
    pub fn create_static_box(&mut self, half_extents: Vec2, position: Vec2) -> usize {
        self.add_solid(Aabb::from_center(position, half_extents))
    }

    pub fn solids(&self) -> &[Aabb] {
        &self.solids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_corners_are_normalized() {
        let aabb = Aabb::new(Vec2::new(2.0, -1.0), Vec2::new(-2.0, 1.0));
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(2.0, 1.0));
        assert_eq!(aabb.center(), Vec2::ZERO);
        assert_eq!(aabb.half_extents(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::ONE);
        let b = Aabb::from_center(Vec2::new(2.0, 0.0), Vec2::ONE);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Aabb::from_center(Vec2::new(1.5, 0.0), Vec2::ONE)));
    }

    #[test]
    fn test_ground_creation() {
        let mut stage = Stage::new();
        let ground = stage.create_ground(0.0, 10.0);
        assert_eq!(stage.solids()[ground].max.y, 0.0);
        let ground = stage.solids()[ground];
        assert!(ground.intersects(&Aabb::from_center(Vec2::new(0.0, -0.5), Vec2::splat(0.25))));
        assert!(!ground.intersects(&Aabb::from_center(Vec2::new(0.0, 0.5), Vec2::splat(0.25))));
    }
}
