//! Movement configuration and the constants derived from it

use alpha_physics::kinematics;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::MotionConfigError;

/// Movement configuration, fixed for the lifetime of a controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Apex height of a full jump
    pub max_jump_height: f32,
    /// Apex height when the jump button is released immediately
    pub min_jump_height: f32,
    /// Seconds from takeoff to the apex of a full jump
    pub time_to_jump_apex: f32,
    /// Seconds from a double jump to its apex
    pub time_to_double_jump_apex: f32,
    /// Horizontal smoothing time while airborne (lower reaches top speed quicker)
    pub accel_time_airborne: f32,
    /// Horizontal smoothing time while grounded
    pub accel_time_grounded: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Maximum downward speed while sliding on a wall
    pub wall_slide_speed: f32,
    /// Seconds the player stays stuck to a wall while steering away from it
    pub wall_stick_time: f32,
    /// Push-off velocity when jumping off a wall without steering away
    pub wall_off_jump: Vec2,
    /// Leap velocity when jumping off a wall while steering away from it
    pub wall_leap_jump: Vec2,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            max_jump_height: 4.0,
            min_jump_height: 1.0,
            time_to_jump_apex: 0.4,
            time_to_double_jump_apex: 0.3,
            accel_time_airborne: 0.2,
            accel_time_grounded: 0.1,
            walk_speed: 6.0,
            sprint_speed: 12.0,
            wall_slide_speed: 3.0,
            wall_stick_time: 0.25,
            wall_off_jump: Vec2::new(8.5, 7.0),
            wall_leap_jump: Vec2::new(18.0, 17.0),
        }
    }
}

impl MotionConfig {
    /// Check the preconditions the controller relies on.
    ///
    /// Smoothing and apex times divide the motion equations and must be
    /// strictly positive. Negative heights or speeds are allowed and simply
    /// produce odd motion.
    pub fn validate(&self) -> Result<(), MotionConfigError> {
        let scalars = [
            ("max_jump_height", self.max_jump_height),
            ("min_jump_height", self.min_jump_height),
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_stick_time", self.wall_stick_time),
            ("wall_off_jump.x", self.wall_off_jump.x),
            ("wall_off_jump.y", self.wall_off_jump.y),
            ("wall_leap_jump.x", self.wall_leap_jump.x),
            ("wall_leap_jump.y", self.wall_leap_jump.y),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(MotionConfigError::NotFinite { field, value });
            }
        }

        let times = [
            ("time_to_jump_apex", self.time_to_jump_apex),
            ("time_to_double_jump_apex", self.time_to_double_jump_apex),
            ("accel_time_airborne", self.accel_time_airborne),
            ("accel_time_grounded", self.accel_time_grounded),
        ];
        for (field, value) in times {
            // NaN fails this comparison too
            if !(value > 0.0) || !value.is_finite() {
                return Err(MotionConfigError::NonPositiveTime { field, value });
            }
        }

        Ok(())
    }

    /// Smoothing time for the current location
    pub fn accel_time(&self, grounded: bool) -> f32 {
        if grounded {
            self.accel_time_grounded
        } else {
            self.accel_time_airborne
        }
    }
}

/// Jump physics computed once from a `MotionConfig`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedConstants {
    /// Downward acceleration (always negative for positive jump heights)
    pub gravity: f32,
    pub max_jump_velocity: f32,
    pub min_jump_velocity: f32,
    pub double_jump_velocity: f32,
}

impl DerivedConstants {
    pub fn from_config(config: &MotionConfig) -> Self {
        let gravity = kinematics::object_gravity(config.max_jump_height, config.time_to_jump_apex);
        Self {
            gravity,
            max_jump_velocity: kinematics::jump_velocity(gravity, config.time_to_jump_apex),
            min_jump_velocity: kinematics::min_jump_velocity(gravity, config.min_jump_height),
            double_jump_velocity: kinematics::jump_velocity(
                gravity,
                config.time_to_double_jump_apex,
            ),
        }
    }
}
