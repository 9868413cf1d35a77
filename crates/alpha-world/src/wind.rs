//! Wind paths that steer drifting objects over time

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Direction an unrotated wind path blows
pub const FORWARD: Vec2 = Vec2::X;

/// Largest heading (degrees) a wind path should be given
pub const MAX_ANGLE: f32 = 30.0;

/// How the heading evolves
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum WindMotion {
    /// Constant heading
    Straight { angle: Vec2 },
    /// Heading oscillates around the initial angle
    Sine { amplitude: f32, frequency: f32 },
    /// Heading turns at a constant rate (degrees per second)
    Loop { change_degrees: f32 },
}

impl WindMotion {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Straight { .. } => "Straight",
            Self::Sine { .. } => "Sine",
            Self::Loop { .. } => "Loop",
        }
    }
}

/// A timed wind path. Angles are Euler angles in degrees; only `y` steers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindPath {
    pub motion: WindMotion,
    /// Side the wind originates from (-1 or 1)
    pub dir: i32,
    /// Travel speed in units per second
    pub speed: f32,
    /// Seconds the path lasts
    pub duration: f32,
    elapsed: f32,
    current_euler_angle: Vec2,
    initial_euler_angle: Vec2,
}

impl WindPath {
    fn with_motion(motion: WindMotion, dir: i32, speed: f32, duration: f32) -> Self {
        Self {
            motion,
            dir,
            speed,
            duration,
            elapsed: 0.0,
            current_euler_angle: Vec2::ZERO,
            initial_euler_angle: Vec2::ZERO,
        }
    }

    /// Path with a fixed heading
    pub fn straight(dir: i32, speed: f32, duration: f32, angle: Vec2) -> Self {
        Self::with_motion(WindMotion::Straight { angle }, dir, speed, duration)
    }

    /// Path whose heading swings by `amplitude` degrees, `frequency` times per second
    pub fn sine(dir: i32, speed: f32, duration: f32, amplitude: f32, frequency: f32) -> Self {
        Self::with_motion(WindMotion::Sine { amplitude, frequency }, dir, speed, duration)
    }

    /// Path that keeps turning by `change_degrees` per second
    pub fn looping(dir: i32, speed: f32, duration: f32, change_degrees: f32) -> Self {
        Self::with_motion(WindMotion::Loop { change_degrees }, dir, speed, duration)
    }

    /// Set the starting heading; also resets the current heading
    pub fn set_initial_euler_angle(&mut self, angle: Vec2) {
        self.initial_euler_angle = angle;
        self.current_euler_angle = angle;
    }

    pub fn current_euler_angle(&self) -> Vec2 {
        self.current_euler_angle
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance the path and return the new heading
    pub fn euler_angulate(&mut self, delta_seconds: f32) -> Vec2 {
        let angle = match self.motion {
            WindMotion::Straight { angle } => angle,
            WindMotion::Sine {
                amplitude,
                frequency,
            } => {
                self.initial_euler_angle
                    + Vec2::new(0.0, amplitude * (TAU * frequency * self.elapsed).cos())
            }
            WindMotion::Loop { change_degrees } => {
                self.current_euler_angle + Vec2::new(0.0, change_degrees * delta_seconds)
            }
        };

        self.current_euler_angle = angle;
        self.elapsed += delta_seconds;
        angle
    }

    /// Displacement for this step along the heading `euler_angles.y`
    pub fn translate(&self, delta_seconds: f32, euler_angles: Vec2) -> Vec2 {
        Vec2::from_angle(euler_angles.y.to_radians()) * self.speed * delta_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_path_holds_angle() {
        let mut path = WindPath::straight(1, 2.0, 5.0, Vec2::new(0.0, 15.0));
        assert_eq!(path.euler_angulate(0.1), Vec2::new(0.0, 15.0));
        assert_eq!(path.euler_angulate(0.1), Vec2::new(0.0, 15.0));
        assert_eq!(path.motion.name(), "Straight");
    }

    #[test]
    fn test_sine_path_oscillates_around_initial() {
        let mut path = WindPath::sine(1, 1.0, 10.0, MAX_ANGLE, 0.5);
        path.set_initial_euler_angle(Vec2::new(0.0, 10.0));

        // cos(0) at the start
        assert!((path.euler_angulate(1.0).y - 40.0).abs() < 1e-4);
        // Half a period later (frequency 0.5 Hz, 1 s elapsed)
        assert!((path.euler_angulate(1.0).y + 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_loop_path_turns_at_constant_rate() {
        let mut path = WindPath::looping(-1, 1.0, 10.0, 90.0);
        path.set_initial_euler_angle(Vec2::new(0.0, 0.0));
        path.euler_angulate(0.5);
        let angle = path.euler_angulate(0.5);
        assert!((angle.y - 90.0).abs() < 1e-4);
        assert_eq!(path.current_euler_angle(), angle);
    }

    #[test]
    fn test_translate_follows_heading() {
        let path = WindPath::straight(1, 2.0, 1.0, Vec2::ZERO);
        let forward = path.translate(0.5, Vec2::ZERO);
        assert!((forward - FORWARD).length() < 1e-5);

        let up = path.translate(0.5, Vec2::new(0.0, 90.0));
        assert!((up - Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn test_path_finishes_after_duration() {
        let mut path = WindPath::looping(1, 1.0, 1.0, 10.0);
        path.euler_angulate(0.6);
        assert!(!path.is_finished());
        path.euler_angulate(0.6);
        assert!(path.is_finished());
    }
}
