//! Per-tick motion state

use alpha_core::Facing;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Whether the player stands on something
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationState {
    #[default]
    Grounded,
    Airborne,
}

/// Behavior classification used to pick animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionState {
    #[default]
    Idle,
    Walking,
    Sprinting,
    WallSliding,
    WallJumping,
    Jumping,
    Falling,
}

impl ActionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walking => "Walking",
            Self::Sprinting => "Sprinting",
            Self::WallSliding => "WallSliding",
            Self::WallJumping => "WallJumping",
            Self::Jumping => "Jumping",
            Self::Falling => "Falling",
        }
    }
}

/// Stopwatch gating how long the player stays stuck to a wall
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickTimer {
    seconds: f32,
    running: bool,
}

impl StickTimer {
    /// Advance by `dt` when running
    pub fn update(&mut self, dt: f32) {
        if self.running {
            self.seconds += dt;
        }
    }

    /// Start counting; a running timer keeps its elapsed time
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop and reset to zero
    pub fn stop(&mut self) {
        self.running = false;
        self.seconds = 0.0;
    }

    pub fn seconds(&self) -> f32 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Everything the controller mutates from tick to tick
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub velocity: Vec2,
    /// Accumulator for the horizontal smoothing
    pub horizontal_smoothing: f32,
    pub facing: Facing,
    pub has_double_jump: bool,
    pub location: LocationState,
    pub action: ActionState,
    pub wall_stick: StickTimer,
    /// Horizontal speed at full input; carried over while airborne
    pub target_speed: f32,
}

impl MotionState {
    /// Rest state: no velocity, idle on the ground
    pub fn at_rest(walk_speed: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            horizontal_smoothing: 0.0,
            facing: Facing::Right,
            has_double_jump: false,
            location: LocationState::Grounded,
            action: ActionState::Idle,
            wall_stick: StickTimer::default(),
            target_speed: walk_speed,
        }
    }
}
