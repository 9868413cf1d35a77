//! Per-frame input snapshot with button edges
//!
//! Raw polling lives outside this crate; the host feeds button states and axes
//! into an `InputHandler` and hands the resulting `FrameInput` to the player.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Buttons the player reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Jump (press and release are both meaningful)
    Jump,
    /// Sprint modifier (held)
    Sprint,
    /// Fire a mind bullet
    Fire,
    /// Talk / advance dialogue
    Event,
}

/// Input for one simulation tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Horizontal and vertical axes, each in [-1, 1]
    pub axis: Vec2,
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
}

impl FrameInput {
    /// Create a new empty input snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given axes and no buttons
    pub fn with_axis(x: f32, y: f32) -> Self {
        Self {
            axis: Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)),
            ..Default::default()
        }
    }

    /// Mark an action as pressed this frame (and held)
    pub fn press(mut self, action: InputAction) -> Self {
        self.just_pressed.insert(action);
        self.held.insert(action);
        self
    }

    /// Mark an action as held
    pub fn hold(mut self, action: InputAction) -> Self {
        self.held.insert(action);
        self
    }

    /// Mark an action as released this frame
    pub fn release(mut self, action: InputAction) -> Self {
        self.held.remove(&action);
        self.just_released.insert(action);
        self
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    pub fn horizontal(&self) -> f32 {
        self.axis.x
    }

    pub fn jump_pressed(&self) -> bool {
        self.is_just_pressed(InputAction::Jump)
    }

    pub fn jump_released(&self) -> bool {
        self.is_just_released(InputAction::Jump)
    }

    pub fn sprint_held(&self) -> bool {
        self.is_held(InputAction::Sprint)
    }

    pub fn fire_pressed(&self) -> bool {
        self.is_just_pressed(InputAction::Fire)
    }

    pub fn event_pressed(&self) -> bool {
        self.is_just_pressed(InputAction::Event)
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

/// Turns level-triggered button states into edge-triggered frame input
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Current input state
    pub state: FrameInput,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether a button is down this frame
    pub fn set_button(&mut self, action: InputAction, down: bool) {
        let was_down = self.state.held.contains(&action);
        match (was_down, down) {
            (false, true) => {
                self.state.just_pressed.insert(action);
                self.state.held.insert(action);
            }
            (true, false) => {
                self.state.held.remove(&action);
                self.state.just_released.insert(action);
            }
            _ => {}
        }
    }

    /// Report the raw axes, clamped to [-1, 1]
    pub fn set_axis(&mut self, x: f32, y: f32) {
        self.state.axis = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }
}
