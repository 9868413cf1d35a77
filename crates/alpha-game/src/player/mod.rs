//! Player module
//!
//! Platformer motion with wall slides, wall leaps and double jumps.

mod controller;
mod driver;
mod movement;
mod state;

pub use controller::{MoveRequest, PlayerMotionController, TickOutput};
pub use driver::Player;
pub use movement::{DerivedConstants, MotionConfig};
pub use state::{ActionState, LocationState, MotionState, StickTimer};
