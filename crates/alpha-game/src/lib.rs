//! Alpha Game - Player logic and its collaborators
//!
//! Provides the player motion controller, frame input, pause dialogue,
//! trigger zones, and projectiles.

pub mod dialogue;
pub mod error;
pub mod input;
pub mod player;
pub mod projectile;
pub mod trigger;

pub use dialogue::{DialogueSystem, PauseDialogue, SpeechEvent};
pub use error::MotionConfigError;
pub use input::{FrameInput, InputAction, InputHandler};
pub use player::{
    ActionState, DerivedConstants, LocationState, MotionConfig, MotionState, MoveRequest, Player,
    PlayerMotionController, TickOutput,
};
pub use projectile::{MindBullet, ProjectileConfig, ProjectileSpawner, Projectiles, SpawnRequest};
pub use trigger::TriggerZone;
