//! Wires the motion controller to its body, dialogue and projectile collaborators

use alpha_physics::CollisionResolver;
use glam::Vec2;
use tracing::debug;

use crate::dialogue::{DialogueSystem, PauseDialogue};
use crate::error::MotionConfigError;
use crate::input::FrameInput;
use crate::projectile::{ProjectileSpawner, SpawnRequest};
use crate::trigger::TriggerZone;

use super::controller::{PlayerMotionController, TickOutput};
use super::MotionConfig;

/// The player: motion state machine plus the body it moves
pub struct Player<R: CollisionResolver> {
    pub motion: PlayerMotionController,
    pub body: R,
}

impl<R: CollisionResolver> Player<R> {
    pub fn new(config: MotionConfig, body: R) -> Result<Self, MotionConfigError> {
        Ok(Self {
            motion: PlayerMotionController::new(config)?,
            body,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    /// Run one simulation tick.
    ///
    /// The returned velocity already reflects the post-move collision
    /// resolution.
    pub fn fixed_update(
        &mut self,
        dt: f32,
        input: &FrameInput,
        dialogue: &mut dyn PauseDialogue,
        spawner: &mut dyn ProjectileSpawner,
    ) -> TickOutput {
        let mut output = self.motion.tick(dt, input, self.body.collisions(), dialogue);

        if let Some(direction) = output.fire {
            spawner.spawn(SpawnRequest {
                position: self.body.position(),
                direction,
            });
        }

        if let Some(request) = output.move_request {
            self.body.resolve_move(request.delta, request.input);
            self.motion.resolve_collisions(self.body.collisions());
            output.velocity = self.motion.velocity();
        }

        output
    }

    /// Engage the dialogue of any zone the player stands in when "event" is pressed
    pub fn on_trigger_stay(
        &self,
        zones: &[TriggerZone],
        input: &FrameInput,
        dialogue: &mut DialogueSystem,
    ) -> bool {
        if !input.event_pressed() || dialogue.is_active() {
            return false;
        }

        let bounds = self.body.bounds();
        let Some(zone) = zones.iter().find(|zone| zone.contains(&bounds)) else {
            return false;
        };

        debug!(key = zone.dialogue_key.as_str(), "Player triggered pause event");
        dialogue.engage(&zone.dialogue_key)
    }
}
