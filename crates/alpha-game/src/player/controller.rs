//! Platformer motion: ground/air classification, wall slides, jumps and double jumps

use alpha_core::Facing;
use alpha_physics::kinematics::smooth_damp;
use alpha_physics::CollisionInfo;
use glam::Vec2;
use tracing::{debug, info};

use crate::dialogue::PauseDialogue;
use crate::error::MotionConfigError;
use crate::input::FrameInput;

use super::state::{ActionState, LocationState, MotionState};
use super::{DerivedConstants, MotionConfig};

/// Displacement handed to the collision resolver for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// Velocity times dt
    pub delta: Vec2,
    /// Raw input axes for the tick
    pub input: Vec2,
}

/// Result of one controller tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub velocity: Vec2,
    /// `None` while a pause dialogue suspends motion
    pub move_request: Option<MoveRequest>,
    pub location: LocationState,
    pub action: ActionState,
    /// Direction of a mind bullet to spawn this tick
    pub fire: Option<Facing>,
    /// Whether the wall-slide rule applied this tick
    pub wall_sliding: bool,
}

impl TickOutput {
    pub fn is_paused(&self) -> bool {
        self.move_request.is_none()
    }
}

/// Player motion state machine, advanced once per simulation tick
#[derive(Debug, Clone)]
pub struct PlayerMotionController {
    config: MotionConfig,
    derived: DerivedConstants,
    state: MotionState,
}

impl PlayerMotionController {
    /// Create a controller at rest on the ground
    pub fn new(config: MotionConfig) -> Result<Self, MotionConfigError> {
        config.validate()?;
        let derived = DerivedConstants::from_config(&config);

        info!(
            gravity = derived.gravity,
            max_jump_velocity = derived.max_jump_velocity,
            min_jump_velocity = derived.min_jump_velocity,
            double_jump_velocity = derived.double_jump_velocity,
            "Player motion controller initialized"
        );

        Ok(Self {
            state: MotionState::at_rest(config.walk_speed),
            config,
            derived,
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn derived(&self) -> &DerivedConstants {
        &self.derived
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn location(&self) -> LocationState {
        self.state.location
    }

    pub fn action(&self) -> ActionState {
        self.state.action
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn has_double_jump(&self) -> bool {
        self.state.has_double_jump
    }

    /// Advance the motion state by one tick.
    ///
    /// `collisions` are the flags reported by the resolver after the previous
    /// move. Once the returned move request has been applied, call
    /// [`resolve_collisions`](Self::resolve_collisions) with the new flags.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &FrameInput,
        collisions: CollisionInfo,
        dialogue: &mut dyn PauseDialogue,
    ) -> TickOutput {
        if dialogue.is_active() {
            dialogue.advance(input.event_pressed());
            return self.paused_output();
        }

        let previous_action = self.state.action;
        let horizontal = input.horizontal();
        self.state.wall_stick.update(dt);

        if let Some(facing) = Facing::from_axis(horizontal) {
            self.state.facing = facing;
        }

        let fire = input.fire_pressed().then_some(self.state.facing);

        if collisions.is_below {
            self.state.location = LocationState::Grounded;
            if input.sprint_held() {
                self.state.target_speed = self.config.sprint_speed;
                self.state.action = ActionState::Sprinting;
            } else if horizontal != 0.0 {
                self.state.target_speed = self.config.walk_speed;
                self.state.action = ActionState::Walking;
            } else {
                // Idle jumps still get walk-speed air control
                self.state.target_speed = self.config.walk_speed;
                self.state.action = ActionState::Idle;
            }
        } else {
            self.state.location = LocationState::Airborne;
        }
        let accel_time = self.config.accel_time(collisions.is_below);

        let target_velocity_x = horizontal * self.state.target_speed;
        self.state.velocity.x = smooth_damp(
            self.state.velocity.x,
            target_velocity_x,
            &mut self.state.horizontal_smoothing,
            accel_time,
            dt,
        );

        let wall_sliding = self.apply_wall_slide(horizontal, collisions);

        if input.jump_pressed() {
            self.jump(horizontal, collisions, wall_sliding);
        }

        // Releasing early cuts the ascent short
        if input.jump_released()
            && self.state.velocity.y > self.derived.min_jump_velocity
            && self.state.has_double_jump
        {
            self.state.velocity.y = self.derived.min_jump_velocity;
        }

        if !collisions.is_below && self.state.velocity.y < 0.0 {
            self.state.action = ActionState::Falling;
        }

        self.state.velocity.y += self.derived.gravity * dt;

        if self.state.action != previous_action {
            debug!(
                from = previous_action.name(),
                to = self.state.action.name(),
                "Action state changed"
            );
        }

        TickOutput {
            velocity: self.state.velocity,
            move_request: Some(MoveRequest {
                delta: self.state.velocity * dt,
                input: input.axis,
            }),
            location: self.state.location,
            action: self.state.action,
            fire,
            wall_sliding,
        }
    }

    /// Apply the flags reported after this tick's move.
    ///
    /// Touching a floor or ceiling stops vertical motion; only landing
    /// refills the double jump.
    pub fn resolve_collisions(&mut self, collisions: CollisionInfo) {
        if collisions.is_above || collisions.is_below {
            self.state.velocity.y = 0.0;
            self.state.has_double_jump = collisions.is_below;
        }
    }

    fn paused_output(&self) -> TickOutput {
        TickOutput {
            velocity: self.state.velocity,
            move_request: None,
            location: self.state.location,
            action: self.state.action,
            fire: None,
            wall_sliding: false,
        }
    }

    /// Wall-slide rule. Returns whether the player is sliding this tick.
    fn apply_wall_slide(&mut self, horizontal: f32, collisions: CollisionInfo) -> bool {
        let sliding = collisions.is_against_wall()
            && !collisions.is_below
            && self.state.velocity.y < 0.0;
        if !sliding {
            return false;
        }

        let wall_dir_x = collisions.wall_dir_x();
        self.state.action = ActionState::WallSliding;
        if self.state.velocity.y < -self.config.wall_slide_speed {
            self.state.velocity.y = -self.config.wall_slide_speed;
        }

        // Hold the player on the wall briefly so a leap can be lined up
        if self.state.wall_stick.seconds() < self.config.wall_stick_time {
            self.state.horizontal_smoothing = 0.0;
            self.state.velocity.x = 0.0;

            if horizontal != wall_dir_x && horizontal != 0.0 {
                if !self.state.wall_stick.is_running() {
                    debug!(wall_dir_x, "Wall stick started");
                }
                self.state.wall_stick.start();
            } else {
                self.state.wall_stick.stop();
            }
        } else {
            debug!(wall_dir_x, "Wall stick released");
            self.state.wall_stick.stop();
        }

        true
    }

    fn jump(&mut self, horizontal: f32, collisions: CollisionInfo, wall_sliding: bool) {
        if collisions.is_below {
            self.state.action = ActionState::Jumping;
            self.state.velocity.y = self.derived.max_jump_velocity;
        } else if wall_sliding {
            self.state.has_double_jump = false;
            let wall_dir_x = collisions.wall_dir_x();

            if wall_dir_x == -horizontal {
                self.state.action = ActionState::WallJumping;
                self.state.has_double_jump = true;
                self.state.velocity.x = -wall_dir_x * self.config.wall_leap_jump.x;
                self.state.velocity.y = self.config.wall_leap_jump.y;
            } else {
                self.state.velocity.x = -wall_dir_x * self.config.wall_off_jump.x;
                self.state.velocity.y = self.config.wall_off_jump.y;
            }
        } else if self.state.has_double_jump {
            self.state.action = ActionState::Jumping;
            self.state.velocity.y = self.derived.double_jump_velocity;
            self.state.has_double_jump = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueSystem;
    use crate::input::InputAction;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-4;

    fn controller() -> PlayerMotionController {
        PlayerMotionController::new(MotionConfig::default()).unwrap()
    }

    fn airborne() -> CollisionInfo {
        CollisionInfo::default()
    }

    fn left_wall() -> CollisionInfo {
        CollisionInfo {
            is_left: true,
            ..Default::default()
        }
    }

    fn right_wall() -> CollisionInfo {
        CollisionInfo {
            is_right: true,
            ..Default::default()
        }
    }

    /// Tick then immediately feed the same flags back as the post-move result
    fn step(
        player: &mut PlayerMotionController,
        input: &FrameInput,
        collisions: CollisionInfo,
    ) -> TickOutput {
        let mut dialogue = DialogueSystem::new();
        let output = player.tick(DT, input, collisions, &mut dialogue);
        player.resolve_collisions(collisions);
        output
    }

    #[derive(Default)]
    struct ScriptedDialogue {
        active: bool,
        advances: u32,
        event_presses: u32,
    }

    impl PauseDialogue for ScriptedDialogue {
        fn is_active(&self) -> bool {
            self.active
        }

        fn advance(&mut self, event_pressed: bool) {
            self.advances += 1;
            if event_pressed {
                self.event_presses += 1;
            }
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MotionConfig {
            time_to_jump_apex: 0.0,
            ..Default::default()
        };
        assert!(PlayerMotionController::new(config).is_err());
    }

    #[test]
    fn test_dialogue_suspends_motion() {
        let mut player = controller();
        player.state.velocity = Vec2::new(3.0, -2.0);
        player.state.action = ActionState::Walking;
        let before = player.state.clone();

        let mut dialogue = ScriptedDialogue {
            active: true,
            ..Default::default()
        };
        let input = FrameInput::with_axis(1.0, 0.0)
            .press(InputAction::Jump)
            .press(InputAction::Fire)
            .press(InputAction::Event);
        let output = player.tick(DT, &input, CollisionInfo::grounded(), &mut dialogue);

        assert!(output.is_paused());
        assert_eq!(output.fire, None);
        assert_eq!(output.velocity, before.velocity);
        assert_eq!(player.state, before);
        assert_eq!(dialogue.advances, 1);
        assert_eq!(dialogue.event_presses, 1);
    }

    #[test]
    fn test_facing_holds_on_neutral_input() {
        let mut player = controller();
        step(&mut player, &FrameInput::with_axis(-1.0, 0.0), CollisionInfo::grounded());
        assert_eq!(player.facing(), Facing::Left);

        step(&mut player, &FrameInput::with_axis(0.0, 0.0), CollisionInfo::grounded());
        assert_eq!(player.facing(), Facing::Left);

        step(&mut player, &FrameInput::with_axis(0.5, 0.0), CollisionInfo::grounded());
        assert_eq!(player.facing(), Facing::Right);
    }

    #[test]
    fn test_fire_uses_current_facing() {
        let mut player = controller();
        let input = FrameInput::with_axis(-1.0, 0.0).press(InputAction::Fire);
        let output = step(&mut player, &input, airborne());
        assert_eq!(output.fire, Some(Facing::Left));

        let output = step(&mut player, &FrameInput::new(), airborne());
        assert_eq!(output.fire, None);
    }

    #[test]
    fn test_walking_approaches_walk_speed_without_overshoot() {
        let mut player = controller();
        let input = FrameInput::with_axis(1.0, 0.0);
        let walk_speed = player.config().walk_speed;

        let output = step(&mut player, &input, CollisionInfo::grounded());
        assert_eq!(output.action, ActionState::Walking);
        assert_eq!(output.location, LocationState::Grounded);
        assert!(output.velocity.x > 0.0);

        let mut previous = output.velocity.x;
        for _ in 0..120 {
            let output = step(&mut player, &input, CollisionInfo::grounded());
            assert!(output.velocity.x >= previous);
            assert!(output.velocity.x <= walk_speed);
            previous = output.velocity.x;
        }
        assert!((previous - walk_speed).abs() < 0.01);
    }

    #[test]
    fn test_sprint_and_idle_selection() {
        let mut player = controller();
        let sprint = FrameInput::with_axis(1.0, 0.0).hold(InputAction::Sprint);
        let output = step(&mut player, &sprint, CollisionInfo::grounded());
        assert_eq!(output.action, ActionState::Sprinting);
        assert_eq!(player.state().target_speed, player.config().sprint_speed);

        let output = step(&mut player, &FrameInput::new(), CollisionInfo::grounded());
        assert_eq!(output.action, ActionState::Idle);
        assert_eq!(player.state().target_speed, player.config().walk_speed);
    }

    #[test]
    fn test_airborne_keeps_target_speed() {
        let mut player = controller();
        let sprint = FrameInput::with_axis(1.0, 0.0).hold(InputAction::Sprint);
        step(&mut player, &sprint, CollisionInfo::grounded());

        // Leaving the ground while rising: sprint speed and action carry over
        player.state.velocity.y = 5.0;
        let output = step(&mut player, &FrameInput::with_axis(1.0, 0.0), airborne());
        assert_eq!(output.location, LocationState::Airborne);
        assert_eq!(output.action, ActionState::Sprinting);
        assert_eq!(player.state().target_speed, player.config().sprint_speed);
    }

    #[test]
    fn test_landing_zeroes_vertical_velocity_and_refills_double_jump() {
        let mut player = controller();
        player.state.velocity.y = -4.0;
        player.state.has_double_jump = false;

        step(&mut player, &FrameInput::new(), CollisionInfo::grounded());
        assert_eq!(player.velocity().y, 0.0);
        assert!(player.has_double_jump());
    }

    #[test]
    fn test_ceiling_stops_ascent_without_refill() {
        let mut player = controller();
        player.state.velocity.y = 8.0;
        player.state.has_double_jump = false;

        let ceiling = CollisionInfo {
            is_above: true,
            ..Default::default()
        };
        step(&mut player, &FrameInput::new(), ceiling);
        assert_eq!(player.velocity().y, 0.0);
        assert!(!player.has_double_jump());
    }

    #[test]
    fn test_ground_jump() {
        let mut player = controller();
        let gravity = player.derived().gravity;
        let max = player.derived().max_jump_velocity;

        let mut dialogue = DialogueSystem::new();
        let input = FrameInput::new().press(InputAction::Jump);
        let output = player.tick(DT, &input, CollisionInfo::grounded(), &mut dialogue);

        assert_eq!(output.action, ActionState::Jumping);
        assert!((output.velocity.y - (max + gravity * DT)).abs() < EPS);
        let request = output.move_request.unwrap();
        assert!((request.delta - output.velocity * DT).length() < EPS);
    }

    #[test]
    fn test_early_release_shortens_jump() {
        let mut player = controller();
        let derived = *player.derived();
        player.state.velocity.y = derived.max_jump_velocity;
        player.state.has_double_jump = true;

        let input = FrameInput::new().release(InputAction::Jump);
        let output = step(&mut player, &input, airborne());
        assert!((output.velocity.y - (derived.min_jump_velocity + derived.gravity * DT)).abs() < EPS);
    }

    #[test]
    fn test_release_after_double_jump_keeps_velocity() {
        let mut player = controller();
        let derived = *player.derived();
        player.state.velocity.y = derived.max_jump_velocity;
        player.state.has_double_jump = false;

        let input = FrameInput::new().release(InputAction::Jump);
        let output = step(&mut player, &input, airborne());
        assert!((output.velocity.y - (derived.max_jump_velocity + derived.gravity * DT)).abs() < EPS);
    }

    #[test]
    fn test_release_below_min_velocity_keeps_velocity() {
        let derived = *controller().derived();
        let input = FrameInput::new().release(InputAction::Jump);

        for vy in [derived.min_jump_velocity * 0.5, derived.min_jump_velocity] {
            let mut player = controller();
            player.state.velocity.y = vy;
            player.state.has_double_jump = true;

            let output = step(&mut player, &input, airborne());
            assert!((output.velocity.y - (vy + derived.gravity * DT)).abs() < EPS);
            assert!(player.has_double_jump());
        }
    }

    #[test]
    fn test_double_jump_consumed_once() {
        let mut player = controller();
        let derived = *player.derived();
        player.state.has_double_jump = true;

        let jump = FrameInput::new().press(InputAction::Jump);
        let output = step(&mut player, &jump, airborne());
        assert_eq!(output.action, ActionState::Jumping);
        assert!((output.velocity.y - (derived.double_jump_velocity + derived.gravity * DT)).abs() < EPS);
        assert!(!player.has_double_jump());

        let before = output.velocity.y;
        let output = step(&mut player, &jump, airborne());
        assert!((output.velocity.y - (before + derived.gravity * DT)).abs() < EPS);
        assert!(!player.has_double_jump());
    }

    #[test]
    fn test_wall_slide_caps_fall_speed() {
        let mut player = controller();
        let gravity = player.derived().gravity;
        player.state.velocity.y = -5.0;

        let output = step(&mut player, &FrameInput::new(), left_wall());
        assert!(output.wall_sliding);
        assert!((output.velocity.y - (-3.0 + gravity * DT)).abs() < EPS);
        // Descending while airborne is reported as falling
        assert_eq!(output.action, ActionState::Falling);
    }

    #[test]
    fn test_wall_slide_requires_descent() {
        let mut player = controller();
        player.state.velocity.y = 2.0;

        let output = step(&mut player, &FrameInput::new(), left_wall());
        assert!(!output.wall_sliding);

        player.state.velocity.y = -2.0;
        let against_wall_on_ground = CollisionInfo {
            is_left: true,
            is_below: true,
            ..Default::default()
        };
        let output = step(&mut player, &FrameInput::new(), against_wall_on_ground);
        assert!(!output.wall_sliding);
    }

    #[test]
    fn test_wall_leap_and_wall_off() {
        let config = MotionConfig::default();
        let gravity = DerivedConstants::from_config(&config).gravity;
        let jump = |x: f32| FrameInput::with_axis(x, 0.0).press(InputAction::Jump);

        // Steering away from a left wall leaps to the right
        let mut leap = controller();
        leap.state.velocity.y = -1.0;
        let output = step(&mut leap, &jump(1.0), left_wall());
        assert_eq!(output.action, ActionState::WallJumping);
        assert!((output.velocity.x - config.wall_leap_jump.x).abs() < EPS);
        assert!((output.velocity.y - (config.wall_leap_jump.y + gravity * DT)).abs() < EPS);
        assert!(leap.has_double_jump());

        // No steering pushes off with the smaller impulse and no double jump
        let mut off = controller();
        off.state.velocity.y = -1.0;
        off.state.has_double_jump = true;
        let output = step(&mut off, &jump(0.0), left_wall());
        assert!((output.velocity.x - config.wall_off_jump.x).abs() < EPS);
        assert!((output.velocity.y - (config.wall_off_jump.y + gravity * DT)).abs() < EPS);
        assert!(!off.has_double_jump());

        assert!(leap.velocity().x > 0.0 && off.velocity().x > 0.0);
        assert_ne!(leap.velocity().x, off.velocity().x);
    }

    #[test]
    fn test_wall_leap_from_right_wall_goes_left() {
        let mut player = controller();
        player.state.velocity.y = -1.0;
        let input = FrameInput::with_axis(-1.0, 0.0).press(InputAction::Jump);
        let output = step(&mut player, &input, right_wall());
        assert_eq!(output.action, ActionState::WallJumping);
        assert!(output.velocity.x < 0.0);
    }

    #[test]
    fn test_wall_stick_holds_then_releases_when_steering_away() {
        let mut player = controller();
        player.state.velocity.y = -1.0;
        let away = FrameInput::with_axis(1.0, 0.0);

        for _ in 0..10 {
            let output = step(&mut player, &away, left_wall());
            assert!(output.wall_sliding);
            assert_eq!(output.velocity.x, 0.0);
        }
        assert!(player.state().wall_stick.is_running());

        let released = (0..30).any(|_| step(&mut player, &away, left_wall()).velocity.x > 0.0);
        assert!(released);
    }

    #[test]
    fn test_wall_stick_never_starts_when_pressing_into_wall() {
        let mut player = controller();
        player.state.velocity.y = -1.0;
        let into_wall = FrameInput::with_axis(-1.0, 0.0);

        for _ in 0..40 {
            let output = step(&mut player, &into_wall, left_wall());
            assert_eq!(output.velocity.x, 0.0);
            assert!(!player.state().wall_stick.is_running());
        }
    }

    #[test]
    fn test_falling_classification() {
        let mut player = controller();
        player.state.velocity.y = -0.5;
        let output = step(&mut player, &FrameInput::new(), airborne());
        assert_eq!(output.action, ActionState::Falling);
        assert_eq!(output.location, LocationState::Airborne);
    }

    #[test]
    fn test_idle_on_ground_decays_horizontal_velocity() {
        let mut player = controller();
        player.state.velocity.x = player.config().walk_speed;

        let mut previous = player.velocity().x.abs();
        for _ in 0..120 {
            let output = step(&mut player, &FrameInput::new(), CollisionInfo::grounded());
            assert!(output.velocity.x.abs() <= previous);
            previous = output.velocity.x.abs();
        }
        assert!(previous < 0.01);
    }

    #[test]
    fn test_negative_jump_height_is_defined() {
        let config = MotionConfig {
            max_jump_height: -2.0,
            ..Default::default()
        };
        let mut player = PlayerMotionController::new(config).unwrap();
        assert!(player.derived().gravity > 0.0);

        let output = step(&mut player, &FrameInput::new().press(InputAction::Jump), CollisionInfo::grounded());
        assert!(output.velocity.is_finite());
    }
}
