//! Scripted headless run of the player, the day/night clock and a wind path

use alpha_core::GameTime;
use alpha_game::{
    ActionState, DialogueSystem, InputAction, InputHandler, Player, Projectiles, SpeechEvent,
    TriggerZone,
};
use alpha_physics::{Aabb, CharacterController2D, Stage};
use alpha_world::{SunLight, TimeOfDay, WindPath};
use anyhow::{Context, Result};
use glam::Vec2;
use tracing::{debug, info};

use crate::settings::GameSettings;

/// Button and axis state for one moment of the script
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ScriptFrame {
    axis_x: f32,
    jump: bool,
    sprint: bool,
    fire: bool,
    event: bool,
}

/// Input timeline: walk, sprint, jump with an early release, double jump,
/// slide down the right wall and leap off it, fire, then talk to the elder.
fn script(t: f32) -> ScriptFrame {
    let within = |start: f32, end: f32| t >= start && t < end;
    ScriptFrame {
        axis_x: if within(0.5, 4.2) {
            1.0
        } else if within(4.2, 4.8) || within(5.5, 6.0) {
            -1.0
        } else {
            0.0
        },
        sprint: within(1.5, 2.0),
        jump: within(2.0, 2.1) || within(2.6, 2.9) || within(3.6, 3.7) || within(4.2, 4.3),
        fire: within(5.0, 5.05),
        event: within(6.2, 6.25) || within(6.5, 6.55) || within(6.8, 6.85),
    }
}

/// What the run ended with
#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub ticks: u64,
    pub final_position: Vec2,
    pub final_action: ActionState,
    pub bullets_fired: u64,
    pub dialogues_heard: Vec<String>,
    pub sun_intensity: f32,
    pub clock: String,
}

fn build_stage() -> Stage {
    let mut stage = Stage::new();
    stage.create_ground(0.0, 30.0);
    stage.create_static_box(Vec2::new(0.5, 10.0), Vec2::new(12.5, 10.0));
    stage.create_static_box(Vec2::new(0.5, 10.0), Vec2::new(-12.5, 10.0));
    stage
}

fn build_dialogue() -> DialogueSystem {
    let mut dialogue = DialogueSystem::new();
    dialogue.register(
        "elder",
        SpeechEvent::new(
            "Elder",
            vec![
                "The wind is changing.".to_string(),
                "Mind the walls on your way out.".to_string(),
            ],
        ),
    );
    dialogue
}

/// Run the scripted demo for the configured duration
pub fn run(settings: &GameSettings) -> Result<DemoSummary> {
    settings.validate().context("Invalid settings")?;
    let mut time = GameTime::new(settings.time.clone()).context("Invalid time settings")?;

    let mut body = CharacterController2D::new(build_stage());
    body.spawn(Vec2::ZERO);
    let mut player = Player::new(settings.motion.clone(), body).context("Invalid motion settings")?;

    let zones = vec![TriggerZone::new(
        Aabb::new(Vec2::new(-12.0, 0.0), Vec2::new(12.0, 20.0)),
        "elder",
    )];
    let mut dialogue = build_dialogue();
    let mut projectiles = Projectiles::new(settings.projectiles.clone());
    let mut input = InputHandler::new();

    let world = &settings.world;
    let mut clock = TimeOfDay::new(world.hours_per_day, world.day_length_seconds, world.start_hour)
        .context("Invalid day/night settings")?;
    let sun = SunLight::new(world.sun_intensities.clone(), world.hours_per_day)
        .context("Invalid sun intensity table")?;
    let mut wind = WindPath::sine(1, 2.0, settings.demo.duration_seconds, 20.0, 0.25);
    wind.set_initial_euler_angle(Vec2::new(0.0, 10.0));
    let mut leaf = Vec2::new(0.0, 5.0);

    let frames = (settings.demo.duration_seconds / settings.demo.frame_delta).ceil() as u64;
    let mut last_action = player.motion.action();
    let mut tick: u64 = 0;

    for _ in 0..frames {
        time.update(settings.demo.frame_delta);

        for _ in 0..time.fixed_steps() {
            let dt = time.fixed_delta();
            let t = tick as f32 * dt;
            tick += 1;
            let frame = script(t);

            input.set_axis(frame.axis_x, 0.0);
            input.set_button(InputAction::Jump, frame.jump);
            input.set_button(InputAction::Sprint, frame.sprint);
            input.set_button(InputAction::Fire, frame.fire);
            input.set_button(InputAction::Event, frame.event);

            player.on_trigger_stay(&zones, &input.state, &mut dialogue);
            let output = player.fixed_update(dt, &input.state, &mut dialogue, &mut projectiles);
            input.end_frame();

            if output.action != last_action {
                info!(
                    t,
                    action = output.action.name(),
                    x = player.position().x,
                    y = player.position().y,
                    "Player action"
                );
                last_action = output.action;
            }
            if output.is_paused() {
                if let (Some(key), Some(line)) = (dialogue.active_key(), dialogue.current_line()) {
                    debug!(key, line, "Dialogue on screen");
                }
            }

            projectiles.update(dt);
            clock.update(dt);
            if !wind.is_finished() {
                let heading = wind.euler_angulate(dt);
                leaf += wind.translate(dt, heading);
            }
        }
    }

    let summary = DemoSummary {
        ticks: time.tick_count,
        final_position: player.position(),
        final_action: player.motion.action(),
        bullets_fired: projectiles.total_spawned(),
        dialogues_heard: dialogue.history.heard.clone(),
        sun_intensity: sun.intensity(&clock),
        clock: clock.formatted_time(),
    };
    debug!(x = leaf.x, y = leaf.y, "Leaf drifted");
    Ok(summary)
}
