//! Alpha - 2D platformer simulation core
//!
//! Headless entry point: loads settings, then runs the scripted demo through
//! the fixed-timestep loop.

mod demo;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::GameSettings;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Alpha...");

    let arg = std::env::args().nth(1);

    // `alpha --init` writes the default settings file and exits
    if arg.as_deref() == Some("--init") {
        let path = GameSettings::settings_path()
            .context("Could not determine config directory")?;
        GameSettings::default().save(&path)?;
        return Ok(());
    }

    let settings_path = arg.map(PathBuf::from);
    let settings = GameSettings::load(settings_path.as_deref());

    let summary = demo::run(&settings)?;

    info!(
        ticks = summary.ticks,
        x = summary.final_position.x,
        y = summary.final_position.y,
        action = summary.final_action.name(),
        bullets = summary.bullets_fired,
        dialogues = summary.dialogues_heard.len(),
        "Simulation finished"
    );
    info!(
        clock = summary.clock.as_str(),
        sun_intensity = summary.sun_intensity,
        "World state"
    );

    Ok(())
}
