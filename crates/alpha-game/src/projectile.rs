//! Mind bullets fired by the player

use alpha_core::{EntityId, Facing};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request to spawn a projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub direction: Facing,
}

/// Accepts spawn requests; fire-and-forget
pub trait ProjectileSpawner {
    fn spawn(&mut self, request: SpawnRequest);
}

/// Projectile tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Horizontal speed in units per second
    pub speed: f32,
    /// Seconds before a bullet expires
    pub lifetime: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 15.0,
            lifetime: 1.5,
        }
    }
}

/// A single bullet in flight
#[derive(Debug, Clone)]
pub struct MindBullet {
    pub id: EntityId,
    pub position: Vec2,
    pub direction: Facing,
    pub age: f32,
}

/// Live mind bullets
#[derive(Debug, Default)]
pub struct Projectiles {
    pub config: ProjectileConfig,
    bullets: Vec<MindBullet>,
    total_spawned: u64,
}

impl Projectiles {
    pub fn new(config: ProjectileConfig) -> Self {
        Self {
            config,
            bullets: Vec::new(),
            total_spawned: 0,
        }
    }

    /// Move bullets and drop the expired ones
    pub fn update(&mut self, dt: f32) {
        let speed = self.config.speed;
        let lifetime = self.config.lifetime;
        for bullet in &mut self.bullets {
            bullet.position.x += bullet.direction.sign() * speed * dt;
            bullet.age += dt;
        }
        self.bullets.retain(|bullet| bullet.age < lifetime);
    }

    pub fn bullets(&self) -> &[MindBullet] {
        &self.bullets
    }

    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }
}

impl ProjectileSpawner for Projectiles {
    fn spawn(&mut self, request: SpawnRequest) {
        let bullet = MindBullet {
            id: EntityId::new(),
            position: request.position,
            direction: request.direction,
            age: 0.0,
        };
        debug!(id = %bullet.id.0, direction = ?bullet.direction, "Mind bullet spawned");
        self.bullets.push(bullet);
        self.total_spawned += 1;
    }
}
