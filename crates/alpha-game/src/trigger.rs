//! Trigger volumes that start pause dialogues

use alpha_physics::Aabb;
use serde::{Deserialize, Serialize};

/// Region that engages a speech event when the player presses "event" inside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerZone {
    pub bounds: Aabb,
    /// Key of the speech event in the `DialogueSystem`
    pub dialogue_key: String,
}

impl TriggerZone {
    pub fn new(bounds: Aabb, dialogue_key: impl Into<String>) -> Self {
        Self {
            bounds,
            dialogue_key: dialogue_key.into(),
        }
    }

    /// Whether the body overlaps this zone
    pub fn contains(&self, body: &Aabb) -> bool {
        self.bounds.intersects(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_zone_overlap() {
        let zone = TriggerZone::new(Aabb::from_center(Vec2::ZERO, Vec2::splat(2.0)), "elder");
        assert!(zone.contains(&Aabb::from_center(Vec2::new(1.0, 0.0), Vec2::ONE)));
        assert!(!zone.contains(&Aabb::from_center(Vec2::new(5.0, 0.0), Vec2::ONE)));
    }
}
