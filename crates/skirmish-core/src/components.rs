//! ECS components for hecs entities.
//!
//! Components are plain data structs with no logic beyond small accessors.
//! Behaviour lives in controllers and systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::TargetId;

/// Marks the player's avatar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an AI-controlled enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: AgentArchetype,
}

/// Stable identity exposed to sensing and snapshots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tag(pub TargetId);

/// Makes an entity visible to sensing queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Targetable {
    pub faction: Faction,
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// How an entity's attack lands once its combat effect fires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackStats {
    /// Damage per landed hit.
    pub damage: f32,
    /// Maximum distance to a victim.
    pub reach: f32,
    /// Fraction of the attack animation at which damage is delivered.
    /// Unused for the player, whose swing lands immediately.
    pub damage_cue: f32,
}
