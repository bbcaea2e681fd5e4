//! Encounter snapshot: the complete visible state handed to the presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::EncounterEvent;
use crate::types::{Position, SimTime, TargetId, Velocity};

/// Complete encounter state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub scenario: ScenarioId,
    pub player: Option<PlayerView>,
    pub agents: Vec<AgentView>,
    pub events: Vec<EncounterEvent>,
    pub score: ScoreView,
}

/// The player's avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: TargetId,
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    /// Animation blend inputs: absolute horizontal and vertical axes.
    pub locomotion: (f32, f32),
    pub health: f32,
}

/// One AI agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: TargetId,
    pub archetype: AgentArchetype,
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    pub state: AgentState,
    pub in_attack_animation: bool,
    /// Seconds until the next attack may start.
    pub cooldown_remaining: f32,
    pub tracked_target: Option<TargetId>,
    pub health: f32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_defeated: u32,
    pub enemies_total: u32,
    pub hits_taken: u32,
    pub hits_landed: u32,
}
