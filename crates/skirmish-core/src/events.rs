//! Events emitted by the simulation for animation and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::TargetId;

/// Visual-layer events emitted by a single controller.
///
/// State changes are emitted once per transition, never per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgentEvent {
    /// The behaviour state changed.
    StateChanged { from: AgentState, to: AgentState },
    /// The entity turned around.
    FacingChanged { facing: Facing },
}

/// Encounter-level events collected by the host each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterEvent {
    /// A controller event, tagged with its source.
    Visual { source: TargetId, event: AgentEvent },
    /// An attack connected.
    Hit {
        attacker: TargetId,
        victim: TargetId,
        damage: f32,
    },
    /// An attack was delivered with nothing in reach.
    Whiff { attacker: TargetId },
    /// An entity ran out of health and left the simulation.
    Defeated { entity: TargetId },
}
