//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Avatar ---
    /// Set the held movement axes, each in [-1, 1]. Held until replaced.
    Move { horizontal: f32, vertical: f32 },
    /// Attack input edge; consumed by the next active tick.
    Attack,

    // --- Simulation control ---
    /// Select the encounter to load before starting.
    SelectScenario { scenario: ScenarioId },
    /// Load the selected encounter and start ticking.
    StartEncounter,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
