//! Scenario definitions: hardcoded encounter layouts.
//!
//! Each scenario lists which archetypes spawn, on which bearing around the
//! player, and on which ring. Bearings are measured counter-clockwise from +x.

use std::f32::consts::{FRAC_PI_3, PI};

use skirmish_core::constants::{SPAWN_RING_INNER, SPAWN_RING_OUTER};
use skirmish_core::enums::{AgentArchetype, ScenarioId};

/// One enemy placement.
#[derive(Debug, Clone, Copy)]
pub struct SpawnEntry {
    pub archetype: AgentArchetype,
    /// Nominal bearing from the player (radians), jittered at spawn.
    pub bearing: f32,
    /// Distance from the player.
    pub radius: f32,
}

impl SpawnEntry {
    fn inner(archetype: AgentArchetype, bearing: f32) -> Self {
        Self {
            archetype,
            bearing,
            radius: SPAWN_RING_INNER,
        }
    }

    fn outer(archetype: AgentArchetype, bearing: f32) -> Self {
        Self {
            archetype,
            bearing,
            radius: SPAWN_RING_OUTER,
        }
    }
}

/// Build the spawn list for a given scenario.
pub fn build_layout(scenario: ScenarioId) -> Vec<SpawnEntry> {
    match scenario {
        ScenarioId::Skirmish => build_skirmish(),
        ScenarioId::Ambush => build_ambush(),
        ScenarioId::Horde => build_horde(),
    }
}

/// Skirmish: one skeleton already inside its detection radius.
fn build_skirmish() -> Vec<SpawnEntry> {
    vec![SpawnEntry::inner(AgentArchetype::Skeleton, 0.0)]
}

/// Ambush: slime and skeleton close in, a brute waits on the outer ring.
fn build_ambush() -> Vec<SpawnEntry> {
    vec![
        SpawnEntry::inner(AgentArchetype::Slime, 0.0),
        SpawnEntry::inner(AgentArchetype::Skeleton, 2.0 * FRAC_PI_3),
        SpawnEntry::outer(AgentArchetype::Brute, 4.0 * FRAC_PI_3),
    ]
}

/// Horde: three slimes inside, two skeletons and a brute outside, interleaved.
fn build_horde() -> Vec<SpawnEntry> {
    vec![
        SpawnEntry::inner(AgentArchetype::Slime, 0.0),
        SpawnEntry::inner(AgentArchetype::Slime, 2.0 * FRAC_PI_3),
        SpawnEntry::inner(AgentArchetype::Slime, 4.0 * FRAC_PI_3),
        SpawnEntry::outer(AgentArchetype::Skeleton, FRAC_PI_3),
        SpawnEntry::outer(AgentArchetype::Skeleton, PI),
        SpawnEntry::outer(AgentArchetype::Brute, 5.0 * FRAC_PI_3),
    ]
}
