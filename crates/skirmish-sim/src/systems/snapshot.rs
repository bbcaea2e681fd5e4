//! Snapshot system: queries the ECS world and builds a complete EncounterSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::enums::*;
use skirmish_core::events::EncounterEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime, Velocity};

use crate::actors::{AgentBrain, PlayerMover};

/// Build a complete EncounterSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: EncounterPhase,
    scenario: ScenarioId,
    events: Vec<EncounterEvent>,
    score: &ScoreView,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        scenario,
        player: build_player(world),
        agents: build_agents(world),
        events,
        score: score.clone(),
    }
}

/// Build the PlayerView, if the player is still in the world.
fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Tag, &Position, &Velocity, &Health, &PlayerMover)>()
        .iter()
        .next()
        .map(|(_, (tag, pos, vel, health, mover))| PlayerView {
            id: tag.0,
            position: *pos,
            velocity: *vel,
            facing: mover.facing(),
            locomotion: mover.locomotion(),
            health: health.current,
        })
}

/// Build AgentView list from all enemies, ordered by id.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Tag, &Enemy, &Position, &Velocity, &Health, &AgentBrain)>()
        .iter()
        .map(|(_, (tag, enemy, pos, vel, health, brain))| AgentView {
            id: tag.0,
            archetype: enemy.archetype,
            position: *pos,
            velocity: *vel,
            facing: brain.facing(),
            state: brain.state(),
            in_attack_animation: brain.in_attack_animation(),
            cooldown_remaining: brain.attack_cooldown_remaining(),
            tracked_target: brain.tracked_target().map(|t| t.id),
            health: health.current,
        })
        .collect();

    agents.sort_by_key(|a| a.id);
    agents
}
