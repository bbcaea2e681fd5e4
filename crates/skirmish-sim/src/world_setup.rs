//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player and enemy entities with appropriate component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_ai::profiles::get_profile;
use skirmish_ai::SightingSnapshot;
use skirmish_core::components::*;
use skirmish_core::config::PlayerConfig;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::types::{Position, TargetId, Velocity};

use crate::actors::{AgentBrain, HitQueue, PlayerMover};
use crate::error::SimResult;
use crate::scenario::build_layout;

/// Set up an encounter: the player at the origin and the scenario's enemies
/// around it. Returns the number of enemies spawned.
pub fn setup_encounter(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    scenario: ScenarioId,
) -> SimResult<u32> {
    spawn_player(world, next_id, Vec2::ZERO)?;

    let mut spawned = 0;
    for entry in build_layout(scenario) {
        let jitter: f32 = rng.gen_range(-SPAWN_BEARING_JITTER..=SPAWN_BEARING_JITTER);
        let bearing = entry.bearing + jitter;
        let position = Vec2::from_angle(bearing) * entry.radius;
        spawn_agent(world, next_id, entry.archetype, position)?;
        spawned += 1;
    }
    Ok(spawned)
}

/// Spawn the player's avatar.
pub fn spawn_player(world: &mut World, next_id: &mut u64, position: Vec2) -> SimResult<TargetId> {
    let mover = PlayerMover::new(PlayerConfig::default(), HitQueue::default(), Vec::new())?;
    let id = allocate_id(next_id);

    world.spawn((
        Player,
        Tag(id),
        Targetable {
            faction: Faction::Player,
        },
        Position(position),
        Velocity::default(),
        Health::full(PLAYER_MAX_HEALTH),
        AttackStats {
            damage: PLAYER_ATTACK_DAMAGE,
            reach: PLAYER_ATTACK_REACH,
            damage_cue: 0.0,
        },
        mover,
    ));
    Ok(id)
}

/// Spawn a single enemy of the given archetype. The profile is validated
/// before anything is added to the world.
pub fn spawn_agent(
    world: &mut World,
    next_id: &mut u64,
    archetype: AgentArchetype,
    position: Vec2,
) -> SimResult<TargetId> {
    let profile = get_profile(archetype);
    profile.validate()?;

    let facing = if position.x > 0.0 {
        Facing::Left
    } else {
        Facing::Right
    };
    let brain = AgentBrain::new(
        profile.config,
        position,
        SightingSnapshot::default(),
        HitQueue::default(),
        Vec::new(),
    )?
    .with_facing(facing);
    let id = allocate_id(next_id);

    world.spawn((
        Enemy { archetype },
        Tag(id),
        Targetable {
            faction: Faction::Enemy,
        },
        Position(position),
        Velocity::default(),
        Health::full(profile.max_health),
        AttackStats {
            damage: profile.attack_damage,
            reach: profile.config.attack_range,
            damage_cue: profile.damage_cue,
        },
        brain,
    ));
    Ok(id)
}

fn allocate_id(next_id: &mut u64) -> TargetId {
    let id = TargetId(*next_id);
    *next_id += 1;
    id
}
