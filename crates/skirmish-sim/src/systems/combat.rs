//! Combat system: turns delivered attacks into hits on the nearest hostile.
//!
//! Agents deliver their hit once the attack animation reaches the archetype's
//! damage cue; the player's swing lands on the tick it was triggered. Each
//! delivered attack strikes the nearest living hostile within reach, or whiffs.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::{AttackStats, Health, Player, Tag, Targetable};
use skirmish_core::enums::Faction;
use skirmish_core::events::EncounterEvent;
use skirmish_core::state::ScoreView;
use skirmish_core::types::{Position, TargetId};

use crate::actors::{AgentBrain, PlayerMover};

/// One delivered attack awaiting resolution.
struct Swing {
    attacker: TargetId,
    faction: Faction,
    origin: Vec2,
    stats: AttackStats,
}

/// A living entity that can be struck.
struct Victim {
    entity: Entity,
    id: TargetId,
    faction: Faction,
    position: Vec2,
    is_player: bool,
}

/// Run the combat system for one tick.
pub fn run(world: &mut World, events: &mut Vec<EncounterEvent>, score: &mut ScoreView) {
    trigger_damage_cues(world);
    let swings = collect_swings(world);
    if swings.is_empty() {
        return;
    }

    let victims: Vec<Victim> = world
        .query::<(&Tag, &Targetable, &Position, &Health, Option<&Player>)>()
        .iter()
        .filter(|(_, (_, _, _, health, _))| !health.is_depleted())
        .map(|(entity, (tag, targetable, pos, _, player))| Victim {
            entity,
            id: tag.0,
            faction: targetable.faction,
            position: pos.0,
            is_player: player.is_some(),
        })
        .collect();

    for swing in swings {
        let Some(victim) = nearest_hostile(world, &swing, &victims) else {
            debug!(attacker = ?swing.attacker, "attack whiffed");
            events.push(EncounterEvent::Whiff {
                attacker: swing.attacker,
            });
            continue;
        };

        if let Ok(mut health) = world.get::<&mut Health>(victim.entity) {
            health.current = (health.current - swing.stats.damage).max(0.0);
        }
        debug!(
            attacker = ?swing.attacker,
            victim = ?victim.id,
            damage = swing.stats.damage,
            "attack hit"
        );
        events.push(EncounterEvent::Hit {
            attacker: swing.attacker,
            victim: victim.id,
            damage: swing.stats.damage,
        });
        if victim.is_player {
            score.hits_taken += 1;
        }
        if swing.faction == Faction::Player {
            score.hits_landed += 1;
        }
    }
}

/// Fire each agent's damage trigger once its animation passes the cue.
fn trigger_damage_cues(world: &mut World) {
    for (_entity, (brain, stats)) in world.query_mut::<(&mut AgentBrain, &AttackStats)>() {
        if brain.in_attack_animation() && brain.attack_progress() >= stats.damage_cue {
            brain.perform_attack_damage();
        }
    }
}

/// Drain the combat queues of every brain and mover into a swing list,
/// ordered by attacker id.
fn collect_swings(world: &mut World) -> Vec<Swing> {
    let mut swings = Vec::new();

    for (_entity, (tag, targetable, pos, stats, brain)) in world.query_mut::<(
        &Tag,
        &Targetable,
        &Position,
        &AttackStats,
        &mut AgentBrain,
    )>() {
        for _ in 0..brain.combat_mut().drain() {
            swings.push(Swing {
                attacker: tag.0,
                faction: targetable.faction,
                origin: pos.0,
                stats: *stats,
            });
        }
    }

    for (_entity, (tag, targetable, pos, stats, mover)) in world.query_mut::<(
        &Tag,
        &Targetable,
        &Position,
        &AttackStats,
        &mut PlayerMover,
    )>() {
        for _ in 0..mover.combat_mut().drain() {
            swings.push(Swing {
                attacker: tag.0,
                faction: targetable.faction,
                origin: pos.0,
                stats: *stats,
            });
        }
    }

    swings.sort_by_key(|s| s.attacker);
    swings
}

/// Nearest hostile still standing within the swing's reach, ties by id.
fn nearest_hostile<'a>(world: &World, swing: &Swing, victims: &'a [Victim]) -> Option<&'a Victim> {
    victims
        .iter()
        .filter(|v| hostile(swing.faction, v.faction))
        .filter(|v| v.position.distance(swing.origin) <= swing.stats.reach)
        .filter(|v| {
            world
                .get::<&Health>(v.entity)
                .map(|h| !h.is_depleted())
                .unwrap_or(false)
        })
        .min_by(|a, b| {
            a.position
                .distance_squared(swing.origin)
                .total_cmp(&b.position.distance_squared(swing.origin))
                .then(a.id.cmp(&b.id))
        })
}

fn hostile(attacker: Faction, victim: Faction) -> bool {
    matches!(
        (attacker, victim),
        (Faction::Player, Faction::Enemy) | (Faction::Enemy, Faction::Player)
    )
}
