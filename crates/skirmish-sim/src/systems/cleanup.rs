//! Cleanup system: removes entities whose health ran out.

use hecs::{Entity, World};
use tracing::info;

use skirmish_core::components::{Enemy, Health, Tag};
use skirmish_core::events::EncounterEvent;
use skirmish_core::state::ScoreView;
use skirmish_core::types::TargetId;

/// Despawn defeated entities, emitting one `Defeated` event each.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<EncounterEvent>,
    score: &mut ScoreView,
) {
    despawn_buffer.clear();

    let mut defeated: Vec<(TargetId, Entity, bool)> = world
        .query_mut::<(&Tag, &Health, Option<&Enemy>)>()
        .into_iter()
        .filter(|(_, (_, health, _))| health.is_depleted())
        .map(|(entity, (tag, _, enemy))| (tag.0, entity, enemy.is_some()))
        .collect();
    defeated.sort_by_key(|(id, _, _)| *id);

    for (id, entity, is_enemy) in defeated {
        info!(entity = ?id, "entity defeated");
        events.push(EncounterEvent::Defeated { entity: id });
        if is_enemy {
            score.enemies_defeated += 1;
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
