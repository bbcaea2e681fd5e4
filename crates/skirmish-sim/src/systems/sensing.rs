//! Sensing system: freezes every targetable entity into one shared snapshot.

use hecs::World;

use skirmish_ai::{Sighting, SightingSnapshot};
use skirmish_core::components::{Tag, Targetable};
use skirmish_core::types::Position;

/// Collect all targetable entities, ordered by id.
pub fn run(world: &World) -> SightingSnapshot {
    let mut sightings: Vec<Sighting> = world
        .query::<(&Tag, &Targetable, &Position)>()
        .iter()
        .map(|(_, (tag, targetable, pos))| Sighting {
            id: tag.0,
            faction: targetable.faction,
            position: pos.0,
        })
        .collect();
    sightings.sort_by_key(|s| s.id);
    SightingSnapshot::new(sightings)
}
