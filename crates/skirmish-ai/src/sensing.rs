//! Target sensing: the query interface controllers consume, and an
//! immutable snapshot implementation hosts can share across agents.

use std::sync::Arc;

use glam::Vec2;

use skirmish_core::enums::{Faction, FactionMask};
use skirmish_core::types::TargetId;

/// Which factions a sensing query accepts.
pub type TargetFilter = FactionMask;

/// One sensed entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub id: TargetId,
    pub faction: Faction,
    pub position: Vec2,
}

/// World sensing as seen by a controller.
pub trait TargetSensor {
    /// All eligible targets within `radius` (inclusive) of `origin`.
    /// Order is provider-defined; callers must not rely on it.
    fn find_targets_within(&self, origin: Vec2, radius: f32, filter: TargetFilter)
        -> Vec<Sighting>;

    /// Resolve a previously sensed handle, without any range check.
    /// `None` once the target has left the world.
    fn locate(&self, id: TargetId) -> Option<Vec2>;
}

/// Frozen set of sightings for one tick.
///
/// Cloning shares the underlying buffer, so every agent ticked from the same
/// snapshot reads identical world state.
#[derive(Debug, Clone, Default)]
pub struct SightingSnapshot {
    sightings: Arc<[Sighting]>,
}

impl SightingSnapshot {
    pub fn new(sightings: Vec<Sighting>) -> Self {
        Self {
            sightings: sightings.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }
}

impl TargetSensor for SightingSnapshot {
    /// Returns matches nearest-first from `origin`, ties by id.
    fn find_targets_within(
        &self,
        origin: Vec2,
        radius: f32,
        filter: TargetFilter,
    ) -> Vec<Sighting> {
        let radius_sq = radius * radius;
        let mut hits: Vec<Sighting> = self
            .sightings
            .iter()
            .filter(|s| filter.contains(s.faction))
            .filter(|s| s.position.distance_squared(origin) <= radius_sq)
            .copied()
            .collect();
        hits.sort_by(|a, b| {
            a.position
                .distance_squared(origin)
                .total_cmp(&b.position.distance_squared(origin))
                .then(a.id.cmp(&b.id))
        });
        hits
    }

    fn locate(&self, id: TargetId) -> Option<Vec2> {
        self.sightings
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.position)
    }
}
