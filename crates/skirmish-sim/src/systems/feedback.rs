//! Feedback system: forwards controller animation events to the encounter
//! event stream, tagged with their source.

use hecs::World;

use skirmish_core::components::Tag;
use skirmish_core::events::{AgentEvent, EncounterEvent};
use skirmish_core::types::TargetId;

use crate::actors::{AgentBrain, PlayerMover};

/// Drain every controller's visual events, player first, agents by id.
pub fn run(world: &mut World, events: &mut Vec<EncounterEvent>) {
    let mut tagged: Vec<(TargetId, AgentEvent)> = Vec::new();
    for (_entity, (tag, mover)) in world.query_mut::<(&Tag, &mut PlayerMover)>() {
        tagged.extend(mover.visuals_mut().drain(..).map(|event| (tag.0, event)));
    }
    let player_count = tagged.len();

    for (_entity, (tag, brain)) in world.query_mut::<(&Tag, &mut AgentBrain)>() {
        tagged.extend(brain.visuals_mut().drain(..).map(|event| (tag.0, event)));
    }
    // Stable sort keeps each source's own emission order.
    tagged[player_count..].sort_by_key(|(source, _)| *source);

    events.extend(
        tagged
            .into_iter()
            .map(|(source, event)| EncounterEvent::Visual { source, event }),
    );
}
