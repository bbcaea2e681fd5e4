//! Agent AI system: ticks every enemy controller against the tick's snapshot.

use hecs::World;

use skirmish_ai::SightingSnapshot;
use skirmish_core::types::{Position, Velocity};

use crate::actors::AgentBrain;

/// Sync each brain's position, hand it the shared snapshot, tick it, and copy
/// its requested velocity back for integration.
pub fn run(world: &mut World, snapshot: &SightingSnapshot, dt: f32) {
    for (_entity, (pos, vel, brain)) in
        world.query_mut::<(&Position, &mut Velocity, &mut AgentBrain)>()
    {
        brain.set_position(pos.0);
        *brain.sensor_mut() = snapshot.clone();
        brain.tick(dt);
        vel.0 = brain.velocity();
    }
}
