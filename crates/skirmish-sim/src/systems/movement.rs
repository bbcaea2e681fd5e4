//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.

use hecs::World;

use skirmish_core::types::{Position, Velocity};

use crate::actors::AgentBrain;

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
    for (_entity, (pos, brain)) in world.query_mut::<(&Position, &mut AgentBrain)>() {
        brain.set_position(pos.0);
    }
}
