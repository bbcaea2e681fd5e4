//! Player control system: applies held input to the player's mover.

use hecs::World;

use skirmish_core::types::Velocity;

use crate::actors::{PlayerInput, PlayerMover};

/// Drive the mover with the held axes and consume any pending attack edge.
pub fn run(world: &mut World, input: &mut PlayerInput) {
    for (_entity, (mover, vel)) in world.query_mut::<(&mut PlayerMover, &mut Velocity)>() {
        vel.0 = mover.tick(input.horizontal, input.vertical);
        if input.attack_pressed {
            mover.on_attack_triggered();
        }
    }
    input.attack_pressed = false;
}
