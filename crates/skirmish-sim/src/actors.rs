//! Controller components stored on hecs entities, and the combat
//! collaborator they share.

use skirmish_ai::{AgentBehaviourController, CombatEffect, KinematicMoveController, SightingSnapshot};
use skirmish_core::events::AgentEvent;

/// Counts attacks delivered since the combat system last drained it.
#[derive(Debug, Clone, Default)]
pub struct HitQueue {
    pending: u32,
}

impl HitQueue {
    /// Take the pending attack count, leaving zero behind.
    pub fn drain(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

impl CombatEffect for HitQueue {
    fn attack(&mut self) {
        self.pending += 1;
    }
}

/// An enemy's behaviour controller as stored in the world.
pub type AgentBrain = AgentBehaviourController<SightingSnapshot, HitQueue, Vec<AgentEvent>>;

/// The player's mover as stored in the world.
pub type PlayerMover = KinematicMoveController<HitQueue, Vec<AgentEvent>>;

/// Held input applied to the player each active tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub horizontal: f32,
    pub vertical: f32,
    /// Attack edge waiting for the next active tick.
    pub attack_pressed: bool,
}
