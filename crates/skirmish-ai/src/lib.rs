//! Behaviour controllers for SKIRMISH.
//!
//! Implements the enemy agent state machine (Idle, Chasing, Attacking), the
//! player's kinematic mover, and archetype-driven agent profiles. Everything
//! here operates on plain data; hosts drive it through `tick` calls and
//! supply the sensing, combat, and animation collaborators.

pub mod collab;
pub mod controller;
pub mod fsm;
pub mod player;
pub mod profiles;
pub mod sensing;

pub use skirmish_core as core;

pub use collab::{AnimationSink, CombatEffect};
pub use controller::{AgentBehaviourController, TrackedTarget};
pub use player::KinematicMoveController;
pub use sensing::{Sighting, SightingSnapshot, TargetFilter, TargetSensor};
