//! Headless encounter simulation for SKIRMISH.
//!
//! Owns the hecs ECS world, drives the agent and player controllers at a
//! fixed tick rate, stands in for every collaborator they need (sensing,
//! combat, animation timing, physics integration), and produces
//! `EncounterSnapshot`s for the presentation layer.

pub mod actors;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use skirmish_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
