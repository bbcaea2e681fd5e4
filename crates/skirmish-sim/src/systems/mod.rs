//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and controllers.

pub mod agent_ai;
pub mod cleanup;
pub mod combat;
pub mod feedback;
pub mod movement;
pub mod player_control;
pub mod sensing;
pub mod snapshot;
