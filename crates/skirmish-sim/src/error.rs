//! Error types for the simulation host.

use thiserror::Error;

use skirmish_core::error::ConfigError;

/// Errors surfaced by `SimulationEngine` operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// An archetype profile or controller config failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The encounter already ended in victory or defeat.
    #[error("encounter is over")]
    EncounterOver,
}

/// Result type alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
