//! Error types for configuration and construction.

use thiserror::Error;

/// Rejected agent or player configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter that must be strictly positive and finite was not.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Value supplied
        value: f32,
    },

    /// The attack could never be reached from inside the sensing radius.
    #[error("attack range {attack_range} exceeds detection range {detection_range}")]
    AttackRangeExceedsDetection {
        /// Configured attack range
        attack_range: f32,
        /// Configured detection range
        detection_range: f32,
    },

    /// A damage cue outside (0, 1).
    #[error("damage cue must lie in (0, 1), got {0}")]
    InvalidCueFraction(f32),

    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
