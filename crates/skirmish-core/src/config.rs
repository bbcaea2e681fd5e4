//! Agent and player tuning, validated before any controller is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};

/// Immutable tuning for one AI agent.
///
/// Missing JSON fields fall back to the defaults in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Chase speed (units/s).
    pub speed: f32,
    /// Distance at which an attack may start.
    pub attack_range: f32,
    /// Seconds between two attack starts.
    pub attack_cooldown: f32,
    /// Sensing radius around the detection origin.
    pub detection_range: f32,
    /// Length of the uninterruptible attack animation (seconds).
    pub attack_animation_duration: f32,
    /// Offset from the agent position to its detection origin.
    pub detection_offset: Vec2,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: AGENT_SPEED,
            attack_range: AGENT_ATTACK_RANGE,
            attack_cooldown: AGENT_ATTACK_COOLDOWN,
            detection_range: AGENT_DETECTION_RANGE,
            attack_animation_duration: AGENT_ATTACK_ANIMATION,
            detection_offset: Vec2::ZERO,
        }
    }
}

impl AgentConfig {
    /// Check every construction precondition.
    pub fn validate(&self) -> ConfigResult<()> {
        positive("speed", self.speed)?;
        positive("attack_range", self.attack_range)?;
        positive("attack_cooldown", self.attack_cooldown)?;
        positive("detection_range", self.detection_range)?;
        positive("attack_animation_duration", self.attack_animation_duration)?;
        if !self.detection_offset.is_finite() {
            return Err(ConfigError::NonPositive {
                field: "detection_offset",
                value: f32::NAN,
            });
        }
        if self.attack_range > self.detection_range {
            return Err(ConfigError::AttackRangeExceedsDetection {
                attack_range: self.attack_range,
                detection_range: self.detection_range,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Tuning for the player mover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Speed at full axis deflection (units/s).
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        positive("speed", self.speed)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
