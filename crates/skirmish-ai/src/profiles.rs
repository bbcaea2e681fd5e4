//! Archetype-specific behavioural profiles.
//!
//! Consolidates per-archetype tuning for agent controllers and the host's
//! combat resolution.

use glam::Vec2;

use skirmish_core::config::AgentConfig;
use skirmish_core::enums::AgentArchetype;
use skirmish_core::error::{ConfigError, ConfigResult};

/// Behavioural profile for an agent archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeProfile {
    /// Controller tuning.
    pub config: AgentConfig,
    /// Hit points at spawn.
    pub max_health: f32,
    /// Damage per landed hit.
    pub attack_damage: f32,
    /// Fraction of the attack animation at which the hit lands, in (0, 1).
    /// The animation ends when it reaches 1, so a cue of 1 would never fire.
    pub damage_cue: f32,
}

impl ArchetypeProfile {
    pub fn validate(&self) -> ConfigResult<()> {
        self.config.validate()?;
        if !(self.damage_cue > 0.0 && self.damage_cue < 1.0) {
            return Err(ConfigError::InvalidCueFraction(self.damage_cue));
        }
        for (field, value) in [
            ("max_health", self.max_health),
            ("attack_damage", self.attack_damage),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Get the behavioural profile for a given archetype.
pub fn get_profile(archetype: AgentArchetype) -> ArchetypeProfile {
    match archetype {
        AgentArchetype::Slime => ArchetypeProfile {
            config: AgentConfig {
                speed: 1.2,
                attack_range: 1.0,
                attack_cooldown: 1.2,
                detection_range: 4.5,
                attack_animation_duration: 0.5,
                detection_offset: Vec2::ZERO,
            },
            max_health: 30.0,
            attack_damage: 5.0,
            damage_cue: 0.6,
        },
        AgentArchetype::Skeleton => ArchetypeProfile {
            config: AgentConfig::default(),
            max_health: 50.0,
            attack_damage: 10.0,
            damage_cue: 0.5,
        },
        AgentArchetype::Brute => ArchetypeProfile {
            config: AgentConfig {
                speed: 1.6,
                attack_range: 2.5,
                attack_cooldown: 3.0,
                detection_range: 6.0,
                attack_animation_duration: 1.4,
                // Eyes sit above the sprite centre.
                detection_offset: Vec2::new(0.0, 0.5),
            },
            max_health: 120.0,
            attack_damage: 25.0,
            damage_cue: 0.7,
        },
    }
}
