//! Player kinematic mover.
//!
//! A stateless mapping from per-tick input axes to velocity, plus facing.
//! Unlike the agent controller there is no cooldown or animation gate on
//! attacks: every attack edge goes straight to the combat collaborator.

use glam::Vec2;
use tracing::debug;

use skirmish_core::config::PlayerConfig;
use skirmish_core::enums::Facing;
use skirmish_core::error::ConfigResult;
use skirmish_core::events::AgentEvent;

use crate::collab::{AnimationSink, CombatEffect};

#[derive(Debug)]
pub struct KinematicMoveController<C, V> {
    config: PlayerConfig,
    facing: Facing,
    velocity: Vec2,
    locomotion: Vec2,
    combat: C,
    visuals: V,
}

impl<C: CombatEffect, V: AnimationSink> KinematicMoveController<C, V> {
    pub fn new(config: PlayerConfig, combat: C, visuals: V) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            facing: Facing::Right,
            velocity: Vec2::ZERO,
            locomotion: Vec2::ZERO,
            combat,
            visuals,
        })
    }

    /// Map input axes to velocity. Axes are clamped to [-1, 1]; non-finite input reads as 0.
    pub fn tick(&mut self, horizontal: f32, vertical: f32) -> Vec2 {
        let h = clamp_axis(horizontal);
        let v = clamp_axis(vertical);

        if self.facing.disagrees_with(h) {
            self.facing = self.facing.flipped();
            debug!(facing = ?self.facing, "player flipped");
            self.visuals.emit(AgentEvent::FacingChanged {
                facing: self.facing,
            });
        }

        self.locomotion = Vec2::new(h.abs(), v.abs());
        self.velocity = Vec2::new(h, v) * self.config.speed;
        self.velocity
    }

    /// Attack input edge from the input layer.
    pub fn on_attack_triggered(&mut self) {
        self.combat.attack();
    }
}

impl<C, V> KinematicMoveController<C, V> {
    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Animation blend inputs from the last tick: `(|horizontal|, |vertical|)`.
    pub fn locomotion(&self) -> (f32, f32) {
        (self.locomotion.x, self.locomotion.y)
    }

    pub fn combat(&self) -> &C {
        &self.combat
    }

    pub fn combat_mut(&mut self) -> &mut C {
        &mut self.combat
    }

    pub fn visuals_mut(&mut self) -> &mut V {
        &mut self.visuals
    }
}

fn clamp_axis(axis: f32) -> f32 {
    if axis.is_finite() {
        axis.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
