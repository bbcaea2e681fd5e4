//! Enemy agent behaviour controller.
//!
//! One controller per agent. The host calls [`AgentBehaviourController::tick`]
//! once per simulation step, reads back [`velocity`](AgentBehaviourController::velocity)
//! for its integrator, and calls
//! [`perform_attack_damage`](AgentBehaviourController::perform_attack_damage)
//! at the animation frame where the hit should land.
//!
//! Timing rules:
//! - While an attack animation plays the agent neither senses nor moves, and
//!   every transition except into `Attacking` is suppressed.
//! - The cooldown recovers every tick, animation or not.
//! - Starting an attack never deals damage by itself.

use glam::Vec2;
use tracing::{debug, trace, warn};

use skirmish_core::config::AgentConfig;
use skirmish_core::enums::{AgentState, Facing, Faction};
use skirmish_core::error::ConfigResult;
use skirmish_core::events::AgentEvent;
use skirmish_core::types::TargetId;

use crate::collab::{AnimationSink, CombatEffect};
use crate::fsm::{BehaviourMachine, Stimulus, TransitionOutcome};
use crate::sensing::{Sighting, TargetFilter, TargetSensor};

/// Weak handle to the current target plus where it was last seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedTarget {
    pub id: TargetId,
    pub last_position: Vec2,
}

/// Detection, cooldown, attack timing and the behaviour state machine for one agent.
#[derive(Debug)]
pub struct AgentBehaviourController<S, C, V> {
    config: AgentConfig,
    filter: TargetFilter,
    position: Vec2,
    facing: Facing,
    velocity: Vec2,
    machine: BehaviourMachine,
    attack_cooldown_timer: f32,
    attack_animation_timer: f32,
    /// Set once the current attack has delivered its hit.
    damage_dealt: bool,
    tracked_target: Option<TrackedTarget>,
    sensor: S,
    combat: C,
    visuals: V,
}

impl<S, C, V> AgentBehaviourController<S, C, V>
where
    S: TargetSensor,
    C: CombatEffect,
    V: AnimationSink,
{
    /// Build an idle agent at `position`. Fails if `config` is invalid.
    ///
    /// The agent targets the player faction unless [`with_filter`](Self::with_filter)
    /// says otherwise.
    pub fn new(
        config: AgentConfig,
        position: Vec2,
        sensor: S,
        combat: C,
        visuals: V,
    ) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            filter: Faction::Player.into(),
            position,
            facing: Facing::Right,
            velocity: Vec2::ZERO,
            machine: BehaviourMachine::new(),
            attack_cooldown_timer: 0.0,
            attack_animation_timer: 0.0,
            damage_dealt: false,
            tracked_target: None,
            sensor,
            combat,
            visuals,
        })
    }

    /// Replace the target-eligibility filter.
    pub fn with_filter(mut self, filter: TargetFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Spawn facing. Emits nothing.
    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// Advance the agent by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "ignoring agent tick with non-positive dt");
            return;
        }

        if self.machine.is_latched() {
            self.attack_animation_timer = (self.attack_animation_timer - dt).max(0.0);
            if self.attack_animation_timer <= 0.0 {
                self.end_attack_animation();
            }
        } else {
            self.sense_and_decide();
        }

        self.attack_cooldown_timer = (self.attack_cooldown_timer - dt).max(0.0);

        if self.machine.state() == AgentState::Chasing && !self.machine.is_latched() {
            self.chase();
        } else {
            self.velocity = Vec2::ZERO;
        }
    }

    /// Deliver the current attack's hit through the combat collaborator.
    ///
    /// Only the first call during an active attack does anything; calls
    /// outside an attack, or repeated calls within one, return `false`.
    pub fn perform_attack_damage(&mut self) -> bool {
        if !self.machine.is_latched()
            || self.machine.state() != AgentState::Attacking
            || self.damage_dealt
        {
            trace!("ignoring stale attack damage trigger");
            return false;
        }
        self.damage_dealt = true;
        self.combat.attack();
        debug!(target_id = ?self.tracked_target.map(|t| t.id), "attack damage delivered");
        true
    }

    fn sense_and_decide(&mut self) {
        let origin = self.position + self.config.detection_offset;
        let sightings =
            self.sensor
                .find_targets_within(origin, self.config.detection_range, self.filter);

        let Some(target) = nearest(self.position, &sightings) else {
            if self.tracked_target.take().is_some() {
                self.velocity = Vec2::ZERO;
                self.request(Stimulus::TargetLost);
            }
            return;
        };

        self.tracked_target = Some(TrackedTarget {
            id: target.id,
            last_position: target.position,
        });

        let distance = self.position.distance(target.position);
        if distance <= self.config.attack_range {
            if self.attack_cooldown_timer <= 0.0 && !self.machine.is_latched() {
                self.start_attack();
            } else {
                self.velocity = Vec2::ZERO;
                self.request(Stimulus::HoldPosition);
            }
        } else if distance <= self.config.detection_range {
            self.request(Stimulus::TargetInPursuit);
        }
        // Beyond detection range only happens with a detection offset: keep tracking, no decision.
    }

    fn start_attack(&mut self) {
        self.attack_cooldown_timer = self.config.attack_cooldown;
        self.attack_animation_timer = self.config.attack_animation_duration;
        self.damage_dealt = false;
        self.machine.latch();
        self.request(Stimulus::AttackCommitted);
        debug!(target_id = ?self.tracked_target.map(|t| t.id), "attack started");
    }

    fn end_attack_animation(&mut self) {
        self.machine.release();
        self.attack_animation_timer = 0.0;

        let resolved = self
            .tracked_target
            .and_then(|t| self.sensor.locate(t.id).map(|p| (t.id, p)));

        let Some((id, position)) = resolved else {
            self.tracked_target = None;
            self.request(Stimulus::TargetLost);
            return;
        };

        self.tracked_target = Some(TrackedTarget {
            id,
            last_position: position,
        });

        let distance = self.position.distance(position);
        if distance <= self.config.attack_range {
            self.velocity = Vec2::ZERO;
            self.request(Stimulus::HoldPosition);
        } else if distance <= self.config.detection_range {
            self.request(Stimulus::TargetInPursuit);
        } else {
            self.tracked_target = None;
            self.request(Stimulus::TargetLost);
        }
    }

    fn chase(&mut self) {
        let Some(target) = self.tracked_target else {
            self.velocity = Vec2::ZERO;
            return;
        };

        let offset = target.last_position - self.position;
        if self.facing.disagrees_with(offset.x) {
            self.flip();
        }
        self.velocity = offset.normalize_or_zero() * self.config.speed;
    }

    fn flip(&mut self) {
        self.facing = self.facing.flipped();
        debug!(facing = ?self.facing, "agent flipped");
        self.visuals.emit(AgentEvent::FacingChanged {
            facing: self.facing,
        });
    }

    fn request(&mut self, stimulus: Stimulus) {
        match self.machine.request(stimulus) {
            TransitionOutcome::Changed(t) => {
                debug!(from = ?t.from, to = ?t.to, "agent state changed");
                self.visuals.emit(AgentEvent::StateChanged {
                    from: t.from,
                    to: t.to,
                });
            }
            TransitionOutcome::Suppressed => {
                trace!(?stimulus, "transition suppressed during attack animation");
            }
            TransitionOutcome::Unchanged => {}
        }
    }
}

impl<S, C, V> AgentBehaviourController<S, C, V> {
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> AgentState {
        self.machine.state()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Velocity requested for this tick.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Write back the position after the host has integrated velocity.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn in_attack_animation(&self) -> bool {
        self.machine.is_latched()
    }

    pub fn attack_cooldown_remaining(&self) -> f32 {
        self.attack_cooldown_timer
    }

    pub fn attack_animation_remaining(&self) -> f32 {
        self.attack_animation_timer
    }

    /// Fraction of the current attack animation already played; 0 when idle.
    pub fn attack_progress(&self) -> f32 {
        if !self.machine.is_latched() {
            return 0.0;
        }
        let remaining = self.attack_animation_timer / self.config.attack_animation_duration;
        (1.0 - remaining).clamp(0.0, 1.0)
    }

    pub fn tracked_target(&self) -> Option<TrackedTarget> {
        self.tracked_target
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn combat(&self) -> &C {
        &self.combat
    }

    pub fn combat_mut(&mut self) -> &mut C {
        &mut self.combat
    }

    pub fn visuals(&self) -> &V {
        &self.visuals
    }

    pub fn visuals_mut(&mut self) -> &mut V {
        &mut self.visuals
    }
}

/// Nearest sighting to `from`, ties broken by the lower id.
fn nearest(from: Vec2, sightings: &[Sighting]) -> Option<Sighting> {
    sightings.iter().copied().min_by(|a, b| {
        a.position
            .distance_squared(from)
            .total_cmp(&b.position.distance_squared(from))
            .then(a.id.cmp(&b.id))
    })
}
