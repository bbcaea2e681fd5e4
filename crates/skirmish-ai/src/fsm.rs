//! Agent behaviour finite state machine.
//!
//! An explicit `(state, stimulus) -> state` table plus a latch that models the
//! uninterruptible attack animation. No timers and no geometry live here; the
//! controller decides which stimulus applies and forwards the resulting
//! transitions to its animation sink.

use skirmish_core::enums::AgentState;

/// What the controller observed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stimulus {
    /// The tracked target is gone or out of detection range.
    TargetLost,
    /// Target within attack range but no attack may start (cooldown).
    HoldPosition,
    /// Target inside detection range but outside attack range.
    TargetInPursuit,
    /// An attack was committed.
    AttackCommitted,
}

/// A state change, emitted once per actual change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: AgentState,
    pub to: AgentState,
}

/// Result of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The state changed.
    Changed(Transition),
    /// The request resolved to the current state.
    Unchanged,
    /// The machine is latched and the request did not lead to `Attacking`.
    Suppressed,
}

/// The transition table.
pub fn transition(from: AgentState, stimulus: Stimulus) -> AgentState {
    use AgentState::*;
    use Stimulus::*;

    match (from, stimulus) {
        (Idle, TargetLost) => Idle,
        (Idle, HoldPosition) => Idle,
        (Idle, TargetInPursuit) => Chasing,
        (Idle, AttackCommitted) => Attacking,

        (Chasing, TargetLost) => Idle,
        (Chasing, HoldPosition) => Idle,
        (Chasing, TargetInPursuit) => Chasing,
        (Chasing, AttackCommitted) => Attacking,

        (Attacking, TargetLost) => Idle,
        (Attacking, HoldPosition) => Idle,
        (Attacking, TargetInPursuit) => Chasing,
        (Attacking, AttackCommitted) => Attacking,
    }
}

/// Current state plus the attack-animation latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BehaviourMachine {
    state: AgentState,
    latched: bool,
}

impl BehaviourMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    /// True while an attack animation is playing.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Lock the current behaviour until [`release`](Self::release).
    pub fn latch(&mut self) {
        self.latched = true;
    }

    pub fn release(&mut self) {
        self.latched = false;
    }

    /// Apply a stimulus through the table, honouring the latch.
    pub fn request(&mut self, stimulus: Stimulus) -> TransitionOutcome {
        let to = transition(self.state, stimulus);
        if self.latched && to != AgentState::Attacking {
            return TransitionOutcome::Suppressed;
        }
        if to == self.state {
            return TransitionOutcome::Unchanged;
        }
        let from = self.state;
        self.state = to;
        TransitionOutcome::Changed(Transition { from, to })
    }
}
