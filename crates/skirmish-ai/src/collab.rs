//! Collaborators a controller drives but does not implement.

use skirmish_core::events::AgentEvent;

/// The opaque combat effect behind an attack.
pub trait CombatEffect {
    /// Deliver one attack. The controller observes no result.
    fn attack(&mut self);
}

/// Receives state and facing changes for the visual layer.
pub trait AnimationSink {
    fn emit(&mut self, event: AgentEvent);
}

impl AnimationSink for Vec<AgentEvent> {
    fn emit(&mut self, event: AgentEvent) {
        self.push(event);
    }
}
