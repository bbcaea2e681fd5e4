//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Behaviour state of an AI agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// Standing still: nothing tracked, or waiting out a cooldown in range.
    #[default]
    Idle,
    /// Moving toward a tracked target.
    Chasing,
    /// Playing an uninterruptible attack animation.
    Attacking,
}

/// Horizontal facing of an entity, independent of its velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sign of the facing: -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// The opposite facing.
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// True when a horizontal offset `dx` points away from this facing.
    /// Zero never disagrees.
    pub fn disagrees_with(self, dx: f32) -> bool {
        match self {
            Facing::Left => dx > 0.0,
            Facing::Right => dx < 0.0,
        }
    }
}

/// Allegiance used for target eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
    Neutral,
}

impl Faction {
    fn bit(self) -> u8 {
        match self {
            Faction::Player => 0b001,
            Faction::Enemy => 0b010,
            Faction::Neutral => 0b100,
        }
    }
}

/// Set of factions a sensing query accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionMask(u8);

impl FactionMask {
    pub const NONE: FactionMask = FactionMask(0);
    pub const ALL: FactionMask = FactionMask(0b111);

    pub fn of(factions: &[Faction]) -> Self {
        Self(factions.iter().fold(0, |bits, f| bits | f.bit()))
    }

    pub fn contains(self, faction: Faction) -> bool {
        self.0 & faction.bit() != 0
    }
}

impl From<Faction> for FactionMask {
    fn from(faction: Faction) -> Self {
        Self(faction.bit())
    }
}

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentArchetype {
    /// Slow, short-ranged, frequent small hits.
    Slime,
    /// Balanced melee enemy.
    Skeleton,
    /// Heavy hitter with a long wind-up.
    Brute,
}

/// Encounter layout to load on `StartEncounter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// A single skeleton.
    #[default]
    Skirmish,
    /// Three mixed enemies around the player.
    Ambush,
    /// Six enemies in two rings.
    Horde,
}

/// Encounter phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Setup,
    Active,
    Paused,
    /// Every enemy has been defeated.
    Victory,
    /// The player has been defeated.
    Defeat,
}
