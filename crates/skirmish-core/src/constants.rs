//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Maximum time scale accepted by `SetTimeScale`.
pub const MAX_TIME_SCALE: f32 = 4.0;

// --- Agent defaults ---

/// Agent movement speed (units/s).
pub const AGENT_SPEED: f32 = 2.0;

/// Distance at which an agent may start an attack.
pub const AGENT_ATTACK_RANGE: f32 = 2.0;

/// Minimum seconds between two attack starts.
pub const AGENT_ATTACK_COOLDOWN: f32 = 2.0;

/// Sensing radius around the detection origin.
pub const AGENT_DETECTION_RANGE: f32 = 5.0;

/// Length of the uninterruptible attack animation (seconds).
pub const AGENT_ATTACK_ANIMATION: f32 = 0.8;

// --- Player defaults ---

/// Player movement speed at full axis deflection (units/s).
pub const PLAYER_SPEED: f32 = 5.0;

/// Player hit points.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Reach of a player swing.
pub const PLAYER_ATTACK_REACH: f32 = 1.5;

/// Damage dealt by one player swing.
pub const PLAYER_ATTACK_DAMAGE: f32 = 25.0;

// --- Encounter layout ---

/// Radius of the inner spawn ring around the player.
pub const SPAWN_RING_INNER: f32 = 4.0;

/// Radius of the outer spawn ring around the player.
pub const SPAWN_RING_OUTER: f32 = 7.0;

/// Maximum angular jitter applied to a spawn bearing (radians).
pub const SPAWN_BEARING_JITTER: f32 = 0.35;
