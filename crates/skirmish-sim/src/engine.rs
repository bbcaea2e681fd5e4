//! Simulation engine: the host every controller runs inside.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `EncounterSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Enemy, Player, Tag};
use skirmish_core::constants::{DT, MAX_TIME_SCALE};
use skirmish_core::enums::{AgentArchetype, EncounterPhase, ScenarioId};
use skirmish_core::events::EncounterEvent;
use skirmish_core::state::{EncounterSnapshot, ScoreView};
use skirmish_core::types::{SimTime, TargetId};

use crate::actors::PlayerInput;
use crate::error::{SimError, SimResult};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
    /// Scenario loaded by `StartEncounter` unless another is selected first.
    pub scenario: ScenarioId,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            scenario: ScenarioId::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: EncounterPhase,
    scenario: ScenarioId,
    time_scale: f32,
    rng: ChaCha8Rng,
    next_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    input: PlayerInput,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<EncounterEvent>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: EncounterPhase::default(),
            scenario: config.scenario,
            time_scale: sanitize_time_scale(config.time_scale),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_id: 1,
            command_queue: VecDeque::new(),
            input: PlayerInput::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreView::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            let dt = DT * self.time_scale;
            if dt > 0.0 {
                self.run_systems(dt);
                self.time.advance(dt);
                self.check_outcome();
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.scenario,
            events,
            &self.score,
        )
    }

    /// Spawn one extra enemy at `position`. Rejected once the encounter is over.
    pub fn spawn_agent(
        &mut self,
        archetype: AgentArchetype,
        position: Vec2,
    ) -> SimResult<TargetId> {
        if self.is_over() {
            return Err(SimError::EncounterOver);
        }
        let id = world_setup::spawn_agent(&mut self.world, &mut self.next_id, archetype, position)?;
        self.score.enemies_total += 1;
        Ok(id)
    }

    /// Get the current encounter phase.
    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    /// Get the selected scenario.
    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get the running score.
    pub fn score(&self) -> &ScoreView {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Id of the player's avatar, if it is still alive.
    pub fn player_id(&self) -> Option<TargetId> {
        self.world
            .query::<(&Tag, &Player)>()
            .iter()
            .next()
            .map(|(_, (tag, _))| tag.0)
    }

    fn is_over(&self) -> bool {
        matches!(self.phase, EncounterPhase::Victory | EncounterPhase::Defeat)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectScenario { scenario } => {
                if self.phase == EncounterPhase::Setup {
                    self.scenario = scenario;
                } else {
                    warn!(?scenario, phase = ?self.phase, "scenario can only change during setup");
                }
            }
            PlayerCommand::StartEncounter => {
                if self.phase == EncounterPhase::Setup {
                    self.start_encounter();
                } else {
                    warn!(phase = ?self.phase, "encounter already started");
                }
            }
            PlayerCommand::Move {
                horizontal,
                vertical,
            } => {
                self.input.horizontal = horizontal;
                self.input.vertical = vertical;
            }
            PlayerCommand::Attack => {
                if self.phase == EncounterPhase::Active {
                    self.input.attack_pressed = true;
                } else {
                    warn!(phase = ?self.phase, "attack ignored outside an active encounter");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_nan() {
                    warn!("ignoring NaN time scale");
                } else {
                    self.time_scale = sanitize_time_scale(scale);
                }
            }
        }
    }

    fn start_encounter(&mut self) {
        match world_setup::setup_encounter(
            &mut self.world,
            &mut self.rng,
            &mut self.next_id,
            self.scenario,
        ) {
            Ok(spawned) => {
                self.score.enemies_total += spawned;
                self.phase = EncounterPhase::Active;
                self.time = SimTime::default();
                info!(scenario = ?self.scenario, enemies = spawned, "encounter started");
            }
            Err(err) => warn!(%err, "encounter setup failed"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player input
        systems::player_control::run(&mut self.world, &mut self.input);
        // 2. Freeze sensing for the tick
        let snapshot = systems::sensing::run(&self.world);
        // 3. Agent behaviour
        systems::agent_ai::run(&mut self.world, &snapshot, dt);
        // 4. Combat (damage cues, hit resolution)
        systems::combat::run(&mut self.world, &mut self.events, &mut self.score);
        // 5. Animation feedback
        systems::feedback::run(&mut self.world, &mut self.events);
        // 6. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 7. Cleanup (defeated)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
    }

    /// Victory once every enemy is gone, defeat once the player is.
    fn check_outcome(&mut self) {
        let player_alive = self.world.query::<&Player>().iter().next().is_some();
        let enemies_left = self.world.query::<&Enemy>().iter().count();

        if !player_alive {
            self.phase = EncounterPhase::Defeat;
        } else if self.score.enemies_total > 0 && enemies_left == 0 {
            self.phase = EncounterPhase::Victory;
        } else {
            return;
        }
        info!(
            outcome = ?self.phase,
            tick = self.time.tick,
            defeated = self.score.enemies_defeated,
            "encounter over"
        );
    }
}

fn sanitize_time_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        1.0
    } else {
        scale.clamp(0.0, MAX_TIME_SCALE)
    }
}
