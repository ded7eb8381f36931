//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `WorldSnapshot`s. Completely headless
//! (no windowing or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use corsair_boat_ai::profiles::BoatProfile;
use corsair_core::commands::PlayerCommand;
use corsair_core::components::*;
use corsair_core::constants::*;
use corsair_core::enums::{ActorId, GamePhase, ShipStatus, Side, TemplateKind};
use corsair_core::events::AudioEvent;
use corsair_core::state::WorldSnapshot;
use corsair_core::types::{Position, SimTime};

use crate::controller::GameController;
use crate::error::SimError;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::projectiles;
use crate::templates::{EntityTemplate, TemplateRegistry};
use crate::world_setup::{self, IdAllocator};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub boat_count: u32,
    pub chest_count: u32,
    pub ship_ammo: u32,
    pub boat_ammo: u32,
    /// Per-tick trigger chance for a boat in range.
    pub boat_fire_probability: f64,
    pub arena_half_extent: f64,
    /// Nothing spawns within this planar radius of the ship's start.
    pub exclusion_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            boat_count: DEFAULT_BOAT_COUNT,
            chest_count: DEFAULT_CHEST_COUNT,
            ship_ammo: SHIP_MAX_AMMO,
            boat_ammo: BOAT_AMMO,
            boat_fire_probability: BOAT_FIRE_PROBABILITY,
            arena_half_extent: ARENA_HALF_EXTENT,
            exclusion_radius: SPAWN_EXCLUSION_RADIUS,
        }
    }
}

impl SimConfig {
    /// Reject arenas that leave no room outside the exclusion zone.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.arena_half_extent.is_finite() || self.arena_half_extent < 1.0 {
            return Err(SimError::InvalidConfig(format!(
                "arena half extent must be at least 1, got {}",
                self.arena_half_extent
            )));
        }
        if !self.exclusion_radius.is_finite() || self.exclusion_radius < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "exclusion radius must be non-negative, got {}",
                self.exclusion_radius
            )));
        }
        if self.exclusion_radius >= self.arena_half_extent.floor() {
            return Err(SimError::InvalidConfig(format!(
                "exclusion radius {} leaves no spawn room in an arena of half extent {}",
                self.exclusion_radius, self.arena_half_extent
            )));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    controller: GameController,
    config: SimConfig,
    rng: ChaCha8Rng,
    templates: TemplateRegistry,
    boat_profile: BoatProfile,
    ids: IdAllocator,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    score: ScoreState,
    /// Movement audio is playing.
    underway: bool,
    ship: Option<Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// No templates are registered; the asset loader must supply them
    /// (or call `with_default_templates`) before `start`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            controller: GameController::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            templates: TemplateRegistry::default(),
            boat_profile: BoatProfile::with_fire_probability(config.boat_fire_probability),
            ids: IdAllocator::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            score: ScoreState::default(),
            underway: false,
            ship: None,
            config,
        }
    }

    /// Register the stock template for every entity kind.
    pub fn with_default_templates(mut self) -> Self {
        self.templates = TemplateRegistry::with_defaults();
        self
    }

    /// Supply (or replace) the template for one entity kind.
    pub fn register_template(&mut self, kind: TemplateKind, template: EntityTemplate) {
        self.templates.register(kind, template);
    }

    /// Populate the world and move Loading -> Playing.
    ///
    /// On failure nothing is spawned and the phase stays Loading.
    pub fn start(&mut self) -> Result<(), SimError> {
        let phase = self.controller.phase();
        if phase != GamePhase::Loading {
            return Err(SimError::AlreadyStarted { phase });
        }

        if let Err(err) = self.populate() {
            tracing::warn!(error = %err, "World initialization failed");
            return Err(err);
        }

        self.change_phase(GameController::start);
        tracing::info!(
            seed = self.config.seed,
            boats = self.score.boats_total,
            chests = self.score.chests_total,
            "Game started"
        );
        Ok(())
    }

    fn populate(&mut self) -> Result<(), SimError> {
        self.config.validate()?;
        let ship = world_setup::setup_world(
            &mut self.world,
            &mut self.rng,
            &mut self.ids,
            &self.config,
            &self.templates,
        )?;
        self.ship = Some(ship);
        self.score = ScoreState::new(self.config.boat_count, self.config.chest_count);
        Ok(())
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
    ///
    /// Outside Playing the world is frozen; commands are still processed
    /// and a snapshot is still produced.
    pub fn tick(&mut self, intents: Intents) -> WorldSnapshot {
        self.controller.tick_end_screen();
        self.process_commands();

        if self.controller.is_running() {
            self.run_systems(intents);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.controller,
            audio_events,
            &self.score,
        )
    }

    /// Fire one cannonball from `actor`. No-op unless playing, or when the
    /// actor is gone, sunk or out of ammo.
    pub fn fire(&mut self, actor: ActorId) -> bool {
        if !self.controller.is_running() {
            return false;
        }
        match self.resolve(actor) {
            Some(entity) => self.fire_from(entity),
            None => false,
        }
    }

    /// Return an actor to its spawn state: position, heading, full hull and
    /// magazine (and boost for the ship). Removed boats cannot be reset.
    pub fn reset(&mut self, actor: ActorId) -> bool {
        if self.controller.phase() == GamePhase::Loading {
            return false;
        }
        let Some(entity) = self.resolve(actor) else {
            return false;
        };
        let Ok((pos, heading, hull, magazine, spawn)) = self
            .world
            .query_one_mut::<(&mut Position, &mut Heading, &mut Hull, &mut Magazine, &Spawn)>(entity)
        else {
            return false;
        };
        *pos = spawn.position;
        heading.0 = spawn.heading;
        *hull = Hull::default();
        magazine.refill();

        if let Ok(mut ship) = self.world.get::<&mut PlayerShip>(entity) {
            *ship = PlayerShip::default();
        }
        if actor == ActorId::Ship {
            self.underway = false;
        }
        tracing::debug!(?actor, "Actor reset");
        true
    }

    /// Playing -> Paused.
    pub fn pause(&mut self) -> bool {
        self.change_phase(GameController::pause)
    }

    /// Paused -> Playing.
    pub fn resume(&mut self) -> bool {
        self.change_phase(GameController::resume)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.change_phase(GameController::toggle_pause)
    }

    /// Playing -> Over. Input is detached for good.
    pub fn quit(&mut self) -> bool {
        self.change_phase(GameController::quit)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.controller.phase()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact situations.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
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
            PlayerCommand::StartGame => {
                // Failures are already logged; the phase stays Loading.
                let _ = self.start();
            }
            PlayerCommand::Pause => {
                self.pause();
            }
            PlayerCommand::Resume => {
                self.resume();
            }
            PlayerCommand::TogglePause => {
                self.toggle_pause();
            }
            PlayerCommand::Quit => {
                self.quit();
            }
            PlayerCommand::ToggleMute => self.controller.toggle_mute(),
            PlayerCommand::Fire { actor } => {
                if self.controller.input_attached() {
                    self.fire(actor);
                }
            }
            PlayerCommand::Reset { actor } => {
                if self.controller.input_attached() {
                    self.reset(actor);
                }
            }
            PlayerCommand::Reload => {
                if self.controller.is_running() {
                    self.reload_ship();
                }
            }
            PlayerCommand::ToggleHidden => {
                if self.controller.input_attached() {
                    if let Some(mut ship) = self
                        .ship
                        .and_then(|e| self.world.get::<&mut PlayerShip>(e).ok())
                    {
                        ship.visible = !ship.visible;
                    }
                }
            }
        }
    }

    /// Refill the ship's magazine while it is afloat.
    fn reload_ship(&mut self) {
        let Some(ship) = self.ship else {
            return;
        };
        if let Ok((state, magazine)) = self
            .world
            .query_one_mut::<(&PlayerShip, &mut Magazine)>(ship)
        {
            if state.status == ShipStatus::Alive {
                magazine.refill();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, intents: Intents) {
        self.time.advance();

        // 1. Ship control and integration
        systems::ship_control::run(&mut self.world, intents);
        let moving = intents.any_movement()
            && matches!(systems::ship_state(&self.world), Some((_, true)));
        if let Some(event) = systems::ship_control::underway_transition(&mut self.underway, moving) {
            self.audio_events.push(event);
        }

        // 2. Chests and rewards
        systems::loot::spin(&mut self.world);
        systems::loot::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.audio_events,
        );

        // 3. Boat AI, then carry out the shots it asked for
        let fire_requests = systems::boat_ai::run(
            &mut self.world,
            &self.boat_profile,
            &mut self.rng,
            self.time.tick,
        );
        for boat in fire_requests {
            self.fire_from(boat);
        }

        // 4. Cannonball flight and impacts
        systems::projectiles::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.audio_events,
        );

        // 5. Removals
        systems::compact(&mut self.world, &mut self.despawn_buffer);

        // 6. Proximity sweeps
        systems::collision::sweep_chests(&mut self.world);
        systems::collision::sweep_boats(&mut self.world);

        // 7. Terminal conditions
        if let Some(outcome) = systems::outcome::evaluate(&self.world, &self.score) {
            if self.change_phase(|c| c.conclude(outcome)) {
                tracing::info!(
                    ?outcome,
                    tick = self.time.tick,
                    boats_destroyed = self.score.boats_destroyed,
                    chests_looted = self.score.chests_looted,
                    "Game over"
                );
            }
        }
    }

    /// Launch a cannonball from a hull, drawing one round.
    fn fire_from(&mut self, entity: Entity) -> bool {
        let target_alive = matches!(systems::ship_state(&self.world), Some((_, true)));
        let Ok((side, pos, heading, hull, magazine, id)) = self
            .world
            .query_one_mut::<(&Side, &Position, &Heading, &Hull, &mut Magazine, &EntityId)>(entity)
        else {
            return false;
        };
        let side = *side;
        if hull.is_sunk() || (side == Side::Enemy && !target_alive) {
            return false;
        }
        if !magazine.draw() {
            return false;
        }
        let (origin, heading, fired_by, rounds) = (*pos, heading.0, *id, magazine.rounds);

        let shot_id = self.ids.next_id();
        projectiles::launch(
            &mut self.world,
            shot_id,
            origin,
            heading,
            side,
            fired_by,
            self.templates.scale_of(TemplateKind::Cannonball),
        );
        if side == Side::Player {
            self.score.cannonballs_fired += 1;
        }
        self.audio_events.push(AudioEvent::CannonFired { side });
        tracing::debug!(?side, shooter = fired_by.0, rounds, "Cannon fired");
        true
    }

    /// Map an external actor id onto a live entity.
    fn resolve(&self, actor: ActorId) -> Option<Entity> {
        match actor {
            ActorId::Ship => self.ship,
            ActorId::Boat(n) => self
                .world
                .query::<(&EnemyBoat, &EntityId)>()
                .iter()
                .find(|(_, (_, id))| id.0 == n)
                .map(|(entity, _)| entity),
        }
    }

    /// Apply a controller transition, recording the phase change.
    fn change_phase(&mut self, transition: impl FnOnce(&mut GameController) -> bool) -> bool {
        let from = self.controller.phase();
        if !transition(&mut self.controller) {
            return false;
        }
        let to = self.controller.phase();
        self.audio_events.push(AudioEvent::PhaseChanged { from, to });
        tracing::info!(?from, ?to, "Phase changed");
        true
    }
}
