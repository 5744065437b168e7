//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world and the tile grid, processes
//! player commands, runs all systems in a fixed order, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::path::PathBuf;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use forts_core::commands::{HeldKeys, PlayerCommand};
use forts_core::enums::MatchPhase;
use forts_core::events::SimEvent;
use forts_core::state::MatchSnapshot;
use forts_core::stats::MatchStats;
use forts_core::types::SimTime;
use forts_terrain::{map, TileGrid};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// RNG seed for determinism. Same seed + same commands = same match.
    pub seed: u64,
    /// Map to load; `None` selects the built-in default layout.
    pub map_name: Option<String>,
    /// Directory holding saved map files.
    pub maps_dir: PathBuf,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map_name: None,
            maps_dir: PathBuf::from("maps"),
        }
    }
}

/// The match engine. Owns the ECS world, the terrain, and all match state.
pub struct MatchEngine {
    world: World,
    grid: TileGrid,
    time: SimTime,
    phase: MatchPhase,
    rng: ChaCha8Rng,
    held: [HeldKeys; 2],
    command_queue: VecDeque<PlayerCommand>,
    stats: MatchStats,
    events: Vec<SimEvent>,
}

impl MatchEngine {
    /// Create a new engine, loading the configured map (or the default
    /// layout when the map is missing or unreadable).
    pub fn new(config: &MatchConfig) -> Self {
        let grid = map::load_or_default(&config.maps_dir, config.map_name.as_deref());
        Self::with_grid(config.seed, grid)
    }

    /// Create a new engine over an already-built grid (map editor
    /// handoff, tests).
    pub fn with_grid(seed: u64, grid: TileGrid) -> Self {
        let mut world = World::new();
        world_setup::setup_match(&mut world);
        Self {
            world,
            grid,
            time: SimTime::default(),
            phase: MatchPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            held: [HeldKeys::default(); 2],
            command_queue: VecDeque::new(),
            stats: MatchStats::default(),
            events: Vec::new(),
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

    /// Advance the match by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems();
            self.time.advance();
            self.stats.game_time_secs = self.time.elapsed_secs;
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.grid,
            self.time,
            self.phase,
            &self.stats,
            events,
        )
    }

    /// Current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only view of the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only view of the terrain, e.g. for the editor's save path.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Read-only view of the running stats.
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable grid access for test setup.
    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Gameplay actions are ignored once
    /// the match is over.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetHeld { player, held } => {
                self.held[player.index()] = held;
            }
            _ if self.phase != MatchPhase::Active => {}
            PlayerCommand::ToggleCannon { player } => {
                systems::players::handle_toggle(&mut self.world, &self.grid, &mut self.events, player);
            }
            PlayerCommand::Fire { player } => {
                systems::players::handle_fire(
                    &mut self.world,
                    &self.grid,
                    &mut self.stats,
                    &mut self.events,
                    self.time.tick,
                    player,
                );
            }
            PlayerCommand::PlaceBlock { player } => {
                systems::players::handle_place_block(
                    &mut self.world,
                    &mut self.grid,
                    &mut self.stats,
                    &mut self.events,
                    player,
                );
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Airship patrol + supply drops
        systems::airship::run(&mut self.world, &mut self.rng, &mut self.events, self.time.tick);
        // 2. Falling boxes + pickups
        systems::item_boxes::run(&mut self.world, &self.grid, &mut self.stats, &mut self.events);
        // 3. Projectiles (terrain, then ghosts, then players, then bounds)
        systems::projectiles::run(
            &mut self.world,
            &mut self.grid,
            &mut self.rng,
            &mut self.stats,
            &mut self.events,
        );
        // 4. Ghost steering + contact
        systems::ghosts::run(&mut self.world, &mut self.events);
        // 5. Player physics / cannon occupancy, then the death check
        let deaths = systems::players::run(&mut self.world, &self.grid, &self.held);
        for victim in deaths {
            self.stats.tally_mut(victim).deaths += 1;
            self.stats.winner = Some(victim.opponent());
            self.events.push(SimEvent::PlayerDied { player: victim });
            self.phase = MatchPhase::Complete;
        }
    }
}
