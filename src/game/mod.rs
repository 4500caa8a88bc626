//! Game session: phase machine, tick driving and the message log
//!
//! [`Game`] is what a host talks to. It owns the [`World`], decides whether a
//! timer fire should advance it, routes intents by phase, and keeps the
//! rolling log of what happened.

pub mod phase;

use serde::{Deserialize, Serialize};

use crate::command::{CommandExecutor, Intent};
use crate::core::calendar::TimePeriod;
use crate::core::clock::{PeriodicTimer, TickDelta, TickDriver};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{Millis, NpcId};
use crate::ecs::world::{WeatherState, World};
use crate::entity::inventory::Inventory;
use crate::entity::npc::Npc;
use crate::entity::player::Player;
use crate::entity::resource::Resource;
use crate::entity::structure::Campfire;
use crate::entity::tree::{PlantedSeed, TreeData};
use crate::simulation::events::{EventLog, LogMessage, SimulationEvent};
use crate::simulation::resources::sweep_resources;
use crate::simulation::tick::run_simulation_tick;
use crate::world::generation::generate_world;

pub use phase::GamePhase;

pub struct Game {
    config: SimulationConfig,
    world: World,
    phase: GamePhase,
    driver: TickDriver,
    sweep: PeriodicTimer,
    log: EventLog,
}

impl Game {
    /// A session sitting at the menu. The island is generated on `start`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            world: World::new(config.clone()),
            phase: GamePhase::Menu,
            driver: TickDriver::new(&config.timing),
            sweep: PeriodicTimer::new(config.timing.resource_sweep_interval_ms),
            log: EventLog::new(),
            config,
        })
    }

    // === ACCESSORS ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for hosts and tests that stage scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Simulation passes run this session, however they were driven
    pub fn ticks(&self) -> u64 {
        self.world.current_tick
    }

    // === SESSION ===

    /// Generate a fresh island from the configured seed and begin playing
    pub fn start(&mut self) {
        self.world = World::new(self.config.clone());
        let summary = generate_world(&mut self.world);
        self.driver.reset();
        self.sweep.reset();
        self.log.clear();
        self.phase = GamePhase::Playing;
        self.record(vec![SimulationEvent::Welcome]);
        tracing::info!(
            seed = self.config.seed,
            trees = summary.trees,
            apples = summary.apples,
            fish = summary.fish,
            "session started"
        );
    }

    pub fn start_with_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.start();
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            tracing::debug!("paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            tracing::debug!("resumed");
        }
    }

    /// Drop the session entirely
    pub fn quit_to_menu(&mut self) {
        self.world = World::new(self.config.clone());
        self.driver.reset();
        self.sweep.reset();
        self.log.clear();
        self.phase = GamePhase::Menu;
        tracing::info!("returned to menu");
    }

    // === DRIVING ===

    /// Host timer callback with the current wall-clock time.
    ///
    /// Fires that arrive early are ignored. The driver records every
    /// on-schedule fire, even while not playing, so a resume never produces
    /// a catch-up delta.
    pub fn pump(&mut self, now_ms: Millis) -> Vec<SimulationEvent> {
        if !self.driver.is_due(now_ms) {
            return Vec::new();
        }
        match self.driver.fire(now_ms, self.phase.is_simulating()) {
            Some(delta) => self.advance(delta),
            None => Vec::new(),
        }
    }

    /// Advance by an explicit gap, clamped like a timer fire. Headless runs
    /// and tests drive the session this way.
    pub fn step(&mut self, delta_ms: Millis) -> Vec<SimulationEvent> {
        if !self.phase.is_simulating() {
            return Vec::new();
        }
        let delta = self.driver.clamp(delta_ms);
        self.advance(delta)
    }

    fn advance(&mut self, delta: TickDelta) -> Vec<SimulationEvent> {
        let events = run_simulation_tick(&mut self.world, delta);
        for _ in 0..self.sweep.advance(delta.delta_ms) {
            let report = sweep_resources(&mut self.world);
            if report.despawned > 0 || report.respawned.is_some() {
                tracing::debug!(
                    despawned = report.despawned,
                    pruned = report.pruned,
                    respawned = ?report.respawned,
                    "resource sweep"
                );
            }
        }
        self.record(events.clone());
        events
    }

    /// Apply a player intent. Returns the events it raised.
    pub fn apply(&mut self, intent: Intent) -> Vec<SimulationEvent> {
        match intent {
            Intent::Start if self.can_start() => self.start(),
            Intent::StartWithSeed(seed) if self.can_start() => self.start_with_seed(seed),
            Intent::Pause => self.pause(),
            Intent::Resume => self.resume(),
            Intent::TogglePause => match self.phase {
                GamePhase::Playing => self.pause(),
                GamePhase::Paused => self.resume(),
                _ => {}
            },
            Intent::QuitToMenu => self.quit_to_menu(),
            intent if intent.is_session() => {
                tracing::debug!(?intent, phase = ?self.phase, "session intent ignored");
            }
            intent => {
                let result = CommandExecutor::execute(&mut self.world, self.phase, &intent);
                if let Some(next) = result.next_phase {
                    tracing::debug!(from = ?self.phase, to = ?next, "phase change");
                    self.phase = next;
                }
                self.record(result.events.clone());
                return result.events;
            }
        }
        Vec::new()
    }

    fn can_start(&self) -> bool {
        matches!(self.phase, GamePhase::Menu | GamePhase::GameOver)
    }

    fn record(&mut self, events: Vec<SimulationEvent>) {
        for event in events {
            if matches!(event, SimulationEvent::Collapsed { .. }) {
                self.phase = GamePhase::GameOver;
                tracing::info!(score = self.world.player.score, "game over");
            }
            let id = self.world.ids.log();
            self.log.push(id, &event);
        }
    }

    // === SNAPSHOT ===

    /// Everything a renderer needs for one frame
    pub fn snapshot(&self) -> GameSnapshot {
        let world = &self.world;
        let now = world.now_ms;
        GameSnapshot {
            phase: self.phase,
            tick: world.current_tick,
            now_ms: now,
            hour: world.time.hours(),
            period: world.time.period(),
            is_night: world.time.is_night(),
            light_level: world.time.light_level(),
            weather: world.weather.clone(),
            player: world.player.clone(),
            storage: world.storage.clone(),
            resources: world.resources.iter().filter(|r| r.is_available()).cloned().collect(),
            trees: world.trees.clone(),
            seeds: world.seeds.clone(),
            campfires: world.campfires.iter().filter(|c| c.is_lit(now)).cloned().collect(),
            npcs: world.npcs.clone(),
            selected_npc: world.selected_npc,
            log: self.log.messages().cloned().collect(),
        }
    }
}

/// Serializable view of a session at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub now_ms: Millis,
    pub hour: f32,
    pub period: TimePeriod,
    pub is_night: bool,
    pub light_level: f32,
    pub weather: WeatherState,
    pub player: Player,
    pub storage: Inventory,
    /// Uncollected resources only
    pub resources: Vec<Resource>,
    pub trees: Vec<TreeData>,
    pub seeds: Vec<PlantedSeed>,
    /// Lit fires only
    pub campfires: Vec<Campfire>,
    pub npcs: Vec<Npc>,
    pub selected_npc: Option<NpcId>,
    /// Oldest first
    pub log: Vec<LogMessage>,
}
