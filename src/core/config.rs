//! Simulation configuration with documented constants
//!
//! All tuning numbers live here, grouped by the subsystem that reads them.
//! Every section implements `Default`, and every section is
//! `#[serde(default)]`, so a TOML file only needs to name the values it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Top-level configuration owned by a [`crate::ecs::world::World`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the world RNG. Same seed + same intents = same run.
    pub seed: u64,
    pub timing: TimingConfig,
    pub map: MapConfig,
    pub player: PlayerConfig,
    pub food: FoodConfig,
    pub weather: WeatherConfig,
    pub resources: ResourceConfig,
    pub trees: TreeConfig,
    pub structures: StructureConfig,
    pub npc: NpcConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            timing: TimingConfig::default(),
            map: MapConfig::default(),
            player: PlayerConfig::default(),
            food: FoodConfig::default(),
            weather: WeatherConfig::default(),
            resources: ResourceConfig::default(),
            trees: TreeConfig::default(),
            structures: StructureConfig::default(),
            npc: NpcConfig::default(),
        }
    }
}

// === TICK DRIVER ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Wall-clock period of the primary simulation driver
    pub tick_interval_ms: u64,

    /// Upper bound on a single tick's delta (seconds).
    ///
    /// A backgrounded tab or a debugger stall can hand the driver a
    /// multi-second gap; anything above this is discarded rather than
    /// applied in one step.
    pub max_tick_delta_secs: f32,

    /// Period of the resource despawn/respawn sweep
    pub resource_sweep_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            max_tick_delta_secs: 0.2,
            resource_sweep_interval_ms: 2000,
        }
    }
}

// === MAP ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Radius of the land disc
    pub island_radius: f32,
    /// Edge length of the square sea plane
    pub sea_size: f32,
    /// Beyond this distance from centre the player is swimming
    pub swim_threshold: f32,
    /// Move intents past this distance from centre are refused
    pub water_movement_limit: f32,
    /// The central workbench shelters anyone within this radius
    pub workbench_shelter_radius: f32,
    /// Standing this close to a trunk keeps the rain off
    pub shelter_distance: f32,

    /// Tree placement attempts at world generation
    pub initial_tree_count: u32,
    /// Inner bound of the tree placement ring
    pub tree_min_radius: f32,
    /// Attempts landing inside this radius are rejected (workbench clearing)
    pub tree_clearing_radius: f32,
    pub initial_apples: u32,
    pub initial_fish: u32,
    /// Apples spawn in [apple_min_radius, apple_min_radius + apple_ring_width)
    pub apple_min_radius: f32,
    pub apple_ring_width: f32,
    /// Fish spawn in [island_radius, island_radius + fish_ring_width)
    pub fish_ring_width: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            island_radius: 50.0,
            sea_size: 300.0,
            swim_threshold: 52.0,
            water_movement_limit: 85.0,
            workbench_shelter_radius: 6.0,
            shelter_distance: 3.5,
            initial_tree_count: 15,
            tree_min_radius: 5.0,
            tree_clearing_radius: 8.0,
            initial_apples: 8,
            initial_fish: 15,
            apple_min_radius: 8.0,
            apple_ring_width: 40.0,
            fish_ring_width: 30.0,
        }
    }
}

// === PLAYER VITALS ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_energy: f32,
    /// Energy lost per second standing still
    pub decay_idle: f32,
    /// Energy lost per second walking
    pub decay_moving: f32,
    /// Energy lost per second swimming (takes precedence over walking)
    pub decay_swimming: f32,
    /// Walking speed in world units per second
    pub movement_speed: f32,
    /// Speed multiplier while sick
    pub sick_speed_multiplier: f32,

    pub inventory_size: usize,
    pub storage_size: usize,
    /// Pick-up range for apples, wood and seeds
    pub interaction_distance: f32,
    /// Pick-up range for fish (more forgiving)
    pub fish_interaction_distance: f32,
    /// How close the player must be to shake a tree
    pub tree_reach: f32,

    pub max_wetness: f32,
    /// Wetness gained per second in rain, before intensity scaling
    pub wetness_gain_per_sec: f32,
    /// Wetness lost per second when nothing else applies
    pub wetness_dry_per_sec: f32,
    /// Swimming multiplies the gain rate by this
    pub swim_wetness_multiplier: f32,
    /// Near a fire the player dries at gain rate times this
    pub fire_drying_multiplier: f32,

    /// Wetness above which a cold can set in
    pub wet_sickness_threshold: f32,
    /// Probability per second of catching a cold while soaked
    pub wet_sickness_chance_per_sec: f32,
    /// Heavy rain multiplies the cold chance by this
    pub heavy_rain_sickness_multiplier: f32,
    pub raw_fish_sickness_chance: f32,
    pub malnutrition_sickness_chance: f32,
    /// Same simple food eaten more than this many times in a row is malnourishing
    pub malnutrition_threshold: u32,
    pub sickness_duration_ms: u64,

    pub torch_duration_ms: u64,
    /// Torches consumed to build a standard campfire
    pub campfire_torch_cost: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_energy: 100.0,
            decay_idle: 0.15,
            decay_moving: 0.6,
            decay_swimming: 1.5,
            movement_speed: 7.0,
            sick_speed_multiplier: 0.5,
            inventory_size: 10,
            storage_size: 20,
            interaction_distance: 4.0,
            fish_interaction_distance: 8.0,
            tree_reach: 6.0,
            max_wetness: 100.0,
            wetness_gain_per_sec: 20.0,
            wetness_dry_per_sec: 10.0,
            swim_wetness_multiplier: 2.0,
            fire_drying_multiplier: 3.0,
            wet_sickness_threshold: 80.0,
            wet_sickness_chance_per_sec: 0.2,
            heavy_rain_sickness_multiplier: 2.5,
            raw_fish_sickness_chance: 0.30,
            malnutrition_sickness_chance: 0.25,
            malnutrition_threshold: 4,
            sickness_duration_ms: 30_000,
            torch_duration_ms: 60_000,
            campfire_torch_cost: 3,
        }
    }
}

// === FOOD ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodConfig {
    pub apple_heal: f32,
    pub apple_score: u32,
    pub fish_heal: f32,
    pub fish_score: u32,
    pub cooked_fish_heal: f32,
    pub cooked_fish_score: u32,
    pub apple_juice_heal: f32,
    pub apple_juice_score: u32,
    pub big_fish_heal: f32,
    pub big_fish_score: u32,
    /// Distance from the player at which an eaten apple drops its seed
    pub seed_drop_offset: f32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            apple_heal: 15.0,
            apple_score: 10,
            fish_heal: 25.0,
            fish_score: 50,
            cooked_fish_heal: 60.0,
            cooked_fish_score: 100,
            apple_juice_heal: 50.0,
            apple_juice_score: 30,
            big_fish_heal: 80.0,
            big_fish_score: 80,
            seed_drop_offset: 0.5,
        }
    }
}

// === WEATHER & TIME ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Simulated milliseconds in one 24-hour day
    pub day_length_ms: u64,
    /// Hour of day at world generation
    pub start_hour: f32,
    /// Minimum dry spell between rains; the actual gap adds up to the same again
    pub min_time_between_rains_ms: u64,
    pub rain_duration_min_ms: u64,
    pub rain_duration_max_ms: u64,
    /// Rain intensity is drawn from [rain_intensity_min, 1.0)
    pub rain_intensity_min: f32,
    /// Intensity above this counts as heavy rain
    pub heavy_rain_threshold: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            day_length_ms: 120_000,
            start_hour: 8.0,
            min_time_between_rains_ms: 120_000,
            rain_duration_min_ms: 30_000,
            rain_duration_max_ms: 60_000,
            rain_intensity_min: 0.2,
            heavy_rain_threshold: 0.7,
        }
    }
}

// === RESOURCE LIFECYCLE ===

/// Which collected resources may be revived by the respawn roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespawnPolicy {
    /// Only fish come back; apples return through tree drops instead
    FishOnly,
    /// Apples and fish are both eligible
    AllFood,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Uncollected land items older than this vanish
    pub despawn_ms: u64,
    /// Chance per sweep of reviving one collected placeholder
    pub respawn_chance: f32,
    pub respawn_policy: RespawnPolicy,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            despawn_ms: 60_000,
            respawn_chance: 0.5,
            respawn_policy: RespawnPolicy::FishOnly,
        }
    }
}

// === TREES & PLANTING ===

/// How trees gain scale over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMode {
    /// Every tick, proportional to elapsed seconds
    Continuous,
    /// A fixed step each growth interval
    Stepped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Drop chance of an unshaken tree at scale 1.0
    pub drop_chance: f32,
    /// Each outstanding shake divides the chance by (1 + count * decay_factor)
    pub decay_factor: f32,
    /// Time after the last shake before one shake is forgiven
    pub recovery_ms: u64,
    pub max_scale: f32,
    pub growth_mode: GrowthMode,
    /// Continuous mode: scale gained per second at scale 1.0
    pub passive_growth_rate: f32,
    /// Stepped mode: interval between growth steps
    pub growth_step_interval_ms: u64,
    /// Stepped mode: scale gained per step at scale 1.0
    pub growth_step: f32,
    pub initial_scale_min: f32,
    pub initial_scale_max: f32,
    /// Shaken drops land within ± this of the trunk on each axis
    pub drop_scatter: f32,
    pub auto_drop_min_ms: u64,
    pub auto_drop_max_ms: u64,
    /// Auto-dropped apples land within this radius of the trunk
    pub auto_drop_scatter: f32,

    pub seed_growth_min_ms: u64,
    pub seed_growth_max_ms: u64,
    /// Probability that a matured seed becomes a tree
    pub seed_success_chance: f32,
    pub sapling_scale_min: f32,
    pub sapling_scale_max: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            drop_chance: 0.5,
            decay_factor: 0.8,
            recovery_ms: 10_000,
            max_scale: 2.5,
            growth_mode: GrowthMode::Continuous,
            passive_growth_rate: 0.02,
            growth_step_interval_ms: 5_000,
            growth_step: 0.1,
            initial_scale_min: 0.8,
            initial_scale_max: 1.5,
            drop_scatter: 1.0,
            auto_drop_min_ms: 45_000,
            auto_drop_max_ms: 90_000,
            auto_drop_scatter: 1.5,
            seed_growth_min_ms: 30_000,
            seed_growth_max_ms: 60_000,
            seed_success_chance: 0.7,
            sapling_scale_min: 0.6,
            sapling_scale_max: 1.0,
        }
    }
}

// === STRUCTURES ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    pub campfire_duration_ms: u64,
    pub campfire_light_radius: f32,
    /// Within this distance of a standard fire the player dries off
    pub campfire_warmth_radius: f32,
    /// A large fire burns for a whole day by default
    pub large_campfire_duration_ms: u64,
    pub large_campfire_light_radius: f32,
    pub large_campfire_warmth_radius: f32,
    /// Fish eaten this close to any fire counts as cooked
    pub cooking_radius: f32,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            campfire_duration_ms: 240_000,
            campfire_light_radius: 25.0,
            campfire_warmth_radius: 6.0,
            large_campfire_duration_ms: 120_000,
            large_campfire_light_radius: 45.0,
            large_campfire_warmth_radius: 12.0,
            cooking_radius: 4.0,
        }
    }
}

// === NPC ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcConfig {
    pub max_energy: f32,
    /// Energy lost per second while idle; doubled while moving or working
    pub energy_decay: f32,
    /// Below this an NPC eats from its own pack, or starts starving
    pub self_feed_threshold: f32,
    pub self_feed_restore: f32,
    /// Energy restored when the player hands over food
    pub player_feed_restore: f32,
    /// Energy an NPC wakes up with
    pub wake_energy: f32,
    pub speed: f32,
    /// Wandering moves at this fraction of `speed`
    pub wander_speed_factor: f32,
    /// Radius within which the player makes an NPC stop and wait
    pub player_pause_radius: f32,
    /// After a command, the player's presence is ignored this long
    pub ignore_player_ms: u64,
    pub collect_range: f32,
    pub fish_collect_range: f32,
    /// Success chance per second of work, before skill
    pub base_success_rate: f32,
    pub skill_gain: f32,
    /// Per-tick chance of a gentle heading wobble while patrolling
    pub wobble_chance: f32,
    pub wobble_angle: f32,
    /// Bounce perturbation is drawn from ± this angle
    pub bounce_angle: f32,
    /// Unconscious NPCs older than this wash away
    pub unconscious_despawn_ms: u64,
    /// Spawn probability per second while nobody else is around
    pub spawn_chance_per_sec: f32,
    /// NPCs wash up between island_radius - inner and island_radius + outer
    pub spawn_inner_offset: f32,
    pub spawn_outer_offset: f32,
    pub short_wait_min_ms: u64,
    pub short_wait_max_ms: u64,
    pub long_wait_min_ms: u64,
    pub long_wait_max_ms: u64,
    /// Probability that an idle NPC with no target waits again instead of walking
    pub wait_again_chance: f32,
    /// Wander targets fall within this fraction of the island radius
    pub wander_radius_factor: f32,
    /// Distance of the forward look-ahead target
    pub look_ahead: f32,
    pub names: Vec<String>,
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            max_energy: 100.0,
            energy_decay: 0.1,
            self_feed_threshold: 30.0,
            self_feed_restore: 30.0,
            player_feed_restore: 40.0,
            wake_energy: 60.0,
            speed: 4.0,
            wander_speed_factor: 0.5,
            player_pause_radius: 5.0,
            ignore_player_ms: 5_000,
            collect_range: 4.0,
            fish_collect_range: 8.0,
            base_success_rate: 0.2,
            skill_gain: 0.05,
            wobble_chance: 0.05,
            wobble_angle: 0.35,
            bounce_angle: std::f32::consts::FRAC_PI_3,
            unconscious_despawn_ms: 120_000,
            spawn_chance_per_sec: 0.02,
            spawn_inner_offset: 2.0,
            spawn_outer_offset: 6.0,
            short_wait_min_ms: 1_000,
            short_wait_max_ms: 3_000,
            long_wait_min_ms: 3_000,
            long_wait_max_ms: 8_000,
            wait_again_chance: 0.3,
            wander_radius_factor: 0.9,
            look_ahead: 2.0,
            names: ["Wilson", "Friday", "Marooner", "Ayla", "Crusoe", "Tamsin", "Ibrahim", "Noor"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a (possibly partial) TOML document and validate the result
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SimError::InvalidConfig(msg));

        if self.timing.tick_interval_ms == 0 || self.timing.max_tick_delta_secs <= 0.0 {
            return invalid("tick interval and max delta must be positive".into());
        }
        if self.timing.resource_sweep_interval_ms == 0 {
            return invalid("resource sweep interval must be positive".into());
        }

        let map = &self.map;
        if !(map.island_radius < map.swim_threshold
            && map.swim_threshold < map.water_movement_limit
            && map.water_movement_limit <= map.sea_size / 2.0)
        {
            return invalid(format!(
                "radii must be ordered: island ({}) < swim ({}) < movement limit ({}) <= sea half-size ({})",
                map.island_radius,
                map.swim_threshold,
                map.water_movement_limit,
                map.sea_size / 2.0
            ));
        }
        if map.tree_min_radius >= map.island_radius {
            return invalid("tree_min_radius must lie inside the island".into());
        }

        let p = &self.player;
        if p.max_energy <= 0.0 || p.max_wetness <= 0.0 {
            return invalid("max_energy and max_wetness must be positive".into());
        }
        if p.decay_idle < 0.0 || p.decay_moving < 0.0 || p.decay_swimming < 0.0 {
            return invalid("energy decay rates must not be negative".into());
        }
        if p.inventory_size == 0 || p.storage_size == 0 {
            return invalid("inventory and storage need at least one slot".into());
        }
        if p.wet_sickness_threshold > p.max_wetness {
            return invalid("wet_sickness_threshold exceeds max_wetness".into());
        }

        let w = &self.weather;
        if w.day_length_ms == 0 {
            return invalid("day_length_ms must be positive".into());
        }
        if w.rain_duration_min_ms > w.rain_duration_max_ms {
            return invalid("rain duration range is inverted".into());
        }
        if !(0.0..=1.0).contains(&w.rain_intensity_min) {
            return invalid("rain_intensity_min must lie in [0, 1]".into());
        }

        let t = &self.trees;
        if t.initial_scale_min > t.initial_scale_max
            || t.sapling_scale_min > t.sapling_scale_max
            || t.auto_drop_min_ms > t.auto_drop_max_ms
            || t.seed_growth_min_ms > t.seed_growth_max_ms
        {
            return invalid("tree ranges must have min <= max".into());
        }
        if t.initial_scale_min <= 0.0 || t.sapling_scale_min <= 0.0 {
            return invalid("tree scales must be positive".into());
        }
        if t.initial_scale_max > t.max_scale {
            return invalid("initial tree scale exceeds max_scale".into());
        }

        let n = &self.npc;
        if n.self_feed_threshold >= n.max_energy {
            return invalid("npc self_feed_threshold must be below max_energy".into());
        }
        if n.short_wait_min_ms > n.short_wait_max_ms || n.long_wait_min_ms > n.long_wait_max_ms {
            return invalid("npc wait ranges must have min <= max".into());
        }
        if n.names.is_empty() {
            return invalid("npc name list is empty".into());
        }

        Ok(())
    }
}
