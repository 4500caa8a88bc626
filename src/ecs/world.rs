//! World - owns every entity list plus the clock, weather and RNG

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::calendar::TimeOfDay;
use crate::core::config::SimulationConfig;
use crate::core::types::{IdAllocator, Millis, NpcId, ResourceId, TreeId, Vec2};
use crate::entity::inventory::{Inventory, ItemType};
use crate::entity::npc::Npc;
use crate::entity::player::Player;
use crate::entity::resource::Resource;
use crate::entity::structure::{Campfire, CampfireSize};
use crate::entity::tree::{PlantedSeed, TreeData};

/// Two-state rain process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    pub raining: bool,
    /// 0.0 when dry
    pub intensity: f32,
    /// Rain may start once `now_ms` passes this
    pub next_rain_ms: Millis,
    pub rain_remaining_ms: Millis,
}

impl WeatherState {
    pub fn new(next_rain_ms: Millis) -> Self {
        Self {
            raining: false,
            intensity: 0.0,
            next_rain_ms,
            rain_remaining_ms: 0,
        }
    }

    pub fn is_heavy(&self, threshold: f32) -> bool {
        self.raining && self.intensity > threshold
    }
}

/// The simulated island
pub struct World {
    pub config: SimulationConfig,
    pub rng: ChaCha8Rng,
    pub ids: IdAllocator,
    pub current_tick: u64,
    /// Simulated milliseconds since world creation
    pub now_ms: Millis,
    pub time: TimeOfDay,
    pub weather: WeatherState,

    pub player: Player,
    /// Workbench storage
    pub storage: Inventory,

    pub resources: Vec<Resource>,
    pub trees: Vec<TreeData>,
    pub seeds: Vec<PlantedSeed>,
    pub campfires: Vec<Campfire>,
    pub npcs: Vec<Npc>,
    pub selected_npc: Option<NpcId>,
}

impl World {
    /// An empty island (no trees or resources yet) seeded from the config
    pub fn new(config: SimulationConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let player = Player::new(&config);
        let storage = Inventory::with_capacity(config.player.storage_size);
        let time = TimeOfDay::new(config.weather.start_hour);
        let weather = WeatherState::new(config.weather.min_time_between_rains_ms);

        Self {
            config,
            rng,
            ids: IdAllocator::new(),
            current_tick: 0,
            now_ms: 0,
            time,
            weather,
            player,
            storage,
            resources: Vec::new(),
            trees: Vec::new(),
            seeds: Vec::new(),
            campfires: Vec::new(),
            npcs: Vec::new(),
            selected_npc: None,
        }
    }

    /// Advance the simulated clock by one clamped delta
    pub fn tick(&mut self, delta_ms: Millis) {
        self.current_tick += 1;
        self.now_ms += delta_ms;
    }

    // === RANDOM HELPERS ===

    /// Uniform duration in [min, max]
    pub fn random_duration(&mut self, min_ms: Millis, max_ms: Millis) -> Millis {
        if max_ms <= min_ms {
            return min_ms;
        }
        self.rng.gen_range(min_ms..=max_ms)
    }

    /// Uniform angle, radius uniform in [min_radius, max_radius)
    pub fn random_point_in_ring(&mut self, min_radius: f32, max_radius: f32) -> Vec2 {
        let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = if max_radius > min_radius {
            self.rng.gen_range(min_radius..max_radius)
        } else {
            min_radius
        };
        Vec2::from_angle(angle) * radius
    }

    /// Valid respawn band for a food type
    pub fn spawn_ring(&self, item: ItemType) -> (f32, f32) {
        let map = &self.config.map;
        match item {
            ItemType::Fish => (map.island_radius, map.island_radius + map.fish_ring_width),
            _ => (map.apple_min_radius, map.apple_min_radius + map.apple_ring_width),
        }
    }

    // === SPAWNING ===

    pub fn spawn_resource(&mut self, item: ItemType, position: Vec2) -> ResourceId {
        let id = self.ids.resource();
        self.resources.push(Resource::new(id, item, position, self.now_ms));
        id
    }

    pub fn spawn_tree(&mut self, position: Vec2, scale: f32) -> TreeId {
        let id = self.ids.tree();
        let trees = &self.config.trees;
        let (min, max) = (trees.auto_drop_min_ms, trees.auto_drop_max_ms);
        let next_drop = self.now_ms + self.random_duration(min, max);
        let scale = scale.min(self.config.trees.max_scale);
        self.trees
            .push(TreeData::new(id, position, scale, self.now_ms, next_drop));
        id
    }

    pub fn plant_seed(&mut self, position: Vec2) {
        let id = self.ids.seed();
        let (min, max) = (
            self.config.trees.seed_growth_min_ms,
            self.config.trees.seed_growth_max_ms,
        );
        let growth_ms = self.random_duration(min, max);
        self.seeds.push(PlantedSeed {
            id,
            position,
            planted_at: self.now_ms,
            growth_ms,
        });
    }

    pub fn build_campfire(&mut self, position: Vec2, size: CampfireSize) {
        let id = self.ids.structure();
        let fire = Campfire::new(id, position, size, self.now_ms, &self.config.structures);
        self.campfires.push(fire);
    }

    // === LOOKUPS ===

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn tree_index(&self, id: TreeId) -> Option<usize> {
        self.trees.iter().position(|t| t.id == id)
    }

    pub fn npc(&self, id: NpcId) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.id == id)
    }

    pub fn npc_mut(&mut self, id: NpcId) -> Option<&mut Npc> {
        self.npcs.iter_mut().find(|n| n.id == id)
    }

    /// Whether the player stands within cooking range of a lit fire
    pub fn player_near_cooking_fire(&self) -> bool {
        let radius = self.config.structures.cooking_radius;
        self.campfires
            .iter()
            .filter(|c| c.is_lit(self.now_ms))
            .any(|c| c.position.distance(&self.player.position) < radius)
    }

    pub fn available_resource_count(&self, item: ItemType) -> usize {
        self.resources
            .iter()
            .filter(|r| r.item == item && r.is_available())
            .count()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
