//! Non-player castaways that wash ashore and can be put to work

use serde::{Deserialize, Serialize};

use crate::core::config::NpcConfig;
use crate::core::types::{Millis, NpcId, Vec2};
use crate::entity::inventory::ItemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NpcState {
    /// Washed up and inert until the player wakes them
    Unconscious,
    Idle,
    Moving,
    Working,
}

impl NpcState {
    pub fn is_active(&self) -> bool {
        matches!(self, NpcState::Moving | NpcState::Working)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NpcTask {
    GatherWood,
    GatherApple,
    Fish,
}

impl NpcTask {
    /// The resource this task scans for
    pub fn target_item(&self) -> ItemType {
        match self {
            NpcTask::GatherWood => ItemType::Wood,
            NpcTask::GatherApple => ItemType::Apple,
            NpcTask::Fish => ItemType::Fish,
        }
    }

    /// Fishing patrols the sea; everything else stays on land
    pub fn works_at_sea(&self) -> bool {
        matches!(self, NpcTask::Fish)
    }
}

/// Per-resource success bonuses, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NpcSkills {
    pub wood: f32,
    pub apple: f32,
    pub fish: f32,
}

impl NpcSkills {
    pub fn for_item(&self, item: ItemType) -> f32 {
        match item {
            ItemType::Wood => self.wood,
            ItemType::Apple => self.apple,
            ItemType::Fish => self.fish,
            _ => 0.0,
        }
    }

    /// Raise the skill matching `item`, capped at 1.0
    pub fn improve(&mut self, item: ItemType, gain: f32) {
        let skill = match item {
            ItemType::Wood => &mut self.wood,
            ItemType::Apple => &mut self.apple,
            ItemType::Fish => &mut self.fish,
            _ => return,
        };
        *skill = (*skill + gain).min(1.0);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub position: Vec2,
    pub state: NpcState,
    /// Forward look-ahead point (or wander destination while idle)
    pub target: Option<Vec2>,
    /// Unit heading
    pub heading: Vec2,
    pub energy: f32,
    /// Unbounded pack
    pub inventory: Vec<ItemType>,
    pub task: Option<NpcTask>,
    pub skills: NpcSkills,
    /// Countdown for idle-wander pacing
    pub action_timer_ms: Millis,
    /// Drives the unconscious despawn timeout
    pub created_at: Millis,
    pub starving: bool,
    pub last_player_pause_ms: Option<Millis>,
    pub ignore_player_until: Millis,
}

impl Npc {
    /// A castaway freshly washed up at `position`, facing the island centre
    pub fn washed_ashore(
        id: NpcId,
        name: String,
        position: Vec2,
        now: Millis,
        config: &NpcConfig,
    ) -> Self {
        Self {
            id,
            name,
            position,
            state: NpcState::Unconscious,
            target: None,
            heading: (Vec2::ZERO - position).normalize(),
            energy: config.max_energy / 2.0,
            inventory: Vec::new(),
            task: None,
            skills: NpcSkills::default(),
            action_timer_ms: 0,
            created_at: now,
            starving: false,
            last_player_pause_ms: None,
            ignore_player_until: 0,
        }
    }

    pub fn is_conscious(&self) -> bool {
        self.state != NpcState::Unconscious
    }

    /// Remove and return the first food item in the pack
    pub fn take_food(&mut self) -> Option<ItemType> {
        let index = self.inventory.iter().position(ItemType::is_food)?;
        Some(self.inventory.remove(index))
    }

    pub fn feed(&mut self, amount: f32, max_energy: f32) {
        self.energy = (self.energy + amount).min(max_energy);
        self.starving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npc() -> Npc {
        Npc::washed_ashore(
            NpcId(1),
            "Friday".into(),
            Vec2::new(52.0, 0.0),
            0,
            &NpcConfig::default(),
        )
    }

    #[test]
    fn test_washed_ashore_faces_centre() {
        let npc = npc();
        assert_eq!(npc.state, NpcState::Unconscious);
        assert!((npc.heading.x + 1.0).abs() < 1e-5);
        assert_eq!(npc.energy, 50.0);
    }

    #[test]
    fn test_skills_cap_at_one() {
        let mut skills = NpcSkills::default();
        for _ in 0..50 {
            skills.improve(ItemType::Fish, 0.05);
        }
        assert_eq!(skills.fish, 1.0);
        assert_eq!(skills.wood, 0.0);
        skills.improve(ItemType::Torch, 0.5);
        assert_eq!(skills, NpcSkills { wood: 0.0, apple: 0.0, fish: 1.0 });
    }

    #[test]
    fn test_take_food_skips_materials() {
        let mut npc = npc();
        npc.inventory = vec![ItemType::Wood, ItemType::Fish, ItemType::Apple];
        assert_eq!(npc.take_food(), Some(ItemType::Fish));
        assert_eq!(npc.inventory, vec![ItemType::Wood, ItemType::Apple]);
    }

    #[test]
    fn test_feed_clears_starving() {
        let mut npc = npc();
        npc.starving = true;
        npc.feed(80.0, 100.0);
        assert!(!npc.starving);
        assert_eq!(npc.energy, 100.0);
    }
}
