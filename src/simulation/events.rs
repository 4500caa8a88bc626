//! Simulation events and the rolling in-game log
//!
//! Subsystems and intents return [`SimulationEvent`]s. The session turns
//! them into [`LogMessage`]s for the UI; the log only ever holds the most
//! recent few.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::types::{Compass, LogId};
use crate::entity::inventory::ItemType;
use crate::entity::npc::NpcTask;

/// Messages kept in the rolling log
pub const LOG_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
    Danger,
}

/// Something that happened during a tick or an intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    Welcome,

    // Weather
    RainStarted { intensity: f32, heavy: bool },
    RainStopped,

    // Player vitals
    TorchDoused,
    TorchBurnedOut,
    CaughtCold,
    Recovered,
    /// Energy ran out; the session ends
    Collapsed { score: u32 },

    // Inventory and crafting
    BackpackFull,
    StorageFull,
    Crafted { item: ItemType },
    TorchCrafted,
    SeedPlanted,
    TorchLit,
    CampfireBuilt { large: bool },
    Ate { item: ItemType, heal: f32, cooked: bool },
    SeedDropped,
    MalnutritionWarning,
    MalnutritionSickness,
    RawFishSickness,

    // Trees
    TreeShaken { dropped: Option<ItemType> },
    SaplingsGrew { count: usize },

    // NPCs
    NpcArrived { name: String, direction: Compass },
    NpcWashedAway { name: String },
    NpcWoke { name: String },
    NpcStarving { name: String },
    NpcAte { name: String, item: ItemType },
    NpcDied { name: String },
    NpcTaskAssigned { name: String, task: Option<NpcTask> },
    NpcHandedOver { name: String, count: usize },
    NpcNothingToGive { name: String },
    NpcFed { name: String, item: ItemType },
}

impl SimulationEvent {
    pub fn severity(&self) -> Severity {
        use SimulationEvent::*;
        match self {
            TorchDoused | BackpackFull | StorageFull | MalnutritionWarning | NpcStarving { .. } => {
                Severity::Warning
            }
            CaughtCold | Collapsed { .. } | MalnutritionSickness | RawFishSickness
            | NpcDied { .. } => Severity::Danger,
            Recovered | Crafted { .. } | CampfireBuilt { .. } | SaplingsGrew { .. }
            | NpcWoke { .. } | NpcFed { .. } | NpcHandedOver { .. } => Severity::Success,
            Ate { cooked: true, .. } => Severity::Success,
            _ => Severity::Info,
        }
    }
}

impl std::fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use SimulationEvent::*;
        match self {
            Welcome => write!(f, "Welcome survivor. Find Apples and catch fish!"),
            RainStarted { heavy: true, .. } => write!(f, "A storm is brewing! Heavy rain!"),
            RainStarted { heavy: false, .. } => write!(f, "It started raining."),
            RainStopped => write!(f, "The rain has stopped."),
            TorchDoused => write!(f, "The water extinguished your torch!"),
            TorchBurnedOut => write!(f, "Your torch burned out."),
            CaughtCold => write!(f, "You caught a cold from the dampness!"),
            Recovered => write!(f, "You feel better."),
            Collapsed { score } => write!(f, "You collapsed from exhaustion. Final score: {score}"),
            BackpackFull => write!(f, "Backpack is full!"),
            StorageFull => write!(f, "Storage is full!"),
            Crafted { item } => write!(f, "Crafted {item}!"),
            TorchCrafted => write!(f, "Crafted a torch from wood."),
            SeedPlanted => write!(f, "Planted an apple seed."),
            TorchLit => write!(f, "Lit a torch."),
            CampfireBuilt { large: true } => write!(f, "Built a large campfire! Lasts all night."),
            CampfireBuilt { large: false } => write!(f, "Built a campfire!"),
            Ate { cooked: true, heal, .. } => write!(f, "Ate delicious grilled fish! +{heal} energy"),
            Ate { item, heal, .. } => write!(f, "Ate {item}. +{heal} energy"),
            SeedDropped => write!(f, "Dropped an apple seed."),
            MalnutritionWarning => write!(f, "Warning: Need balanced diet."),
            MalnutritionSickness => write!(f, "Sick from malnutrition!"),
            RawFishSickness => write!(f, "Raw fish made you sick!"),
            TreeShaken { dropped: Some(ItemType::Wood) } => write!(f, "A log fell from the tree."),
            TreeShaken { dropped: Some(item) } => write!(f, "An {item} fell from the tree."),
            TreeShaken { dropped: None } => write!(f, "Nothing fell."),
            SaplingsGrew { count } => write!(f, "{count} saplings grew into trees."),
            NpcArrived { name, direction } => {
                write!(f, "Someone washed ashore to the {direction}! ({name})")
            }
            NpcWashedAway { name } => write!(f, "The tide carried {name} away."),
            NpcWoke { name } => write!(f, "{name} woke up."),
            NpcStarving { name } => write!(f, "{name} is starving and heading inland!"),
            NpcAte { name, item } => write!(f, "{name} ate some {item}."),
            NpcDied { name } => write!(f, "{name} died of exhaustion."),
            NpcTaskAssigned { name, task: Some(task) } => {
                let job = match task {
                    NpcTask::GatherWood => "gathering wood",
                    NpcTask::GatherApple => "gathering apples",
                    NpcTask::Fish => "fishing",
                };
                write!(f, "{name} is now {job}.")
            }
            NpcTaskAssigned { name, task: None } => write!(f, "{name} is taking a break."),
            NpcHandedOver { name, count } => write!(f, "Took {count} items from {name}."),
            NpcNothingToGive { name } => write!(f, "{name} has nothing to give."),
            NpcFed { name, item } => write!(f, "Gave {item} to {name}."),
        }
    }
}

/// One entry of the rolling log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    pub id: LogId,
    pub text: String,
    pub severity: Severity,
}

/// Bounded log of the most recent messages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    messages: VecDeque<LogMessage>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: LogId, event: &SimulationEvent) {
        if self.messages.len() == LOG_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(LogMessage {
            id,
            text: event.to_string(),
            severity: event.severity(),
        });
    }

    /// Oldest first
    pub fn messages(&self) -> impl Iterator<Item = &LogMessage> {
        self.messages.iter()
    }

    pub fn latest(&self) -> Option<&LogMessage> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_most_recent_five() {
        let mut log = EventLog::new();
        for i in 0..8 {
            log.push(LogId(i), &SimulationEvent::SaplingsGrew { count: i as usize });
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        let ids: Vec<u64> = log.messages().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
        assert_eq!(log.latest().map(|m| m.text.as_str()), Some("7 saplings grew into trees."));
    }

    #[test]
    fn test_severity_classes() {
        assert_eq!(SimulationEvent::BackpackFull.severity(), Severity::Warning);
        assert_eq!(SimulationEvent::CaughtCold.severity(), Severity::Danger);
        assert_eq!(SimulationEvent::Recovered.severity(), Severity::Success);
        assert_eq!(SimulationEvent::RainStopped.severity(), Severity::Info);
        let grilled = SimulationEvent::Ate { item: ItemType::Fish, heal: 60.0, cooked: true };
        assert_eq!(grilled.severity(), Severity::Success);
    }

    #[test]
    fn test_shake_messages() {
        let wood = SimulationEvent::TreeShaken { dropped: Some(ItemType::Wood) };
        let apple = SimulationEvent::TreeShaken { dropped: Some(ItemType::Apple) };
        assert_eq!(wood.to_string(), "A log fell from the tree.");
        assert_eq!(apple.to_string(), "An apple fell from the tree.");
    }
}
