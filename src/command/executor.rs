//! Command execution - applies player intents to the world
//!
//! Each intent is only legal in certain phases. Anything sent in the wrong
//! phase, or failing a silent precondition (empty slot, missing ingredients,
//! out of reach), does nothing and returns an empty result.

use crate::command::Intent;
use crate::core::types::{NpcId, TreeId, Vec2};
use crate::ecs::world::World;
use crate::entity::inventory::{self, ItemType};
use crate::entity::npc::NpcTask;
use crate::game::phase::GamePhase;
use crate::simulation::consumption;
use crate::simulation::events::SimulationEvent;
use crate::simulation::movement;
use crate::simulation::npc_ai;
use crate::simulation::resources::{self, CollectOutcome};
use crate::simulation::trees;

/// Executes world-level intents
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute an intent in the given phase
    pub fn execute(world: &mut World, phase: GamePhase, intent: &Intent) -> ExecutionResult {
        match (phase, intent) {
            (GamePhase::Playing, Intent::MoveTo(dest)) => move_to(world, *dest),
            (GamePhase::Playing, Intent::Collect(id)) => {
                match resources::collect_resource(world, *id) {
                    CollectOutcome::BackpackFull => ExecutionResult::event(SimulationEvent::BackpackFull),
                    _ => ExecutionResult::default(),
                }
            }
            (GamePhase::Playing, Intent::ShakeTree(id)) => shake(world, *id),
            (GamePhase::Playing, Intent::Eat(slot)) => ExecutionResult {
                events: consumption::eat(world, *slot),
                next_phase: None,
            },
            (GamePhase::Playing, Intent::InteractWorkbench) => {
                ExecutionResult::transition(GamePhase::Workbench)
            }
            (GamePhase::Playing, Intent::InteractNpc(id)) => interact_npc(world, *id),

            (GamePhase::Workbench, Intent::Craft(item)) => craft(world, *item),
            (GamePhase::Workbench, Intent::Deposit(slot)) => deposit(world, *slot),
            (GamePhase::Workbench, Intent::Withdraw(slot)) => withdraw(world, *slot),
            (GamePhase::Workbench, Intent::CloseWorkbench) => {
                ExecutionResult::transition(GamePhase::Playing)
            }

            (GamePhase::NpcMenu, Intent::CommandNpc(task)) => command_npc(world, *task),
            (GamePhase::NpcMenu, Intent::CollectFromNpc) => {
                on_selected(world, npc_ai::collect_from_npc)
            }
            (GamePhase::NpcMenu, Intent::FeedNpc) => on_selected(world, npc_ai::feed_npc),
            (GamePhase::NpcMenu, Intent::CloseNpcMenu) => {
                world.selected_npc = None;
                ExecutionResult::transition(GamePhase::Playing)
            }

            _ => {
                tracing::debug!(?phase, ?intent, "intent ignored in this phase");
                ExecutionResult::default()
            }
        }
    }
}

/// Result of executing an intent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    pub events: Vec<SimulationEvent>,
    /// Phase the session should switch to, if any
    pub next_phase: Option<GamePhase>,
}

impl ExecutionResult {
    fn event(event: SimulationEvent) -> Self {
        Self {
            events: vec![event],
            next_phase: None,
        }
    }

    fn transition(phase: GamePhase) -> Self {
        Self {
            events: Vec::new(),
            next_phase: Some(phase),
        }
    }
}

fn move_to(world: &mut World, destination: Vec2) -> ExecutionResult {
    if !movement::request_move(world, destination) {
        tracing::debug!(x = destination.x, y = destination.y, "move rejected");
    }
    ExecutionResult::default()
}

fn shake(world: &mut World, id: TreeId) -> ExecutionResult {
    let reach = world.config.player.tree_reach;
    let in_reach = world
        .tree_index(id)
        .map(|i| world.trees[i].position.distance(&world.player.position) <= reach)
        .unwrap_or(false);
    if !in_reach {
        return ExecutionResult::default();
    }
    ExecutionResult {
        events: trees::shake_tree(world, id).into_iter().collect(),
        next_phase: None,
    }
}

fn interact_npc(world: &mut World, id: NpcId) -> ExecutionResult {
    let Some(npc) = world.npc(id) else {
        return ExecutionResult::default();
    };
    if !npc.is_conscious() {
        return ExecutionResult {
            events: npc_ai::wake_npc(world, id).into_iter().collect(),
            next_phase: None,
        };
    }
    world.selected_npc = Some(id);
    ExecutionResult::transition(GamePhase::NpcMenu)
}

fn command_npc(world: &mut World, task: Option<NpcTask>) -> ExecutionResult {
    let Some(id) = world.selected_npc else {
        return ExecutionResult::transition(GamePhase::Playing);
    };
    let events = npc_ai::assign_task(world, id, task).into_iter().collect();
    world.selected_npc = None;
    ExecutionResult {
        events,
        next_phase: Some(GamePhase::Playing),
    }
}

/// Run an NPC action on the selected NPC. A selection that has since died
/// or washed away closes the menu.
fn on_selected(
    world: &mut World,
    action: fn(&mut World, NpcId) -> Option<SimulationEvent>,
) -> ExecutionResult {
    match world.selected_npc.filter(|id| world.npc(*id).is_some()) {
        Some(id) => ExecutionResult {
            events: action(world, id).into_iter().collect(),
            next_phase: None,
        },
        None => {
            world.selected_npc = None;
            ExecutionResult::transition(GamePhase::Playing)
        }
    }
}

fn craft(world: &mut World, item: ItemType) -> ExecutionResult {
    if !inventory::craft(&mut world.player.inventory, item) {
        return ExecutionResult::default();
    }
    tracing::info!(%item, "crafted");
    ExecutionResult::event(SimulationEvent::Crafted { item })
}

fn deposit(world: &mut World, slot: usize) -> ExecutionResult {
    if world.player.inventory.get(slot).is_none() {
        return ExecutionResult::default();
    }
    if !inventory::transfer(&mut world.player.inventory, slot, &mut world.storage) {
        return ExecutionResult::event(SimulationEvent::StorageFull);
    }
    ExecutionResult::default()
}

fn withdraw(world: &mut World, slot: usize) -> ExecutionResult {
    if world.storage.get(slot).is_none() {
        return ExecutionResult::default();
    }
    if !inventory::transfer(&mut world.storage, slot, &mut world.player.inventory) {
        return ExecutionResult::event(SimulationEvent::BackpackFull);
    }
    ExecutionResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::npc::{Npc, NpcState};

    fn playing(world: &mut World, intent: Intent) -> ExecutionResult {
        CommandExecutor::execute(world, GamePhase::Playing, &intent)
    }

    fn workbench(world: &mut World, intent: Intent) -> ExecutionResult {
        CommandExecutor::execute(world, GamePhase::Workbench, &intent)
    }

    #[test]
    fn test_craft_ignored_outside_workbench() {
        let mut world = World::default();
        for _ in 0..3 {
            world.player.inventory.insert(ItemType::Apple);
        }
        assert!(playing(&mut world, Intent::Craft(ItemType::AppleJuice)).events.is_empty());
        assert_eq!(world.player.inventory.count(ItemType::Apple), 3);
    }

    #[test]
    fn test_craft_at_workbench() {
        let mut world = World::default();
        for _ in 0..3 {
            world.player.inventory.insert(ItemType::Fish);
        }
        let result = workbench(&mut world, Intent::Craft(ItemType::BigFish));
        assert_eq!(result.events, vec![SimulationEvent::Crafted { item: ItemType::BigFish }]);
        assert_eq!(world.player.inventory.count(ItemType::BigFish), 1);
        assert_eq!(world.player.inventory.count(ItemType::Fish), 0);
    }

    #[test]
    fn test_craft_missing_ingredients_is_silent() {
        let mut world = World::default();
        world.player.inventory.insert(ItemType::Wood);
        world.player.inventory.insert(ItemType::Wood);
        let result = workbench(&mut world, Intent::Craft(ItemType::WoodStand));
        assert_eq!(result, ExecutionResult::default());
        assert_eq!(world.player.inventory.count(ItemType::Wood), 2);
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut world = World::default();
        world.player.inventory.insert(ItemType::Apple);
        assert!(workbench(&mut world, Intent::Deposit(0)).events.is_empty());
        assert_eq!(world.storage.count(ItemType::Apple), 1);
        assert!(world.player.inventory.get(0).is_none());

        workbench(&mut world, Intent::Withdraw(0));
        assert_eq!(world.player.inventory.count(ItemType::Apple), 1);
        assert_eq!(world.storage.occupied_count(), 0);
    }

    #[test]
    fn test_deposit_into_full_storage_warns() {
        let mut world = World::default();
        while world.storage.insert(ItemType::Wood).is_some() {}
        world.player.inventory.insert(ItemType::Apple);
        let result = workbench(&mut world, Intent::Deposit(0));
        assert_eq!(result.events, vec![SimulationEvent::StorageFull]);
        assert_eq!(world.player.inventory.get(0), Some(ItemType::Apple));
    }

    #[test]
    fn test_withdraw_into_full_backpack_warns() {
        let mut world = World::default();
        while world.player.inventory.insert(ItemType::Wood).is_some() {}
        world.storage.insert(ItemType::Fish);
        let result = workbench(&mut world, Intent::Withdraw(0));
        assert_eq!(result.events, vec![SimulationEvent::BackpackFull]);
        assert_eq!(world.storage.get(0), Some(ItemType::Fish));
    }

    #[test]
    fn test_workbench_open_and_close() {
        let mut world = World::default();
        assert_eq!(
            playing(&mut world, Intent::InteractWorkbench).next_phase,
            Some(GamePhase::Workbench)
        );
        assert_eq!(
            workbench(&mut world, Intent::CloseWorkbench).next_phase,
            Some(GamePhase::Playing)
        );
    }

    #[test]
    fn test_shake_requires_reach() {
        let mut world = World::default();
        let id = world.spawn_tree(Vec2::new(20.0, 0.0), 1.0);
        assert!(playing(&mut world, Intent::ShakeTree(id)).events.is_empty());
        assert_eq!(world.trees[0].shake_count, 0);

        world.player.position = Vec2::new(15.0, 0.0);
        let result = playing(&mut world, Intent::ShakeTree(id));
        assert_eq!(result.events.len(), 1);
        assert_eq!(world.trees[0].shake_count, 1);
    }

    #[test]
    fn test_collect_into_full_backpack_warns() {
        let mut world = World::default();
        while world.player.inventory.insert(ItemType::Wood).is_some() {}
        let id = world.spawn_resource(ItemType::Apple, Vec2::new(1.0, 0.0));
        let result = playing(&mut world, Intent::Collect(id));
        assert_eq!(result.events, vec![SimulationEvent::BackpackFull]);
        assert!(world.resource(id).map(|r| r.is_available()).unwrap_or(false));
    }

    #[test]
    fn test_interact_wakes_then_opens_menu() {
        let mut world = World::default();
        let id = world.ids.npc();
        let npc = Npc::washed_ashore(id, "Kai".into(), Vec2::new(3.0, 0.0), 0, &world.config.npc);
        world.npcs.push(npc);

        let result = playing(&mut world, Intent::InteractNpc(id));
        assert_eq!(result.events, vec![SimulationEvent::NpcWoke { name: "Kai".into() }]);
        assert_eq!(result.next_phase, None);
        assert_eq!(world.npcs[0].state, NpcState::Idle);

        let result = playing(&mut world, Intent::InteractNpc(id));
        assert_eq!(result.next_phase, Some(GamePhase::NpcMenu));
        assert_eq!(world.selected_npc, Some(id));

        let result = CommandExecutor::execute(
            &mut world,
            GamePhase::NpcMenu,
            &Intent::CommandNpc(Some(NpcTask::Fish)),
        );
        assert_eq!(result.next_phase, Some(GamePhase::Playing));
        assert_eq!(world.npcs[0].task, Some(NpcTask::Fish));
        assert_eq!(world.selected_npc, None);
    }

    #[test]
    fn test_menu_closes_when_selection_is_gone() {
        let mut world = World::default();
        world.selected_npc = Some(NpcId(42));
        let result = CommandExecutor::execute(&mut world, GamePhase::NpcMenu, &Intent::FeedNpc);
        assert_eq!(result.next_phase, Some(GamePhase::Playing));
        assert_eq!(world.selected_npc, None);
    }

    #[test]
    fn test_paused_ignores_world_intents() {
        let mut world = World::default();
        world.player.inventory.insert(ItemType::Apple);
        let result = CommandExecutor::execute(&mut world, GamePhase::Paused, &Intent::Eat(0));
        assert_eq!(result, ExecutionResult::default());
        assert_eq!(world.player.inventory.count(ItemType::Apple), 1);
    }
}
