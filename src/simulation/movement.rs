//! Player kinematics: walking toward a target, swimming and shelter

use crate::core::clock::TickDelta;
use crate::core::types::Vec2;
use crate::ecs::world::World;
use crate::simulation::tick::TickSnapshot;

/// Closer than this to the target counts as arrived
const ARRIVAL_DISTANCE: f32 = 0.1;

/// Set a new walk target. Destinations past the movement limit are refused.
pub fn request_move(world: &mut World, destination: Vec2) -> bool {
    if destination.length() > world.config.map.water_movement_limit {
        tracing::debug!(x = destination.x, y = destination.y, "move refused beyond limit");
        return false;
    }
    world.player.move_target = Some(destination);
    true
}

/// Step the player toward their target, then refresh the derived flags
pub fn update_player_kinematics(world: &mut World, snapshot: &TickSnapshot, delta: TickDelta) {
    let map = world.config.map.clone();
    let speed = world.config.player.movement_speed
        * if world.player.sick {
            world.config.player.sick_speed_multiplier
        } else {
            1.0
        };
    let player = &mut world.player;

    player.is_moving = false;
    if let Some(target) = player.move_target {
        let to_target = target - player.position;
        let distance = to_target.length();
        if distance < ARRIVAL_DISTANCE {
            player.move_target = None;
        } else {
            let step = (speed * delta.secs()).min(distance);
            player.position = player.position + to_target.normalize() * step;
            player.is_moving = true;
            if player.position.distance(&target) < ARRIVAL_DISTANCE {
                player.move_target = None;
            }
        }
    }

    let from_centre = player.position.length();
    player.is_swimming = from_centre > map.swim_threshold;
    player.is_sheltered = from_centre < map.workbench_shelter_radius
        || snapshot
            .tree_positions
            .iter()
            .any(|t| t.distance(&player.position) < map.shelter_distance);
}
