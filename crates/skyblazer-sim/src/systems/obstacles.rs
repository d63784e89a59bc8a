//! Obstacle system — scroll toward the player, ram detection, despawn plane.

use hecs::{Entity, World};

use skyblazer_core::components::Obstacle;
use skyblazer_core::constants::*;
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::Position;

use crate::combat;
use crate::systems::player_position;

pub fn run(
    world: &mut World,
    dt: f64,
    cheat: bool,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = player_position(world);
    let mut rammed: Vec<Entity> = Vec::new();

    for (entity, (obstacle, pos)) in world.query_mut::<(&Obstacle, &mut Position)>() {
        pos.z += SCROLL_SPEED * dt;
        if pos.z > DESPAWN_DEPTH {
            despawn_buffer.push(entity);
            continue;
        }
        if let Some(ppos) = player_pos {
            if pos.distance_to(&ppos) <= obstacle.radius + PLAYER_RADIUS + COLLISION_MARGIN {
                rammed.push(entity);
            }
        }
    }

    // A struck obstacle deals fixed collision damage and is deactivated.
    for entity in rammed {
        combat::hit_player(world, COLLISION_DAMAGE, cheat, audio_events);
        despawn_buffer.push(entity);
    }
}
