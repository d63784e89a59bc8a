//! Enemy projectile system — flight along the launch direction, player hit
//! resolution, out-of-bounds removal.

use hecs::{Entity, World};

use skyblazer_core::components::EnemyShot;
use skyblazer_core::constants::*;
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::Position;

use crate::combat;
use crate::systems::{out_of_bounds, player_position};

pub fn run(
    world: &mut World,
    dt: f64,
    cheat: bool,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = player_position(world);
    let mut hits = 0u32;

    for (entity, (shot, pos)) in world.query_mut::<(&EnemyShot, &mut Position)>() {
        pos.x += shot.dir.x * ENEMY_SHOT_SPEED * dt;
        pos.y += shot.dir.y * ENEMY_SHOT_SPEED * dt;
        pos.z += shot.dir.z * ENEMY_SHOT_SPEED * dt;

        if out_of_bounds(pos) {
            despawn_buffer.push(entity);
            continue;
        }

        if let Some(ppos) = player_pos {
            if pos.distance_to(&ppos) <= ENEMY_SHOT_RADIUS + PLAYER_RADIUS + COLLISION_MARGIN {
                hits += 1;
                despawn_buffer.push(entity);
            }
        }
    }

    for _ in 0..hits {
        combat::hit_player(world, ENEMY_SHOT_DAMAGE, cheat, audio_events);
    }
}
