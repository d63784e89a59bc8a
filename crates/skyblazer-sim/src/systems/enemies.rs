//! Enemy system — advance by class speed, aimed periodic fire, ram
//! resolution, despawn once past the player.

use hecs::{Entity, World};

use skyblazer_core::components::Enemy;
use skyblazer_core::constants::*;
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::{Position, Velocity};

use crate::combat;
use crate::systems::player_position;
use crate::world_setup;

pub fn run(
    world: &mut World,
    dt: f64,
    cheat: bool,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = player_position(world);
    let mut shots: Vec<(Position, Position)> = Vec::new();
    let mut rammed: Vec<Entity> = Vec::new();

    for (entity, (enemy, pos, vel)) in
        world.query_mut::<(&mut Enemy, &mut Position, &Velocity)>()
    {
        if enemy.hp == 0 {
            continue;
        }

        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;

        if pos.z > DESPAWN_DEPTH {
            despawn_buffer.push(entity);
            continue;
        }

        if let Some(ppos) = player_pos {
            // Aimed fire on a per-class cadence, only while still in front
            // of the player.
            enemy.fire_timer = enemy.fire_timer.saturating_sub(1);
            if enemy.fire_timer == 0 && pos.z < 0.0 {
                shots.push((*pos, ppos));
                let (_, _, _, fire_interval) = world_setup::enemy_class_params(enemy.class);
                enemy.fire_timer = fire_interval;
            }

            if pos.distance_to(&ppos) <= enemy.radius + PLAYER_RADIUS + COLLISION_MARGIN {
                rammed.push(entity);
            }
        }
    }

    for (from, toward) in shots {
        world_setup::spawn_enemy_shot(world, from, toward);
    }

    // A ramming enemy deals collision damage and is deactivated on the spot,
    // so later systems this tick cannot hit it. Ram kills award no score.
    for entity in rammed {
        combat::hit_player(world, COLLISION_DAMAGE, cheat, audio_events);
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.hp = 0;
        }
        despawn_buffer.push(entity);
    }
}
