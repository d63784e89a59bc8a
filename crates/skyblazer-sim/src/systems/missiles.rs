//! Homing missile system — target re-validation, forward acquisition,
//! steering, point-distance hits, and lifetime expiry.

use hecs::{Entity, World};

use skyblazer_core::components::{Boss, Enemy};
use skyblazer_core::constants::*;
use skyblazer_core::enums::RunOutcome;
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::{Position, Velocity};

use crate::combat;
use crate::guidance;
use crate::missile::HomingMissile;
use crate::progress::ScoreState;
use crate::systems::out_of_bounds;

pub fn run(
    world: &mut World,
    dt: f64,
    score: &mut ScoreState,
    outcome: &mut Option<RunOutcome>,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let enemies: Vec<(Entity, Position, f64)> = {
        let mut query = world.query::<(&Enemy, &Position)>();
        query
            .iter()
            .filter(|(_, (enemy, _))| enemy.hp > 0)
            .map(|(entity, (enemy, pos))| (entity, *pos, enemy.radius))
            .collect()
    };
    let boss: Option<(Entity, Position)> = {
        let mut query = world.query::<(&Boss, &Position)>();
        query
            .iter()
            .find(|(_, (boss, _))| boss.hp > 0)
            .map(|(entity, (_, pos))| (entity, *pos))
    };

    // Homing candidates: every live enemy, plus the boss.
    let mut candidates: Vec<(Entity, Position)> =
        enemies.iter().map(|&(entity, pos, _)| (entity, pos)).collect();
    if let Some((entity, pos)) = boss {
        candidates.push((entity, pos));
    }

    let missile_list: Vec<Entity> = {
        let mut query = world.query::<&HomingMissile>();
        query.iter().map(|(entity, _)| entity).collect()
    };

    for missile_entity in missile_list {
        // Lifetime budget first: a missile is pruned exactly at its last tick.
        let expired = {
            let mut missile = match world.get::<&mut HomingMissile>(missile_entity) {
                Ok(m) => m,
                Err(_) => continue,
            };
            missile.life_ticks = missile.life_ticks.saturating_sub(1);
            missile.life_ticks == 0
        };
        if expired {
            despawn_buffer.push(missile_entity);
            continue;
        }

        let pos = match world.get::<&Position>(missile_entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };
        let heading = match world.get::<&Velocity>(missile_entity) {
            Ok(v) => *v,
            Err(_) => continue,
        };
        let current_target = match world.get::<&HomingMissile>(missile_entity) {
            Ok(m) => m.target,
            Err(_) => continue,
        };

        // Re-validate the target handle against this tick's live hostiles;
        // a stale handle triggers re-acquisition, never a fault.
        let valid = current_target
            .map_or(false, |t| candidates.iter().any(|&(entity, _)| entity == t));
        let target = if valid {
            current_target
        } else {
            guidance::acquire_target(&pos, &candidates)
        };

        // Steer toward the target; with none, fly straight.
        let target_pos = target.and_then(|t| {
            candidates
                .iter()
                .find(|&&(entity, _)| entity == t)
                .map(|&(_, p)| p)
        });
        let new_heading = match target_pos {
            Some(tpos) => guidance::steer_toward(&heading, &pos, &tpos, MISSILE_STEER_GAIN),
            None => heading,
        };

        let new_pos = Position::new(
            pos.x + new_heading.x * MISSILE_SPEED * dt,
            pos.y + new_heading.y * MISSILE_SPEED * dt,
            pos.z + new_heading.z * MISSILE_SPEED * dt,
        );

        if let Ok(mut missile) = world.get::<&mut HomingMissile>(missile_entity) {
            missile.target = target;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(missile_entity) {
            *vel = new_heading;
        }
        if let Ok(mut p) = world.get::<&mut Position>(missile_entity) {
            *p = new_pos;
        }

        if out_of_bounds(&new_pos) {
            despawn_buffer.push(missile_entity);
            continue;
        }

        // Point-distance hits; a missile is consumed by its first landed hit.
        let mut consumed = false;
        for &(enemy_entity, epos, eradius) in &enemies {
            if new_pos.distance_to(&epos) <= eradius + MISSILE_RADIUS + COLLISION_MARGIN
                && combat::hit_enemy(world, enemy_entity, MISSILE_DAMAGE, score, audio_events)
            {
                consumed = true;
                break;
            }
        }
        if !consumed {
            if let Some((boss_entity, bpos)) = boss {
                if new_pos.distance_to(&bpos) <= BOSS_RADIUS + MISSILE_RADIUS + COLLISION_MARGIN {
                    consumed = combat::hit_boss(
                        world,
                        boss_entity,
                        MISSILE_BOSS_DAMAGE,
                        score,
                        outcome,
                        audio_events,
                    );
                }
            }
        }
        if consumed {
            despawn_buffer.push(missile_entity);
        }
    }
}
