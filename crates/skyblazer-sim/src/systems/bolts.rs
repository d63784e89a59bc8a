//! Player projectile system.
//!
//! Bolts are fast enough to cross an enemy hull in a single tick, so the
//! enemy check is a swept test: lateral overlap plus a z interval covering
//! the whole path traveled this tick. The boss's hitbox is large and static,
//! so a plain point-distance test suffices there.
//!
//! The per-bolt scan over every enemy is a bounded O(bolts × enemies)
//! nested loop.

use hecs::{Entity, World};

use skyblazer_core::components::{Bolt, Boss, Enemy};
use skyblazer_core::constants::*;
use skyblazer_core::enums::{BoltKind, RunOutcome};
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::Position;

use crate::combat;
use crate::progress::ScoreState;

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
    let bolt_list: Vec<(Entity, BoltKind, Position)> = {
        let mut query = world.query::<(&Bolt, &Position)>();
        query
            .iter()
            .map(|(entity, (bolt, pos))| (entity, bolt.kind, *pos))
            .collect()
    };

    let travel = BOLT_SPEED * dt;

    for (bolt_entity, kind, pos) in bolt_list {
        let mut consumed = false;

        // Swept check: the bolt covers [z − travel, z] this tick; an enemy
        // whose lateral distance fits and whose z lies inside that interval
        // (padded by the combined radius) is hit even if the bolt would end
        // the tick past it.
        for &(enemy_entity, epos, eradius) in &enemies {
            let reach = eradius + BOLT_RADIUS;
            if pos.lateral_distance_to(&epos) > reach {
                continue;
            }
            if epos.z > pos.z + reach || epos.z < pos.z - travel - reach {
                continue;
            }

            let damage = match kind {
                BoltKind::Normal => BOLT_DAMAGE,
                BoltKind::Laser => LASER_DAMAGE,
            };
            // An enemy deactivated earlier this tick soaks nothing and does
            // not consume the bolt.
            if combat::hit_enemy(world, enemy_entity, damage, score, audio_events)
                && kind == BoltKind::Normal
            {
                consumed = true;
                break;
            }
        }

        if !consumed {
            if let Some((boss_entity, bpos)) = boss {
                if pos.distance_to(&bpos) <= BOSS_RADIUS + BOLT_RADIUS + COLLISION_MARGIN {
                    let damage = match kind {
                        BoltKind::Normal => BOLT_BOSS_DAMAGE,
                        BoltKind::Laser => LASER_BOSS_DAMAGE,
                    };
                    if combat::hit_boss(world, boss_entity, damage, score, outcome, audio_events)
                        && kind == BoltKind::Normal
                    {
                        consumed = true;
                    }
                }
            }
        }

        if consumed {
            despawn_buffer.push(bolt_entity);
            continue;
        }

        // Advance, and expire by accumulated travel distance.
        let mut expired = false;
        if let Ok(mut bolt) = world.get::<&mut Bolt>(bolt_entity) {
            bolt.traveled += travel;
            expired = bolt.traveled > BOLT_MAX_RANGE;
        }
        if let Ok(mut bpos) = world.get::<&mut Position>(bolt_entity) {
            bpos.z -= travel;
        }
        if expired {
            despawn_buffer.push(bolt_entity);
        }
    }
}
