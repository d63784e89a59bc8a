//! Boss behavior — Lissajous-like weave and the timed 3-shot spread.

use hecs::World;

use skyblazer_core::components::Boss;
use skyblazer_core::constants::*;
use skyblazer_core::types::Position;

use crate::systems::player_position;
use crate::world_setup;

pub fn run(world: &mut World, dt: f64) {
    let player_pos = player_position(world);
    let mut spreads: Vec<(Position, Position)> = Vec::new();

    for (_entity, (boss, pos)) in world.query_mut::<(&mut Boss, &mut Position)>() {
        if boss.hp == 0 {
            continue;
        }

        // Weave: x = A sin(theta), y = B cos(2 theta) + offset.
        boss.theta += BOSS_WEAVE_RATE * dt;
        pos.x = BOSS_WEAVE_X * boss.theta.sin();
        pos.y = BOSS_WEAVE_Y * (2.0 * boss.theta).cos() + BOSS_WEAVE_Y_OFFSET;

        boss.attack_timer = boss.attack_timer.saturating_sub(1);
        if boss.attack_timer == 0 {
            if let Some(ppos) = player_pos {
                spreads.push((*pos, ppos));
            }
            boss.attack_timer = BOSS_ATTACK_INTERVAL_TICKS;
        }
    }

    // Three shots aimed at the player with lateral offsets.
    for (from, ppos) in spreads {
        for offset in [-BOSS_SPREAD_OFFSET, 0.0, BOSS_SPREAD_OFFSET] {
            let aim = Position::new(ppos.x + offset, ppos.y, ppos.z);
            world_setup::spawn_enemy_shot(world, from, aim);
        }
    }
}
