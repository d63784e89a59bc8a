//! Cleanup system: removes deactivated and consumed entities.
//!
//! Runs last in the tick, so anything deactivated during the update pass is
//! gone before the snapshot is built and before the next tick's spawns.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use skyblazer_core::components::{Boss, Enemy};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    // Sweep destructibles whose hulls failed this tick.
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.hp == 0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, boss) in world.query_mut::<&Boss>() {
        if boss.hp == 0 {
            despawn_buffer.push(entity);
        }
    }

    // Despawn collected entities. Double entries are harmless: the second
    // despawn of an entity is a no-op error.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
