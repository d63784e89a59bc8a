//! Spawn policy — one independent Bernoulli trial per spawnable type per
//! tick, yielding geometric inter-arrival times rather than a fixed cadence.
//! Also handles the one-time boss arrival on the final level.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyblazer_core::constants::*;
use skyblazer_core::events::AudioEvent;

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: usize,
    boss_spawned: &mut bool,
    audio_events: &mut Vec<AudioEvent>,
) {
    if rng.gen_bool(OBSTACLE_SPAWN_CHANCE) {
        world_setup::spawn_obstacle(world, rng, level);
    }
    if rng.gen_bool(ENEMY_SPAWN_CHANCE) {
        world_setup::spawn_enemy(world, rng, level);
    }
    if rng.gen_bool(PICKUP_SPAWN_CHANCE) {
        world_setup::spawn_pickup(world, rng);
    }
    if rng.gen_bool(RING_SPAWN_CHANCE) {
        world_setup::spawn_ring(world, rng);
    }

    // The boss arrives exactly once per run, the tick the final level is
    // reached (whether by progression or by starting there).
    if level == FINAL_LEVEL && !*boss_spawned {
        world_setup::spawn_boss(world);
        *boss_spawned = true;
        audio_events.push(AudioEvent::BossArrived);
    }
}
