//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — run state lives on the engine,
//! entity state in components. The engine calls them in a fixed order.

pub mod bolts;
pub mod boss;
pub mod cleanup;
pub mod enemies;
pub mod missiles;
pub mod obstacles;
pub mod pickups;
pub mod player;
pub mod rings;
pub mod shots;
pub mod snapshot;
pub mod spawner;

use hecs::World;

use skyblazer_core::components::PlayerCraft;
use skyblazer_core::constants::{DESPAWN_DEPTH, ENVELOPE_X, ENVELOPE_Y, SPAWN_DEPTH};
use skyblazer_core::types::Position;

/// Current player position (used by several collision systems).
pub(crate) fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&PlayerCraft, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// True once a free-flying projectile has left the playable volume.
pub(crate) fn out_of_bounds(pos: &Position) -> bool {
    pos.x.abs() > ENVELOPE_X * 1.5
        || pos.y.abs() > ENVELOPE_Y * 1.5
        || pos.z < SPAWN_DEPTH
        || pos.z > DESPAWN_DEPTH
}
