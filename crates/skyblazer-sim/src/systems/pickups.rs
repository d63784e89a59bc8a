//! Pickup system — scroll, cosmetic spin, collection effects.

use hecs::{Entity, World};

use skyblazer_core::components::{Pickup, PlayerCraft};
use skyblazer_core::constants::*;
use skyblazer_core::enums::PickupKind;
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::Position;

use crate::systems::player_position;

pub fn run(
    world: &mut World,
    dt: f64,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = player_position(world);
    let mut collected: Vec<(Entity, PickupKind)> = Vec::new();

    for (entity, (pickup, pos)) in world.query_mut::<(&mut Pickup, &mut Position)>() {
        pos.z += SCROLL_SPEED * dt;
        pickup.spin += SPIN_RATE * dt;
        if pos.z > DESPAWN_DEPTH {
            despawn_buffer.push(entity);
            continue;
        }
        if let Some(ppos) = player_pos {
            if pos.distance_to(&ppos) <= PICKUP_RADIUS + PLAYER_RADIUS + COLLISION_MARGIN {
                collected.push((entity, pickup.kind));
            }
        }
    }

    for (entity, kind) in collected {
        apply_pickup(world, kind, audio_events);
        despawn_buffer.push(entity);
    }
}

/// Apply a collected pickup's effect to the player.
fn apply_pickup(world: &mut World, kind: PickupKind, audio_events: &mut Vec<AudioEvent>) {
    for (_entity, craft) in world.query_mut::<&mut PlayerCraft>() {
        match kind {
            PickupKind::Health => {
                craft.health = (craft.health + HEALTH_PICKUP_AMOUNT).min(PLAYER_MAX_HEALTH);
            }
            PickupKind::Shield => craft.shield = true,
            PickupKind::Laser => craft.laser_ticks = LASER_DURATION_TICKS,
        }
    }
    audio_events.push(AudioEvent::PickupCollected { kind });
}
