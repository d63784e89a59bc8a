//! Score ring system — scroll, cosmetic spin, collection always scores.

use hecs::{Entity, World};

use skyblazer_core::components::ScoreRing;
use skyblazer_core::constants::*;
use skyblazer_core::events::AudioEvent;
use skyblazer_core::types::Position;

use crate::progress::ScoreState;
use crate::systems::player_position;

pub fn run(
    world: &mut World,
    dt: f64,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = player_position(world);

    for (entity, (ring, pos)) in world.query_mut::<(&mut ScoreRing, &mut Position)>() {
        pos.z += SCROLL_SPEED * dt;
        ring.spin += SPIN_RATE * dt;
        if pos.z > DESPAWN_DEPTH {
            despawn_buffer.push(entity);
            continue;
        }
        if let Some(ppos) = player_pos {
            if pos.distance_to(&ppos) <= RING_RADIUS + PLAYER_RADIUS + COLLISION_MARGIN {
                score.rings_collected += 1;
                audio_events.push(AudioEvent::RingCollected);
                score.award(RING_SCORE, audio_events);
                despawn_buffer.push(entity);
            }
        }
    }
}
