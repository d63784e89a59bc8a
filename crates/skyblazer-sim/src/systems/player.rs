//! Player motion and timer system.
//!
//! Thrust impulses land at command time; this system applies friction,
//! integrates position, clamps the craft to the flight envelope (killing
//! velocity on a clamped axis — no bounce), and counts weapon timers down.

use hecs::World;

use skyblazer_core::components::PlayerCraft;
use skyblazer_core::constants::*;
use skyblazer_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (craft, pos, vel)) in
        world.query_mut::<(&mut PlayerCraft, &mut Position, &mut Velocity)>()
    {
        // Friction, with a sub-epsilon snap to exactly zero so the craft
        // never drifts forever.
        vel.x *= PLAYER_FRICTION;
        vel.y *= PLAYER_FRICTION;
        if vel.x.abs() < VELOCITY_EPSILON {
            vel.x = 0.0;
        }
        if vel.y.abs() < VELOCITY_EPSILON {
            vel.y = 0.0;
        }

        pos.x += vel.x * dt;
        pos.y += vel.y * dt;

        if pos.x.abs() > ENVELOPE_X {
            pos.x = pos.x.clamp(-ENVELOPE_X, ENVELOPE_X);
            vel.x = 0.0;
        }
        if pos.y.abs() > ENVELOPE_Y {
            pos.y = pos.y.clamp(-ENVELOPE_Y, ENVELOPE_Y);
            vel.y = 0.0;
        }

        craft.missile_cooldown = craft.missile_cooldown.saturating_sub(1);
        craft.laser_ticks = craft.laser_ticks.saturating_sub(1);
    }
}
