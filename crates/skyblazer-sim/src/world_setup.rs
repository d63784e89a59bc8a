//! Entity spawn factories for populating the simulation world.
//!
//! Creates the player craft, obstacles, enemies, projectiles, pickups,
//! rings, and the boss with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyblazer_core::components::*;
use skyblazer_core::constants::*;
use skyblazer_core::enums::*;
use skyblazer_core::types::{Position, Velocity};

use crate::guidance;
use crate::missile::HomingMissile;

/// Enemy class mix per level: (standard, fast, heavy) weights summing to 1.
const LEVEL_ENEMY_WEIGHTS: [[f64; 3]; LEVEL_COUNT] = [
    [1.0, 0.0, 0.0],
    [0.7, 0.3, 0.0],
    [0.5, 0.3, 0.2],
    [0.35, 0.35, 0.3],
    [0.3, 0.4, 0.3],
];

/// Spawn the player craft at the origin of the flight envelope.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerCraft {
            health: PLAYER_MAX_HEALTH,
            shield: false,
            missile_cooldown: 0,
            laser_ticks: 0,
        },
        Position::new(0.0, 0.0, 0.0),
        Velocity::new(0.0, 0.0, 0.0),
    ))
}

/// Pick a lateral spawn coordinate. Favors the flanks over the center lane,
/// shaping the corridor the player has to thread.
fn pick_lane(rng: &mut ChaCha8Rng) -> f64 {
    if rng.gen_bool(FLANK_SPAWN_BIAS) {
        let magnitude = rng.gen_range(FLANK_BAND_MIN..FLANK_BAND_MAX) * ENVELOPE_X;
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    } else {
        rng.gen_range(-CENTER_LANE_FRACTION..CENTER_LANE_FRACTION) * ENVELOPE_X
    }
}

/// Spawn an obstacle at the far plane. Kind follows the level's theme.
pub fn spawn_obstacle(world: &mut World, rng: &mut ChaCha8Rng, level: usize) -> hecs::Entity {
    let kind = obstacle_kind_for_level(level);
    let x = pick_lane(rng);
    let y = rng.gen_range(-ENVELOPE_Y..ENVELOPE_Y);
    world.spawn((
        Obstacle {
            kind,
            radius: obstacle_radius(kind),
        },
        Position::new(x, y, SPAWN_DEPTH),
    ))
}

/// Obstacle flavor for each level theme.
pub fn obstacle_kind_for_level(level: usize) -> ObstacleKind {
    match level {
        0 => ObstacleKind::Tree,
        1 => ObstacleKind::Buoy,
        2 => ObstacleKind::Cactus,
        3 => ObstacleKind::Mushroom,
        _ => ObstacleKind::Spike,
    }
}

fn obstacle_radius(kind: ObstacleKind) -> f64 {
    match kind {
        ObstacleKind::Tree => 8.0,
        ObstacleKind::Buoy => 5.0,
        ObstacleKind::Cactus => 6.0,
        ObstacleKind::Mushroom => 7.0,
        ObstacleKind::Spike => 6.0,
    }
}

/// Spawn an enemy at the far plane, class drawn from the level's mix.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, level: usize) -> hecs::Entity {
    let class = roll_enemy_class(rng, level);
    let (hp, speed, radius, fire_interval) = enemy_class_params(class);
    let x = pick_lane(rng);
    let y = rng.gen_range(-ENVELOPE_Y..ENVELOPE_Y);
    world.spawn((
        Enemy {
            class,
            hp,
            radius,
            fire_timer: fire_interval,
        },
        Position::new(x, y, SPAWN_DEPTH),
        Velocity::new(0.0, 0.0, speed),
    ))
}

/// Stat table per enemy class: (hp, approach speed, radius, fire interval).
pub fn enemy_class_params(class: EnemyClass) -> (u32, f64, f64, u32) {
    match class {
        EnemyClass::Standard => (2, 90.0, 3.0, 150),
        EnemyClass::Fast => (1, 140.0, 2.5, 180),
        EnemyClass::Heavy => (6, 60.0, 6.0, 100),
    }
}

fn roll_enemy_class(rng: &mut ChaCha8Rng, level: usize) -> EnemyClass {
    let weights = LEVEL_ENEMY_WEIGHTS[level.min(LEVEL_COUNT - 1)];
    let roll: f64 = rng.gen();
    if roll < weights[0] {
        EnemyClass::Standard
    } else if roll < weights[0] + weights[1] {
        EnemyClass::Fast
    } else {
        EnemyClass::Heavy
    }
}

/// Spawn a pickup at the far plane.
pub fn spawn_pickup(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let roll: f64 = rng.gen();
    let kind = if roll < 0.4 {
        PickupKind::Health
    } else if roll < 0.7 {
        PickupKind::Shield
    } else {
        PickupKind::Laser
    };
    let x = pick_lane(rng);
    let y = rng.gen_range(-ENVELOPE_Y..ENVELOPE_Y);
    world.spawn((Pickup { kind, spin: 0.0 }, Position::new(x, y, SPAWN_DEPTH)))
}

/// Spawn a score ring at the far plane.
pub fn spawn_ring(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let x = pick_lane(rng);
    let y = rng.gen_range(-ENVELOPE_Y..ENVELOPE_Y);
    world.spawn((ScoreRing { spin: 0.0 }, Position::new(x, y, SPAWN_DEPTH)))
}

/// Spawn the boss at the start of its weave.
pub fn spawn_boss(world: &mut World) -> hecs::Entity {
    world.spawn((
        Boss {
            hp: BOSS_MAX_HP,
            max_hp: BOSS_MAX_HP,
            theta: 0.0,
            attack_timer: BOSS_ATTACK_INTERVAL_TICKS,
        },
        Position::new(0.0, BOSS_WEAVE_Y + BOSS_WEAVE_Y_OFFSET, BOSS_DEPTH),
    ))
}

/// Spawn an enemy projectile at `from`, aimed at `toward`.
pub fn spawn_enemy_shot(world: &mut World, from: Position, toward: Position) -> hecs::Entity {
    let dir = guidance::unit_toward(&from, &toward);
    world.spawn((EnemyShot { dir }, from))
}

/// Spawn a player bolt at the craft's position.
pub fn spawn_bolt(world: &mut World, origin: Position, kind: BoltKind) -> hecs::Entity {
    world.spawn((
        Bolt {
            kind,
            traveled: 0.0,
        },
        origin,
    ))
}

/// Spawn a missile volley fanned slightly across the craft's nose.
pub fn spawn_missile_volley(world: &mut World, origin: Position) {
    for i in 0..MISSILE_VOLLEY {
        let centered = i as f64 - (MISSILE_VOLLEY as f64 - 1.0) / 2.0;
        let heading = guidance::unit_toward(
            &origin,
            &Position::new(
                origin.x + centered * MISSILE_VOLLEY_SPREAD * 100.0,
                origin.y,
                origin.z - 100.0,
            ),
        );
        world.spawn((
            HomingMissile {
                target: None,
                life_ticks: MISSILE_LIFETIME_TICKS,
            },
            origin,
            heading,
        ));
    }
}
