//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only — it never modifies the world. View lists are
//! sorted by depth so the renderer gets a stable far-to-near ordering.

use std::cmp::Ordering;

use hecs::World;

use skyblazer_core::components::*;
use skyblazer_core::enums::{GamePhase, RunOutcome};
use skyblazer_core::events::AudioEvent;
use skyblazer_core::state::*;
use skyblazer_core::types::{Position, SimTime, Velocity};

use crate::missile::HomingMissile;
use crate::progress::ScoreState;

/// Build a complete GameSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    selected_level: usize,
    outcome: Option<RunOutcome>,
    cheat: bool,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        level: score.level,
        selected_level,
        score: score.score,
        outcome,
        player: build_player(world, cheat),
        obstacles: build_obstacles(world),
        enemies: build_enemies(world),
        enemy_shots: build_shots(world),
        bolts: build_bolts(world),
        missiles: build_missiles(world),
        pickups: build_pickups(world),
        rings: build_rings(world),
        boss: build_boss(world),
        audio_events,
    }
}

/// Far-to-near ordering on depth for stable rendering.
fn by_depth(a: &Position, b: &Position) -> Ordering {
    a.z.partial_cmp(&b.z).unwrap_or(Ordering::Equal)
}

fn build_player(world: &World, cheat: bool) -> PlayerView {
    world
        .query::<(&PlayerCraft, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (craft, pos, vel))| PlayerView {
            position: *pos,
            velocity: *vel,
            health: craft.health,
            shield: craft.shield,
            cheat,
            laser_armed: craft.laser_ticks > 0,
            missiles_ready: craft.missile_cooldown == 0,
        })
        .unwrap_or_default()
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut views: Vec<ObstacleView> = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(_, (obstacle, pos))| ObstacleView {
            position: *pos,
            kind: obstacle.kind,
            radius: obstacle.radius,
        })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            position: *pos,
            class: enemy.class,
            hp: enemy.hp,
        })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_shots(world: &World) -> Vec<ShotView> {
    let mut views: Vec<ShotView> = world
        .query::<(&EnemyShot, &Position)>()
        .iter()
        .map(|(_, (_, pos))| ShotView { position: *pos })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_bolts(world: &World) -> Vec<BoltView> {
    let mut views: Vec<BoltView> = world
        .query::<(&Bolt, &Position)>()
        .iter()
        .map(|(_, (bolt, pos))| BoltView {
            position: *pos,
            kind: bolt.kind,
        })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut views: Vec<MissileView> = world
        .query::<(&HomingMissile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_, pos, vel))| MissileView {
            position: *pos,
            heading: *vel,
        })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut views: Vec<PickupView> = world
        .query::<(&Pickup, &Position)>()
        .iter()
        .map(|(_, (pickup, pos))| PickupView {
            position: *pos,
            kind: pickup.kind,
            spin: pickup.spin,
        })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_rings(world: &World) -> Vec<RingView> {
    let mut views: Vec<RingView> = world
        .query::<(&ScoreRing, &Position)>()
        .iter()
        .map(|(_, (ring, pos))| RingView {
            position: *pos,
            spin: ring.spin,
        })
        .collect();
    views.sort_by(|a, b| by_depth(&a.position, &b.position));
    views
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<(&Boss, &Position)>()
        .iter()
        .next()
        .map(|(_, (boss, pos))| BossView {
            position: *pos,
            hp: boss.hp,
            max_hp: boss.max_hp,
        })
}
