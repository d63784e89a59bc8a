//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Destructible entities (enemies, boss) are live while `hp > 0`; an entity
//! at zero hp is inert for the rest of its tick and swept by cleanup.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Velocity;

/// The player's craft. Created at run start, never despawned during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCraft {
    /// Hull integrity, clamped to [0, 100].
    pub health: i32,
    /// One-hit shield; consumed by the first hit it absorbs.
    pub shield: bool,
    /// Ticks until the next missile volley may fire.
    pub missile_cooldown: u32,
    /// Ticks of laser weapon remaining (0 = primary fires normal bolts).
    pub laser_ticks: u32,
}

/// A terrain obstacle scrolling toward the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub radius: f64,
}

/// A hostile craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub class: EnemyClass,
    pub hp: u32,
    pub radius: f64,
    /// Ticks until the next aimed shot.
    pub fire_timer: u32,
}

/// A projectile fired by an enemy or the boss. Flies along a fixed
/// unit direction captured at launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot {
    pub dir: Velocity,
}

/// A player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bolt {
    pub kind: BoltKind,
    /// Accumulated travel distance; the bolt expires past its range budget.
    pub traveled: f64,
}

/// A collectible power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Cosmetic rotation angle (radians), advanced each tick for display.
    pub spin: f64,
}

/// A score ring. Always awards score on collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreRing {
    /// Cosmetic rotation angle (radians).
    pub spin: f64,
}

/// The final-level boss. Spawned once per run when the final level is
/// reached; `hp == 0` marks it defeated and ends the run in victory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss {
    pub hp: u32,
    pub max_hp: u32,
    /// Weave trajectory parameter.
    pub theta: f64,
    /// Ticks until the next spread attack.
    pub attack_timer: u32,
}
