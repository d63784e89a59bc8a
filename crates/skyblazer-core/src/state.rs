//! Game state snapshot — the complete visible state handed to the renderer
//! each tick. The renderer has no write access back into the core.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete read-only game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current level while playing.
    pub level: usize,
    /// Level-select cursor.
    pub selected_level: usize,
    pub score: u64,
    /// Set once the run has ended; distinguishes victory from defeat.
    pub outcome: Option<RunOutcome>,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub enemies: Vec<EnemyView>,
    pub enemy_shots: Vec<ShotView>,
    pub bolts: Vec<BoltView>,
    pub missiles: Vec<MissileView>,
    pub pickups: Vec<PickupView>,
    pub rings: Vec<RingView>,
    pub boss: Option<BossView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Player pose and status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    pub health: i32,
    pub shield: bool,
    pub cheat: bool,
    /// True while the laser weapon is armed.
    pub laser_armed: bool,
    /// True when a missile volley may fire.
    pub missiles_ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub position: Position,
    pub kind: ObstacleKind,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub class: EnemyClass,
    pub hp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView {
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltView {
    pub position: Position,
    pub kind: BoltKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub position: Position,
    pub heading: Velocity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub kind: PickupKind,
    pub spin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingView {
    pub position: Position,
    pub spin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
}
