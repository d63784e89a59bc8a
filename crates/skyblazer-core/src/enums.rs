//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    LevelSelect,
    Playing,
    Paused,
    GameOver,
}

/// How a run ended. Victory requires an actual boss kill; a run that ends
/// with the boss never spawned (or still alive) is a defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// Obstacle flavor, keyed by the current level's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Level 0 — forest.
    Tree,
    /// Level 1 — ocean.
    Buoy,
    /// Level 2 — desert.
    Cactus,
    /// Level 3 — twilight forest.
    Mushroom,
    /// Level 4 — volcano.
    Spike,
}

/// Enemy craft class. Class determines hp, speed, radius, and score value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    Standard,
    Fast,
    Heavy,
}

/// Pickup flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    Shield,
    Laser,
}

/// Player projectile variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltKind {
    /// Consumed on the first target hit.
    #[default]
    Normal,
    /// Pierces every target it crosses until it expires by travel distance.
    Laser,
}

/// Axis a thrust input acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustAxis {
    Lateral,
    Vertical,
}
