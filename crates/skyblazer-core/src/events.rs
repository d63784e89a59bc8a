//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio events for the frontend sound system, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// The player took hull damage.
    PlayerHit { damage: i32 },
    /// The shield absorbed a hit and broke.
    ShieldBroken,
    /// An enemy was destroyed by player fire.
    EnemyDown { class: EnemyClass },
    /// A pickup was collected.
    PickupCollected { kind: PickupKind },
    /// A score ring was collected.
    RingCollected,
    /// A missile volley left the rails.
    MissilesAway,
    /// The score crossed a threshold and the level advanced.
    LevelUp { level: usize },
    /// The boss entered the arena.
    BossArrived,
    /// The boss took damage.
    BossHit,
    /// The boss was destroyed.
    BossDown,
    /// The run ended.
    RunEnded { outcome: RunOutcome },
}
