//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! with no defined effect in the current phase is a silent no-op.

use serde::{Deserialize, Serialize};

use crate::enums::ThrustAxis;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Menu navigation ---
    /// Advance / accept: start from the menu, launch the selected level,
    /// restart after game over, or abandon a paused run to level select.
    Confirm,
    /// Back / toggle: pause and unpause, back out of menus, request quit
    /// from the main menu.
    Cancel,
    /// Move the level-select cursor by `delta` (clamped to valid levels).
    SelectLevel { delta: i32 },

    // --- Flight ---
    /// Add one fixed impulse of acceleration on one velocity axis.
    Thrust { axis: ThrustAxis, sign: f64 },

    // --- Weapons ---
    /// Fire the primary weapon (bolt; laser variant while the laser is armed).
    FirePrimary,
    /// Fire a homing missile volley, subject to the missile cooldown.
    FireSecondary,

    // --- Debug ---
    /// Toggle invulnerability.
    ToggleCheat,
}
