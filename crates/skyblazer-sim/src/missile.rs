//! Homing missile data model.
//!
//! Lives in the sim crate rather than skyblazer-core because it carries a
//! live `hecs::Entity` handle to its current target. The handle is
//! generation-checked, so a slot reused for a new entity never validates as
//! the original target; it is re-validated every tick and never owns the
//! entity it points at.

/// Per-missile guidance state, attached alongside `Position` and the
/// `Velocity` that holds the missile's unit heading.
#[derive(Debug, Clone, Copy)]
pub struct HomingMissile {
    /// Current homing target, if any.
    pub target: Option<hecs::Entity>,
    /// Remaining lifetime ticks; the missile is pruned when this hits zero.
    pub life_ticks: u32,
}
