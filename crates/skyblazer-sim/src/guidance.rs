//! Guidance for homing missiles.
//!
//! Provides the first-order steering filter and forward target acquisition.
//! Steering blends the current heading toward the target direction each tick
//! rather than snapping, which gives missiles a visible turning arc.

use glam::DVec3;

use skyblazer_core::types::{Position, Velocity};

/// Blend the current unit heading toward the direction of `target`:
/// `v' = v·(1−k) + unit(target − pos)·k`.
///
/// The result is re-normalized so position integration can scale it by a
/// constant speed. Returns the heading unchanged if the target is on top of
/// the missile.
pub fn steer_toward(heading: &Velocity, pos: &Position, target: &Position, gain: f64) -> Velocity {
    let desired = (DVec3::from(*target) - DVec3::from(*pos)).normalize_or_zero();
    if desired == DVec3::ZERO {
        return *heading;
    }

    let blended = DVec3::from(*heading) * (1.0 - gain) + desired * gain;
    let unit = blended.normalize_or_zero();
    if unit == DVec3::ZERO {
        // Blend cancelled out exactly (target dead astern); keep turning.
        return Velocity::from(desired);
    }
    Velocity::from(unit)
}

/// Unit direction from `from` to `to`. Falls back to straight down-range
/// (toward the player) when the points coincide.
pub fn unit_toward(from: &Position, to: &Position) -> Velocity {
    let dir = (DVec3::from(*to) - DVec3::from(*from)).normalize_or_zero();
    if dir == DVec3::ZERO {
        Velocity::new(0.0, 0.0, 1.0)
    } else {
        Velocity::from(dir)
    }
}

/// Select the nearest candidate strictly ahead of `pos` (negative relative z)
/// by full 3D distance. Candidates behind the missile are never chosen.
pub fn acquire_target(
    pos: &Position,
    candidates: &[(hecs::Entity, Position)],
) -> Option<hecs::Entity> {
    let mut best: Option<(hecs::Entity, f64)> = None;
    for &(entity, cpos) in candidates {
        if cpos.z >= pos.z {
            continue;
        }
        let dist = pos.distance_to(&cpos);
        if best.map_or(true, |(_, b)| dist < b) {
            best = Some((entity, dist));
        }
    }
    best.map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyblazer_core::constants::MISSILE_STEER_GAIN;

    #[test]
    fn test_steering_converges_on_lateral_target() {
        // Heading straight down-range, target offset to the right.
        let mut heading = Velocity::new(0.0, 0.0, -1.0);
        let pos = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(40.0, 0.0, -100.0);

        for _ in 0..60 {
            heading = steer_toward(&heading, &pos, &target, MISSILE_STEER_GAIN);
        }

        let desired_x = 40.0 / (40.0_f64 * 40.0 + 100.0 * 100.0).sqrt();
        assert!(
            (heading.x - desired_x).abs() < 1e-3,
            "heading should converge on the target direction, got x={}",
            heading.x
        );
        assert!(
            (heading.speed() - 1.0).abs() < 1e-9,
            "steered heading should stay unit length"
        );
    }

    #[test]
    fn test_steering_is_gradual_not_snapping() {
        let heading = Velocity::new(0.0, 0.0, -1.0);
        let pos = Position::new(0.0, 0.0, 0.0);
        // Target hard to the right.
        let target = Position::new(100.0, 0.0, -1.0);

        let turned = steer_toward(&heading, &pos, &target, MISSILE_STEER_GAIN);
        assert!(
            turned.x > 0.0 && turned.x < 0.5,
            "one tick of steering must turn partway, not snap: x={}",
            turned.x
        );
        assert!(turned.z < 0.0, "still mostly heading down-range");
    }

    #[test]
    fn test_acquire_prefers_nearest_ahead() {
        let mut world = hecs::World::new();
        let near = world.spawn(());
        let far = world.spawn(());
        let behind = world.spawn(());

        let pos = Position::new(0.0, 0.0, -50.0);
        let candidates = vec![
            (far, Position::new(0.0, 0.0, -300.0)),
            (near, Position::new(10.0, 0.0, -80.0)),
            (behind, Position::new(0.0, 0.0, -10.0)),
        ];

        assert_eq!(acquire_target(&pos, &candidates), Some(near));
    }

    #[test]
    fn test_acquire_ignores_targets_behind() {
        let mut world = hecs::World::new();
        let behind = world.spawn(());

        let pos = Position::new(0.0, 0.0, -50.0);
        let candidates = vec![(behind, Position::new(0.0, 0.0, -40.0))];

        assert_eq!(acquire_target(&pos, &candidates), None);
    }

    #[test]
    fn test_unit_toward_normalizes() {
        let from = Position::new(0.0, 0.0, 0.0);
        let to = Position::new(3.0, 0.0, 4.0);
        let dir = unit_toward(&from, &to);
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.z - 0.8).abs() < 1e-12);
        assert!((dir.speed() - 1.0).abs() < 1e-12);
    }
}
