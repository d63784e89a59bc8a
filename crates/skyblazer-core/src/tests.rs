#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::types::{Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::LevelSelect,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_class_serde() {
        let variants = vec![EnemyClass::Standard, EnemyClass::Fast, EnemyClass::Heavy];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyClass = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_obstacle_kind_serde() {
        let variants = vec![
            ObstacleKind::Tree,
            ObstacleKind::Buoy,
            ObstacleKind::Cactus,
            ObstacleKind::Mushroom,
            ObstacleKind::Spike,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ObstacleKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_pickup_kind_serde() {
        let variants = vec![PickupKind::Health, PickupKind::Shield, PickupKind::Laser];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PickupKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Confirm,
            PlayerCommand::Cancel,
            PlayerCommand::SelectLevel { delta: -1 },
            PlayerCommand::Thrust {
                axis: ThrustAxis::Lateral,
                sign: 1.0,
            },
            PlayerCommand::FirePrimary,
            PlayerCommand::FireSecondary,
            PlayerCommand::ToggleCheat,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::PlayerHit { damage: 10 },
            AudioEvent::ShieldBroken,
            AudioEvent::EnemyDown {
                class: EnemyClass::Heavy,
            },
            AudioEvent::PickupCollected {
                kind: PickupKind::Laser,
            },
            AudioEvent::RingCollected,
            AudioEvent::MissilesAway,
            AudioEvent::LevelUp { level: 2 },
            AudioEvent::BossArrived,
            AudioEvent::BossHit,
            AudioEvent::BossDown,
            AudioEvent::RunEnded {
                outcome: RunOutcome::Victory,
            },
        ];
        for ev in &events {
            let json = serde_json::to_string(ev).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_distance_to() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);

        let c = Position::new(3.0, 4.0, 12.0);
        assert!((a.distance_to(&c) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_lateral_distance_ignores_depth() {
        let a = Position::new(0.0, 0.0, -500.0);
        let b = Position::new(3.0, 4.0, 7.0);
        assert!((a.lateral_distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(2.0, 3.0, 6.0);
        assert!((v.speed() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, u64::from(TICK_RATE));
        assert!(
            (time.elapsed_secs - 1.0).abs() < 1e-9,
            "one tick-rate's worth of DT should equal 1.0s, got {}",
            time.elapsed_secs
        );
    }

    #[test]
    fn test_level_thresholds_are_monotonic() {
        for pair in LEVEL_SCORE_THRESHOLDS.windows(2) {
            assert!(pair[0] < pair[1], "thresholds must increase per level");
        }
    }
}
