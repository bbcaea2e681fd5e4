#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::config::{AgentConfig, PlayerConfig};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{AgentEvent, EncounterEvent};
    use crate::state::EncounterSnapshot;
    use crate::types::{Position, SimTime, TargetId, Velocity};

    // ---- Agent config validation ----

    #[test]
    fn test_default_agent_config_is_valid() {
        let config = AgentConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.attack_range <= config.detection_range);
    }

    #[test]
    fn test_attack_range_beyond_detection_rejected() {
        let config = AgentConfig {
            attack_range: 6.0,
            detection_range: 5.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::AttackRangeExceedsDetection {
                attack_range,
                detection_range,
            }) => {
                assert_eq!(attack_range, 6.0);
                assert_eq!(detection_range, 5.0);
            }
            other => panic!("expected AttackRangeExceedsDetection, got {other:?}"),
        }
    }

    #[test]
    fn test_attack_range_equal_to_detection_accepted() {
        let config = AgentConfig {
            attack_range: 5.0,
            detection_range: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_fields_rejected() {
        let cases = [
            AgentConfig {
                speed: 0.0,
                ..Default::default()
            },
            AgentConfig {
                attack_cooldown: -1.0,
                ..Default::default()
            },
            AgentConfig {
                attack_animation_duration: 0.0,
                ..Default::default()
            },
            AgentConfig {
                detection_range: f32::NAN,
                ..Default::default()
            },
            AgentConfig {
                attack_range: f32::INFINITY,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::NonPositive { .. })),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_finite_detection_offset_rejected() {
        let config = AgentConfig {
            detection_offset: Vec2::new(f32::NAN, 0.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_agent_config_from_json_fills_defaults() {
        let config = AgentConfig::from_json(r#"{ "speed": 3.5, "detection_offset": [0.0, 0.5] }"#)
            .unwrap();
        assert_eq!(config.speed, 3.5);
        assert_eq!(config.detection_offset, Vec2::new(0.0, 0.5));
        assert_eq!(config.attack_range, AgentConfig::default().attack_range);
    }

    #[test]
    fn test_agent_config_from_json_validates() {
        let err = AgentConfig::from_json(r#"{ "attack_range": 9.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::AttackRangeExceedsDetection { .. }
        ));

        let err = AgentConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_player_config_validation() {
        assert!(PlayerConfig::default().validate().is_ok());
        assert!(PlayerConfig { speed: 0.0 }.validate().is_err());
        assert_eq!(PlayerConfig::from_json("{}").unwrap().speed, 5.0);
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::NonPositive {
            field: "speed",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "speed must be positive and finite, got -2");
    }

    // ---- Facing and factions ----

    #[test]
    fn test_facing_sign_and_flip() {
        assert_eq!(Facing::default(), Facing::Right);
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Right.flipped().flipped(), Facing::Right);
    }

    #[test]
    fn test_facing_disagreement() {
        assert!(Facing::Right.disagrees_with(-0.1));
        assert!(!Facing::Right.disagrees_with(0.1));
        assert!(Facing::Left.disagrees_with(0.1));
        assert!(!Facing::Left.disagrees_with(0.0));
        assert!(!Facing::Right.disagrees_with(0.0));
    }

    #[test]
    fn test_faction_mask() {
        let mask = FactionMask::of(&[Faction::Player, Faction::Neutral]);
        assert!(mask.contains(Faction::Player));
        assert!(mask.contains(Faction::Neutral));
        assert!(!mask.contains(Faction::Enemy));
        assert!(!FactionMask::NONE.contains(Faction::Player));
        assert!(FactionMask::ALL.contains(Faction::Enemy));
        assert_eq!(FactionMask::from(Faction::Enemy), FactionMask::of(&[Faction::Enemy]));
    }

    // ---- Geometry and time ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-6);
        assert!((Velocity::new(0.0, -2.0).speed() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..50 {
            time.advance(0.02);
        }
        assert_eq!(time.tick, 50);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    // ---- Serde ----

    #[test]
    fn test_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::Move {
            horizontal: 1.0,
            vertical: 0.0,
        })
        .unwrap();
        assert!(json.contains(r#""type":"Move""#));

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectScenario","scenario":"Horde"}"#).unwrap();
        assert_eq!(
            back,
            PlayerCommand::SelectScenario {
                scenario: ScenarioId::Horde
            }
        );
    }

    #[test]
    fn test_events_serialize_with_source() {
        let event = EncounterEvent::Visual {
            source: TargetId(7),
            event: AgentEvent::StateChanged {
                from: AgentState::Idle,
                to: AgentState::Chasing,
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: EncounterEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = EncounterSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, EncounterPhase::Setup);
        assert!(back.player.is_none());
        assert!(back.agents.is_empty());
    }
}
