use salvo::{Board, ConfigError, GameConfig};

#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.grid_size, 10);
    assert_eq!(config.num_ships, 3);
    assert_eq!(config.num_shots, 50);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_configs_rejected_at_startup() {
    let base = GameConfig::default();
    let cases = [
        (GameConfig { grid_size: 0, ..base }, ConfigError::GridSize(0)),
        (GameConfig { grid_size: 11, ..base }, ConfigError::GridSize(11)),
        (GameConfig { num_ships: 0, ..base }, ConfigError::NoShips),
        (GameConfig { num_shots: 0, ..base }, ConfigError::NoShots),
        (
            GameConfig { min_ship_len: 4, max_ship_len: 3, ..base },
            ConfigError::ShipLengths { min: 4, max: 3, size: 10 },
        ),
        (
            GameConfig { grid_size: 4, ..base },
            ConfigError::ShipLengths { min: 3, max: 5, size: 4 },
        ),
        (
            GameConfig { max_placement_attempts: 0, ..base },
            ConfigError::NoPlacementAttempts,
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate().unwrap_err(), expected);
        assert_eq!(Board::new(&config).unwrap_err(), expected);
    }
}
