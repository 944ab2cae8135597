use crate::common::ConfigError;

pub const GRID_SIZE: usize = 10;
/// Largest grid the `<Letter><Digit>` shot token can address.
pub const MAX_GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 3;
pub const NUM_SHOTS: usize = 50;
pub const MIN_SHIP_LEN: usize = 3;
pub const MAX_SHIP_LEN: usize = 5;
/// Random placement attempts allowed per ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Tunable game parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub num_ships: usize,
    pub num_shots: usize,
    pub min_ship_len: usize,
    pub max_ship_len: usize,
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            num_ships: NUM_SHIPS,
            num_shots: NUM_SHOTS,
            min_ship_len: MIN_SHIP_LEN,
            max_ship_len: MAX_SHIP_LEN,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Check the startup preconditions of a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.num_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.num_shots == 0 {
            return Err(ConfigError::NoShots);
        }
        if self.min_ship_len == 0
            || self.min_ship_len > self.max_ship_len
            || self.max_ship_len > self.grid_size
        {
            return Err(ConfigError::ShipLengths {
                min: self.min_ship_len,
                max: self.max_ship_len,
                size: self.grid_size,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }
}
