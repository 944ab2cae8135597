//! Common types for the game: shot outcomes, game status and errors.

use core::fmt;

/// Result of a shot fired at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on an empty cell.
    Missed,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a ship.
    HitAndSunk,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every ship was sunk.
    Won,
    /// Bullets ran out with ships still afloat.
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship length is outside the configured range.
    InvalidLength { length: usize, min: usize, max: usize },
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// The whole fleet is already on the board.
    FleetComplete,
    /// A game cannot start until every ship is on the board.
    FleetIncomplete { placed: usize, total: usize },
    /// Random placement gave up after too many attempts.
    PlacementExhausted { placed: usize, attempts: usize },
    /// This cell was already shot.
    AlreadyShot { row: usize, col: usize },
    /// No more shots are accepted.
    GameOver,
    /// Requested cell transition is not allowed.
    IllegalTransition,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            BoardError::InvalidLength { length, min, max } => {
                write!(f, "Ship length {} is not within {}..={}", length, min, max)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::FleetComplete => write!(f, "All ships are already placed"),
            BoardError::FleetIncomplete { placed, total } => {
                write!(f, "Only {} of {} ships are placed", placed, total)
            }
            BoardError::PlacementExhausted { placed, attempts } => write!(
                f,
                "Unable to place ship #{} after {} attempts",
                placed + 1,
                attempts
            ),
            BoardError::AlreadyShot { .. } => {
                write!(f, "You have already shot a bullet here, pick somewhere else")
            }
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::IllegalTransition => write!(f, "Illegal cell transition"),
        }
    }
}

/// Rejections of a malformed shot token such as `A3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Token is not exactly two characters.
    WrongLength,
    /// First character is not a row letter on this grid.
    BadRow { last_row: char },
    /// Second character is not a column digit on this grid.
    BadColumn { last_col: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongLength => {
                write!(f, "Error: Please enter only one row and column such as A3")
            }
            InputError::BadRow { last_row } => {
                write!(f, "Error: Please enter letter (A-{}) for row", last_row)
            }
            InputError::BadColumn { last_col } => {
                write!(f, "Error: Please enter a number (0-{}) for column", last_col)
            }
        }
    }
}

/// Invalid game configuration, reported at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    GridSize(usize),
    NoShips,
    NoShots,
    ShipLengths { min: usize, max: usize, size: usize },
    NoPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridSize(n) => write!(f, "Grid size {} must be within 1..=10", n),
            ConfigError::NoShips => write!(f, "At least one ship is required"),
            ConfigError::NoShots => write!(f, "At least one shot is required"),
            ConfigError::ShipLengths { min, max, size } => write!(
                f,
                "Ship lengths {}..={} must be non-empty and fit a {}x{} grid",
                min, max, size, size
            ),
            ConfigError::NoPlacementAttempts => {
                write!(f, "Placement attempts must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
