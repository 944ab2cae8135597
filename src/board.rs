//! Board state: grid, ship placements and shot bookkeeping.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, ConfigError, GameStatus, ShotResult};
use crate::config::GameConfig;
use crate::grid::{Cell, Grid};
use crate::ship::{Direction, Placement};

/// The single source of truth for a game in progress.
///
/// All mutation goes through [`Board::place_ship`], [`Board::auto_place_ships`]
/// and [`Board::apply_shot`].
pub struct Board {
    config: GameConfig,
    grid: Grid,
    placements: Vec<Placement>,
    ships_sunk: usize,
    shots_remaining: usize,
}

impl Board {
    /// Create an empty board (no ships placed) from a validated config.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Board {
            config: *config,
            grid: Grid::new(config.grid_size),
            placements: Vec::with_capacity(config.num_ships),
            ships_sunk: 0,
            shots_remaining: config.num_shots,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.grid.get(row, col)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// True once the whole fleet is on the board.
    pub fn is_ready(&self) -> bool {
        self.placements.len() == self.total_ships()
    }

    pub fn total_ships(&self) -> usize {
        self.config.num_ships
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    pub fn ships_remaining(&self) -> usize {
        self.total_ships() - self.ships_sunk
    }

    pub fn shots_remaining(&self) -> usize {
        self.shots_remaining
    }

    pub fn shots_fired(&self) -> usize {
        self.config.num_shots - self.shots_remaining
    }

    /// Returns `true` when every cell of `placement` has been hit.
    pub fn is_sunk(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .all(|(r, c)| matches!(self.grid.get(r, c), Ok(Cell::Hit)))
    }

    /// Place a ship of `length` anchored at (`row`, `col`) extending in `direction`.
    ///
    /// Either every covered cell becomes a ship cell or the board is left
    /// untouched.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
        length: usize,
    ) -> Result<Placement, BoardError> {
        if self.placements.len() >= self.config.num_ships {
            return Err(BoardError::FleetComplete);
        }
        let (min, max) = (self.config.min_ship_len, self.config.max_ship_len);
        if !(min..=max).contains(&length) {
            return Err(BoardError::InvalidLength { length, min, max });
        }
        let placement = Placement::from_anchor(row, col, direction, length, self.size())?;
        // validate the whole rectangle before touching any cell
        for (r, c) in placement.cells() {
            if self.grid.get(r, c)? != Cell::Empty {
                return Err(BoardError::ShipOverlaps);
            }
        }
        for (r, c) in placement.cells() {
            self.grid.mark_ship(r, c)?;
        }
        self.placements.push(placement);
        Ok(placement)
    }

    /// Place `count` ships at random anchors, directions and lengths.
    ///
    /// Each ship gets at most `max_placement_attempts` tries; running out
    /// returns [`BoardError::PlacementExhausted`] with the ships placed so far
    /// left on the board.
    pub fn auto_place_ships<R: Rng>(&mut self, rng: &mut R, count: usize) -> Result<(), BoardError> {
        if count > self.total_ships() - self.placements.len() {
            return Err(BoardError::FleetComplete);
        }
        let size = self.size();
        let attempts = self.config.max_placement_attempts;
        for placed in 0..count {
            let mut success = false;
            for attempt in 1..=attempts {
                let row = rng.random_range(0..size);
                let col = rng.random_range(0..size);
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                let length =
                    rng.random_range(self.config.min_ship_len..=self.config.max_ship_len);
                match self.place_ship(row, col, direction, length) {
                    Ok(p) => {
                        log::debug!("placed ship #{} at {:?} after {} attempts", placed + 1, p, attempt);
                        success = true;
                        break;
                    }
                    Err(BoardError::ShipOutOfBounds) | Err(BoardError::ShipOverlaps) => {
                        log::trace!(
                            "rejected ({}, {}) {:?} len {}",
                            row,
                            col,
                            direction,
                            length
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
            if !success {
                log::warn!("gave up placing ship #{} after {} attempts", placed + 1, attempts);
                return Err(BoardError::PlacementExhausted { placed, attempts });
            }
        }
        Ok(())
    }

    /// Check that (`row`, `col`) can be shot: inside the grid and not shot before.
    pub fn check_target(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.grid.get(row, col)?.is_shot() {
            return Err(BoardError::AlreadyShot { row, col });
        }
        Ok(())
    }

    /// Fire one bullet at (`row`, `col`).
    ///
    /// Rejected shots (out of bounds, already shot, game over) change nothing
    /// and do not consume a bullet.
    pub fn apply_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        if self.is_game_over() {
            return Err(BoardError::GameOver);
        }
        let result = match self.grid.mark_shot(row, col)? {
            Cell::Miss => ShotResult::Missed,
            _ => {
                let sunk = self
                    .placements
                    .iter()
                    .find(|p| p.contains(row, col))
                    .is_some_and(|p| self.is_sunk(p));
                if sunk {
                    self.ships_sunk += 1;
                    ShotResult::HitAndSunk
                } else {
                    ShotResult::Hit
                }
            }
        };
        self.shots_remaining -= 1;
        log::debug!(
            "shot ({}, {}) -> {:?}, {} bullets left",
            row,
            col,
            result,
            self.shots_remaining
        );
        Ok(result)
    }

    /// Evaluate the current game status. A win takes precedence over
    /// running out of bullets on the same shot.
    pub fn status(&self) -> GameStatus {
        if self.ships_sunk == self.total_ships() {
            GameStatus::Won
        } else if self.shots_remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  grid: {:?},\n  placements: {:?},\n  sunk: {}/{},\n  shots_remaining: {}\n}}",
            self.grid,
            self.placements,
            self.ships_sunk,
            self.total_ships(),
            self.shots_remaining
        )
    }
}
