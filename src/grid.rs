//! Square grid of cell markers.
//!
//! Cells are stored row-major. Only the crate can change a cell, and only
//! along the legal transitions `Empty -> Ship`, `Empty -> Miss` and
//! `Ship -> Hit`.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::BoardError;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Occupied by a ship, not shot yet.
    Ship,
    /// Ship cell that was shot.
    Hit,
    /// Empty cell that was shot.
    Miss,
}

impl Cell {
    /// Marker used by the text renderer. Unshot ships look empty unless revealed.
    pub fn symbol(self, reveal_ships: bool) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship if reveal_ships => 'O',
            Cell::Ship => '.',
            Cell::Hit => 'X',
            Cell::Miss => '#',
        }
    }

    /// Whether a bullet already landed here.
    pub fn is_shot(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // `chunks` panics on zero; a zero-sized grid is rejected by config validation
        self.cells.chunks(self.size.max(1))
    }

    /// Put a ship segment on an empty cell.
    pub(crate) fn mark_ship(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        match self.cells[idx] {
            Cell::Empty => {
                self.cells[idx] = Cell::Ship;
                Ok(())
            }
            _ => Err(BoardError::IllegalTransition),
        }
    }

    /// Shoot a cell, returning its new state.
    pub(crate) fn mark_shot(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let idx = self.index(row, col)?;
        let next = match self.cells[idx] {
            Cell::Empty => Cell::Miss,
            Cell::Ship => Cell::Hit,
            Cell::Hit | Cell::Miss => return Err(BoardError::AlreadyShot { row, col }),
        };
        self.cells[idx] = next;
        Ok(next)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.size, self.size)?;
        for row in self.rows() {
            f.write_str("  ")?;
            for cell in row {
                write!(f, "{}", cell.symbol(true))?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
