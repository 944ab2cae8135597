//! Ship placement geometry.

use core::fmt;

use crate::common::BoardError;

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// A straight ship covering the half-open rectangle
/// `start_row..end_row` × `start_col..end_col`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    start_row: usize,
    end_row: usize,
    start_col: usize,
    end_col: usize,
}

impl Placement {
    /// Build the rectangle covered by a ship of `length` anchored at
    /// (`row`, `col`) and extending in `direction` on a `size`×`size` grid.
    pub fn from_anchor(
        row: usize,
        col: usize,
        direction: Direction,
        length: usize,
        size: usize,
    ) -> Result<Self, BoardError> {
        if row >= size || col >= size {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if length == 0 {
            return Err(BoardError::InvalidLength {
                length,
                min: 1,
                max: size,
            });
        }
        let (start_row, end_row, start_col, end_col) = match direction {
            Direction::Left => {
                let start = (col + 1)
                    .checked_sub(length)
                    .ok_or(BoardError::ShipOutOfBounds)?;
                (row, row + 1, start, col + 1)
            }
            Direction::Right => {
                let end = col.checked_add(length).ok_or(BoardError::ShipOutOfBounds)?;
                (row, row + 1, col, end)
            }
            Direction::Up => {
                let start = (row + 1)
                    .checked_sub(length)
                    .ok_or(BoardError::ShipOutOfBounds)?;
                (start, row + 1, col, col + 1)
            }
            Direction::Down => {
                let end = row.checked_add(length).ok_or(BoardError::ShipOutOfBounds)?;
                (row, end, col, col + 1)
            }
        };
        if end_row > size || end_col > size {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            start_row,
            end_row,
            start_col,
            end_col,
        })
    }

    /// Rows covered, end-exclusive.
    pub fn rows(&self) -> core::ops::Range<usize> {
        self.start_row..self.end_row
    }

    /// Columns covered, end-exclusive.
    pub fn cols(&self) -> core::ops::Range<usize> {
        self.start_col..self.end_col
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.rows().len() * self.cols().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }

    /// All covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |r| cols.clone().map(move |c| (r, c)))
    }

    /// True if the two ships share at least one cell.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.start_row < other.end_row
            && other.start_row < self.end_row
            && self.start_col < other.end_col
            && other.start_col < self.end_col
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ rows: {}..{}, cols: {}..{} }}",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}
