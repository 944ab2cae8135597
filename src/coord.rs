//! Shot coordinates and the `A3`-style token parser.

use core::fmt;

use crate::common::InputError;
use crate::render::row_label;

/// A cell on the grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.col)
    }
}

/// Parse a `<Letter><Digit>` token for a `size`×`size` grid.
///
/// Surrounding whitespace is ignored and the row letter is case-insensitive.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, InputError> {
    let last_row = row_label(size.saturating_sub(1));
    let last_col = size.saturating_sub(1);

    let mut chars = input.trim().chars();
    let (row_ch, col_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => return Err(InputError::WrongLength),
    };

    let row_ch = row_ch.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err(InputError::BadRow { last_row });
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= size {
        return Err(InputError::BadRow { last_row });
    }

    let col = col_ch
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&c| c < size)
        .ok_or(InputError::BadColumn { last_col })?;

    Ok(Coord { row, col })
}

/// Prompt text for the current grid, e.g. `Enter row (A-J) and column (0-9) such as A3: `.
pub fn prompt(size: usize) -> alloc::string::String {
    alloc::format!(
        "Enter row (A-{}) and column (0-{}) such as A3: ",
        row_label(size.saturating_sub(1)),
        size.saturating_sub(1)
    )
}
