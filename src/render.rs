//! Text rendering of the board.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::board::Board;
use crate::grid::Grid;

/// Letter labelling `row`: `A` for row 0, `?` past `Z`.
pub fn row_label(row: usize) -> char {
    u8::try_from(row)
        .ok()
        .filter(|&r| r < 26)
        .map_or('?', |r| (b'A' + r) as char)
}

/// Render `grid` as text lines: one `"<Letter> <cell> ..."` line per row
/// followed by the column index header.
///
/// Unshot ship cells are drawn as empty water unless `reveal_ships` is set.
pub fn render(grid: &Grid, reveal_ships: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.size() + 1);
    for (r, row) in grid.rows().enumerate() {
        let mut line = String::with_capacity(2 + row.len() * 2);
        line.push(row_label(r));
        for cell in row {
            line.push(' ');
            line.push(cell.symbol(reveal_ships));
        }
        lines.push(line);
    }
    let mut header = String::from(" ");
    for c in 0..grid.size() {
        let _ = write!(header, " {}", c);
    }
    lines.push(header);
    lines
}

/// Remaining ships and bullets, shown under the board every turn.
pub fn status_lines(board: &Board) -> [String; 2] {
    [
        format!("Number of ships remaining: {}", board.ships_remaining()),
        format!("Number of bullets left: {}", board.shots_remaining()),
    ]
}
