//! Win detection logic for Connect Four.

use crate::board::Board;
use crate::types::{CONNECT, Cell, HEIGHT, Player, Position, WIDTH};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Direction a line of four runs from its anchor cell.
///
/// Only forward directions are listed: every four-in-a-row has exactly one
/// anchor from which one of these reaches all of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Same row, rightward.
    Horizontal,
    /// Same column, downward.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Direction {
    /// `(d_row, d_col)` step between neighbouring cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// The four cells of the line anchored at `anchor`.
    ///
    /// Returns `None` if the line leaves the board through the top or left
    /// edge; cells past the bottom or right edge are left for the caller's
    /// bounds check.
    pub fn line_from(self, anchor: Position) -> Option<[Position; CONNECT]> {
        let (d_row, d_col) = self.step();
        let mut line = [anchor; CONNECT];
        for (i, cell) in line.iter_mut().enumerate() {
            *cell = anchor.offset(d_row, d_col, i)?;
        }
        Some(line)
    }
}

/// Returns the first four-in-a-row belonging to `player`.
///
/// Anchors are visited row by row from the top-left, and each anchor tries
/// horizontal, vertical, down-right then down-left. A line counts only if
/// all four cells are on the board and hold `player`'s pieces.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; CONNECT]> {
    let target = Cell::Occupied(player);

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let anchor = Position::new(row, column);
            for direction in Direction::iter() {
                let Some(line) = direction.line_from(anchor) else {
                    continue;
                };
                if line.iter().all(|&pos| board.get(pos) == Ok(target)) {
                    debug!(%anchor, ?direction, "Found four in a row");
                    return Some(line);
                }
            }
        }
    }

    None
}

/// Checks if `player` has four in a row anywhere on the board.
#[instrument(skip(board))]
pub fn check_for_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}
