//! Tie detection logic for Connect Four.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn check_for_tie(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|cell| !cell.is_empty()))
}
