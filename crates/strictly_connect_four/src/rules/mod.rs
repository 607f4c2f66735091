//! Game rules for Connect Four.
//!
//! Pure functions over a [`Board`]: they never mutate it, so repeated calls
//! on an unchanged board always agree.

pub mod tie;
pub mod win;

pub use tie::check_for_tie;
pub use win::{Direction, check_for_win, winning_line};

use crate::board::Board;
use crate::types::{Outcome, Player};
use tracing::instrument;

/// Evaluates the board after `last_mover` dropped a piece.
///
/// A win is checked before a tie, so a final piece that both fills the
/// board and completes a line counts as a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mover: Player) -> Outcome {
    if check_for_win(board, last_mover) {
        Outcome::Win(last_mover)
    } else if check_for_tie(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
