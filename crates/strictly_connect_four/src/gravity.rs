//! Drop resolution: where a piece lands under gravity.

use crate::board::Board;
use crate::types::{HEIGHT, Position, WIDTH};
use tracing::{instrument, trace};

/// Finds the row a piece dropped into `column` comes to rest on.
///
/// Scans from the bottom row upward and returns the first empty row, or
/// `None` if the column is full. A column off the board also yields `None`;
/// callers that need to tell the two apart check the column first.
#[instrument(skip(board))]
pub fn find_landing_row(board: &Board, column: usize) -> Option<usize> {
    let row = (0..HEIGHT)
        .rev()
        .find(|&row| board.is_empty(Position::new(row, column)));
    trace!(?row, "Resolved landing row");
    row
}

/// Columns that still accept a piece, in ascending order.
#[instrument(skip(board))]
pub fn legal_columns(board: &Board) -> Vec<usize> {
    (0..WIDTH)
        .filter(|&column| find_landing_row(board, column).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill_column(board: &mut Board, column: usize) {
        for row in 0..HEIGHT {
            let player = if row % 2 == 0 { Player::One } else { Player::Two };
            board.set(Position::new(row, column), player).unwrap();
        }
    }

    #[test]
    fn test_empty_column_lands_on_bottom() {
        let board = Board::new();
        assert_eq!(find_landing_row(&board, 4), Some(HEIGHT - 1));
        assert_eq!(find_landing_row(&board, 4), Some(5));
    }

    #[test]
    fn test_stacks_upward() {
        let mut board = Board::new();
        board.set(Position::new(5, 2), Player::One).unwrap();
        board.set(Position::new(4, 2), Player::Two).unwrap();
        assert_eq!(find_landing_row(&board, 2), Some(3));
    }

    #[test]
    fn test_full_column_has_no_landing_row() {
        let mut board = Board::new();
        fill_column(&mut board, 0);
        assert_eq!(find_landing_row(&board, 0), None);
    }

    #[test]
    fn test_off_board_column() {
        let board = Board::new();
        assert_eq!(find_landing_row(&board, WIDTH), None);
    }

    #[test]
    fn test_legal_columns_skip_full() {
        let mut board = Board::new();
        assert_eq!(legal_columns(&board), (0..WIDTH).collect::<Vec<_>>());

        fill_column(&mut board, 1);
        fill_column(&mut board, 6);
        assert_eq!(legal_columns(&board), vec![0, 2, 3, 4, 5]);
    }
}
