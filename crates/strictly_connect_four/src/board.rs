//! Board storage for Connect Four.

use crate::error::OutOfRange;
use crate::types::{Cell, HEIGHT, Player, Position, WIDTH};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 7x6 Connect Four board.
///
/// Stored as `HEIGHT` rows of `WIDTH` cells, row 0 at the top. Each row is
/// its own array, so writing one cell never touches another row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Result<Cell, OutOfRange> {
        self.rows
            .get(pos.row())
            .and_then(|row| row.get(pos.column()))
            .copied()
            .ok_or(OutOfRange {
                row: pos.row(),
                column: pos.column(),
            })
    }

    /// Places a piece for `player` at the given position.
    ///
    /// Does not check that the cell was empty or that the piece is
    /// supported from below; the drop resolver picks legal targets.
    #[instrument(skip_all, fields(pos = %pos, player = %player))]
    pub fn set(&mut self, pos: Position, player: Player) -> Result<(), OutOfRange> {
        let cell = self.cell_mut(pos)?;
        *cell = Cell::Occupied(player);
        trace!("Piece written");
        Ok(())
    }

    /// Resets the cell at the given position to empty.
    #[instrument(skip_all, fields(pos = %pos))]
    pub fn clear(&mut self, pos: Position) -> Result<(), OutOfRange> {
        let cell = self.cell_mut(pos)?;
        *cell = Cell::Empty;
        trace!("Cell cleared");
        Ok(())
    }

    /// Checks if the cell at the position holds no piece.
    ///
    /// Off-board positions are never empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Ok(Cell::Empty))
    }

    /// Returns all rows, top row first.
    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.rows
    }

    /// Iterates the cells of one column from top to bottom.
    ///
    /// Yields nothing for a column off the board.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(column).copied())
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, OutOfRange> {
        self.rows
            .get_mut(pos.row())
            .and_then(|row| row.get_mut(pos.column()))
            .ok_or(OutOfRange {
                row: pos.row(),
                column: pos.column(),
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.rows().len(), HEIGHT);
        for row in board.rows() {
            assert_eq!(row.len(), WIDTH);
            assert!(row.iter().all(|cell| *cell == Cell::Empty));
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_set_touches_one_cell() {
        let mut board = Board::new();
        board.set(Position::new(5, 0), Player::One).unwrap();

        assert_eq!(board.get(Position::new(5, 0)), Ok(Cell::Occupied(Player::One)));
        // Rows are independent: the same column in other rows stays empty.
        for row in 0..HEIGHT - 1 {
            assert_eq!(board.get(Position::new(row, 0)), Ok(Cell::Empty));
        }
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        let pos = Position::new(3, 4);
        board.set(pos, Player::Two).unwrap();
        board.clear(pos).unwrap();
        assert!(board.is_empty(pos));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new();
        let off = Position::new(HEIGHT, 0);
        assert_eq!(board.get(off), Err(OutOfRange { row: HEIGHT, column: 0 }));
        assert!(board.set(Position::new(0, WIDTH), Player::One).is_err());
        assert!(board.clear(off).is_err());
        assert!(!board.is_empty(off));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_column_iterates_top_down() {
        let mut board = Board::new();
        board.set(Position::new(HEIGHT - 1, 2), Player::One).unwrap();
        let cells: Vec<_> = board.column(2).collect();
        assert_eq!(cells.len(), HEIGHT);
        assert_eq!(cells[HEIGHT - 1], Cell::Occupied(Player::One));
        assert!(cells[..HEIGHT - 1].iter().all(|c| c.is_empty()));
        assert_eq!(board.column(WIDTH).count(), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::new(5, 0), Player::One).unwrap();
        board.set(Position::new(5, 1), Player::Two).unwrap();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert_eq!(lines[0], ".......");
        assert_eq!(lines[5], "XO.....");
    }
}
