//! Error types for the rules engine.

use crate::types::Outcome;
use derive_more::{Display, Error};

/// A coordinate outside `[0, HEIGHT) x [0, WIDTH)`.
///
/// Valid input never produces this; seeing it means a caller broke its
/// contract, and the operation is aborted before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position (row {row}, column {column}) is off the board")]
pub struct OutOfRange {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub column: usize,
}

/// Error that can occur when dropping a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Every cell in the column is occupied.
    #[display("Column {} is full", column)]
    ColumnFull {
        /// The rejected column.
        column: usize,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The column does not exist.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutOfRange> for MoveError {
    fn from(err: OutOfRange) -> Self {
        MoveError::OutOfRange(err)
    }
}

/// Error from the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TurnError {
    /// Undo requested with no recorded move.
    #[display("No move to undo")]
    NothingToUndo,

    /// Turns no longer change once the game is over.
    #[display("Game is already over")]
    GameOver,

    /// Only a win or a tie can end the game.
    #[display("Outcome {:?} does not end the game", _0)]
    NotTerminal(Outcome),

    /// The recorded move points off the board.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutOfRange> for TurnError {
    fn from(err: OutOfRange) -> Self {
        TurnError::OutOfRange(err)
    }
}
