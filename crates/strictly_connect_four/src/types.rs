//! Core domain types for Connect Four.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of columns on the board.
pub const WIDTH: usize = 7;

/// Number of rows on the board.
pub const HEIGHT: usize = 6;

/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player one (moves first).
    #[display("Player 1")]
    One,
    /// Player two.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Single-character mark used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Cell holds a piece of the given player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no piece rests here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the owner of the piece in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A (row, column) coordinate.
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom; pieces
/// fall toward higher row indices. A `Position` is not guaranteed to be on
/// the board: [`crate::Board`] checks bounds on every access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {column})")]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row index, counted from the top.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, counted from the left.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns true if the position lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < HEIGHT && self.column < WIDTH
    }

    /// Steps `times` cells along `(d_row, d_col)`.
    ///
    /// Returns `None` when the step would go below zero. The result may
    /// still be past the bottom or right edge.
    pub fn offset(&self, d_row: isize, d_col: isize, times: usize) -> Option<Self> {
        let times = isize::try_from(times).ok()?;
        let row = self.row.checked_add_signed(d_row.checked_mul(times)?)?;
        let column = self.column.checked_add_signed(d_col.checked_mul(times)?)?;
        Some(Self { row, column })
    }
}

/// A move: a player's piece resting at a position.
///
/// The turn controller keeps the most recent one for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who dropped the piece.
    pub player: Player,
    /// Where the piece landed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> column {}", self.player, self.position.column + 1)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and moves remain.
    #[default]
    InProgress,
    /// The player has four in a row.
    Win(Player),
    /// Board is full without a winner.
    Tie,
}

impl Outcome {
    /// Returns true for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} won!", player),
            Outcome::Tie => write!(f, "The game is a tie"),
        }
    }
}
