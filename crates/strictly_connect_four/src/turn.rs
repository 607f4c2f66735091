//! Turn tracking and single-step undo.

use crate::board::Board;
use crate::error::TurnError;
use crate::types::{Move, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whose turn it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The player is to move.
    Turn(Player),
    /// The game ended with a win or a tie.
    GameOver(Outcome),
}

/// Tracks the current player and the last move played.
///
/// Only one move is retained. Recording a move overwrites the previous
/// record and undoing consumes it, so a second undo in a row fails with
/// [`TurnError::NothingToUndo`].
///
/// The controller never evaluates the board; whoever evaluates it calls
/// [`TurnController::finish`] with a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    state: TurnState,
    last_move: Option<Move>,
}

impl TurnController {
    /// Creates a controller with player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: TurnState::Turn(Player::One),
            last_move: None,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            TurnState::Turn(player) => Some(player),
            TurnState::GameOver(_) => None,
        }
    }

    /// Returns the final outcome, or `InProgress` while play continues.
    pub fn outcome(&self) -> Outcome {
        match self.state {
            TurnState::Turn(_) => Outcome::InProgress,
            TurnState::GameOver(outcome) => outcome,
        }
    }

    /// Returns true once a win or tie has been recorded.
    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Returns the move available for undo.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Stores `position` as the move to undo. Does not change turns.
    #[instrument(skip(self))]
    pub fn record_move(&mut self, position: Position, player: Player) {
        if let Some(previous) = self.last_move.replace(Move::new(player, position)) {
            debug!(%previous, "Overwrote previous move record");
        }
    }

    /// Passes the turn to the other player.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] after the game has ended.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn advance_turn(&mut self) -> Result<Player, TurnError> {
        match self.state {
            TurnState::Turn(player) => {
                let next = player.opponent();
                self.state = TurnState::Turn(next);
                debug!(%next, "Turn advanced");
                Ok(next)
            }
            TurnState::GameOver(_) => {
                warn!("Turn change requested after game over");
                Err(TurnError::GameOver)
            }
        }
    }

    /// Ends the game with a win or a tie.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NotTerminal`] for `Outcome::InProgress` and
    /// [`TurnError::GameOver`] if the game already ended.
    #[instrument(skip(self))]
    pub fn finish(&mut self, outcome: Outcome) -> Result<(), TurnError> {
        if !outcome.is_terminal() {
            return Err(TurnError::NotTerminal(outcome));
        }
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        self.state = TurnState::GameOver(outcome);
        info!(%outcome, "Game over");
        Ok(())
    }

    /// Takes back the last recorded move.
    ///
    /// Clears the move's cell on `board`, drops the record and advances the
    /// turn, which hands the move back to the player who made it.
    ///
    /// # Errors
    ///
    /// - [`TurnError::GameOver`] once the game has ended.
    /// - [`TurnError::NothingToUndo`] if no move is recorded.
    /// - [`TurnError::OutOfRange`] if the record points off the board; the
    ///   record is kept and nothing changes.
    #[instrument(skip(self, board))]
    pub fn undo_last_move(&mut self, board: &mut Board) -> Result<Move, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        let mv = self.last_move.ok_or(TurnError::NothingToUndo)?;

        board.clear(mv.position)?;
        self.last_move = None;
        let player = self.advance_turn()?;

        if player != mv.player {
            warn!(%player, mover = %mv.player, "Undo handed the turn to a player who did not make the move");
        }
        debug!(%mv, "Move undone");
        Ok(mv)
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
