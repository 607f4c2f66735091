//! A single game: board, turns and the input/callback boundary.

use crate::board::Board;
use crate::error::{MoveError, OutOfRange, TurnError};
use crate::gravity::find_landing_row;
use crate::observer::GameObserver;
use crate::rules::evaluate;
use crate::turn::{TurnController, TurnState};
use crate::types::{Move, Outcome, Player, Position, WIDTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The piece that was placed.
    pub mv: Move,
    /// Board outcome after the drop.
    pub outcome: Outcome,
}

/// One game of Connect Four.
///
/// Owns its board and turn controller; sessions share nothing, so any
/// number of games can run side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turns: TurnController,
}

impl GameSession {
    /// Creates a new game with an empty board and player one to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            turns: TurnController::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        self.turns.state()
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        self.turns.current_player()
    }

    /// Returns the move that undo would take back.
    pub fn last_move(&self) -> Option<Move> {
        self.turns.last_move()
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.turns.outcome()
    }

    /// Returns true once the game has a winner or is tied.
    pub fn is_over(&self) -> bool {
        self.turns.is_over()
    }

    /// Drops the current player's piece into `column`.
    ///
    /// Resolves the landing row, writes the piece, records it for undo and
    /// evaluates the board for the mover. A terminal outcome ends the game;
    /// otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has ended.
    /// - [`MoveError::OutOfRange`] if `column` is not on the board.
    /// - [`MoveError::ColumnFull`] if the column has no empty cell.
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(player = ?self.current_player()))]
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;

        if column >= WIDTH {
            return Err(OutOfRange { row: 0, column }.into());
        }

        let row = find_landing_row(&self.board, column).ok_or(MoveError::ColumnFull { column })?;
        let position = Position::new(row, column);

        self.board.set(position, player)?;
        self.turns.record_move(position, player);

        let outcome = evaluate(&self.board, player);
        if outcome.is_terminal() {
            self.turns.finish(outcome).map_err(|e| {
                warn!(error = %e, "Turn controller refused to end the game");
                MoveError::GameOver
            })?;
        } else {
            self.turns.advance_turn().map_err(|_| MoveError::GameOver)?;
        }

        let mv = Move::new(player, position);
        debug!(%mv, ?outcome, "Move completed");
        Ok(Placement { mv, outcome })
    }

    /// Takes back the last move, returning the turn to whoever made it.
    ///
    /// # Errors
    ///
    /// [`TurnError::NothingToUndo`] when no move is pending (including a
    /// second undo in a row) and [`TurnError::GameOver`] after the game
    /// ended.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, TurnError> {
        self.turns.undo_last_move(&mut self.board)
    }

    /// Handles a column selection from the presentation layer.
    ///
    /// Notifies `observer` of the placed piece, then of either the game's
    /// end or the new turn. A full column or a finished game leaves
    /// everything untouched and sends no notification.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] for a column off the board; this is a
    /// presentation bug, not a user mistake.
    #[instrument(skip(self, observer))]
    pub fn on_column_selected(
        &mut self,
        column: usize,
        observer: &mut impl GameObserver,
    ) -> Result<(), OutOfRange> {
        let placement = match self.play(column) {
            Ok(placement) => placement,
            Err(MoveError::ColumnFull { column }) => {
                debug!(column, "Ignoring drop into full column");
                return Ok(());
            }
            Err(MoveError::GameOver) => {
                debug!(column, "Ignoring drop after game over");
                return Ok(());
            }
            Err(MoveError::OutOfRange(err)) => {
                warn!(error = %err, "Column selection off the board");
                return Err(err);
            }
        };

        observer.on_move_placed(placement.mv.position, placement.mv.player);
        match placement.outcome {
            Outcome::InProgress => {
                if let Some(next) = self.current_player() {
                    observer.on_turn_changed(next);
                }
            }
            outcome => observer.on_game_ended(outcome),
        }
        Ok(())
    }

    /// Handles an undo request from the presentation layer.
    ///
    /// On success notifies `observer` of the cleared cell and the restored
    /// turn. An undo with nothing pending, or after the game ended, is
    /// ignored.
    #[instrument(skip(self, observer))]
    pub fn on_undo_requested(&mut self, observer: &mut impl GameObserver) {
        match self.undo() {
            Ok(mv) => {
                observer.on_move_undone(mv.position);
                observer.on_turn_changed(mv.player);
            }
            Err(e) => debug!(error = %e, "Ignoring undo request"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::GameEvent;

    #[test]
    fn test_first_drop_lands_on_bottom() {
        let mut session = GameSession::new();
        let placement = session.play(3).unwrap();
        assert_eq!(placement.mv, Move::new(Player::One, Position::new(5, 3)));
        assert_eq!(placement.outcome, Outcome::InProgress);
        assert_eq!(session.current_player(), Some(Player::Two));
    }

    #[test]
    fn test_full_column_is_error_without_change() {
        let mut session = GameSession::new();
        for _ in 0..6 {
            session.play(0).unwrap();
        }
        let before = session.clone();
        assert_eq!(session.play(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(session, before);
    }

    #[test]
    fn test_off_board_column() {
        let mut session = GameSession::new();
        assert!(matches!(session.play(WIDTH), Err(MoveError::OutOfRange(_))));
        let mut events = Vec::new();
        assert!(session.on_column_selected(WIDTH, &mut events).is_err());
        assert!(events.is_empty());
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_column_selected_notifies_turn() {
        let mut session = GameSession::new();
        let mut events = Vec::new();
        session.on_column_selected(2, &mut events).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::MovePlaced {
                    position: Position::new(5, 2),
                    player: Player::One,
                },
                GameEvent::TurnChanged(Player::Two),
            ]
        );
    }

    #[test]
    fn test_full_column_selection_is_silent() {
        let mut session = GameSession::new();
        for _ in 0..6 {
            session.play(4).unwrap();
        }
        let mut events = Vec::new();
        assert_eq!(session.on_column_selected(4, &mut events), Ok(()));
        assert!(events.is_empty());
    }

    #[test]
    fn test_undo_request_notifies() {
        let mut session = GameSession::new();
        session.play(6).unwrap();

        let mut events = Vec::new();
        session.on_undo_requested(&mut events);
        assert_eq!(
            events,
            vec![
                GameEvent::MoveUndone {
                    position: Position::new(5, 6),
                },
                GameEvent::TurnChanged(Player::One),
            ]
        );

        events.clear();
        session.on_undo_requested(&mut events);
        assert!(events.is_empty());
    }
}
