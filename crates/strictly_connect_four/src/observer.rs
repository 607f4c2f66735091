//! Callbacks from the core to a presentation layer.

use crate::types::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// Receives notifications as a [`crate::GameSession`] changes.
///
/// Every method defaults to doing nothing, so a presentation layer only
/// implements what it renders.
pub trait GameObserver {
    /// A piece for `player` now rests at `position`.
    fn on_move_placed(&mut self, _position: Position, _player: Player) {}

    /// The piece at `position` was taken back.
    fn on_move_undone(&mut self, _position: Position) {}

    /// The game ended with a win or a tie. Further drops are ignored.
    fn on_game_ended(&mut self, _outcome: Outcome) {}

    /// It is now `player`'s turn.
    fn on_turn_changed(&mut self, _player: Player) {}
}

/// A notification, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// See [`GameObserver::on_move_placed`].
    MovePlaced {
        /// Where the piece landed.
        position: Position,
        /// Who dropped it.
        player: Player,
    },
    /// See [`GameObserver::on_move_undone`].
    MoveUndone {
        /// The cell that was cleared.
        position: Position,
    },
    /// See [`GameObserver::on_game_ended`].
    GameEnded(Outcome),
    /// See [`GameObserver::on_turn_changed`].
    TurnChanged(Player),
}

/// Ignores every notification.
impl GameObserver for () {}

/// Records notifications in order.
impl GameObserver for Vec<GameEvent> {
    fn on_move_placed(&mut self, position: Position, player: Player) {
        self.push(GameEvent::MovePlaced { position, player });
    }

    fn on_move_undone(&mut self, position: Position) {
        self.push(GameEvent::MoveUndone { position });
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.push(GameEvent::GameEnded(outcome));
    }

    fn on_turn_changed(&mut self, player: Player) {
        self.push(GameEvent::TurnChanged(player));
    }
}
