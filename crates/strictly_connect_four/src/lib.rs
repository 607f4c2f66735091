//! Strictly Connect Four - pure rules engine
//!
//! Two players alternate dropping pieces into a 7-wide, 6-tall grid until
//! one of them lines up four (horizontally, vertically or diagonally) or
//! the board fills up.
//!
//! # Architecture
//!
//! - **Board**: cell storage with bounds-checked access
//! - **Gravity**: which row a dropped piece lands on
//! - **Rules**: win and tie detection, pure functions of the board
//! - **Turns**: whose move it is, plus a single-step undo record
//! - **Session**: one game, driven by input events and reporting back
//!   through [`GameObserver`] callbacks
//!
//! Nothing here knows about rendering; a presentation layer calls in with
//! column selections and undo requests and renders what it is told.
//!
//! # Example
//!
//! ```
//! use strictly_connect_four::{GameEvent, GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! // Player one builds along the bottom row while player two stacks on it.
//! for column in [0, 0, 1, 1, 2, 2, 3] {
//!     session.on_column_selected(column, &mut events).unwrap();
//! }
//!
//! assert_eq!(session.outcome(), Outcome::Win(Player::One));
//! assert_eq!(events.last(), Some(&GameEvent::GameEnded(Outcome::Win(Player::One))));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod gravity;
mod observer;
pub mod rules;
mod session;
mod turn;
mod types;

pub use board::Board;
pub use error::{MoveError, OutOfRange, TurnError};
pub use gravity::{find_landing_row, legal_columns};
pub use observer::{GameEvent, GameObserver};
pub use rules::{Direction, check_for_tie, check_for_win, evaluate, winning_line};
pub use session::{GameSession, Placement};
pub use turn::{TurnController, TurnState};
pub use types::{CONNECT, Cell, HEIGHT, Move, Outcome, Player, Position, WIDTH};
