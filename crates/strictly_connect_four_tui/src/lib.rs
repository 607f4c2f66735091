//! Terminal UI for Strictly Connect Four
//!
//! The presentation side of the game: it turns key presses into column
//! selections and undo requests for a [`strictly_connect_four::GameSession`]
//! and renders the callbacks it gets back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

pub use app::{App, BoardView};
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use input::{Action, action_for, move_cursor};
pub use ui::draw;
