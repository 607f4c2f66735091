//! Application state and logic.

use crate::config::GameConfig;
use crate::input::{Action, move_cursor};
use strictly_connect_four::{
    CONNECT, GameObserver, GameSession, Outcome, Player, Position, WIDTH, winning_line,
};
use tracing::{debug, error, info, instrument};

/// What the screen shows besides the board itself.
///
/// Updated only through [`GameObserver`] callbacks from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    names: [String; 2],
    preview: Option<Player>,
    last_placed: Option<Position>,
    status: String,
}

impl BoardView {
    fn new(config: &GameConfig) -> Self {
        let names = [
            config.name_of(Player::One).to_string(),
            config.name_of(Player::Two).to_string(),
        ];
        let status = format!("{}'s turn", names[0]);
        Self {
            names,
            preview: Some(Player::One),
            last_placed: None,
            status,
        }
    }

    fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.names[0],
            Player::Two => &self.names[1],
        }
    }

    /// Player whose piece hovers over the cursor column.
    pub fn preview(&self) -> Option<Player> {
        self.preview
    }

    /// Most recently placed piece.
    pub fn last_placed(&self) -> Option<Position> {
        self.last_placed
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl GameObserver for BoardView {
    fn on_move_placed(&mut self, position: Position, player: Player) {
        debug!(%position, %player, "Rendering placed piece");
        self.last_placed = Some(position);
    }

    fn on_move_undone(&mut self, position: Position) {
        debug!(%position, "Removing undone piece");
        if self.last_placed == Some(position) {
            self.last_placed = None;
        }
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.preview = None;
        self.status = match outcome {
            Outcome::Win(player) => format!("{} wins! Press 'q' to quit.", self.name(player)),
            _ => "The game is a tie. Press 'q' to quit.".to_string(),
        };
    }

    fn on_turn_changed(&mut self, player: Player) {
        self.preview = Some(player);
        self.status = format!("{}'s turn", self.name(player));
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    view: BoardView,
    cursor: usize,
    show_preview: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip_all)]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(),
            view: BoardView::new(config),
            cursor: WIDTH / 2,
            show_preview: *config.show_preview(),
        }
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the rendered view state.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Column under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the preview piece should be drawn.
    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// The four winning cells, once somebody has won.
    pub fn winning_line(&self) -> Option<[Position; CONNECT]> {
        let winner = self.session.outcome().winner()?;
        winning_line(self.session.board(), winner)
    }

    /// Handles one user action. Returns `false` when the user quits.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::CursorLeft | Action::CursorRight => {
                self.cursor = move_cursor(self.cursor, action);
            }
            Action::Drop => self.select(self.cursor),
            Action::DropAt(column) => {
                self.cursor = column;
                self.select(column);
            }
            Action::Undo => self.session.on_undo_requested(&mut self.view),
            Action::Quit => {
                info!("User quit");
                return false;
            }
        }
        true
    }

    fn select(&mut self, column: usize) {
        if let Err(e) = self.session.on_column_selected(column, &mut self.view) {
            error!(error = %e, "Column selection rejected");
            self.view.status = e.to_string();
        }
    }
}
