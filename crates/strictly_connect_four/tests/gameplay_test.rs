//! End-to-end tests for game sessions.

use strictly_connect_four::{
    Board, Cell, GameEvent, GameSession, HEIGHT, MoveError, Outcome, Player, Position,
    TurnError, TurnState, WIDTH, check_for_tie, check_for_win, find_landing_row,
};

/// A full game that fills the board without anyone lining up four.
const TIE_GAME: [usize; 42] = [
    3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4, 4, 0,
    1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
];

#[test]
fn test_bottom_row_win_by_board_writes() {
    let mut board = Board::new();
    for column in 0..4 {
        let row = find_landing_row(&board, column).expect("Empty column");
        assert_eq!(row, HEIGHT - 1);
        board.set(Position::new(row, column), Player::One).unwrap();
    }
    assert!(check_for_win(&board, Player::One));
    assert!(!check_for_win(&board, Player::Two));
}

#[test]
fn test_session_win_ends_game() {
    let mut session = GameSession::new();
    let mut events = Vec::new();

    for column in [0, 0, 1, 1, 2, 2] {
        session.on_column_selected(column, &mut events).unwrap();
    }
    assert_eq!(session.current_player(), Some(Player::One));

    events.clear();
    session.on_column_selected(3, &mut events).unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::MovePlaced {
                position: Position::new(5, 3),
                player: Player::One,
            },
            GameEvent::GameEnded(Outcome::Win(Player::One)),
        ]
    );
    assert_eq!(session.state(), TurnState::GameOver(Outcome::Win(Player::One)));
    assert!(session.is_over());
}

#[test]
fn test_input_ignored_after_game_over() {
    let mut session = GameSession::new();
    for column in [6, 5, 6, 5, 6, 5, 6] {
        session.play(column).unwrap();
    }
    assert_eq!(session.outcome(), Outcome::Win(Player::One));

    let before = session.clone();
    let mut events = Vec::new();
    session.on_column_selected(0, &mut events).unwrap();
    session.on_undo_requested(&mut events);

    assert!(events.is_empty());
    assert_eq!(session, before);
    assert_eq!(session.play(0), Err(MoveError::GameOver));
    assert_eq!(session.undo(), Err(TurnError::GameOver));
}

#[test]
fn test_undo_restores_previous_state() {
    let mut session = GameSession::new();
    session.play(3).unwrap();
    session.play(3).unwrap();

    let before = session.board().clone();
    let mover = session.current_player().unwrap();
    assert_eq!(mover, Player::One);

    let placement = session.play(4).unwrap();
    assert_eq!(placement.mv.player, mover);

    let undone = session.undo().unwrap();
    assert_eq!(undone, placement.mv);
    assert_eq!(session.board(), &before);
    assert_eq!(session.current_player(), Some(mover));
}

#[test]
fn test_single_step_undo_only() {
    let mut session = GameSession::new();
    session.play(0).unwrap();
    session.play(1).unwrap();

    session.undo().unwrap();
    assert_eq!(session.undo(), Err(TurnError::NothingToUndo));

    // Player one's piece is still there and it is player two's turn again.
    assert_eq!(
        session.board().get(Position::new(5, 0)),
        Ok(Cell::Occupied(Player::One))
    );
    assert_eq!(session.current_player(), Some(Player::Two));
}

#[test]
fn test_full_game_ends_in_tie() {
    let mut session = GameSession::new();
    let mut events = Vec::new();

    for (ply, &column) in TIE_GAME.iter().enumerate() {
        assert!(!session.is_over(), "game ended early at ply {}", ply);
        session.on_column_selected(column, &mut events).unwrap();
    }

    assert_eq!(session.outcome(), Outcome::Tie);
    assert_eq!(events.last(), Some(&GameEvent::GameEnded(Outcome::Tie)));
    assert_eq!(session.board().piece_count(), WIDTH * HEIGHT);
    assert!(check_for_tie(session.board()));
    assert!(!check_for_win(session.board(), Player::One));
    assert!(!check_for_win(session.board(), Player::Two));
}

#[test]
fn test_turn_events_alternate() {
    let mut session = GameSession::new();
    let mut events = Vec::new();
    for column in 0..WIDTH {
        session.on_column_selected(column, &mut events).unwrap();
    }

    let turns: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::TurnChanged(player) => Some(*player),
            _ => None,
        })
        .collect();
    assert_eq!(turns.len(), WIDTH);
    for pair in turns.windows(2) {
        assert_eq!(pair[0].opponent(), pair[1]);
    }
}

#[test]
fn test_sessions_are_independent() {
    let mut first = GameSession::new();
    let second = GameSession::new();

    first.play(2).unwrap();

    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.current_player(), Some(Player::One));
    assert_eq!(first.current_player(), Some(Player::Two));
}

#[test]
fn test_session_serializes_rows_top_down() {
    let mut session = GameSession::new();
    session.play(0).unwrap();

    let json = serde_json::to_value(session.board()).unwrap();
    let rows = json["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), HEIGHT);
    assert_eq!(rows[0][0], serde_json::json!("Empty"));
    assert_eq!(rows[HEIGHT - 1][0], serde_json::json!({ "Occupied": "One" }));

    let restored: GameSession =
        serde_json::from_str(&serde_json::to_string(&session).unwrap()).unwrap();
    assert_eq!(restored, session);
}
