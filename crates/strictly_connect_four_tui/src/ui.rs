//! Stateless UI rendering for Connect Four.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_connect_four::{Cell, HEIGHT, Player, Position, WIDTH, find_landing_row};

use crate::app::App;

const PIECE: &str = " ● ";
const HOLE: &str = " · ";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title
            Constraint::Min(HEIGHT as u16 + 4),      // Board
            Constraint::Length(3),                   // Status
            Constraint::Length(1),                   // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Games - Connect Four")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.view().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("←/→ move  ↵ drop  1-7 column  u undo  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::with_capacity(HEIGHT + 2);
    lines.push(header_line(app));
    lines.push(preview_line(app));

    let winning = app.winning_line();
    let board = app.session().board();
    for (row, cells) in board.rows().iter().enumerate() {
        let spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let pos = Position::new(row, column);
                let highlight = winning.is_some_and(|line| line.contains(&pos))
                    || app.view().last_placed() == Some(pos);
                cell_span(*cell, highlight)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let width = (WIDTH * PIECE.chars().count()) as u16 + 2;
    let height = lines.len() as u16 + 2;
    let board_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, center_rect(area, width, height));
}

/// Column numbers; full columns are dimmed and the cursor column is bold.
fn header_line(app: &App) -> Line<'static> {
    let board = app.session().board();
    let spans: Vec<Span> = (0..WIDTH)
        .map(|column| {
            let label = format!(" {} ", column + 1);
            let mut style = if find_landing_row(board, column).is_some() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if column == app.cursor() {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            Span::styled(label, style)
        })
        .collect();
    Line::from(spans)
}

/// The hovering piece over the cursor column.
fn preview_line(app: &App) -> Line<'static> {
    let preview = app.view().preview().filter(|_| app.show_preview());
    let spans: Vec<Span> = (0..WIDTH)
        .map(|column| match preview {
            Some(player) if column == app.cursor() => Span::styled(PIECE, player_style(player)),
            _ => Span::raw("   "),
        })
        .collect();
    Line::from(spans)
}

fn cell_span(cell: Cell, highlight: bool) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(HOLE, Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            let style = player_style(player);
            let style = if highlight {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            Span::styled(PIECE, style)
        }
    }
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_title_and_status() {
        let app = App::new(&GameConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Connect Four"));
        assert!(screen.contains("Player 1's turn"));
    }

    #[test]
    fn test_renders_placed_piece() {
        let mut app = App::new(&GameConfig::default());
        let empty = render(&app).matches('●').count();
        app.handle(Action::Drop);
        // Dropped piece plus the preview for player two.
        assert_eq!(render(&app).matches('●').count(), empty + 1);
    }
}
