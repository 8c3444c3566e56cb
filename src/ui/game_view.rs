use crate::game::{GameStatus, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::ModalChoice;
use super::board_widget::{board_lines, player_color};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let player = session.active_player();
    let status = match session.status() {
        GameStatus::InProgress => format!("{player}'s Turn"),
        GameStatus::Won(winner) => format!("{winner} won!"),
        GameStatus::Tied => "Tied game".to_string(),
    };
    let (height, width) = (session.board().height(), session.board().width());

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four  {height} x {width}")),
        );

    frame.render_widget(header, area);
}

/// The board block's border takes the active player's colour
fn render_board(frame: &mut Frame, session: &Session, selected_column: usize, area: Rect) {
    let board = session.board();
    let selected = (!session.is_terminal()).then_some(selected_column);
    let lines = board_lines(board, selected, session.winning_line());

    // 3 chars per cell plus the border, clamped before narrowing to u16
    let box_width = board
        .width()
        .saturating_mul(3)
        .saturating_add(2)
        .min(area.width as usize) as u16;
    let box_height = lines.len().saturating_add(2).min(area.height as usize) as u16;
    let board_area = centered(area, box_width, box_height);

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(player_color(session.active_player()))),
    );
    frame.render_widget(widget, board_area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  Esc: Menu  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// End-game modal drawn over the board
pub fn render_end_modal(frame: &mut Frame, message: &str, choice: ModalChoice) {
    let area = centered(frame.area(), 36, 7);

    let button = |label: &'static str, selected: bool| {
        if selected {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!("[ {label} ]"))
        }
    };

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            button("Rematch", choice == ModalChoice::Rematch),
            Span::raw("  "),
            button("Main Menu", choice == ModalChoice::MainMenu),
        ]),
        Line::from(Span::styled(
            "r: Rematch  m: Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
