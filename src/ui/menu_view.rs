use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::MenuOption;
use super::game_view::centered;

pub fn render(frame: &mut Frame, options: &[MenuOption], selected: usize, message: &Option<String>) {
    let area = centered(frame.area(), 40, options.len() as u16 + 9);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(options.len() as u16 + 4), // Sizes
            Constraint::Length(3),                    // Message / controls
        ])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Choose a board size",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, option) in options.iter().enumerate() {
        let line = format!("{}. {}", i + 1, option.label);
        if i == selected {
            lines.push(Line::from(Span::styled(
                format!("> {line} <"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {line}  ")));
        }
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(menu, chunks[0]);

    let footer = match message {
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Yellow))),
        None => Line::from("↑/↓: Size  |  Enter: Start  |  Q: Quit"),
    };
    let footer = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[1]);
}
