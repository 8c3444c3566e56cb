use crate::game::{Board, Cell, Line as WinLine, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Display colour of a player's pieces
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Lines for a board of any size: column numbers, the grid, and a marker
/// under the selected column. Cells of `winning` are highlighted.
pub fn board_lines(
    board: &Board,
    selected_column: Option<usize>,
    winning: Option<&WinLine>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.height() + 2);

    let col_line: Vec<Span> = (0..board.width())
        .map(|col| {
            let label = format!("{:^3}", col + 1);
            if Some(col) == selected_column {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::raw(label)
            }
        })
        .collect();
    lines.push(Line::from(col_line));

    for (row, cells) in board.rows().enumerate() {
        let row_spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| {
                let mut style = match cell.player() {
                    Some(player) => Style::default().fg(player_color(player)),
                    None => Style::default().fg(Color::DarkGray),
                };
                if winning.is_some_and(|line| line.contains(&(row, col))) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                let symbol = match cell {
                    Cell::Empty => " . ",
                    Cell::PlayerOne | Cell::PlayerTwo => " \u{25cf} ",
                };
                Span::styled(symbol, style)
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    // Selection indicator
    if let Some(selected) = selected_column {
        let indicator: Vec<Span> = (0..board.width())
            .map(|col| {
                if col == selected {
                    Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan))
                } else {
                    Span::raw("   ")
                }
            })
            .collect();
        lines.push(Line::from(indicator));
    }

    lines
}
