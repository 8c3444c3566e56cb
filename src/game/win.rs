//! Four-in-a-row detection.
//!
//! Two scans with the same result set: [`find_line`] checks every candidate
//! line on the board, [`line_through`] only the lines passing through the
//! piece that was just placed.

use super::{Board, Player};

/// Pieces in a row needed to win
pub const CONNECT: usize = 4;

/// Board coordinates `(row, col)` of a winning line, in scan order
pub type Line = [(usize, usize); CONNECT];

/// Scan directions as (row step, col step): horizontal, vertical,
/// diagonal down-right, diagonal down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Position `steps` cells from `origin` along `dir`, if it is on the board
fn offset(
    board: &Board,
    origin: (usize, usize),
    dir: (isize, isize),
    steps: isize,
) -> Option<(usize, usize)> {
    let row = origin.0 as isize + dir.0 * steps;
    let col = origin.1 as isize + dir.1 * steps;
    if row < 0 || col < 0 {
        return None;
    }

    let (row, col) = (row as usize, col as usize);
    (row < board.height() && col < board.width()).then_some((row, col))
}

/// The candidate line of `CONNECT` cells starting at `origin`, or `None` if
/// any of it falls off the board
fn candidate(board: &Board, origin: (usize, usize), dir: (isize, isize)) -> Option<Line> {
    let mut line = [(0, 0); CONNECT];
    for (i, slot) in line.iter_mut().enumerate() {
        *slot = offset(board, origin, dir, i as isize)?;
    }
    Some(line)
}

/// Every cell of `line` belongs to `player`
fn is_win(board: &Board, line: &Line, player: Player) -> bool {
    let cell = player.to_cell();
    line.iter().all(|&(row, col)| board.get(row, col) == cell)
}

/// Full-board scan: the first winning line for `player`, starting the four
/// directional checks from every cell in row-major order.
pub fn find_line(board: &Board, player: Player) -> Option<Line> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for dir in DIRECTIONS {
                if let Some(line) = candidate(board, (row, col), dir) {
                    if is_win(board, &line, player) {
                        return Some(line);
                    }
                }
            }
        }
    }
    None
}

/// Whether `player` has four in a row anywhere on the board
pub fn has_four(board: &Board, player: Player) -> bool {
    find_line(board, player).is_some()
}

/// Last-move scan: a winning line for `player` that passes through
/// (row, col). Looks at most `CONNECT - 1` cells either way per direction.
pub fn line_through(board: &Board, row: usize, col: usize, player: Player) -> Option<Line> {
    let cell = player.to_cell();
    if board.cell(row, col) != Some(cell) {
        return None;
    }

    let owned = |dir, steps| {
        offset(board, (row, col), dir, steps).is_some_and(|(r, c)| board.get(r, c) == cell)
    };

    for dir in DIRECTIONS {
        let reach = CONNECT as isize - 1;
        let back = (1..=reach).take_while(|&k| owned(dir, -k)).count() as isize;
        let ahead = (1..=reach).take_while(|&k| owned(dir, k)).count() as isize;

        if back + ahead + 1 >= CONNECT as isize {
            // Report the run from its earliest cell, matching the full scan
            let start = offset(board, (row, col), dir, -back)?;
            return candidate(board, start, dir);
        }
    }
    None
}

/// Whether the piece at (row, col) completed four in a row for `player`
pub fn wins_through(board: &Board, row: usize, col: usize, player: Player) -> bool {
    line_through(board, row, col, player).is_some()
}
