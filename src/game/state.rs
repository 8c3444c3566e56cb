use tracing::{debug, info};

use crate::error::DimensionError;

use super::win::{self, Line};
use super::{Board, BoardSize, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Result of dropping a piece. Rejected moves leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    /// The column has no empty cell, or does not exist
    ColumnFull,
    GameAlreadyOver,
}

/// One game: the board, whose turn it is, and whether it has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    active_player: Player,
    status: GameStatus,
    winning_line: Option<Line>,
    moves_played: usize,
}

impl Session {
    /// Start a game on an empty `height` x `width` board, player 1 to move
    pub fn new(height: usize, width: usize) -> Result<Self, DimensionError> {
        let board = Board::new(height, width)?;
        info!(height, width, "new game");
        Ok(Session::start(board))
    }

    /// Start a game on one of the preset board sizes
    pub fn with_size(size: BoardSize) -> Self {
        let (height, width) = size.dimensions();
        info!(%size, height, width, "new game");
        Session::start(Board::blank(height, width))
    }

    /// Player whose turn it is. After a win this stays the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Cells of the winning four, once the game is won
    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Checks for a win before a tie, so a move that both fills the board and
    /// completes four in a row is a win. The active player only changes after
    /// a non-terminal move.
    pub fn attempt_move(&mut self, column: usize) -> MoveResult {
        if self.is_terminal() {
            debug!(column, status = ?self.status, "move rejected, game is over");
            return MoveResult::GameAlreadyOver;
        }

        let Some(row) = self.board.lowest_empty_row(column) else {
            debug!(column, "move rejected, no spot in column");
            return MoveResult::ColumnFull;
        };

        let player = self.active_player;
        self.board.place(row, column, player.to_cell());
        self.moves_played += 1;
        debug!(row, column, player = player.number(), "piece placed");

        if let Some(line) = win::line_through(&self.board, row, column, player) {
            info!(player = player.number(), ?line, moves = self.moves_played, "game won");
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            info!(moves = self.moves_played, "game tied");
            self.status = GameStatus::Tied;
        } else {
            self.active_player = player.other();
        }

        MoveResult::Placed {
            row,
            column,
            player,
        }
    }

    /// Rematch: clear the board, keep its dimensions, player 1 to move
    pub fn reset(&mut self) {
        let (height, width) = (self.board.height(), self.board.width());
        info!(height, width, "rematch");

        *self = Session::start(Board::blank(height, width));
    }

    fn start(board: Board) -> Self {
        Session {
            board,
            active_player: Player::One,
            status: GameStatus::InProgress,
            winning_line: None,
            moves_played: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn play(session: &mut Session, columns: &[usize]) -> Vec<MoveResult> {
        columns.iter().map(|&col| session.attempt_move(col)).collect()
    }

    #[test]
    fn test_new_game_is_empty() {
        for (height, width) in [(1, 1), (4, 5), (6, 7), (8, 11), (3, 20)] {
            let session = Session::new(height, width).unwrap();
            assert_eq!(session.active_player(), Player::One);
            assert_eq!(session.status(), GameStatus::InProgress);
            assert!(!session.is_terminal());
            assert!(session.board().rows().flatten().all(|c| c.is_empty()));
            assert_eq!(session.moves_played(), 0);
        }
    }

    #[test]
    fn test_new_game_rejects_zero_dimensions() {
        assert!(Session::new(0, 0).is_err());
        assert!(Session::new(6, 0).is_err());
    }

    #[test]
    fn test_with_size() {
        let session = Session::with_size(BoardSize::Large);
        assert_eq!(session.board().height(), 8);
        assert_eq!(session.board().width(), 11);
    }

    #[test]
    fn test_move_fills_lowest_row_and_toggles() {
        let mut session = Session::new(6, 7).unwrap();

        assert_eq!(
            session.attempt_move(3),
            MoveResult::Placed {
                row: 5,
                column: 3,
                player: Player::One
            }
        );
        assert_eq!(session.active_player(), Player::Two);
        assert_eq!(session.board().get(5, 3), Cell::PlayerOne);

        assert_eq!(
            session.attempt_move(3),
            MoveResult::Placed {
                row: 4,
                column: 3,
                player: Player::Two
            }
        );
        assert_eq!(session.board().get(4, 3), Cell::PlayerTwo);
        assert_eq!(session.board().occupied(), 2);
        assert_eq!(session.active_player(), Player::One);
    }

    #[test]
    fn test_full_column_is_a_no_op() {
        let mut session = Session::new(4, 5).unwrap();
        play(&mut session, &[0, 0, 0, 0]);
        let before = session.clone();

        assert_eq!(session.attempt_move(0), MoveResult::ColumnFull);
        assert_eq!(session, before);
        assert_eq!(session.active_player(), Player::One);
    }

    #[test]
    fn test_out_of_range_column_is_column_full() {
        let mut session = Session::new(6, 7).unwrap();
        let before = session.clone();

        assert_eq!(session.attempt_move(7), MoveResult::ColumnFull);
        assert_eq!(session.attempt_move(usize::MAX), MoveResult::ColumnFull);
        assert_eq!(session, before);
    }

    #[test]
    fn test_vertical_win_keeps_winner_active() {
        let mut session = Session::new(6, 7).unwrap();
        let results = play(&mut session, &[0, 1, 0, 1, 0, 1, 0]);

        assert_eq!(
            results.last(),
            Some(&MoveResult::Placed {
                row: 2,
                column: 0,
                player: Player::One
            })
        );
        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert_eq!(session.active_player(), Player::One);
        assert_eq!(
            session.winning_line(),
            Some(&[(2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_horizontal_win_along_top_row() {
        let mut session = Session::new(2, 8).unwrap();
        play(&mut session, &[1, 0, 0, 2, 1, 3, 2, 6, 3]);

        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert_eq!(
            session.winning_line(),
            Some(&[(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut session = Session::new(6, 7).unwrap();
        play(&mut session, &[0, 1, 0, 1, 0, 1, 0]);
        let before = session.clone();

        assert_eq!(session.attempt_move(2), MoveResult::GameAlreadyOver);
        assert_eq!(session.attempt_move(9), MoveResult::GameAlreadyOver);
        assert_eq!(session, before);
    }

    #[test]
    fn test_tie_on_medium_board() {
        let mut session = Session::with_size(BoardSize::Medium);
        let pattern: Vec<usize> = (0..2)
            .flat_map(|_| (0..8).flat_map(|col| [col; 3]))
            .collect();
        assert_eq!(pattern.len(), 48);

        let results = play(&mut session, &pattern);
        assert!(results
            .iter()
            .all(|r| matches!(r, MoveResult::Placed { .. })));
        assert_eq!(session.status(), GameStatus::Tied);
        assert!(session.board().is_full());
        assert_eq!(session.winning_line(), None);
        // Last move was player 2's; no toggle after a terminal move
        assert_eq!(session.active_player(), Player::Two);
        assert_eq!(session.attempt_move(0), MoveResult::GameAlreadyOver);
    }

    #[test]
    fn test_tie_on_short_board() {
        let mut session = Session::new(3, 4).unwrap();
        let pattern: Vec<usize> = (0..3).flat_map(|_| 0..4).collect();
        play(&mut session, &pattern);
        assert_eq!(session.status(), GameStatus::Tied);
    }

    #[test]
    fn test_win_on_final_cell_is_not_a_tie() {
        let mut session = Session::new(3, 4).unwrap();
        let results = play(&mut session, &[1, 1, 3, 0, 0, 1, 3, 0, 2, 3, 2, 2]);

        assert!(results
            .iter()
            .all(|r| matches!(r, MoveResult::Placed { .. })));
        assert!(session.board().is_full());
        assert_eq!(session.status(), GameStatus::Won(Player::Two));
    }

    #[test]
    fn test_reset_starts_fresh_with_same_dimensions() {
        let mut session = Session::new(6, 7).unwrap();
        play(&mut session, &[0, 1, 0, 1, 0, 1, 0]);
        assert!(session.is_terminal());

        session.reset();
        assert_eq!(session, Session::new(6, 7).unwrap());
    }

    #[test]
    fn test_random_games_match_full_board_scan() {
        let mut rng = StdRng::seed_from_u64(0xC4);

        for _ in 0..300 {
            let height = rng.gen_range(1..=8);
            let width = rng.gen_range(1..=11);
            let mut session = Session::new(height, width).unwrap();

            while !session.is_terminal() {
                let mover = session.active_player();
                let before = session.board().clone();
                let column = rng.gen_range(0..width + 1);

                match session.attempt_move(column) {
                    MoveResult::Placed { row, column: col, player } => {
                        assert_eq!(player, mover);
                        assert_eq!(before.lowest_empty_row(col), Some(row));
                        assert_eq!(session.board().occupied(), before.occupied() + 1);

                        let full_scan = win::has_four(session.board(), mover);
                        assert_eq!(session.status() == GameStatus::Won(mover), full_scan);
                    }
                    MoveResult::ColumnFull => {
                        assert!(before.is_column_full(column));
                        assert_eq!(session.board(), &before);
                    }
                    MoveResult::GameAlreadyOver => unreachable!(),
                }
            }

            if let GameStatus::Won(player) = session.status() {
                assert_eq!(player, session.active_player());
                let line = session.winning_line().unwrap();
                assert!(line
                    .iter()
                    .all(|&(r, c)| session.board().get(r, c) == player.to_cell()));
            } else {
                assert!(session.board().is_full());
            }
        }
    }
}
