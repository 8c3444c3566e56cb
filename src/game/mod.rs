//! Core Connect Four game logic: board representation, players, win
//! detection, board size presets and the game session state machine.

mod board;
mod player;
mod size;
mod state;
pub mod win;

pub use board::{Board, Cell};
pub use player::Player;
pub use size::BoardSize;
pub use state::{GameStatus, MoveResult, Session};
pub use win::{Line, CONNECT};
