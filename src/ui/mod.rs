//! Terminal UI: size menu, game view with turn-coloured board, and the
//! end-game modal.

mod app;
pub mod board_widget;
mod game_view;
mod menu_view;

pub use app::{App, MenuOption, ModalChoice, Screen};
