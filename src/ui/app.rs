use crate::config::BoardConfig;
use crate::game::{BoardSize, GameStatus, MoveResult, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// Buttons on the end-game modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    Rematch,
    MainMenu,
}

impl ModalChoice {
    fn toggle(self) -> Self {
        match self {
            ModalChoice::Rematch => ModalChoice::MainMenu,
            ModalChoice::MainMenu => ModalChoice::Rematch,
        }
    }
}

/// A board size the menu offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub height: usize,
    pub width: usize,
}

pub struct App {
    screen: Screen,
    menu: Vec<MenuOption>,
    menu_index: usize,
    session: Session,
    selected_column: usize,
    modal_choice: ModalChoice,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app with the menu preselected from `board`. Custom
    /// dimensions get their own menu entry below the presets.
    pub fn new(board: &BoardConfig) -> Self {
        let mut menu: Vec<MenuOption> = BoardSize::ALL
            .into_iter()
            .map(|size| {
                let (height, width) = size.dimensions();
                MenuOption {
                    label: format!("{:<6}  {height} x {width}", capitalize(size.name())),
                    height,
                    width,
                }
            })
            .collect();

        let menu_index = if board.is_custom() {
            let (height, width) = board.dimensions();
            menu.push(MenuOption {
                label: format!("{:<6}  {height} x {width}", "Custom"),
                height,
                width,
            });
            menu.len() - 1
        } else {
            BoardSize::ALL
                .iter()
                .position(|&size| size == board.size)
                .unwrap_or(0)
        };

        App {
            screen: Screen::Menu,
            menu,
            menu_index,
            session: Session::with_size(board.size),
            selected_column: 0,
            modal_choice: ModalChoice::Rematch,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The end-game modal is up: the game is over and drops are ignored
    pub fn modal_visible(&self) -> bool {
        self.screen == Screen::Playing && self.session.is_terminal()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Playing if self.session.is_terminal() => self.handle_modal_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = (self.menu_index + self.menu.len() - 1) % self.menu.len();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1) % self.menu.len();
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c).filter(|&i| i < self.menu.len()) {
                    self.menu_index = index;
                }
            }
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let width = self.session.board().width();
        match key.code {
            KeyCode::Esc => self.main_menu(),
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c) => {
                if let Some(col) = digit_index(c) {
                    if col < width {
                        self.selected_column = col;
                    }
                    self.drop_at(col);
                }
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.modal_choice = self.modal_choice.toggle();
            }
            KeyCode::Enter => match self.modal_choice {
                ModalChoice::Rematch => self.rematch(),
                ModalChoice::MainMenu => self.main_menu(),
            },
            KeyCode::Char('r') => self.rematch(),
            KeyCode::Char('m') | KeyCode::Esc => self.main_menu(),
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let option = &self.menu[self.menu_index];
        match Session::new(option.height, option.width) {
            Ok(session) => {
                self.session = session;
                self.screen = Screen::Playing;
                self.selected_column = option.width / 2;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn rematch(&mut self) {
        self.session.reset();
        self.selected_column = self.session.board().width() / 2;
        self.modal_choice = ModalChoice::Rematch;
        self.message = Some("New game started!".to_string());
    }

    fn main_menu(&mut self) {
        debug!("back to main menu");
        self.screen = Screen::Menu;
        self.modal_choice = ModalChoice::Rematch;
        self.message = None;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.drop_at(self.selected_column);
    }

    fn drop_at(&mut self, column: usize) {
        match self.session.attempt_move(column) {
            MoveResult::Placed { .. } => {
                if self.session.is_terminal() {
                    info!(status = ?self.session.status(), "game over");
                    self.message = Some(self.end_message());
                }
            }
            MoveResult::ColumnFull if column >= self.session.board().width() => {
                self.message = Some(format!("No column {}", column + 1));
            }
            MoveResult::ColumnFull => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            MoveResult::GameAlreadyOver => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Text for the end-game modal
    pub fn end_message(&self) -> String {
        match self.session.status() {
            GameStatus::Won(player) => format!("{player} won!"),
            GameStatus::Tied => "Tied game".to_string(),
            GameStatus::InProgress => String::new(),
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::menu_view::render(
                frame,
                &self.menu,
                self.menu_index,
                &self.message,
            ),
            Screen::Playing => {
                super::game_view::render(
                    frame,
                    &self.session,
                    self.selected_column,
                    &self.message,
                );
                if self.modal_visible() {
                    super::game_view::render_end_modal(
                        frame,
                        &self.end_message(),
                        self.modal_choice,
                    );
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

/// '1'..='9' to a zero-based index
fn digit_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d) if d > 0 => Some(d as usize - 1),
        _ => None,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
