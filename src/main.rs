use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::{BoardSize, GameStatus, MoveResult};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Board size preset: small (4x5), medium (6x8) or large (8x11)
    #[arg(long)]
    size: Option<BoardSize>,

    /// Custom board height (requires --width)
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Custom board width (requires --height)
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Play the columns given by --moves without the TUI and print the result
    #[arg(long)]
    headless: bool,

    /// Comma-separated zero-based columns to drop into, in turn order
    #[arg(long, value_delimiter = ',', requires = "headless")]
    moves: Vec<usize>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.board.size = size;
        config.board.height = None;
        config.board.width = None;
    }
    if let (Some(height), Some(width)) = (cli.height, cli.width) {
        config.board.height = Some(height);
        config.board.width = Some(width);
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    config.validate().context("invalid configuration")?;

    init_logging(&config.logging, cli.headless)?;
    if !cli.config.exists() {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    if cli.headless {
        run_headless(&config, &cli.moves)
    } else {
        run_tui(&config).context("running terminal UI")
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
/// Without a log file the TUI owns the terminal, so nothing is installed.
fn init_logging(logging: &LoggingConfig, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .with_context(|| format!("invalid log filter '{}'", logging.filter))?;

    match &logging.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_headless(config: &AppConfig, moves: &[usize]) -> Result<()> {
    if moves.is_empty() {
        bail!("--headless needs at least one column in --moves");
    }

    let mut session = config.board.new_session()?;
    info!(moves = moves.len(), "playing scripted game");

    for (turn, &column) in moves.iter().enumerate() {
        match session.attempt_move(column) {
            MoveResult::Placed { .. } => {}
            MoveResult::ColumnFull => {
                println!("move {}: column {column} has no spot, skipped", turn + 1);
            }
            MoveResult::GameAlreadyOver => {
                println!(
                    "move {}: game already over, ignoring remaining moves",
                    turn + 1
                );
                break;
            }
        }
    }

    println!("{}", session.board());
    match session.status() {
        GameStatus::Won(player) => println!("{player} won!"),
        GameStatus::Tied => println!("Tied game"),
        GameStatus::InProgress => println!("{}'s turn", session.active_player()),
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config.board);
    let res = app.run(&mut terminal);

    // Leave raw mode and the alternate screen whether or not the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
