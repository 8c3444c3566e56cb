//! # Connect Four
//!
//! Two-player Connect Four on a board of configurable size, with a terminal
//! UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, session
//! - [`ui`] — Terminal UI: size menu, game view, end-game modal
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
