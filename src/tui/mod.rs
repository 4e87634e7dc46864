//! TUI (Text User Interface) module for playreel
//!
//! Screen composition, layout and theming for the terminal player, built on
//! ratatui/crossterm.

pub mod app;
pub mod theme;
pub mod ui;

pub use app::{render_player, PlayerView};
pub use theme::{current_theme, init_theme, Theme, ThemeName};
