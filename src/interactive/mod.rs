//! Interactive TUI
//!
//! A `ratatui` front end that feeds key events into the engine and redraws the
//! board from the returned state.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
