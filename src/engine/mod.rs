//! Game engine
//!
//! Owns one game's state and the turn rules. Hosts (the TUI, the line-mode client,
//! tests) drive it through four operations: start a game, append a letter, delete
//! the last letter and submit the guess. Every call returns a value describing what
//! happened; the engine never prints or draws anything itself.

mod config;
mod outcome;
mod state;
mod stats;

pub use config::{
    DEFAULT_FALLBACK_WORD, DEFAULT_MAX_ROWS, DEFAULT_ROW_LENGTH, EngineError, FallbackPolicy,
    GameConfig, MAX_ROWS_LIMIT, ROW_LENGTH_LIMIT,
};
pub use outcome::{GameSummary, Outcome, RejectReason, SecretSource, SubmitResult};
pub use state::{GameState, GameStatus, Row};
pub use stats::SessionStats;
