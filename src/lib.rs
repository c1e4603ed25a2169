//! Wordle Game
//!
//! A word-guessing game engine: pick a secret, take letter input, score guesses with
//! exact duplicate-letter rules and track the game to a win or loss. Ships with a
//! terminal UI and a line-mode client.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::engine::{GameConfig, GameState, Outcome};
//!
//! let dict = Dictionary::from_words(["crane"]);
//! let (mut game, _source) = GameState::start(&dict, GameConfig::default()).unwrap();
//!
//! for letter in "crane".chars() {
//!     game.append_letter(letter);
//! }
//! assert_eq!(game.submit_guess(&dict).outcome(), Some(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Word sources
pub mod dictionary;

// Game rules and session state
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
