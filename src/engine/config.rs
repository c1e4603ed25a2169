//! Game configuration
//!
//! Board dimensions and the policy for choosing a secret when the dictionary has no
//! word of the requested length. Invalid dimensions are rejected here, before any
//! game state exists.

use crate::core::{Word, WordError};
use thiserror::Error;

/// Letters per guess unless configured otherwise
pub const DEFAULT_ROW_LENGTH: usize = 5;

/// Attempts per game unless configured otherwise
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Longest row a board may have
pub const ROW_LENGTH_LIMIT: usize = 32;

/// Most attempts a board may have
pub const MAX_ROWS_LIMIT: usize = 32;

/// Secret used when the dictionary offers no candidate of the right length
pub const DEFAULT_FALLBACK_WORD: &str = "APPLE";

/// Error type for engine construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("row length must be between 1 and {ROW_LENGTH_LIMIT}, got {0}")]
    InvalidRowLength(usize),
    #[error("max rows must be between 1 and {MAX_ROWS_LIMIT}, got {0}")]
    InvalidMaxRows(usize),
    #[error("invalid fallback word: {0}")]
    InvalidFallback(#[from] WordError),
    #[error("no {length}-letter word is available to use as the secret")]
    NoSecretAvailable { length: usize },
}

/// What to do when no dictionary word has the requested length
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Play with this word instead, reporting a degraded start
    DefaultWord(Word),
    /// Refuse to start the game
    Fail,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::DefaultWord(Word::from_canonical(DEFAULT_FALLBACK_WORD.as_bytes()))
    }
}

/// Board dimensions and fallback policy for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    row_length: usize,
    max_rows: usize,
    fallback: FallbackPolicy,
}

impl GameConfig {
    /// Create a configuration with the default fallback policy
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidRowLength` or `EngineError::InvalidMaxRows`
    /// when either dimension is zero or above its limit.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::engine::{EngineError, GameConfig};
    ///
    /// let config = GameConfig::new(6, 8).unwrap();
    /// assert_eq!(config.row_length(), 6);
    ///
    /// assert_eq!(GameConfig::new(0, 6), Err(EngineError::InvalidRowLength(0)));
    /// ```
    pub fn new(row_length: usize, max_rows: usize) -> Result<Self, EngineError> {
        if !(1..=ROW_LENGTH_LIMIT).contains(&row_length) {
            return Err(EngineError::InvalidRowLength(row_length));
        }
        if !(1..=MAX_ROWS_LIMIT).contains(&max_rows) {
            return Err(EngineError::InvalidMaxRows(max_rows));
        }

        Ok(Self {
            row_length,
            max_rows,
            fallback: FallbackPolicy::default(),
        })
    }

    /// Replace the fallback policy
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Use `word` as the fallback secret
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidFallback` if `word` is not a valid word of
    /// exactly `row_length` letters.
    pub fn with_fallback_word(self, word: &str) -> Result<Self, EngineError> {
        let word = Word::with_length(word, self.row_length)?;
        Ok(self.with_fallback(FallbackPolicy::DefaultWord(word)))
    }

    #[inline]
    #[must_use]
    pub const fn row_length(&self) -> usize {
        self.row_length
    }

    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub const fn fallback(&self) -> &FallbackPolicy {
        &self.fallback
    }

    /// The fallback secret, if the policy provides one that fits the board
    pub(crate) fn fallback_secret(&self) -> Option<&Word> {
        match &self.fallback {
            FallbackPolicy::DefaultWord(word) if word.len() == self.row_length => Some(word),
            _ => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            row_length: DEFAULT_ROW_LENGTH,
            max_rows: DEFAULT_MAX_ROWS,
            fallback: FallbackPolicy::default(),
        }
    }
}
