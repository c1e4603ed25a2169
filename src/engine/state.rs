//! Per-game state and the turn rules
//!
//! A `GameState` is created by [`GameState::start`] and mutated only through the
//! host operations below. The row index is the length of the history, so the two
//! can never disagree, and once the game is won or lost every operation is a no-op.

use super::{
    EngineError, GameConfig, GameSummary, Outcome, RejectReason, SecretSource, SubmitResult,
};
use crate::core::{FeedbackRow, LetterStatus, Word};
use crate::dictionary::DictionaryProvider;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A completed guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub feedback: FeedbackRow,
}

/// State of one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    secret: Word,
    current_guess: String,
    history: Vec<Row>,
    status: GameStatus,
    letter_status: LetterStatus,
}

impl GameState {
    /// Start a new game with a randomly chosen secret
    ///
    /// See [`GameState::start_with_rng`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoSecretAvailable` when neither the dictionary nor
    /// the fallback policy can supply a secret of the configured length.
    pub fn start<D>(dictionary: &D, config: GameConfig) -> Result<(Self, SecretSource), EngineError>
    where
        D: DictionaryProvider + ?Sized,
    {
        Self::start_with_rng(dictionary, config, &mut rand::rng())
    }

    /// Start a new game, drawing the secret with `rng`
    ///
    /// The secret is chosen uniformly from the dictionary words of the configured
    /// length, skipping any that are not valid words. If there are none, the
    /// configured fallback word is used and the returned [`SecretSource`] is
    /// `Fallback`, which hosts should report as a warning.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoSecretAvailable` when there is no candidate and
    /// the fallback policy is `Fail` or its word does not fit the row length.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::dictionary::Dictionary;
    /// use wordle_game::engine::{GameConfig, GameState, SecretSource};
    ///
    /// let dict = Dictionary::from_words(["crane", "slate"]);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let (state, source) = GameState::start_with_rng(&dict, GameConfig::default(), &mut rng).unwrap();
    ///
    /// assert_eq!(source, SecretSource::Dictionary { candidates: 2 });
    /// assert!(state.current_guess().is_empty());
    /// ```
    pub fn start_with_rng<D, R>(
        dictionary: &D,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<(Self, SecretSource), EngineError>
    where
        D: DictionaryProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let length = config.row_length();
        let candidates: Vec<Word> = dictionary
            .words_of_length(length)
            .into_iter()
            .filter_map(|word| Word::with_length(word, length).ok())
            .collect();

        let picked = candidates.choose(rng).cloned();

        let (secret, source) = if let Some(secret) = picked {
            (
                secret,
                SecretSource::Dictionary {
                    candidates: candidates.len(),
                },
            )
        } else {
            let fallback = config
                .fallback_secret()
                .cloned()
                .ok_or(EngineError::NoSecretAvailable { length })?;
            (
                fallback,
                SecretSource::Fallback {
                    requested_length: length,
                },
            )
        };

        let state = Self {
            current_guess: String::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
            letter_status: LetterStatus::new(),
            secret,
            config,
        };

        Ok((state, source))
    }

    /// Append one letter to the current guess
    ///
    /// Returns true if the guess changed. Non-letters, a full row and a finished
    /// game are all silently ignored.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.status.is_over() || self.current_guess.len() >= self.config.row_length() {
            return false;
        }
        let Some(letter) = Word::canonical_letter(letter) else {
            return false;
        };
        self.current_guess.push(char::from(letter));
        true
    }

    /// Append raw key input, accepted only if it is exactly one letter
    ///
    /// Multi-character input such as `"Enter"` or `"ab"` is ignored.
    pub fn append_key(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.append_letter(letter),
            _ => false,
        }
    }

    /// Remove the last letter of the current guess
    ///
    /// Returns true if a letter was removed.
    pub fn delete_last_letter(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.current_guess.pop().is_some()
    }

    /// Submit the current guess
    ///
    /// Rejections leave the state untouched. An accepted guess is scored,
    /// recorded in the history and the keyboard status, and the current guess is
    /// cleared. The secret itself is always accepted, even if the dictionary
    /// does not list it (as can happen with a fallback secret).
    pub fn submit_guess<D>(&mut self, dictionary: &D) -> SubmitResult
    where
        D: DictionaryProvider + ?Sized,
    {
        if self.status.is_over() {
            return SubmitResult::Rejected(RejectReason::GameOver);
        }

        let expected = self.config.row_length();
        if self.current_guess.len() != expected {
            return SubmitResult::Rejected(RejectReason::IncompleteGuess {
                entered: self.current_guess.len(),
                expected,
            });
        }

        let guess = Word::from_canonical(self.current_guess.as_bytes());
        if guess != self.secret && !dictionary.contains(guess.text()) {
            return SubmitResult::Rejected(RejectReason::NotInDictionary(guess.text().to_string()));
        }

        let feedback = FeedbackRow::score(&guess, &self.secret);
        self.letter_status.record(&guess, &feedback);
        self.history.push(Row {
            guess,
            feedback: feedback.clone(),
        });
        self.current_guess.clear();

        let outcome = if feedback.is_perfect() {
            self.status = GameStatus::Won;
            Outcome::Won
        } else if self.history.len() >= self.config.max_rows() {
            self.status = GameStatus::Lost;
            Outcome::Lost
        } else {
            Outcome::Continue
        };

        SubmitResult::Accepted { feedback, outcome }
    }

    /// End-of-game details, available only once the game is over
    pub fn summary<D>(&self, dictionary: &D) -> Option<GameSummary>
    where
        D: DictionaryProvider + ?Sized,
    {
        if !self.status.is_over() {
            return None;
        }

        let definition = dictionary
            .lookup(self.secret.text())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let share_grid = self
            .history
            .iter()
            .map(|row| row.feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n");

        Some(GameSummary {
            secret: self.secret.clone(),
            definition,
            status: self.status,
            guesses_used: self.history.len(),
            max_rows: self.config.max_rows(),
            share_grid,
        })
    }

    /// The word being guessed
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Letters typed into the current row, uppercase
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Index of the row being filled; equals the number of completed guesses
    #[must_use]
    pub fn current_row_index(&self) -> usize {
        self.history.len()
    }

    /// Completed guesses in order
    #[must_use]
    pub fn history(&self) -> &[Row] {
        &self.history
    }

    /// Best feedback seen per letter
    #[must_use]
    pub const fn letter_status(&self) -> &LetterStatus {
        &self.letter_status
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_rows(&self) -> usize {
        self.config.max_rows().saturating_sub(self.history.len())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::core::Feedback;
    use crate::dictionary::Dictionary;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn invariants_hold_for_any_input(keys in proptest::collection::vec(0u8..30, 0..120)) {
            let words = ["ABBEY", "BOBBY", "CRANE", "SLATE", "EERIE"];
            let dict = Dictionary::from_words(words);
            let (mut state, _) = GameState::start(&dict, GameConfig::default()).unwrap();
            let mut previous_best: Vec<(char, Feedback)> = Vec::new();

            for key in keys {
                match key {
                    // letters from the dictionary alphabet, plus some noise
                    0..=19 => { state.append_letter(char::from(b"ABCEILNRSTYOZ19 x-!#"[usize::from(key)])); }
                    20..=22 => { state.delete_last_letter(); }
                    23..=27 => {
                        // type a whole dictionary word, then submit
                        while state.delete_last_letter() {}
                        for c in words[usize::from(key - 23)].chars() {
                            state.append_letter(c);
                        }
                        state.submit_guess(&dict);
                    }
                    _ => { state.submit_guess(&dict); }
                }

                prop_assert!(state.current_guess().len() <= state.config().row_length());
                prop_assert_eq!(state.current_row_index(), state.history().len());
                prop_assert!(state.history().len() <= state.config().max_rows());
                prop_assert_eq!(
                    state.status() == GameStatus::Lost,
                    state.history().len() == state.config().max_rows()
                        && !state.history().last().is_some_and(|r| r.feedback.is_perfect())
                );

                // keyboard status never downgrades
                for &(letter, best) in &previous_best {
                    prop_assert!(state.letter_status().get(letter).is_some_and(|now| now >= best));
                }
                previous_best = state.letter_status().iter().collect();
            }
        }
    }
}
