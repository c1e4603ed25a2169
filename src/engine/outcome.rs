//! Values returned to hosts by engine operations

use super::GameStatus;
use crate::core::{FeedbackRow, Word};
use std::fmt;

/// Where the secret of a new game came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Picked uniformly from this many dictionary words of the right length
    Dictionary { candidates: usize },
    /// The dictionary had no word of `requested_length`; the fallback word was used
    Fallback { requested_length: usize },
}

impl SecretSource {
    /// True for the warning-level fallback start
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Human-readable warning for degraded starts
    #[must_use]
    pub fn warning(self) -> Option<String> {
        match self {
            Self::Dictionary { .. } => None,
            Self::Fallback { requested_length } => Some(format!(
                "No {requested_length}-letter words found in the dictionary; using the fallback word"
            )),
        }
    }
}

/// Why a submitted guess was not scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The current guess does not fill the row
    IncompleteGuess { entered: usize, expected: usize },
    /// The guess is not a dictionary word
    NotInDictionary(String),
    /// The game has already been won or lost
    GameOver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { expected, .. } => write!(f, "Please enter {expected} letters"),
            Self::NotInDictionary(_) => write!(f, "Word not found in our dictionary"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

/// Game progression after an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Result of `GameState::submit_guess`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// State is unchanged
    Rejected(RejectReason),
    /// The guess was scored and recorded
    Accepted {
        feedback: FeedbackRow,
        outcome: Outcome,
    },
}

impl SubmitResult {
    /// Outcome of an accepted guess
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Accepted { outcome, .. } => Some(*outcome),
            Self::Rejected(_) => None,
        }
    }
}

/// End-of-game information for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub secret: Word,
    /// Dictionary definition of the secret, if it has a non-empty one
    pub definition: Option<String>,
    pub status: GameStatus,
    pub guesses_used: usize,
    pub max_rows: usize,
    /// One emoji line per guess
    pub share_grid: String,
}

impl GameSummary {
    /// Announcement shown when the game ends
    #[must_use]
    pub fn headline(&self) -> String {
        match self.status {
            GameStatus::Won => "Excellent! You guessed it!".to_string(),
            _ => format!("Game over! The word was \"{}\"", self.secret),
        }
    }

    /// Definition line, if the secret has a definition
    #[must_use]
    pub fn meaning(&self) -> Option<String> {
        self.definition
            .as_ref()
            .map(|d| format!("The word \"{}\" means: {d}", self.secret))
    }

    /// Score line such as `3/6`, or `X/6` for a loss
    #[must_use]
    pub fn score(&self) -> String {
        match self.status {
            GameStatus::Won => format!("{}/{}", self.guesses_used, self.max_rows),
            _ => format!("X/{}", self.max_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_source_degraded() {
        assert!(!SecretSource::Dictionary { candidates: 3 }.is_degraded());
        assert!(SecretSource::Dictionary { candidates: 3 }.warning().is_none());

        let fallback = SecretSource::Fallback {
            requested_length: 7,
        };
        assert!(fallback.is_degraded());
        assert!(fallback.warning().unwrap().contains("7-letter"));
    }

    #[test]
    fn reject_reason_messages() {
        let incomplete = RejectReason::IncompleteGuess {
            entered: 3,
            expected: 5,
        };
        assert_eq!(incomplete.to_string(), "Please enter 5 letters");
        assert_eq!(
            RejectReason::NotInDictionary("XYZZY".into()).to_string(),
            "Word not found in our dictionary"
        );
    }

    #[test]
    fn submit_result_accessors() {
        let rejected = SubmitResult::Rejected(RejectReason::GameOver);
        assert_eq!(rejected.outcome(), None);

        let accepted = SubmitResult::Accepted {
            feedback: FeedbackRow::parse("GGGGG").unwrap(),
            outcome: Outcome::Won,
        };
        assert_eq!(accepted.outcome(), Some(Outcome::Won));
        assert!(Outcome::Lost.is_terminal());
        assert!(!Outcome::Continue.is_terminal());
    }

    #[test]
    fn summary_text() {
        let summary = GameSummary {
            secret: Word::new("apple").unwrap(),
            definition: Some("A round fruit".to_string()),
            status: GameStatus::Lost,
            guesses_used: 6,
            max_rows: 6,
            share_grid: String::new(),
        };

        assert_eq!(summary.headline(), "Game over! The word was \"APPLE\"");
        assert_eq!(
            summary.meaning().unwrap(),
            "The word \"APPLE\" means: A round fruit"
        );
        assert_eq!(summary.score(), "X/6");
    }
}
