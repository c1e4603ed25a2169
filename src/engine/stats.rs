//! Session statistics
//!
//! Counts finished games for as long as the process runs. Nothing is persisted.

use super::{GameState, GameStatus};

/// Win/loss record across the games of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts games won in exactly `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game; returns false if the game is still in progress
    pub fn record(&mut self, state: &GameState) -> bool {
        match state.status() {
            GameStatus::InProgress => false,
            GameStatus::Won => {
                let guesses = state.history().len();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;

                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                true
            }
            GameStatus::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
                true
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Average number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}
