//! Keyboard letter status
//!
//! Tracks the best feedback seen for each letter across all guesses of a game.
//! Status only ever moves upward (`Absent -> Present -> Correct`), so a letter that
//! was once green stays green even if a later guess places it wrongly.

use super::{Feedback, FeedbackRow, Word};
use rustc_hash::FxHashMap;

/// Best feedback per letter, keyed by canonical uppercase byte
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatus {
    best: FxHashMap<u8, Feedback>,
}

impl LetterStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the status from a complete guess history
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a FeedbackRow)>,
    {
        let mut status = Self::new();
        for (guess, row) in history {
            status.record(guess, row);
        }
        status
    }

    /// Merge one scored guess into the status
    pub fn record(&mut self, guess: &Word, row: &FeedbackRow) {
        for (&letter, &feedback) in guess.letters().iter().zip(row.as_slice()) {
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(feedback))
                .or_insert(feedback);
        }
    }

    /// Status of a letter, case-insensitive; `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Feedback> {
        Word::canonical_letter(letter).and_then(|b| self.best.get(&b).copied())
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Iterate `(letter, status)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Feedback)> + '_ {
        (b'A'..=b'Z').filter_map(|b| self.best.get(&b).map(|&f| (char::from(b), f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(guess: &str, secret: &str) -> (Word, FeedbackRow) {
        let guess = Word::new(guess).unwrap();
        let row = FeedbackRow::score(&guess, &Word::new(secret).unwrap());
        (guess, row)
    }

    #[test]
    fn records_each_letter() {
        let (guess, row) = scored("crane", "slate");
        let mut status = LetterStatus::new();
        status.record(&guess, &row);

        assert_eq!(status.get('a'), Some(Feedback::Correct));
        assert_eq!(status.get('E'), Some(Feedback::Correct));
        assert_eq!(status.get('c'), Some(Feedback::Absent));
        assert_eq!(status.get('z'), None);
        assert_eq!(status.len(), 5);
    }

    #[test]
    fn duplicate_letter_keeps_best_tile() {
        // In BOBBY vs ABBEY the three Bs score Present, Correct, Absent
        let (guess, row) = scored("bobby", "abbey");
        let mut status = LetterStatus::new();
        status.record(&guess, &row);

        assert_eq!(status.get('b'), Some(Feedback::Correct));
        assert_eq!(status.get('o'), Some(Feedback::Absent));
    }

    #[test]
    fn never_downgrades() {
        let mut status = LetterStatus::new();

        let (first, first_row) = scored("slate", "slate");
        status.record(&first, &first_row);
        assert_eq!(status.get('s'), Some(Feedback::Correct));

        // S absent from this secret entirely; status must stay Correct
        let (second, second_row) = scored("sssss", "crane");
        assert!(second_row.as_slice().iter().all(|&f| f == Feedback::Absent));
        status.record(&second, &second_row);
        assert_eq!(status.get('s'), Some(Feedback::Correct));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut status = LetterStatus::new();
        let (a, a_row) = scored("ratio", "crane");
        status.record(&a, &a_row);
        assert_eq!(status.get('r'), Some(Feedback::Present));

        let (b, b_row) = scored("brine", "crane");
        status.record(&b, &b_row);
        assert_eq!(status.get('r'), Some(Feedback::Correct));
    }

    #[test]
    fn from_history_matches_incremental() {
        let guesses = [scored("ratio", "crane"), scored("sssss", "crane"), scored("brine", "crane")];

        let mut incremental = LetterStatus::new();
        for (guess, row) in &guesses {
            incremental.record(guess, row);
        }

        let rebuilt = LetterStatus::from_history(guesses.iter().map(|(g, r)| (g, r)));
        assert_eq!(incremental, rebuilt);
    }

    #[test]
    fn iter_is_alphabetical() {
        let (guess, row) = scored("crane", "slate");
        let mut status = LetterStatus::new();
        status.record(&guess, &row);

        let letters: String = status.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, "ACENR");
    }
}
