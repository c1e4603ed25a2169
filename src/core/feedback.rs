//! Per-letter feedback and the scoring algorithm
//!
//! Each guessed letter is classified against the secret as:
//! - Absent (gray): not in the secret, or every copy is already accounted for
//! - Present (yellow): in the secret at another position
//! - Correct (green): in the secret at this position
//!
//! The variants are ordered `Absent < Present < Correct`, which is the order the
//! keyboard uses when it keeps the best status seen for a letter.

use super::Word;
use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji tile used in share grids
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII letter code: `G`, `Y` or `-`
    #[must_use]
    pub const fn to_code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse one tile from a pattern string
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackRow(Vec<Feedback>);

impl FeedbackRow {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count the secret's letters into a pool
    /// 2. First pass: mark exact position matches Correct and take them from the pool
    /// 3. Second pass, left to right: mark remaining positions Present while the pool
    ///    still holds that letter, otherwise Absent
    ///
    /// Exact matches therefore always win over present-elsewhere matches, and a
    /// repeated guess letter is never credited more often than the secret holds it.
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, FeedbackRow, Word};
    ///
    /// let secret = Word::new("abbey").unwrap();
    /// let guess = Word::new("bobby").unwrap();
    /// let row = FeedbackRow::score(&guess, &secret);
    ///
    /// assert_eq!(row.to_codes(), "Y-G-G");
    /// assert_eq!(row.as_slice()[3], Feedback::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let guess_letters = guess.letters();
        let secret_letters = secret.letters();
        let mut result = vec![Feedback::Absent; guess_letters.len()];
        let mut available = secret.letter_counts();

        // First pass: exact matches
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                result[i] = Feedback::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, claimed left to right
        for (slot, &letter) in result.iter_mut().zip(guess_letters) {
            if *slot == Feedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Parse a row from a string like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::FeedbackRow;
    ///
    /// let a = FeedbackRow::parse("GY-GY").unwrap();
    /// let b = FeedbackRow::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let tiles: Option<Vec<Feedback>> = s.trim().chars().map(Feedback::from_code).collect();
        tiles.filter(|t| !t.is_empty()).map(Self)
    }

    /// Tiles in position order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Feedback] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every tile is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Number of green tiles
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Number of yellow tiles
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Emoji string like `"🟩🟨⬜🟩🟨"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }

    /// ASCII code string like `"GY-GY"`
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0.iter().map(|f| f.to_code()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback pattern: {s}"))
    }
}
