//! Feedback check command
//!
//! Scores a guess against a chosen secret without playing a game.

use crate::core::{FeedbackRow, Word};

/// Result of scoring one guess
#[derive(Debug)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: FeedbackRow,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess =
        Word::with_length(guess, secret.len()).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = FeedbackRow::score(&guess, &secret);

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_scores_guess() {
        let result = check_guess("abbey", "BOBBY").unwrap();
        assert_eq!(result.secret.text(), "ABBEY");
        assert_eq!(result.guess.text(), "BOBBY");
        assert_eq!(result.feedback.to_codes(), "Y-G-G");
    }

    #[test]
    fn check_scores_very_long_words() {
        let word = "e".repeat(256);
        let result = check_guess(&word, &word).unwrap();
        assert!(result.feedback.is_perfect());
        assert_eq!(result.feedback.len(), 256);
    }

    #[test]
    fn check_rejects_length_mismatch() {
        let err = check_guess("abbey", "cat").unwrap_err();
        assert!(err.contains("exactly 5 letters"));
    }

    #[test]
    fn check_rejects_invalid_words() {
        assert!(check_guess("ab3ey", "bobby").is_err());
        assert!(check_guess("abbey", "").is_err());
    }
}
