//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter drawn as a colored tile
#[must_use]
pub fn colored_tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a line of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &[Feedback]) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback)
        .map(|(&letter, &f)| colored_tile(char::from(letter), Some(f)).to_string())
        .collect()
}

/// A partially typed row padded with placeholders to `row_length`
#[must_use]
pub fn pending_row(typed: &str, row_length: usize) -> String {
    let mut cells: Vec<String> = typed.chars().map(|c| format!("[{c}]")).collect();
    cells.resize(row_length.max(cells.len()), "[ ]".to_string());
    cells.concat()
}

/// One keyboard line, each key colored by its best status
#[must_use]
pub fn keyboard_line(keys: &str, status: &LetterStatus) -> String {
    keys.chars()
        .map(|key| {
            let label = format!(" {key} ");
            match status.get(key) {
                Some(Feedback::Correct) => label.black().on_green().to_string(),
                Some(Feedback::Present) => label.black().on_yellow().to_string(),
                Some(Feedback::Absent) => label.bright_black().to_string(),
                None => label,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_row_pads() {
        assert_eq!(pending_row("CR", 5), "[C][R][ ][ ][ ]");
        assert_eq!(pending_row("", 3), "[ ][ ][ ]");
        assert_eq!(pending_row("CRANE", 5), "[C][R][A][N][E]");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn tiles_keep_letter_text() {
        let word = Word::new("crane").unwrap();
        let row = colored_row(&word, &[Feedback::Absent; 5]);
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(row.contains(letter));
        }
    }
}
