//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole guess and press Enter.

use crate::core::Word;
use crate::dictionary::DictionaryProvider;
use crate::engine::{GameConfig, GameState, RejectReason, SessionStats, SubmitResult};
use crate::output::{
    print_board, print_keyboard, print_rejection, print_stats, print_summary, print_warning,
};
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Replace the current guess with `line` and submit it
///
/// The trimmed line must be exactly one row of letters. Anything else is rejected
/// as `IncompleteGuess` and the state is left untouched.
pub fn apply_guess<D>(state: &mut GameState, line: &str, dictionary: &D) -> SubmitResult
where
    D: DictionaryProvider + ?Sized,
{
    if state.status().is_over() {
        return state.submit_guess(dictionary);
    }

    let line = line.trim();
    let expected = state.config().row_length();
    let entered = line.chars().count();
    let all_letters = line.chars().all(|c| Word::canonical_letter(c).is_some());
    if entered != expected || !all_letters {
        return SubmitResult::Rejected(RejectReason::IncompleteGuess { entered, expected });
    }

    while state.delete_last_letter() {}
    for letter in line.chars() {
        state.append_letter(letter);
    }
    state.submit_guess(dictionary)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or no secret can be chosen.
pub fn run_simple<D>(dictionary: &D, config: &GameConfig, rng: &mut StdRng) -> Result<(), String>
where
    D: DictionaryProvider + ?Sized,
{
    let row_length = config.row_length();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {row_length}-letter word in {} tries.",
        config.max_rows()
    );
    println!("Commands: '/quit' to exit, '/new' for a new game\n");

    let mut stats = SessionStats::new();
    let mut state = new_game(dictionary, config, rng)?;

    loop {
        print_board(&state);
        print_keyboard(state.letter_status());

        let Some(input) = get_user_input(&format!("Guess {}", state.current_row_index() + 1))?
        else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "/new" | "/n" => {
                state = new_game(dictionary, config, rng)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match apply_guess(&mut state, &input, dictionary) {
            SubmitResult::Rejected(reason) => print_rejection(&reason),
            SubmitResult::Accepted { outcome, .. } if outcome.is_terminal() => {
                stats.record(&state);
                print_board(&state);
                if let Some(summary) = state.summary(dictionary) {
                    print_summary(&summary);
                }
                print_stats(&stats);
                println!();

                let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                    state = new_game(dictionary, config, rng)?;
                    println!("\n🔄 New game started!\n");
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            SubmitResult::Accepted { .. } => {}
        }
    }
}

/// Start a game, reporting a degraded start as a warning
fn new_game<D>(dictionary: &D, config: &GameConfig, rng: &mut StdRng) -> Result<GameState, String>
where
    D: DictionaryProvider + ?Sized,
{
    let (state, source) =
        GameState::start_with_rng(dictionary, config.clone(), rng).map_err(|e| e.to_string())?;
    if let Some(warning) = source.warning() {
        print_warning(&warning);
    }
    Ok(state)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::engine::{GameStatus, Outcome};

    fn game() -> (GameState, Dictionary) {
        let secrets = Dictionary::from_words(["crane"]);
        let (state, _) = GameState::start(&secrets, GameConfig::default()).unwrap();
        let guesses = Dictionary::from_words(["crane", "slate", "adieu"]);
        (state, guesses)
    }

    #[test]
    fn apply_guess_submits_whole_line() {
        let (mut state, dict) = game();
        let result = apply_guess(&mut state, "  Slate\n", &dict);
        assert_eq!(result.outcome(), Some(Outcome::Continue));
        assert_eq!(state.history()[0].guess.text(), "SLATE");
    }

    #[test]
    fn apply_guess_replaces_leftover_letters() {
        let (mut state, dict) = game();

        let result = apply_guess(&mut state, "xyzzy", &dict);
        assert!(matches!(
            result,
            SubmitResult::Rejected(RejectReason::NotInDictionary(_))
        ));
        assert_eq!(state.current_guess(), "XYZZY");

        let result = apply_guess(&mut state, "crane", &dict);
        assert_eq!(result.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn apply_guess_short_line_is_incomplete() {
        let (mut state, dict) = game();
        let result = apply_guess(&mut state, "cra", &dict);
        assert_eq!(
            result,
            SubmitResult::Rejected(RejectReason::IncompleteGuess {
                entered: 3,
                expected: 5
            })
        );
        assert!(state.history().is_empty());
    }

    #[test]
    fn apply_guess_rejects_long_line() {
        let (mut state, dict) = game();
        let result = apply_guess(&mut state, "cranes", &dict);
        assert_eq!(
            result,
            SubmitResult::Rejected(RejectReason::IncompleteGuess {
                entered: 6,
                expected: 5
            })
        );
        assert!(state.history().is_empty());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn apply_guess_rejects_non_letters() {
        let (mut state, dict) = game();

        for line in ["c-r-a-n-e", "cr4ne", "cr ne"] {
            let result = apply_guess(&mut state, line, &dict);
            assert!(
                matches!(
                    result,
                    SubmitResult::Rejected(RejectReason::IncompleteGuess { expected: 5, .. })
                ),
                "{line:?} should be rejected, got {result:?}"
            );
        }
        assert!(state.history().is_empty());
        assert_eq!(state.current_guess(), "");
    }

    #[test]
    fn apply_guess_after_game_over_reports_game_over() {
        let (mut state, dict) = game();
        assert_eq!(
            apply_guess(&mut state, "crane", &dict).outcome(),
            Some(Outcome::Won)
        );
        assert_eq!(
            apply_guess(&mut state, "cranes", &dict),
            SubmitResult::Rejected(RejectReason::GameOver)
        );
    }
}
