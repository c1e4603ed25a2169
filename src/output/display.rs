//! Display functions for game state and command results

use super::formatters::{
    KEYBOARD_ROWS, colored_row, create_progress_bar, keyboard_line, pending_row,
};
use crate::commands::{CheckResult, DefineResult};
use crate::core::LetterStatus;
use crate::engine::{GameState, GameStatus, GameSummary, RejectReason, SessionStats};
use colored::Colorize;

/// Print the board: scored rows, the row being typed, then empty rows
pub fn print_board(state: &GameState) {
    let row_length = state.config().row_length();

    println!();
    for row in state.history() {
        println!("  {}", colored_row(&row.guess, row.feedback.as_slice()));
    }

    let mut drawn = state.history().len();
    if !state.status().is_over() && drawn < state.config().max_rows() {
        println!("  {}", pending_row(state.current_guess(), row_length).bright_white());
        drawn += 1;
    }

    for _ in drawn..state.config().max_rows() {
        println!("  {}", pending_row("", row_length).bright_black());
    }
    println!();
}

/// Print the on-screen keyboard colored by letter status
pub fn print_keyboard(status: &LetterStatus) {
    for (i, keys) in KEYBOARD_ROWS.iter().enumerate() {
        println!("  {}{}", " ".repeat(i * 2), keyboard_line(keys, status));
    }
    println!();
}

/// Print a warning-level condition to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Print why a guess was not accepted
pub fn print_rejection(reason: &RejectReason) {
    println!("{}", format!("✗ {reason}").red());
}

/// Print the end-of-game announcement
pub fn print_summary(summary: &GameSummary) {
    println!("{}", "═".repeat(60).bright_cyan());
    let headline = summary.headline();
    match summary.status {
        GameStatus::Won => println!("  {}", format!("🎉 {headline}").bright_green().bold()),
        _ => println!("  {}", headline.bright_red().bold()),
    }
    if let Some(meaning) = summary.meaning() {
        println!("  {}", meaning.bright_white());
    }

    println!("\n  Score: {}", summary.score().bright_cyan().bold());
    for line in summary.share_grid.lines() {
        println!("    {line}");
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_stats(stats: &SessionStats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:         {}", stats.games_played);
    println!(
        "   Win rate:       {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak: {}", stats.current_streak);
    println!("   Max streak:     {}", stats.max_streak);
    if let Some(avg) = stats.average_guesses() {
        println!("   Avg guesses:    {avg:.2}");
    }

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if most == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
}

/// Print the result of a feedback check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nSecret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!(
        "\n  {}",
        colored_row(&result.guess, result.feedback.as_slice())
    );
    println!(
        "  {}  ({})",
        result.feedback.to_emoji(),
        result.feedback.to_codes()
    );
    println!(
        "  {} correct, {} present\n",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print the result of a dictionary lookup
pub fn print_definition(result: &DefineResult) {
    let word = result.word.text().bright_yellow().bold();
    match (&result.definition, result.known) {
        (Some(definition), _) => println!("{word}: {definition}"),
        (None, true) => println!("{word}: {}", "(no definition available)".bright_black()),
        (None, false) => println!("{word}: {}", "not found in the dictionary".red()),
    }
}
