//! Wordle Game - CLI
//!
//! Play in a TUI (default) or a simple line mode, or use the one-shot helper commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{check_guess, define_word, run_simple, session_rng},
    dictionary::{Dictionary, loader},
    engine::{DEFAULT_MAX_ROWS, DEFAULT_ROW_LENGTH, FallbackPolicy, GameConfig},
    output::{print_check_result, print_definition, print_warning},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROW_LENGTH)]
    length: usize,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    rows: usize,

    /// Dictionary: 'embedded' (default) or path to a .json or text file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Refuse to start instead of using the fallback word when no word fits
    #[arg(long, global = true, conflicts_with = "fallback")]
    strict: bool,

    /// Word to play when the dictionary has no word of the requested length
    #[arg(long, global = true, value_name = "WORD")]
    fallback: Option<String>,

    /// Seed for reproducible secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Show the feedback a guess would get against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Look up a word in the dictionary
    Define {
        /// Word to look up
        word: String,
    },
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str, length: usize) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => loader::embedded(),
        path => loader::load_from_file(path)?,
    };

    let lengths = dictionary.lengths();
    if dictionary.is_empty() {
        print_warning(&format!("dictionary '{source}' contains no valid words"));
    } else if !lengths.contains(&length) {
        let available: Vec<String> = lengths.iter().map(ToString::to_string).collect();
        print_warning(&format!(
            "dictionary '{source}' has no {length}-letter words (available: {})",
            available.join(", ")
        ));
    }

    Ok(dictionary)
}

/// Build the game configuration from CLI flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let config = GameConfig::new(cli.length, cli.rows)?;

    Ok(match (&cli.fallback, cli.strict) {
        (Some(word), _) => config.with_fallback_word(word)?,
        (None, true) => config.with_fallback(FallbackPolicy::Fail),
        (None, false) => config,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dictionary, cli.length)?;
    let config = build_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, cli.seed),
        Commands::Simple => {
            let mut rng = session_rng(cli.seed);
            run_simple(&dictionary, &config, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Define { word } => {
            let result = define_word(&word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_definition(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config, session_rng(seed))?;
    run_tui(app)
}
