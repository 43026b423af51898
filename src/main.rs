//! Wordle Link - CLI
//!
//! Create shareable Wordle games, play them in the terminal, and resume them
//! later. Guesses are validated against a dictionary lookup service (or the
//! embedded word list in offline mode).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_link::{
    commands::{DEFAULT_BASE_URL, create_game, reset_game, run_play, show_game},
    interactive::{App, run_tui},
    link::GameLink,
    output::print_new_game,
    store::GameStore,
    validator::{BuiltinValidator, DEFAULT_DICT_URL, HttpValidator, WordValidator},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_link",
    about = "Shareable Wordle games: create a link, send it, play and resume anywhere",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for saved games (default: ~/.wordle_link)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a game and print its shareable link
    New {
        /// The secret word; a random one is drawn when omitted
        word: Option<String>,

        /// Base URL the link points at
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Play a game from its link (TUI by default)
    Play {
        /// Shareable link, or just its fragment ('id.encoded')
        link: String,

        /// Validate guesses against the embedded word list, no network
        #[arg(short, long)]
        offline: bool,

        /// Plain stdin loop instead of the TUI
        #[arg(short, long)]
        simple: bool,

        /// Override the dictionary lookup endpoint
        #[arg(long, default_value = DEFAULT_DICT_URL)]
        dict_url: String,

        /// Validate against a custom word list file instead of any dictionary
        #[arg(short = 'w', long)]
        wordlist: Option<PathBuf>,
    },

    /// Print a game's saved board without playing
    Show {
        /// Shareable link, or just its fragment
        link: String,
    },

    /// Delete a game's saved state
    Reset {
        /// Shareable link, or just its fragment
        link: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store_dir = cli.state_dir.unwrap_or_else(GameStore::default_dir);
    let store = GameStore::open(&store_dir)
        .with_context(|| format!("cannot open state directory {}", store_dir.display()))?;

    match cli.command {
        Commands::New { word, base_url } => {
            let game = create_game(word.as_deref(), &base_url)?;
            print_new_game(&game.url, game.link.session_id());
            Ok(())
        }
        Commands::Play {
            link,
            offline,
            simple,
            dict_url,
            wordlist,
        } => {
            let link = parse_link(&link)?;
            let validator = build_validator(offline, &dict_url, wordlist.as_deref())?;

            if simple {
                run_play(&link, &store, validator.as_ref())
            } else {
                let app = App::new(&link, store, validator)?;
                run_tui(app)
            }
        }
        Commands::Show { link } => show_game(&parse_link(&link)?, &store),
        Commands::Reset { link } => reset_game(&parse_link(&link)?, &store),
    }
}

fn parse_link(input: &str) -> Result<GameLink> {
    GameLink::parse(input).context("this does not look like a game link")
}

/// Pick the dictionary implementation for the -o/-w flags
fn build_validator(
    offline: bool,
    dict_url: &str,
    wordlist: Option<&std::path::Path>,
) -> Result<Box<dyn WordValidator>> {
    if let Some(path) = wordlist {
        let words = load_from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?;
        anyhow::ensure!(!words.is_empty(), "word list {} has no usable words", path.display());
        return Ok(Box::new(BuiltinValidator::from_words(
            words.iter().map(wordle_link::core::Word::text),
        )));
    }

    if offline {
        return Ok(Box::new(BuiltinValidator::embedded()));
    }

    let validator =
        HttpValidator::new(dict_url).context("cannot build the dictionary lookup client")?;
    Ok(Box::new(validator))
}
