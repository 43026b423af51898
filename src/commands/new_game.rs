//! Game creation command
//!
//! Builds a shareable link for a secret word, either supplied by the creator
//! or drawn at random from the embedded pool.

use crate::core::Word;
use crate::link::GameLink;
use crate::wordlists;
use anyhow::Context;
use url::Url;

/// Where shareable links point by default
pub const DEFAULT_BASE_URL: &str = "https://wordle-link.example/play/";

/// A freshly created game
pub struct NewGame {
    pub link: GameLink,
    pub url: Url,
}

/// Create a game and its shareable link
///
/// The secret is intentionally NOT checked against any dictionary: the
/// creator picks the word, and the session treats it as always winnable.
///
/// # Errors
///
/// Returns an error if the supplied word is not a valid 5-letter word or the
/// base URL does not parse.
pub fn create_game(word: Option<&str>, base_url: &str) -> anyhow::Result<NewGame> {
    let secret = match word {
        Some(word) => Word::new(word).context("secret word is not playable")?,
        None => wordlists::random_secret(),
    };

    let base = Url::parse(base_url).context("base URL does not parse")?;
    let link = GameLink::generate(secret);
    let url = link.to_url(&base);

    Ok(NewGame { link, url })
}
