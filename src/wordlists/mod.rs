//! Word lists
//!
//! The embedded dictionary doubles as the offline validator's word list and
//! the pool that random secrets are drawn from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::seq::IndexedRandom;

/// Pick a random secret from the embedded pool
///
/// # Panics
/// Panics only if the embedded list is empty, which the build script makes
/// impossible.
#[must_use]
pub fn random_secret() -> Word {
    let text = WORDS
        .choose(&mut rand::rng())
        .expect("embedded word list is not empty");
    Word::new(text).expect("embedded words are pre-validated")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn list_is_reasonably_sized() {
        // Enough for random secrets and offline validation to be playable
        assert!(WORDS_COUNT > 1000);
    }

    #[test]
    fn random_secret_comes_from_the_pool() {
        let secret = random_secret();
        assert!(
            WORDS
                .iter()
                .any(|w| w.eq_ignore_ascii_case(secret.text()))
        );
    }
}
