//! Aggregated per-letter state for the on-screen keyboard
//!
//! Folds every scored attempt into the best-known classification per letter,
//! so the keyboard can be tinted green/yellow/gray across the whole game.

use crate::core::{Feedback, LetterScore, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best-known score per letter across all attempts
///
/// Monotonic: updates only ever upgrade a letter (precedence
/// `Exact > Partial > Absent`), so an `Exact` never turns back into a
/// `Partial` and a `Partial` is never overwritten by a later `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState(BTreeMap<char, LetterScore>);

impl KeyboardState {
    /// Empty keyboard, no letters seen yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one letter's score, keeping the better of old and new
    pub fn record(&mut self, letter: char, score: LetterScore) {
        let letter = letter.to_ascii_uppercase();
        self.0
            .entry(letter)
            .and_modify(|current| *current = (*current).max(score))
            .or_insert(score);
    }

    /// Fold a whole attempt, position by position in guess order
    ///
    /// A letter appearing twice in one guess with two different scores
    /// converges to its best score within that same attempt.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &score) in guess.letters().iter().zip(feedback.scores()) {
            self.record(letter as char, score);
        }
    }

    /// Best-known score for a letter, if it has appeared in any attempt
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterScore> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of distinct letters seen so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no letter has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Exact, Partial};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn record_upgrades_only() {
        let mut keyboard = KeyboardState::new();

        keyboard.record('a', Absent);
        assert_eq!(keyboard.get('a'), Some(Absent));

        keyboard.record('a', Partial);
        assert_eq!(keyboard.get('a'), Some(Partial));

        // Absent never overwrites Partial
        keyboard.record('a', Absent);
        assert_eq!(keyboard.get('a'), Some(Partial));

        keyboard.record('a', Exact);
        assert_eq!(keyboard.get('a'), Some(Exact));

        // Exact never downgrades
        keyboard.record('a', Partial);
        keyboard.record('a', Absent);
        assert_eq!(keyboard.get('a'), Some(Exact));
    }

    #[test]
    fn record_is_case_insensitive() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('q', Partial);
        assert_eq!(keyboard.get('Q'), Some(Partial));
        assert_eq!(keyboard.get('q'), Some(Partial));
    }

    #[test]
    fn apply_folds_whole_attempt() {
        let secret = word("abbey");
        let guess = word("babel");
        let feedback = Feedback::score(&secret, &guess);

        let mut keyboard = KeyboardState::new();
        keyboard.apply(&guess, &feedback);

        // B appears twice (Partial then Exact) and converges to Exact
        assert_eq!(keyboard.get('B'), Some(Exact));
        assert_eq!(keyboard.get('A'), Some(Partial));
        assert_eq!(keyboard.get('E'), Some(Exact));
        assert_eq!(keyboard.get('L'), Some(Absent));
        assert_eq!(keyboard.get('Z'), None);
    }

    #[test]
    fn apply_is_idempotent_under_replay() {
        let secret = word("speed");
        let guesses = [word("erase"), word("spend"), word("speed")];

        let mut once = KeyboardState::new();
        for guess in &guesses {
            once.apply(guess, &Feedback::score(&secret, guess));
        }

        let mut twice = once.clone();
        for guess in &guesses {
            twice.apply(guess, &Feedback::score(&secret, guess));
        }

        assert_eq!(once, twice);
    }

    #[test]
    fn serde_round_trip() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&word("crane"), &Feedback::score(&word("slate"), &word("crane")));

        let json = serde_json::to_string(&keyboard).unwrap();
        let back: KeyboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keyboard);
    }

    #[test]
    fn empty_keyboard() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.len(), 0);
        assert_eq!(keyboard.get('a'), None);
    }
}
