//! Guess feedback calculation and representation
//!
//! A `Feedback` holds one `LetterScore` per guess position:
//! - `Absent`: letter not in the secret (or its copies already used up)
//! - `Partial`: letter in the secret, wrong position
//! - `Exact`: letter in the correct position
//!
//! For persistence and parsing, a feedback round-trips through a 5-char
//! string using `A`/`P`/`E` per position (e.g. "PPEEA").

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-letter classification of a guess against the secret
///
/// The derived ordering is the keyboard precedence rule:
/// `Absent < Partial < Exact`, and a letter's recorded state never moves down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterScore {
    Absent,
    Partial,
    Exact,
}

impl LetterScore {
    /// Single-letter code used in the persisted string form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'A',
            Self::Partial => 'P',
            Self::Exact => 'E',
        }
    }

    fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Absent),
            'P' => Some(Self::Partial),
            'E' => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Feedback for one guess: a score per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

impl Feedback {
    /// All-exact feedback (winning guess)
    pub const WIN: Self = Self([LetterScore::Exact; WORD_LENGTH]);

    /// Create a feedback from explicit per-position scores
    #[must_use]
    pub const fn new(scores: [LetterScore; WORD_LENGTH]) -> Self {
        Self(scores)
    }

    /// Score `guess` against `secret`
    ///
    /// Two-pass, frequency-aware. A single left-to-right pass would over-credit
    /// Partial marks for duplicate letters already consumed by an Exact match
    /// elsewhere (secret SPEED, guess ERASE), so Exact matches are reserved first.
    ///
    /// # Algorithm
    /// 1. Count the secret's letters.
    /// 2. Pass 1: positions where guess and secret agree become `Exact` and
    ///    decrement that letter's remaining count.
    /// 3. Pass 2: remaining positions become `Partial` while the letter still has
    ///    budget, otherwise `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_link::core::{Feedback, LetterScore, Word};
    ///
    /// let secret = Word::new("abbey").unwrap();
    /// let guess = Word::new("babel").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// use LetterScore::{Absent, Exact, Partial};
    /// assert_eq!(feedback.scores(), &[Partial, Partial, Exact, Exact, Absent]);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterScore::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // Pass 1: reserve exact matches
        // Allow: index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == secret.letter_at(i) {
                result[i] = LetterScore::Exact;

                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Pass 2: partials from whatever budget is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterScore::Absent
                && let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                result[i] = LetterScore::Partial;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position scores, left to right
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every position is `Exact` (the guess was the secret)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Exact)
    }

    /// Count of `Exact` positions
    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Exact).count()
    }

    /// Convert to the share-grid emoji row (no letters revealed)
    ///
    /// # Examples
    /// ```
    /// use wordle_link::core::Feedback;
    ///
    /// let feedback: Feedback = "EPAAE".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|score| match score {
                LetterScore::Exact => '🟩',
                LetterScore::Partial => '🟨',
                LetterScore::Absent => '⬛',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.0 {
            write!(f, "{}", score.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes: Vec<char> = s.chars().collect();
        if codes.len() != WORD_LENGTH {
            return Err(format!("Feedback must be {WORD_LENGTH} codes: {s}"));
        }

        let mut scores = [LetterScore::Absent; WORD_LENGTH];
        for (i, c) in codes.into_iter().enumerate() {
            scores[i] =
                LetterScore::from_code(c).ok_or_else(|| format!("Invalid feedback code: {c}"))?;
        }

        Ok(Self(scores))
    }
}

// Persisted as the compact string form ("PPEEA"), matching the stored record layout
impl Serialize for Feedback {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Feedback {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
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
    fn score_all_absent() {
        let feedback = Feedback::score(&word("fghij"), &word("knots"));
        assert_eq!(feedback.scores(), &[Absent; 5]);
        assert_eq!(feedback.exact_count(), 0);
    }

    #[test]
    fn score_all_exact_is_win() {
        let feedback = Feedback::score(&word("crane"), &word("crane"));
        assert_eq!(feedback, Feedback::WIN);
        assert!(feedback.is_win());
        assert_eq!(feedback.exact_count(), 5);
    }

    #[test]
    fn score_abbey_babel() {
        // B(partial) A(partial) B(exact) E(exact) L(absent)
        let feedback = Feedback::score(&word("abbey"), &word("babel"));
        assert_eq!(feedback.scores(), &[Partial, Partial, Exact, Exact, Absent]);
    }

    #[test]
    fn score_duplicate_letters_budgeted() {
        // Secret SPEED has two Es. Guess ERASE: first E partial, S partial,
        // second E partial (second E of SPEED), final E absent (budget spent).
        let feedback = Feedback::score(&word("speed"), &word("erase"));
        assert_eq!(
            feedback.scores(),
            &[Partial, Absent, Absent, Partial, Partial]
        );
    }

    #[test]
    fn score_exact_reserved_before_partial() {
        // Secret FLOOR: guess ROBOT's second O lands exactly on an O; the first O
        // takes the remaining O. Only one R exists, credited as partial.
        let feedback = Feedback::score(&word("floor"), &word("robot"));
        assert_eq!(
            feedback.scores(),
            &[Partial, Partial, Absent, Exact, Absent]
        );
    }

    #[test]
    fn score_exact_plus_partial_never_exceeds_letter_count() {
        // Property from the matching rules, spot-checked across duplicate-heavy pairs
        let cases = [
            ("speed", "erase"),
            ("abbey", "babel"),
            ("floor", "robot"),
            ("eerie", "melee"),
            ("mamma", "banal"),
        ];

        for (secret, guess) in cases {
            let secret = word(secret);
            let guess = word(guess);
            let feedback = Feedback::score(&secret, &guess);
            let secret_counts = secret.letter_counts();

            for letter in b'A'..=b'Z' {
                let credited = feedback
                    .scores()
                    .iter()
                    .zip(guess.letters())
                    .filter(|&(&s, &l)| l == letter && s != Absent)
                    .count() as u8;
                let available = secret_counts.get(&letter).copied().unwrap_or(0);
                assert!(
                    credited <= available,
                    "letter {} over-credited for {}/{}",
                    letter as char,
                    secret,
                    guess
                );
            }
        }
    }

    #[test]
    fn score_exact_count_matches_positions() {
        let secret = word("slate");
        let guess = word("crane");
        let feedback = Feedback::score(&secret, &guess);

        let matching = secret
            .letters()
            .iter()
            .zip(guess.letters())
            .filter(|(a, b)| a == b)
            .count();
        assert_eq!(feedback.exact_count(), matching);
    }

    #[test]
    fn feedback_string_round_trip() {
        let feedback = Feedback::score(&word("abbey"), &word("babel"));
        assert_eq!(feedback.to_string(), "PPEEA");
        assert_eq!("PPEEA".parse::<Feedback>().unwrap(), feedback);
        assert_eq!("ppeea".parse::<Feedback>().unwrap(), feedback);
    }

    #[test]
    fn feedback_parse_rejects_garbage() {
        assert!("PPEE".parse::<Feedback>().is_err()); // Too short
        assert!("PPEEAA".parse::<Feedback>().is_err()); // Too long
        assert!("PPXEA".parse::<Feedback>().is_err()); // Bad code
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_serde_as_string() {
        let feedback = Feedback::score(&word("abbey"), &word("babel"));
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(json, "\"PPEEA\"");

        let back: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, feedback);
    }

    #[test]
    fn feedback_emoji() {
        let feedback: Feedback = "EPAAE".parse().unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛🟩");
        assert_eq!(Feedback::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn letter_score_precedence_ordering() {
        assert!(Absent < Partial);
        assert!(Partial < Exact);
    }
}
