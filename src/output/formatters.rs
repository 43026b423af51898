//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{AttemptRecord, KeyboardState};
use colored::{ColoredString, Colorize};

/// QWERTY layout for the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn tile(letter: char, score: LetterScore) -> ColoredString {
    let cell = format!(" {letter} ");
    match score {
        LetterScore::Exact => cell.black().on_green(),
        LetterScore::Partial => cell.black().on_yellow(),
        LetterScore::Absent => cell.white().on_bright_black(),
    }
}

/// Format one guessed row as colored tiles
#[must_use]
pub fn guess_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.scores())
        .map(|(letter, &score)| tile(letter, score).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an unused board row
#[must_use]
pub fn empty_row() -> String {
    vec![" · ".bright_black().to_string(); WORD_LENGTH].join(" ")
}

/// Format one keyboard row, tinting letters by their best-known score
#[must_use]
pub fn keyboard_row(letters: &str, keyboard: &KeyboardState) -> String {
    letters
        .chars()
        .map(|letter| match keyboard.get(letter) {
            Some(score) => tile(letter, score).to_string(),
            None => format!(" {letter} "),
        })
        .collect::<Vec<_>>()
        .join("")
}

/// The spoiler-free emoji grid players paste into chats
///
/// One emoji row per attempt, no letters revealed.
#[must_use]
pub fn share_grid(attempts: &[AttemptRecord]) -> String {
    attempts
        .iter()
        .map(|attempt| attempt.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header line for a share grid: "3/6" style score, "X/6" for a loss
#[must_use]
pub fn share_score(attempt_count: usize, won: bool) -> String {
    if won {
        format!("{attempt_count}/{MAX_ATTEMPTS}")
    } else {
        format!("X/{MAX_ATTEMPTS}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn attempt(secret: &str, guess: &str) -> AttemptRecord {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        AttemptRecord {
            feedback: Feedback::score(&secret, &guess),
            guess: guess.text().to_string(),
        }
    }

    #[test]
    fn share_grid_one_emoji_row_per_attempt() {
        let attempts = vec![attempt("abbey", "babel"), attempt("abbey", "abbey")];
        let grid = share_grid(&attempts);

        assert_eq!(grid, "🟨🟨🟩🟩⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_game() {
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn share_score_win_and_loss() {
        assert_eq!(share_score(3, true), "3/6");
        assert_eq!(share_score(6, false), "X/6");
    }

    #[test]
    fn guess_row_contains_every_letter() {
        let record = attempt("crane", "slate");
        let row = guess_row(&record.guess, &record.feedback);

        for letter in ['S', 'L', 'A', 'T', 'E'] {
            assert!(row.contains(letter), "missing {letter} in row");
        }
    }

    #[test]
    fn keyboard_row_keeps_unseen_letters_plain() {
        let keyboard = KeyboardState::new();
        let row = keyboard_row("QWERTYUIOP", &keyboard);
        assert_eq!(row, " Q  W  E  R  T  Y  U  I  O  P ");
    }

    #[test]
    fn keyboard_layout_covers_the_alphabet() {
        let total: usize = KEYBOARD_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(total, 26);
    }
}
