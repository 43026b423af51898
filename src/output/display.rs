//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, empty_row, guess_row, keyboard_row, share_grid, share_score};
use crate::core::MAX_ATTEMPTS;
use crate::game::{GameSession, SessionPhase};
use colored::Colorize;
use url::Url;

/// Print the board: guessed rows first, then the unused rows
pub fn print_board(session: &GameSession) {
    println!();
    for attempt in session.attempts() {
        println!("  {}", guess_row(&attempt.guess, &attempt.feedback));
    }
    for _ in session.attempt_count()..MAX_ATTEMPTS {
        println!("  {}", empty_row());
    }
    println!();
}

/// Print the on-screen keyboard with per-letter state
pub fn print_keyboard(session: &GameSession) {
    let indent = ["  ", "   ", "     "];
    for (row, pad) in KEYBOARD_ROWS.iter().zip(indent) {
        println!("{pad}{}", keyboard_row(row, session.keyboard()));
    }
    println!();
}

/// Print a freshly created game's shareable link
pub fn print_new_game(url: &Url, session_id: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "NEW GAME CREATED".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n🔗 Share this link with friends:");
    println!("   {}", url.as_str().bright_yellow());
    println!("\n   Game id: {}", session_id.bright_white());
    println!(
        "   Play it here with: {}",
        format!("wordle_link play '{url}'").bright_white()
    );
    println!();
}

/// Print the terminal banner for a finished game
pub fn print_outcome(session: &GameSession) {
    match session.phase() {
        SessionPhase::Won => {
            let turns = session.attempt_count();
            let performance = match turns {
                1 => "🏆 Unbelievable first guess!",
                2 => "⭐ Excellent! Two guesses!",
                3 => "💫 Great work!",
                4 => "✨ Nicely done!",
                5 => "👍 Got there!",
                _ => "😅 Phew! That was close!",
            };

            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "    🎉 You guessed it! 🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!("\n  {performance}");
            println!(
                "  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        SessionPhase::Lost => {
            println!("\n{}", "═".repeat(60).red());
            println!(
                "  ❌ Game over! The word was {}",
                session.secret().text().bright_yellow().bold()
            );
            println!("{}", "═".repeat(60).red());
        }
        SessionPhase::Active => {
            println!(
                "\n  {} attempts left",
                session.remaining_attempts().to_string().bright_cyan()
            );
        }
    }
}

/// Print the copy-pastable share grid for a finished game
pub fn print_share_grid(session: &GameSession) {
    if !session.is_over() {
        return;
    }

    let won = session.phase() == SessionPhase::Won;
    println!(
        "\n  Wordle {} {}\n",
        session.id().bright_white(),
        share_score(session.attempt_count(), won)
    );
    for line in share_grid(session.attempts()).lines() {
        println!("  {line}");
    }
    println!();
}
