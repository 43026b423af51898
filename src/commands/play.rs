//! Plain interactive play mode
//!
//! Text-based game loop without TUI: prompt, guess, colored board, persist.

use crate::game::{GameSession, RejectReason, SessionPhase, SubmitOutcome};
use crate::link::GameLink;
use crate::output;
use crate::store::GameStore;
use crate::validator::WordValidator;
use colored::Colorize;
use std::io::{self, Write};

/// Load the saved state for a link's game, falling back to a fresh session
///
/// A corrupt or mismatched record prints a notice and restarts the game;
/// it never aborts.
///
/// # Errors
///
/// Returns an error only for genuine store I/O failures.
pub fn load_or_start(link: &GameLink, store: &GameStore) -> anyhow::Result<GameSession> {
    let id = link.session_id();

    match store.load(id)? {
        Some(state) => match GameSession::resume(id, link.secret().clone(), &state) {
            Ok(session) => Ok(session),
            Err(e) => {
                println!(
                    "{}",
                    format!("⚠️  Saved game could not be restored ({e}); starting over.").yellow()
                );
                store.clear(id)?;
                Ok(GameSession::new(id, link.secret().clone()))
            }
        },
        None => Ok(GameSession::new(id, link.secret().clone())),
    }
}

/// Run the plain-terminal game loop for a link
///
/// # Errors
///
/// Returns an error on store I/O failures or if stdin closes unexpectedly.
pub fn run_play(
    link: &GameLink,
    store: &GameStore,
    validator: &dyn WordValidator,
) -> anyhow::Result<()> {
    let mut session = load_or_start(link, store)?;

    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                   W O R D L E   L I N K                  ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!("\nGame {}", session.id().bright_white());

    if session.attempt_count() > 0 && !session.is_over() {
        println!(
            "Welcome back! {} of your attempts are already on the board.",
            session.attempt_count()
        );
    }

    output::print_board(&session);
    output::print_keyboard(&session);

    if session.is_over() {
        output::print_outcome(&session);
        output::print_share_grid(&session);
        return Ok(());
    }

    loop {
        let prompt = format!(
            "Guess {}/{} (or 'quit')",
            session.attempt_count() + 1,
            crate::core::MAX_ATTEMPTS
        );
        let input = read_line(&prompt)?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Your progress is saved. Come back anytime!\n");
                return Ok(());
            }
            _ => {}
        }

        // Input stays blocked until the lookup resolves or times out
        print!("{}", "Checking word...".bright_black());
        io::stdout().flush()?;

        let outcome = session.submit(&input, validator);
        println!("\r                    \r");

        match outcome {
            SubmitOutcome::Accepted { .. } => {
                store.save(session.id(), &session.to_state())?;
                output::print_board(&session);
                output::print_keyboard(&session);

                if session.is_over() {
                    output::print_outcome(&session);
                    output::print_share_grid(&session);
                    return Ok(());
                }
            }
            SubmitOutcome::Rejected(reason) => print_rejection(&reason),
        }
    }
}

fn print_rejection(reason: &RejectReason) {
    match reason {
        RejectReason::DictionaryUnavailable => {
            // Outage, not a wrong word: make sure the player knows no attempt
            // was spent and the same guess can go again
            println!("{}", format!("📡 {reason}. No attempt was used.").yellow());
        }
        RejectReason::GameOver => println!("{}", format!("🚫 {reason}").red()),
        _ => println!("{}", format!("❌ {reason}").red()),
    }
}

/// Print the board and keyboard for a saved game without playing it
///
/// # Errors
///
/// Returns an error on store I/O failures.
pub fn show_game(link: &GameLink, store: &GameStore) -> anyhow::Result<()> {
    let session = load_or_start(link, store)?;

    println!("\nGame {}", session.id().bright_white());
    output::print_board(&session);
    output::print_keyboard(&session);

    match session.phase() {
        SessionPhase::Active => output::print_outcome(&session),
        _ => {
            output::print_outcome(&session);
            output::print_share_grid(&session);
        }
    }

    Ok(())
}

/// Delete the saved state for a link's game
///
/// # Errors
///
/// Returns an error on store I/O failures.
pub fn reset_game(link: &GameLink, store: &GameStore) -> anyhow::Result<()> {
    store.clear(link.session_id())?;
    println!(
        "🔄 Cleared saved state for game {}",
        link.session_id().bright_white()
    );
    Ok(())
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::validator::{Verdict, WordValidator};

    struct AlwaysYes;

    impl WordValidator for AlwaysYes {
        fn check(&self, _word: &Word) -> Verdict {
            Verdict::Recognized
        }
    }

    fn link(id: &str, secret: &str) -> GameLink {
        GameLink::with_id(id, Word::new(secret).unwrap())
    }

    #[test]
    fn load_or_start_without_state_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        let session = load_or_start(&link("fresh", "crane"), &store).unwrap();
        assert_eq!(session.attempt_count(), 0);
        assert!(!session.is_over());
    }

    #[test]
    fn load_or_start_resumes_saved_progress() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();
        let game = link("resume", "crane");

        let mut session = load_or_start(&game, &store).unwrap();
        session.submit("slate", &AlwaysYes);
        store.save(session.id(), &session.to_state()).unwrap();

        let resumed = load_or_start(&game, &store).unwrap();
        assert_eq!(resumed.attempt_count(), 1);
        assert_eq!(resumed.attempts()[0].guess, "SLATE");
    }

    #[test]
    fn load_or_start_discards_state_from_other_secret() {
        // Same session id, different secret: the stored feedback cannot have
        // come from this game, so it must restart fresh
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        let mut session = load_or_start(&link("shared", "crane"), &store).unwrap();
        session.submit("slate", &AlwaysYes);
        store.save(session.id(), &session.to_state()).unwrap();

        let other = load_or_start(&link("shared", "abbey"), &store).unwrap();
        assert_eq!(other.attempt_count(), 0);
    }

    #[test]
    fn reset_game_clears_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();
        let game = link("reset", "crane");

        let mut session = load_or_start(&game, &store).unwrap();
        session.submit("slate", &AlwaysYes);
        store.save(session.id(), &session.to_state()).unwrap();

        reset_game(&game, &store).unwrap();
        assert_eq!(store.load("reset").unwrap(), None);
    }
}
