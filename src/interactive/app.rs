//! TUI application state and logic

use crate::commands::play::load_or_start;
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameSession, RejectReason, SessionPhase, SubmitOutcome};
use crate::link::GameLink;
use crate::store::GameStore;
use crate::validator::WordValidator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What the input row is doing right now
///
/// While `Checking`, no input events are processed: exactly one guess is in
/// flight and nothing can race it for the attempt slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Checking,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: GameSession,
    store: GameStore,
    validator: Box<dyn WordValidator>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl App {
    /// Build the app for a link, resuming any saved progress
    ///
    /// # Errors
    /// Returns an error on store I/O failures.
    pub fn new(
        link: &GameLink,
        store: GameStore,
        validator: Box<dyn WordValidator>,
    ) -> Result<Self> {
        let session = load_or_start(link, &store)?;

        let mut app = Self {
            input_mode: if session.is_over() {
                InputMode::Finished
            } else {
                InputMode::Typing
            },
            session,
            store,
            validator,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        if app.session.is_over() {
            app.finish_messages();
        } else if app.session.attempt_count() > 0 {
            app.add_message(
                &format!(
                    "Welcome back! {} attempts already on the board.",
                    app.session.attempt_count()
                ),
                MessageStyle::Info,
            );
        } else {
            app.add_message("Type a 5-letter word and press Enter.", MessageStyle::Info);
        }

        Ok(app)
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Typing
            && self.input_buffer.len() < WORD_LENGTH
            && c.is_ascii_alphabetic()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        if self.input_mode == InputMode::Typing {
            self.input_buffer.pop();
        }
    }

    /// Submit whatever is in the input buffer
    pub fn submit_current(&mut self) {
        let guess = self.input_buffer.clone();
        let outcome = self.session.submit(&guess, self.validator.as_ref());

        match outcome {
            SubmitOutcome::Accepted { .. } => {
                self.input_buffer.clear();

                if let Err(e) = self.store.save(self.session.id(), &self.session.to_state()) {
                    self.add_message(
                        &format!("Could not save progress: {e}"),
                        MessageStyle::Error,
                    );
                }

                if self.session.is_over() {
                    self.input_mode = InputMode::Finished;
                    self.finish_messages();
                } else {
                    self.input_mode = InputMode::Typing;
                    self.add_message(
                        &format!("{} attempts left.", self.session.remaining_attempts()),
                        MessageStyle::Info,
                    );
                }
            }
            SubmitOutcome::Rejected(reason) => {
                self.input_mode = InputMode::Typing;
                match reason {
                    RejectReason::DictionaryUnavailable => self.add_message(
                        "Dictionary unreachable - no attempt used, try again.",
                        MessageStyle::Error,
                    ),
                    RejectReason::NotRecognized(_) => {
                        self.input_buffer.clear();
                        self.add_message(&format!("{reason}."), MessageStyle::Error);
                    }
                    reason => self.add_message(&format!("{reason}."), MessageStyle::Error),
                }
            }
        }
    }

    fn finish_messages(&mut self) {
        match self.session.phase() {
            SessionPhase::Won => {
                let turns = self.session.attempt_count();
                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SessionPhase::Lost => {
                self.add_message(
                    &format!("❌ Game over! The word was {}.", self.session.secret()),
                    MessageStyle::Error,
                );
            }
            SessionPhase::Active => {}
        }
        self.add_message("Press 'q' to leave.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn attempts_used(&self) -> String {
        format!("{}/{MAX_ATTEMPTS}", self.session.attempt_count())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        if app.input_buffer.len() == WORD_LENGTH {
                            // Show the gate before the blocking lookup starts;
                            // no events are read until it resolves
                            app.input_mode = InputMode::Checking;
                            terminal.draw(|f| super::rendering::ui(f, &app))?;
                            app.submit_current();
                        } else {
                            app.add_message(
                                "Word must be exactly 5 letters!",
                                MessageStyle::Error,
                            );
                        }
                    }
                    _ => {}
                },
                InputMode::Checking => {
                    // Unreachable in practice: the lookup is synchronous
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
