//! Game session state machine
//!
//! A `GameSession` owns one game: the secret, the attempt history, the
//! aggregated keyboard state, and the current phase. Every mutation goes
//! through [`GameSession::submit`], so nothing about a game leaks across
//! sessions and a test harness can run many games in one process.

use crate::core::{Feedback, MAX_ATTEMPTS, Word, WordError};
use crate::game::KeyboardState;
use crate::validator::{Verdict, WordValidator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One accepted guess and its scoring, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// The guessed word, uppercase
    pub guess: String,
    /// Per-position scores for the guess
    pub feedback: Feedback,
}

/// Persisted snapshot of a game, one record per session id
///
/// `attempt_count` is stored redundantly and checked against `attempts.len()`
/// on load; a disagreement marks the record as corrupt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub attempt_count: usize,
    pub attempts: Vec<AttemptRecord>,
    pub keyboard: KeyboardState,
    pub is_over: bool,
}

/// Where a session currently stands
///
/// `Won` and `Lost` are terminal: no further guesses are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Won,
    Lost,
}

/// A stored record that fails its own invariants
///
/// Callers treat a corrupt record as absent and start the session fresh;
/// this error never aborts the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("attempt count {stored} disagrees with {actual} stored attempts")]
    CountMismatch { stored: usize, actual: usize },
    #[error("stored game has {0} attempts, exceeding the attempt limit")]
    TooManyAttempts(usize),
    #[error("stored guess is not a valid word: {0}")]
    BadGuess(#[from] WordError),
    #[error("stored feedback for '{0}' does not match this game's secret")]
    FeedbackMismatch(String),
    #[error("completion flag disagrees with the stored attempts")]
    CompletionMismatch,
    #[error("stored game continues past a winning guess")]
    AttemptsAfterWin,
}

/// Why a submitted guess was turned away without consuming an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("{0}")]
    InvalidWord(#[from] WordError),
    #[error("'{0}' is not a recognized word")]
    NotRecognized(String),
    #[error("could not reach the dictionary; the same guess can be resubmitted")]
    DictionaryUnavailable,
    #[error("the game is already over")]
    GameOver,
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess consumed an attempt and was scored
    Accepted {
        feedback: Feedback,
        phase: SessionPhase,
    },
    /// The guess consumed nothing; the session is unchanged
    Rejected(RejectReason),
}

/// A single game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    id: String,
    secret: Word,
    attempts: Vec<AttemptRecord>,
    keyboard: KeyboardState,
    phase: SessionPhase,
}

impl GameSession {
    /// Start a fresh session for a secret
    #[must_use]
    pub fn new(id: impl Into<String>, secret: Word) -> Self {
        Self {
            id: id.into(),
            secret,
            attempts: Vec::new(),
            keyboard: KeyboardState::new(),
            phase: SessionPhase::Active,
        }
    }

    /// Rebuild a session from a persisted [`GameState`]
    ///
    /// The keyboard is replayed from the attempts rather than trusted from the
    /// record, so it is always consistent with the grid.
    ///
    /// # Errors
    /// Returns [`StateError`] when the record violates its invariants
    /// (count mismatch, too many attempts, unparseable guess, feedback that
    /// does not match the secret, wrong completion flag). Callers fall back
    /// to a fresh session.
    pub fn resume(
        id: impl Into<String>,
        secret: Word,
        state: &GameState,
    ) -> Result<Self, StateError> {
        if state.attempt_count != state.attempts.len() {
            return Err(StateError::CountMismatch {
                stored: state.attempt_count,
                actual: state.attempts.len(),
            });
        }
        if state.attempts.len() > MAX_ATTEMPTS {
            return Err(StateError::TooManyAttempts(state.attempts.len()));
        }

        let mut session = Self::new(id, secret);

        for (index, record) in state.attempts.iter().enumerate() {
            if session.phase == SessionPhase::Won {
                return Err(StateError::AttemptsAfterWin);
            }

            let guess = Word::new(&record.guess)?;
            let feedback = Feedback::score(&session.secret, &guess);
            if feedback != record.feedback {
                return Err(StateError::FeedbackMismatch(record.guess.clone()));
            }

            session.keyboard.apply(&guess, &feedback);
            session.attempts.push(AttemptRecord {
                guess: guess.text().to_string(),
                feedback,
            });

            if feedback.is_win() {
                session.phase = SessionPhase::Won;
            } else if index + 1 == MAX_ATTEMPTS {
                session.phase = SessionPhase::Lost;
            }
        }

        if state.is_over != session.is_over() {
            return Err(StateError::CompletionMismatch);
        }

        Ok(session)
    }

    /// Submit one guess
    ///
    /// A guess consumes an attempt only when it is well-formed and either
    /// equals the secret or is recognized by the validator. Malformed words,
    /// unrecognized words, and dictionary outages all leave the session
    /// untouched so the player can resubmit.
    pub fn submit(&mut self, raw_guess: &str, validator: &dyn WordValidator) -> SubmitOutcome {
        if self.phase != SessionPhase::Active {
            return SubmitOutcome::Rejected(RejectReason::GameOver);
        }

        let guess = match Word::new(raw_guess) {
            Ok(guess) => guess,
            Err(e) => return SubmitOutcome::Rejected(RejectReason::InvalidWord(e)),
        };

        // The secret always wins, even when the lookup service has never
        // heard of it: the game's creator chose it.
        if guess != self.secret {
            match validator.check(&guess) {
                Verdict::Recognized => {}
                Verdict::NotRecognized => {
                    return SubmitOutcome::Rejected(RejectReason::NotRecognized(
                        guess.text().to_string(),
                    ));
                }
                Verdict::Unknown => {
                    return SubmitOutcome::Rejected(RejectReason::DictionaryUnavailable);
                }
            }
        }

        let feedback = Feedback::score(&self.secret, &guess);
        self.keyboard.apply(&guess, &feedback);
        self.attempts.push(AttemptRecord {
            guess: guess.text().to_string(),
            feedback,
        });

        if feedback.is_win() {
            self.phase = SessionPhase::Won;
        } else if self.attempts.len() == MAX_ATTEMPTS {
            self.phase = SessionPhase::Lost;
        }

        SubmitOutcome::Accepted {
            feedback,
            phase: self.phase,
        }
    }

    /// Snapshot the session for persistence
    #[must_use]
    pub fn to_state(&self) -> GameState {
        GameState {
            attempt_count: self.attempts.len(),
            attempts: self.attempts.clone(),
            keyboard: self.keyboard.clone(),
            is_over: self.is_over(),
        }
    }

    /// Session identifier (the persistence key)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The secret word
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Accepted attempts so far, in submission order
    #[must_use]
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Aggregated keyboard state
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Number of attempts consumed
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Attempts still available
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Whether the session has reached a terminal phase
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != SessionPhase::Active
    }
}
