//! Core domain types
//!
//! The fundamental game types: validated words and per-letter guess feedback.
//! Everything here is pure and independent of persistence, networking, and UI.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{WORD_LENGTH, Word, WordError};

/// Maximum attempts per game
pub const MAX_ATTEMPTS: usize = 6;
