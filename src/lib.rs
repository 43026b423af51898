//! Wordle Link
//!
//! Shareable Wordle games: one player picks a secret word and sends a link;
//! the recipient plays it in the terminal, with progress saved locally so a
//! game can be resumed at any time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_link::core::{Feedback, Word};
//! use wordle_link::link::GameLink;
//!
//! // Create a shareable game
//! let link = GameLink::generate(Word::new("crane").unwrap());
//! println!("send this: #{}", link.fragment());
//!
//! // Score a guess against the secret
//! let guess = Word::new("slate").unwrap();
//! let feedback = Feedback::score(link.secret(), &guess);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Session state machine and keyboard aggregation
pub mod game;

// Shareable link wire format
pub mod link;

// Local game persistence
pub mod store;

// Dictionary lookup boundary
pub mod validator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
