//! Terminal output formatting
//!
//! Display utilities for the board, keyboard, links, and share grids.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_new_game, print_outcome, print_share_grid};
