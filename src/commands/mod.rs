//! Command implementations

pub mod new_game;
pub mod play;

pub use new_game::{DEFAULT_BASE_URL, NewGame, create_game};
pub use play::{load_or_start, reset_game, run_play, show_game};
