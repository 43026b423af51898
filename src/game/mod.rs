//! Game state: keyboard aggregation and the session state machine

mod keyboard;
mod session;

pub use keyboard::KeyboardState;
pub use session::{
    AttemptRecord, GameSession, GameState, RejectReason, SessionPhase, StateError, SubmitOutcome,
};
