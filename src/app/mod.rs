//! Glimmerly application controller
//!
//! - **state**: cross-screen state and the pure transition function
//! - **controller**: the `Glimmerly` session that applies transitions
//! - **notice**: user-facing notices
//! - **clock**: daily countdown

pub mod clock;
pub mod controller;
pub mod notice;
pub mod state;

pub use clock::time_remaining;
pub use controller::{Glimmerly, Screen};
pub use notice::Notice;
pub use state::{reduce, AppEvent, AppState, Effect, Transition};
