//! Generic state machine building blocks.
//!
//! - State definitions via the `State` trait
//! - Transition history tracking
//!
//! Nothing in this module knows about coffee; the machine in
//! [`crate::machine`] is built on top of it.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
