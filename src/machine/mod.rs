//! The coffee machine itself.
//!
//! [`transition`] is the whole behaviour: given the current state, one input
//! line and the inventory, it produces the next state and the text to show.
//! [`MachineController`] owns the state between calls and keeps a history.

mod command;
mod controller;
mod state;
mod transition;

pub use command::Command;
pub use controller::MachineController;
pub use state::MachineState;
pub use transition::{parse_amount, transition, FillError, Step};
