//! An interactive coffee machine simulator.
//!
//! The machine is a small state machine over six states. Each input line is
//! handed to a pure [`transition`](machine::transition) function together
//! with the current state and an exclusively borrowed [`Inventory`]; the
//! result is the next state and the exact text to print.
//!
//! # Example
//!
//! ```rust
//! use coffee_machine::{MachineController, MachineState};
//!
//! let mut machine = MachineController::new();
//! machine.handle("buy");
//! let output = machine.handle("1");
//!
//! assert!(output.starts_with("I have enough resources, making you a coffee!"));
//! assert_eq!(machine.state(), MachineState::MainMenu);
//! assert_eq!(machine.inventory().money, 554);
//! ```

pub mod config;
pub mod core;
pub mod inventory;
pub mod machine;
pub mod recipe;
pub mod shell;

// Re-export commonly used types
pub use config::MachineConfig;
pub use inventory::{Inventory, Shortage, Supply};
pub use machine::{MachineController, MachineState};
pub use recipe::{Drink, Recipe};
