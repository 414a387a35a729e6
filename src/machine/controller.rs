//! Stateful wrapper around [`transition`].

use crate::config::MachineConfig;
use crate::core::{State, StateHistory, StateTransition};
use crate::inventory::Inventory;
use crate::machine::{transition, MachineState};

/// Owns the inventory and current state for one session.
///
/// The caller feeds it input lines through [`handle`](Self::handle) and
/// stops once [`is_active`](Self::is_active) turns false.
#[derive(Debug, Clone)]
pub struct MachineController {
    state: MachineState,
    inventory: Inventory,
    history: StateHistory<MachineState>,
    active: bool,
}

impl Default for MachineController {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineController {
    /// A machine in the main menu with the factory stock.
    pub fn new() -> Self {
        Self::with_inventory(Inventory::default())
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            state: MachineState::MainMenu,
            inventory,
            history: StateHistory::new(),
            active: true,
        }
    }

    pub fn from_config(config: &MachineConfig) -> Self {
        Self::with_inventory(config.inventory)
    }

    /// The prompt shown before the first input is read.
    pub fn start(&self) -> String {
        self.state.prompt()
    }

    /// Handle one input line and return the text to display.
    ///
    /// Surrounding whitespace is trimmed before the line is interpreted.
    pub fn handle(&mut self, input: &str) -> String {
        let input = input.trim();
        let step = transition(self.state, input, &mut self.inventory);

        if step.next != self.state {
            tracing::debug!(
                from = self.state.name(),
                to = step.next.name(),
                input,
                "state changed"
            );
            self.history
                .record(StateTransition::now(self.state, step.next, input));
            self.state = step.next;
        }

        if step.exit {
            tracing::debug!("exit requested");
            self.active = false;
        }

        step.output
    }

    /// False once `exit` has been handled.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn history(&self) -> &StateHistory<MachineState> {
        &self.history
    }
}
