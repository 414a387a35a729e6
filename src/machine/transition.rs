//! The pure transition function.

use crate::core::State;
use crate::inventory::Inventory;
use crate::machine::{Command, MachineState};
use crate::recipe::Drink;
use std::num::ParseIntError;
use stillwater::validation::Validation;
use thiserror::Error;

const BACK: &str = "back";
const MAKING_COFFEE: &str = "I have enough resources, making you a coffee!";
const CASH_EMPTY: &str = "Cash is empty!";
const ILLEGAL_CHOICE: &str = "Illegal choice";

/// Input typed in a filling state that is not a whole number.
#[derive(Debug, Error, PartialEq)]
pub enum FillError {
    #[error("'{input}' is not a whole number")]
    NotANumber {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse a restock amount. Signs are accepted; negative values are clamped
/// later by the inventory.
pub fn parse_amount(input: &str) -> Result<i64, FillError> {
    input.parse().map_err(|source| FillError::NotANumber {
        input: input.to_string(),
        source,
    })
}

/// Outcome of feeding one input line to the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// State after the input was handled
    pub next: MachineState,
    /// Text to write to the terminal, verbatim
    pub output: String,
    /// Whether the user asked to end the session
    pub exit: bool,
}

impl Step {
    /// Enter `next`, printing `messages` (one per line) then its prompt.
    fn enter(next: MachineState, messages: &[&str]) -> Self {
        let mut output = String::new();
        for message in messages {
            output.push_str(message);
            output.push('\n');
        }
        output.push_str(&next.prompt());
        Self {
            next,
            output,
            exit: false,
        }
    }

    /// Remain in `state` without a prompt.
    fn stay(state: MachineState, output: String) -> Self {
        Self {
            next: state,
            output,
            exit: false,
        }
    }
}

/// Apply one trimmed input line to `state`.
///
/// The inventory is the only thing mutated. Unknown main menu commands and
/// malformed amounts are no-ops that print nothing; an unknown drink choice
/// prints `Illegal choice` and keeps waiting for a drink.
pub fn transition(state: MachineState, input: &str, inventory: &mut Inventory) -> Step {
    match state {
        MachineState::MainMenu => main_menu(input, inventory),
        MachineState::ChoosingDrink => choose_drink(input, inventory),
        MachineState::FillingWater
        | MachineState::FillingMilk
        | MachineState::FillingBeans
        | MachineState::FillingCups => fill(state, input, inventory),
    }
}

fn main_menu(input: &str, inventory: &mut Inventory) -> Step {
    let Some(command) = Command::parse(input) else {
        tracing::debug!(input, "ignoring unknown command");
        return Step::stay(MachineState::MainMenu, String::new());
    };

    match command {
        Command::Buy => Step::enter(MachineState::ChoosingDrink, &[]),
        Command::Fill => Step::enter(MachineState::FillingWater, &[]),
        Command::Take => {
            let amount = inventory.take_money();
            if amount == 0 {
                Step::enter(MachineState::MainMenu, &[CASH_EMPTY])
            } else {
                tracing::info!(amount, "cash taken");
                Step::enter(MachineState::MainMenu, &[format!("I gave you ${amount}").as_str()])
            }
        }
        Command::Remaining => {
            Step::enter(MachineState::MainMenu, &[inventory.to_string().as_str()])
        }
        Command::Exit => Step {
            exit: true,
            ..Step::enter(MachineState::MainMenu, &[])
        },
    }
}

fn choose_drink(input: &str, inventory: &mut Inventory) -> Step {
    if input == BACK {
        return Step::enter(MachineState::MainMenu, &[]);
    }

    let Some(drink) = Drink::from_choice(input) else {
        return Step::stay(MachineState::ChoosingDrink, format!("{ILLEGAL_CHOICE}\n"));
    };

    let recipe = drink.recipe();
    match inventory.dispense(&recipe) {
        Ok(()) => {
            tracing::info!(drink = drink.name(), price = recipe.price, "drink dispensed");
            Step::enter(MachineState::MainMenu, &[MAKING_COFFEE])
        }
        Err(shortage) => {
            let all: Vec<String> = match inventory.shortages(&recipe) {
                Validation::Failure(shortages) => {
                    shortages.iter().map(|s| format!("{s:?}")).collect()
                }
                Validation::Success(_) => Vec::new(),
            };
            tracing::info!(drink = drink.name(), shortages = ?all, "purchase refused");
            Step::enter(MachineState::MainMenu, &[shortage.to_string().as_str()])
        }
    }
}

fn fill(state: MachineState, input: &str, inventory: &mut Inventory) -> Step {
    let Some((supply, next)) = state.filling() else {
        return Step::stay(state, String::new());
    };

    match parse_amount(input) {
        Ok(amount) => {
            inventory.restock(supply, amount);
            tracing::debug!(?supply, amount, "restocked");
            Step::enter(next, &[])
        }
        Err(error) => {
            tracing::debug!(state = state.name(), %error, "ignoring fill input");
            Step::stay(state, String::new())
        }
    }
}
