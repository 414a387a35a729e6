//! Machine states and the prompt shown on entering each one.

use crate::core::State;
use crate::inventory::Supply;
use crate::machine::Command;
use crate::recipe::Drink;
use serde::{Deserialize, Serialize};

/// Where the machine is in its conversation with the user.
///
/// There is no final state: the session ends when the controller is told to
/// exit, not by reaching a particular state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MachineState {
    #[default]
    MainMenu,
    ChoosingDrink,
    FillingWater,
    FillingMilk,
    FillingBeans,
    FillingCups,
}

impl State for MachineState {
    fn name(&self) -> &str {
        match self {
            Self::MainMenu => "MainMenu",
            Self::ChoosingDrink => "ChoosingDrink",
            Self::FillingWater => "FillingWater",
            Self::FillingMilk => "FillingMilk",
            Self::FillingBeans => "FillingBeans",
            Self::FillingCups => "FillingCups",
        }
    }
}

impl MachineState {
    /// The prompt printed when this state is entered. Prompts never end in
    /// a newline; the user's answer goes on the same line.
    pub fn prompt(&self) -> String {
        match self {
            Self::MainMenu => {
                let keywords: Vec<&str> = Command::ALL.iter().map(|c| c.keyword()).collect();
                format!("\nWrite action ({}): > ", keywords.join(", "))
            }
            Self::ChoosingDrink => format!(
                "\nWhat do you want to buy? {}, back - to main menu: > ",
                Drink::menu()
            ),
            Self::FillingWater => "\nWrite how many ml of water do you want to add: > ".to_string(),
            Self::FillingMilk => "Write how many ml of milk do you want to add: > ".to_string(),
            Self::FillingBeans => {
                "Write how many grams of coffee beans do you want to add: > ".to_string()
            }
            Self::FillingCups => {
                "Write how many disposable cups of coffee do you want to add: > ".to_string()
            }
        }
    }

    /// The supply restocked by a filling state, and the state that follows it.
    pub fn filling(&self) -> Option<(Supply, MachineState)> {
        match self {
            Self::FillingWater => Some((Supply::Water, Self::FillingMilk)),
            Self::FillingMilk => Some((Supply::Milk, Self::FillingBeans)),
            Self::FillingBeans => Some((Supply::Beans, Self::FillingCups)),
            Self::FillingCups => Some((Supply::Cups, Self::MainMenu)),
            Self::MainMenu | Self::ChoosingDrink => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_match_the_terminal_transcript() {
        assert_eq!(
            MachineState::MainMenu.prompt(),
            "\nWrite action (buy, fill, take, remaining, exit): > "
        );
        assert_eq!(
            MachineState::ChoosingDrink.prompt(),
            "\nWhat do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu: > "
        );
        assert_eq!(
            MachineState::FillingWater.prompt(),
            "\nWrite how many ml of water do you want to add: > "
        );
        assert_eq!(
            MachineState::FillingMilk.prompt(),
            "Write how many ml of milk do you want to add: > "
        );
        assert_eq!(
            MachineState::FillingBeans.prompt(),
            "Write how many grams of coffee beans do you want to add: > "
        );
        assert_eq!(
            MachineState::FillingCups.prompt(),
            "Write how many disposable cups of coffee do you want to add: > "
        );
    }

    #[test]
    fn filling_states_chain_back_to_main_menu() {
        let mut state = MachineState::FillingWater;
        let mut supplies = Vec::new();
        while let Some((supply, next)) = state.filling() {
            supplies.push(supply);
            state = next;
        }

        assert_eq!(
            supplies,
            vec![Supply::Water, Supply::Milk, Supply::Beans, Supply::Cups]
        );
        assert_eq!(state, MachineState::MainMenu);
    }

    #[test]
    fn no_state_is_final() {
        for state in [
            MachineState::MainMenu,
            MachineState::ChoosingDrink,
            MachineState::FillingWater,
            MachineState::FillingMilk,
            MachineState::FillingBeans,
            MachineState::FillingCups,
        ] {
            assert!(!state.is_final(), "{} should not be final", state.name());
        }
    }

    #[test]
    fn default_state_is_main_menu() {
        assert_eq!(MachineState::default(), MachineState::MainMenu);
    }
}
