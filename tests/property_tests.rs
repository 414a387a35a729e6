//! Property-based tests for the coffee machine.
//!
//! These tests use proptest to verify inventory rules hold across
//! many randomly generated sessions.

use coffee_machine::core::State;
use coffee_machine::{Drink, Inventory, MachineController, MachineState, Shortage};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_inventory()(
        water in 0u32..2000,
        milk in 0u32..2000,
        beans in 0u32..300,
        cups in 0u32..20,
        money in 0u32..5000,
    ) -> Inventory {
        Inventory { water, milk, beans, cups, money }
    }
}

prop_compose! {
    fn arbitrary_drink()(index in 0usize..3) -> Drink {
        Drink::ALL[index]
    }
}

fn arbitrary_input() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("buy".to_string()),
        Just("fill".to_string()),
        Just("take".to_string()),
        Just("remaining".to_string()),
        Just("back".to_string()),
        (1u8..=4).prop_map(|n| n.to_string()),
        (-100i64..1000).prop_map(|n| n.to_string()),
        "[a-z]{0,6}".prop_filter("exit ends the session", |s| s != "exit"),
    ]
}

proptest! {
    #[test]
    fn fills_add_only_non_negative_amounts(
        start in arbitrary_inventory(),
        amounts in prop::collection::vec(-500i64..500, 4),
    ) {
        let mut machine = MachineController::with_inventory(start);
        machine.handle("fill");
        for amount in &amounts {
            machine.handle(&amount.to_string());
        }

        let added: Vec<u32> = amounts.iter().map(|a| (*a).max(0) as u32).collect();
        let inventory = machine.inventory();
        prop_assert_eq!(inventory.water, start.water + added[0]);
        prop_assert_eq!(inventory.milk, start.milk + added[1]);
        prop_assert_eq!(inventory.beans, start.beans + added[2]);
        prop_assert_eq!(inventory.cups, start.cups + added[3]);
        prop_assert_eq!(inventory.money, start.money);
        prop_assert_eq!(machine.state(), MachineState::MainMenu);
    }

    #[test]
    fn purchase_either_deducts_exactly_or_changes_nothing(
        start in arbitrary_inventory(),
        drink in arbitrary_drink(),
    ) {
        let mut machine = MachineController::with_inventory(start);
        machine.handle("buy");
        let output = machine.handle(&drink.ordinal().to_string());

        let recipe = drink.recipe();
        let inventory = *machine.inventory();
        match start.check(&recipe) {
            Ok(()) => {
                prop_assert!(output.starts_with("I have enough resources, making you a coffee!\n"));
                prop_assert_eq!(inventory.water, start.water - recipe.water);
                prop_assert_eq!(inventory.milk, start.milk - recipe.milk);
                prop_assert_eq!(inventory.beans, start.beans - recipe.beans);
                prop_assert_eq!(inventory.cups, start.cups - 1);
                prop_assert_eq!(inventory.money, start.money + recipe.price);
            }
            Err(shortage) => {
                let expected = format!("{shortage}\n");
                prop_assert!(output.starts_with(&expected));
                prop_assert_eq!(inventory, start);
            }
        }
        prop_assert_eq!(machine.state(), MachineState::MainMenu);
    }

    #[test]
    fn first_failing_check_wins(
        start in arbitrary_inventory(),
        drink in arbitrary_drink(),
    ) {
        let recipe = drink.recipe();
        let expected = if start.water < recipe.water {
            Err(Shortage::Water)
        } else if start.milk < recipe.milk {
            Err(Shortage::Milk)
        } else if start.beans < recipe.beans {
            Err(Shortage::Beans)
        } else if start.cups == 0 {
            Err(Shortage::Cups)
        } else {
            Ok(())
        };

        prop_assert_eq!(start.check(&recipe), expected);
    }

    #[test]
    fn take_twice_empties_cash(start in arbitrary_inventory()) {
        let mut machine = MachineController::with_inventory(start);

        let first = machine.handle("take");
        let second = machine.handle("take");

        if start.money > 0 {
            let expected = format!("I gave you ${}\n", start.money);
            prop_assert!(first.starts_with(&expected));
        } else {
            prop_assert!(first.starts_with("Cash is empty!\n"));
        }
        prop_assert!(second.starts_with("Cash is empty!\n"));
        prop_assert_eq!(machine.inventory().money, 0);
    }

    #[test]
    fn buy_back_leaves_inventory_unchanged(start in arbitrary_inventory()) {
        let mut machine = MachineController::with_inventory(start);
        machine.handle("buy");
        machine.handle("back");

        prop_assert_eq!(machine.state(), MachineState::MainMenu);
        prop_assert_eq!(*machine.inventory(), start);
    }

    #[test]
    fn random_sessions_never_exit_or_lose_track_of_history(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let mut machine = MachineController::new();
        for input in &inputs {
            machine.handle(input);
        }

        prop_assert!(machine.is_active());
        prop_assert!(!machine.state().is_final());

        let history = machine.history();
        for pair in history.transitions().windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        if let Some(last) = history.transitions().last() {
            prop_assert_eq!(last.to, machine.state());
        }
    }
}
