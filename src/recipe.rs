//! Built-in drink recipes.
//!
//! The menu is a fixed, ordered list. A drink is selected by its 1-based
//! position, so adding a drink means appending a variant to [`Drink::ALL`]
//! together with its recipe; the accepted choices grow with the list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ingredients consumed and price charged for one cup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Water in milliliters
    pub water: u32,
    /// Milk in milliliters
    pub milk: u32,
    /// Coffee beans in grams
    pub beans: u32,
    /// Price in currency units
    pub price: u32,
}

/// A drink on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Drink {
    Espresso,
    Latte,
    Cappuccino,
}

impl Drink {
    /// Menu order. The ordinal shown to the user is the index plus one.
    pub const ALL: [Drink; 3] = [Drink::Espresso, Drink::Latte, Drink::Cappuccino];

    pub fn recipe(self) -> Recipe {
        match self {
            Drink::Espresso => Recipe {
                water: 250,
                milk: 0,
                beans: 16,
                price: 4,
            },
            Drink::Latte => Recipe {
                water: 350,
                milk: 75,
                beans: 20,
                price: 7,
            },
            Drink::Cappuccino => Recipe {
                water: 200,
                milk: 100,
                beans: 12,
                price: 6,
            },
        }
    }

    /// Lowercase display name used in the menu.
    pub fn name(self) -> &'static str {
        match self {
            Drink::Espresso => "espresso",
            Drink::Latte => "latte",
            Drink::Cappuccino => "cappuccino",
        }
    }

    /// 1-based position on the menu.
    pub fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|d| *d == self)
            .map_or(0, |index| index + 1)
    }

    /// Resolve a menu choice such as `"2"`.
    ///
    /// Only the canonical decimal spelling of an ordinal is accepted, so
    /// `"02"` or `"+2"` are not choices.
    pub fn from_choice(input: &str) -> Option<Drink> {
        Self::ALL
            .iter()
            .copied()
            .find(|drink| drink.ordinal().to_string() == input)
    }

    /// Renders `1 - espresso, 2 - latte, 3 - cappuccino`.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.ordinal(), self.name())
    }
}
