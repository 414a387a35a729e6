//! Machine inventory and the rules for spending and restocking it.
//!
//! Every field is unsigned, so the non-negative invariant is carried by the
//! type. A purchase that would overdraw any supply is refused as a whole;
//! nothing is ever clamped.

use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A resource that ran short while preparing a drink.
///
/// The `Display` text is the exact message shown to the customer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Shortage {
    #[error("Sorry, not enough water!")]
    Water,

    #[error("Sorry, not enough milk!")]
    Milk,

    #[error("Sorry, not enough coffee beans!")]
    Beans,

    #[error("Sorry, not enough disposable cups!")]
    Cups,
}

/// A supply that can be restocked from the fill menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Supply {
    Water,
    Milk,
    Beans,
    Cups,
}

/// Current stock and cash held by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Water in milliliters
    pub water: u32,
    /// Milk in milliliters
    pub milk: u32,
    /// Coffee beans in grams
    pub beans: u32,
    /// Disposable cups
    pub cups: u32,
    /// Cash in currency units
    pub money: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            water: 400,
            milk: 540,
            beans: 120,
            cups: 9,
            money: 550,
        }
    }
}

impl Inventory {
    /// Sufficiency checks in the order they are reported.
    fn checks(&self, recipe: &Recipe) -> [(bool, Shortage); 4] {
        [
            (self.water >= recipe.water, Shortage::Water),
            (self.milk >= recipe.milk, Shortage::Milk),
            (self.beans >= recipe.beans, Shortage::Beans),
            (self.cups > 0, Shortage::Cups),
        ]
    }

    /// Check whether one cup of `recipe` can be made.
    ///
    /// Returns the first shortage in the order water, milk, beans, cups.
    pub fn check(&self, recipe: &Recipe) -> Result<(), Shortage> {
        match self.checks(recipe).into_iter().find(|(ok, _)| !*ok) {
            Some((_, shortage)) => Err(shortage),
            None => Ok(()),
        }
    }

    /// Collect every shortage for `recipe` instead of stopping at the first.
    pub fn shortages(&self, recipe: &Recipe) -> Validation<(), NonEmptyVec<Shortage>> {
        let checks: Vec<Validation<(), NonEmptyVec<Shortage>>> = self
            .checks(recipe)
            .into_iter()
            .map(|(ok, shortage)| {
                if ok {
                    Validation::success(())
                } else {
                    Validation::fail(shortage)
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Make one cup: deduct the ingredients and a cup, collect the price.
    ///
    /// Leaves the inventory untouched when any check fails.
    pub fn dispense(&mut self, recipe: &Recipe) -> Result<(), Shortage> {
        self.check(recipe)?;
        self.water -= recipe.water;
        self.milk -= recipe.milk;
        self.beans -= recipe.beans;
        self.cups -= 1;
        self.money = self.money.saturating_add(recipe.price);
        Ok(())
    }

    /// Add `amount` of `supply`. Negative amounts add nothing.
    pub fn restock(&mut self, supply: Supply, amount: i64) {
        let amount = u32::try_from(amount.max(0)).unwrap_or(u32::MAX);
        let field = match supply {
            Supply::Water => &mut self.water,
            Supply::Milk => &mut self.milk,
            Supply::Beans => &mut self.beans,
            Supply::Cups => &mut self.cups,
        };
        *field = field.saturating_add(amount);
    }

    /// Hand out all cash, returning how much was taken.
    pub fn take_money(&mut self) -> u32 {
        std::mem::take(&mut self.money)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} of water", self.water)?;
        writeln!(f, "{} of milk", self.milk)?;
        writeln!(f, "{} of coffee beans", self.beans)?;
        writeln!(f, "{} of disposable cups", self.cups)?;
        write!(f, "${} of money", self.money)
    }
}
