//! Machine configuration.
//!
//! The only tunable is the starting stock. The binary always uses
//! [`MachineConfig::default`], which is the factory fill.

use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};

/// Settings used to construct a [`MachineController`](crate::machine::MachineController).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Stock and cash present when the session starts
    pub inventory: Inventory,
}
