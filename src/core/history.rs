//! State transition history tracking.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change and the input that caused it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The trimmed input line that triggered the change
    pub input: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Stamp a transition with the current time.
    pub fn now(from: S, to: S, input: impl Into<String>) -> Self {
        Self {
            from,
            to,
            input: input.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use coffee_machine::core::{StateHistory, StateTransition};
/// use coffee_machine::machine::MachineState;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition::now(
///     MachineState::MainMenu,
///     MachineState::ChoosingDrink,
///     "buy",
/// ));
/// history.record(StateTransition::now(
///     MachineState::ChoosingDrink,
///     MachineState::MainMenu,
///     "back",
/// ));
///
/// assert_eq!(history.get_path().len(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and the last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
