//! Main menu commands.

use serde::{Deserialize, Serialize};

/// A top-level action typed at the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
}

impl Command {
    /// Commands in the order the main menu lists them.
    pub const ALL: [Command; 5] = [
        Command::Buy,
        Command::Fill,
        Command::Take,
        Command::Remaining,
        Command::Exit,
    ];

    /// The literal the user types. Matching is case-sensitive.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Buy => "buy",
            Command::Fill => "fill",
            Command::Take => "take",
            Command::Remaining => "remaining",
            Command::Exit => "exit",
        }
    }

    pub fn parse(input: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|command| command.keyword() == input)
    }
}
