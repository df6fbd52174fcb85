//! Enumerations for console state management.

use crate::error::CommandError;
use crate::fields::SortKey;

/// Visual role of a line of console output. Colours are chosen per tone by
/// [`colors`](crate::console::colors); the text itself never carries escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Border,
    Title,
    Stats,
    ViewName,
    Empty,
    Task,
    Selected,
    Menu,
    Prompt,
    Success,
    Info,
    Notice,
    Error,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// A menu choice typed at the command prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Toggle,
    Delete,
    Sort(SortKey),
    CycleView,
    SelectNext,
    SelectPrevious,
    Exit,
}

impl MenuCommand {
    /// Parse a trimmed command token.
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        match token.trim() {
            "1" => Ok(MenuCommand::Add),
            "2" => Ok(MenuCommand::Toggle),
            "3" => Ok(MenuCommand::Delete),
            "4" => Ok(MenuCommand::Sort(SortKey::Priority)),
            "5" => Ok(MenuCommand::Sort(SortKey::Date)),
            "6" => Ok(MenuCommand::CycleView),
            "+" => Ok(MenuCommand::SelectNext),
            "-" => Ok(MenuCommand::SelectPrevious),
            "0" => Ok(MenuCommand::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
