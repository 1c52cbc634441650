//! Menu commands
//!
//! Maps the numbered options of the interactive menu to commands.

use std::fmt;

/// One entry of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddExpense,
    ViewExpenses,
    SetBudget,
    TrackBudget,
    Save,
    SaveAndExit,
}

impl MenuCommand {
    /// All commands in menu order
    pub const ALL: [MenuCommand; 6] = [
        Self::AddExpense,
        Self::ViewExpenses,
        Self::SetBudget,
        Self::TrackBudget,
        Self::Save,
        Self::SaveAndExit,
    ];

    /// Look up the command for a menu number; anything outside 1-6 is `None`
    pub fn from_selection(selection: i64) -> Option<Self> {
        usize::try_from(selection)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The number shown next to this command
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&command| command == self)
            .map_or(0, |index| index + 1)
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::SetBudget => "Input monthly budget",
            Self::TrackBudget => "Track Budget",
            Self::Save => "Write to file",
            Self::SaveAndExit => "Write to file & Exit",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Whether the menu loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Format the full options menu
pub fn format_menu() -> String {
    let mut output = String::from("Options: \n");
    for command in MenuCommand::ALL {
        output.push_str(&format!("{}\n", command));
    }
    output
}
