//! Menu text and choice parsing.

use std::str::FromStr;

use crate::error::PayrollError;

/// The menu banner, redisplayed before every choice prompt.
///
/// The banner itself carries no leading blank line; the blank line seen
/// between a notice and the next menu belongs to the notice.
pub const MENU: &str = r"=== Employee Payroll System ===
1. Add Developer
2. Add Manager
3. View All Employees
4. Exit";

/// Prompt for a menu selection.
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";

/// Notice printed when the reply is not one of the four choices. The
/// trailing newline leaves a blank line before the menu is redisplayed.
pub const INVALID_CHOICE_NOTICE: &str = "❌ Invalid choice! Please enter 1 to 4.\n";

/// A parsed selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Prompt for a developer's details and add them to the roster.
    AddDeveloper,
    /// Prompt for a manager's details and add them to the roster.
    AddManager,
    /// Print every employee's details and total salary.
    ListEmployees,
    /// Leave the menu loop.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = PayrollError;

    /// Parses a reply against the exact strings `"1"` through `"4"`.
    ///
    /// The reply is matched as given, so `" 1"` or `"1 "` is an invalid
    /// choice rather than a selection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::AddDeveloper),
            "2" => Ok(MenuChoice::AddManager),
            "3" => Ok(MenuChoice::ListEmployees),
            "4" => Ok(MenuChoice::Exit),
            other => Err(PayrollError::InvalidChoice {
                input: other.to_string(),
            }),
        }
    }
}
