//! Interactive command-line interface for the payroll system.
//!
//! The CLI is a line-oriented menu loop: the menu text and choice parsing
//! live in [`menu`], the prompt/reply helpers in [`prompts`], and the loop
//! itself in [`session`]. Everything is generic over the input and output
//! streams so the whole interface can be driven from tests.

mod menu;
mod prompts;
mod session;

pub use menu::{CHOICE_PROMPT, INVALID_CHOICE_NOTICE, MENU, MenuChoice};
pub use prompts::{prompt_amount, prompt_reply, read_reply};
pub use session::Session;
