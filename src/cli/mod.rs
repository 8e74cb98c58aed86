//! Terminal front-end: prompt bindings, colored output, scripted test mode,
//! and the loop that drives the donation form.

pub mod interaction;
pub mod output;
mod runner;
pub mod test_mode;

pub use interaction::{FieldPrompt, FormInteraction, PromptReply, ReviewReply, TerminalInteraction};
pub use runner::{run_form, FormResult};
