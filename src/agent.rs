//! Building blocks of the agent loop
//!
//! The transcript sent to the model, the `Action:` directive grammar, and the
//! closed set of actions the model may request.

mod action;
mod conversation;
mod parser;

pub use action::Action;
pub use conversation::{Conversation, Role};
pub use parser::parse_directives;
