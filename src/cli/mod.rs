//! CLI command handlers
//!
//! Session commands and the line tokenizer that feeds them, bridging clap
//! argument parsing with the expense store.

pub mod session;
pub mod tokenize;

pub use session::{parse_command, Session, SessionCommand, SessionFlow, SessionInput};
pub use tokenize::split_line;
