//! CLI module - argument parsing, menu navigation and the interactive session

pub mod args;
pub mod menu;
pub mod session;

pub use args::Cli;
pub use menu::{convert_line, MenuState, Message, Next, Reply};
pub use session::{Exit, Session};
