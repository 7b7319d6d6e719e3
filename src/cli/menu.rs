//! Menu navigation state machine
//!
//! The navigator is a pure function from (current state, input line) to a
//! [`Reply`]: the state to move to and an optional message for the user.
//! It never touches stdin or stdout; [`crate::cli::session`] owns the I/O.
//!
//! # States
//!
//! - `Main`: choose Length, Weight or Temperature
//! - `Length` / `Weight`: choose a source unit
//! - `Input(unit)`: read numbers in `unit` and convert them
//! - `Temperature`: read a Celsius value or range and convert it
//!
//! `B` always leads to the parent state, `Q` always yields
//! [`Next::Quit`], which the session propagates up instead of exiting.

use tracing::{debug, info};

use crate::convert::{require_numbers, Category, ConvertError, LinearUnit, TemperatureConverter};

// ============================================================================
// Core Types
// ============================================================================

/// A point in the navigation graph awaiting one kind of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Length,
    Weight,
    Temperature,
    Input(LinearUnit),
}

/// Where to go after handling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Remain in the current state and prompt again
    Stay,
    /// Transition to another state
    Goto(MenuState),
    /// End the session
    Quit,
}

/// Something to show the user after handling a line
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Successful linear conversion, e.g. `3.93 x 7.87 in`
    Converted(String),
    /// Successful temperature conversion, e.g. `68~77°F`
    Temperature(String),
    /// Unrecognized menu token; carries the hint for this menu
    InvalidChoice(&'static str),
    /// Conversion input was rejected
    Error(ConvertError),
}

/// Outcome of feeding one input line to a state
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub next: Next,
    pub message: Option<Message>,
}

impl Reply {
    fn goto(state: MenuState) -> Self {
        Self {
            next: Next::Goto(state),
            message: None,
        }
    }

    fn quit() -> Self {
        Self {
            next: Next::Quit,
            message: None,
        }
    }

    fn stay(message: Message) -> Self {
        Self {
            next: Next::Stay,
            message: Some(message),
        }
    }
}

// ============================================================================
// State Machine
// ============================================================================

impl MenuState {
    /// Prompt text shown when waiting in this state
    pub fn prompt(&self) -> String {
        match self {
            MenuState::Main => "Enter L for Length, W for Weight, T for Temp.\n\
                 At any time you can enter B to go back or Q to quit the program."
                .to_string(),
            MenuState::Length => {
                "Enter C for CM or M for MM (B to go back, Q to quit):".to_string()
            }
            MenuState::Weight => {
                "Enter G for Grams or K for Kilograms (B to go back, Q to quit):".to_string()
            }
            MenuState::Temperature => {
                "Enter the temperature in Celsius (B to go back, Q to quit):".to_string()
            }
            MenuState::Input(unit) => format!(
                "Enter the full dimension in {} (B to go back, Q to quit):",
                unit.label()
            ),
        }
    }

    /// State reached with `B`. `Main` has no parent and returns `None`.
    pub fn parent(&self) -> Option<MenuState> {
        match self {
            MenuState::Main => None,
            MenuState::Length | MenuState::Weight | MenuState::Temperature => {
                Some(MenuState::Main)
            }
            MenuState::Input(unit) => Some(match unit.category() {
                Category::Length => MenuState::Length,
                Category::Weight => MenuState::Weight,
            }),
        }
    }

    /// Handle one line of input in this state.
    pub fn respond(&self, line: &str, temperature: &TemperatureConverter) -> Reply {
        let token = line.trim().to_uppercase();

        if token == "Q" {
            debug!(state = ?self, "quit requested");
            return Reply::quit();
        }
        if token == "B" {
            if let Some(parent) = self.parent() {
                debug!(from = ?self, to = ?parent, "back");
                return Reply::goto(parent);
            }
        }

        let reply = match self {
            MenuState::Main => match token.as_str() {
                "L" => Reply::goto(MenuState::Length),
                "W" => Reply::goto(MenuState::Weight),
                "T" => Reply::goto(MenuState::Temperature),
                _ => Reply::stay(Message::InvalidChoice("Invalid choice.")),
            },
            MenuState::Length => match token.as_str() {
                "C" => Reply::goto(MenuState::Input(LinearUnit::Centimeters)),
                "M" => Reply::goto(MenuState::Input(LinearUnit::Millimeters)),
                _ => Reply::stay(Message::InvalidChoice(
                    "Invalid choice. Please enter C, M, B, or Q.",
                )),
            },
            MenuState::Weight => match token.as_str() {
                "G" => Reply::goto(MenuState::Input(LinearUnit::Grams)),
                "K" => Reply::goto(MenuState::Input(LinearUnit::Kilograms)),
                _ => Reply::stay(Message::InvalidChoice(
                    "Invalid choice. Please enter G, K, B, or Q.",
                )),
            },
            MenuState::Input(unit) => match convert_line(*unit, line) {
                Ok(rendered) => Reply::stay(Message::Converted(rendered)),
                Err(e) => Reply::stay(Message::Error(e)),
            },
            MenuState::Temperature => match temperature.convert(line) {
                Ok(rendered) => Reply::stay(Message::Temperature(rendered)),
                Err(e) => Reply::stay(Message::Error(e)),
            },
        };

        match (&reply.next, &reply.message) {
            (Next::Goto(to), _) => debug!(from = ?self, to = ?to, "transition"),
            (_, Some(Message::InvalidChoice(_))) | (_, Some(Message::Error(_))) => {
                info!(state = ?self, input = line.trim(), "rejected input")
            }
            _ => {}
        }
        reply
    }
}

/// Extract numbers from `line` and convert them with `unit`'s rule.
pub fn convert_line(unit: LinearUnit, line: &str) -> Result<String, ConvertError> {
    let numbers = require_numbers(line)?;
    unit.rule().convert_and_format(&numbers)
}
