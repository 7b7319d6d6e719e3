//! Blocking line-oriented session driving the menu state machine

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use super::menu::{MenuState, Message, Next};
use crate::convert::TemperatureConverter;
use crate::utils::{print_error, print_prompt, print_result};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user entered `Q`
    Quit,
    /// Input was closed
    EndOfInput,
}

/// Interactive session over any line reader and writer
pub struct Session<R, W> {
    input: R,
    output: W,
    state: MenuState,
    temperature: TemperatureConverter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, temperature: TemperatureConverter) -> Self {
        Self {
            input,
            output,
            state: MenuState::Main,
            temperature,
        }
    }

    /// Current menu state
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Consume the session and return its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt, read and respond until the user quits or input ends.
    ///
    /// Only I/O failures are returned as errors; invalid input is reported
    /// to the user and the same state is prompted again.
    pub fn run(&mut self) -> Result<Exit> {
        loop {
            print_prompt(&mut self.output, &self.state.prompt())
                .context("Failed to write prompt")?;

            let Some(line) = self.read_line()? else {
                debug!(state = ?self.state, "input closed");
                return Ok(Exit::EndOfInput);
            };

            if let Next::Quit = self.step(&line)? {
                return Ok(Exit::Quit);
            }
        }
    }

    /// Feed one line to the current state, print any message and apply
    /// the transition.
    pub fn step(&mut self, line: &str) -> Result<Next> {
        let reply = self.state.respond(line, &self.temperature);

        if let Some(message) = &reply.message {
            self.show(message).context("Failed to write output")?;
        }
        if let Next::Goto(state) = reply.next {
            self.state = state;
        }
        Ok(reply.next)
    }

    fn show(&mut self, message: &Message) -> std::io::Result<()> {
        match message {
            Message::Converted(value) => print_result(&mut self.output, "Converted value", value),
            Message::Temperature(value) => {
                print_result(&mut self.output, "Converted temperature range", value)
            }
            Message::InvalidChoice(hint) => print_error(&mut self.output, hint),
            Message::Error(err) => print_error(&mut self.output, &err.to_string()),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        trace!(line = line.trim_end(), "read line");
        Ok(Some(line))
    }
}
