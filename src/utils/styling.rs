//! Terminal styling helpers for prompts, results and errors
//!
//! All helpers write to a caller-supplied writer so the session can run
//! against stdout or an in-memory buffer. Styling is dropped when colors
//! are disabled (`--no-color` or a non-terminal stdout).

use std::io::{self, Write};

use console::{style, Emoji};

pub static ARROW: Emoji<'_, '_> = Emoji("➜ ", "> ");
pub static CROSS: Emoji<'_, '_> = Emoji("✗ ", "");

/// Print the application banner
pub fn print_banner<W: Write>(out: &mut W, version: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "    {} {}",
        style("unicon").cyan().bold(),
        style(format!("v{}", version)).dim()
    )?;
    writeln!(
        out,
        "    {}",
        style("Metric to imperial, one line at a time").dim()
    )?;
    writeln!(out, "    {}", style("━".repeat(40)).dim())
}

/// Print a prompt, preceded by a blank line
pub fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    writeln!(out)?;
    for line in prompt.lines() {
        writeln!(out, "{}", style(line).cyan())?;
    }
    out.flush()
}

/// Print a successful result: `<label>: <value>`
pub fn print_result<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}{}: {}",
        ARROW,
        label,
        style(value).green().bold()
    )
}

/// Print a recoverable error message
pub fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}{}", CROSS, style(message).red())
}

/// Print the farewell line
pub fn print_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Goodbye!").dim())
}
