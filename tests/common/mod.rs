//! Shared test utilities for driving sessions from scripted input

#![allow(dead_code)]

use unicon::cli::{Exit, MenuState, Session};
use unicon::convert::{TempFormat, TemperatureConverter};

/// Result of running a scripted session to completion
pub struct ScriptRun {
    pub exit: Exit,
    pub state: MenuState,
    pub output: String,
}

/// Run `script` (newline separated input lines) through a fresh session
/// with colors disabled.
pub fn run_script(script: &str, format: TempFormat) -> ScriptRun {
    console::set_colors_enabled(false);
    let mut session = Session::new(
        script.as_bytes(),
        Vec::new(),
        TemperatureConverter::new(format),
    );
    let exit = session.run().expect("in-memory session should not fail");
    let state = session.state();
    let output = String::from_utf8(session.into_output()).expect("output should be UTF-8");
    ScriptRun {
        exit,
        state,
        output,
    }
}

/// Count how many times `needle` appears in `haystack`
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
