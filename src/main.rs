//! Unicon: Interactive Unit Converter
//!
//! A command-line tool converting metric lengths, weights and temperatures
//! to imperial units through a nested text menu.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use unicon::cli::{Cli, Exit, Session};
use unicon::convert::TemperatureConverter;
use unicon::utils::{init_logging, print_banner, print_goodbye};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level());
    if cli.no_color {
        console::set_colors_enabled(false);
    }
    info!(temp_format = ?cli.temp_format, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();

    print_banner(&mut stdout.lock(), env!("CARGO_PKG_VERSION"))?;

    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        TemperatureConverter::new(cli.temp_format),
    );
    let exit = session.run()?;

    let mut out = session.into_output();
    if exit == Exit::Quit {
        print_goodbye(&mut out)?;
    }
    out.flush()?;

    info!(?exit, "session ended");
    Ok(())
}
