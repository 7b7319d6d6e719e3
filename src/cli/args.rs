//! Command-line argument definitions using clap

use clap::Parser;

use crate::convert::TempFormat;

/// Unicon - Convert lengths, weights and temperatures to imperial units
#[derive(Parser, Debug)]
#[command(name = "unicon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Temperature output format.
    /// "rounded" prints whole degrees and ranges (68~77°F),
    /// "fixed" prints two decimals (97.88°F).
    #[arg(long, value_enum, default_value_t = TempFormat::Rounded)]
    pub temp_format: TempFormat,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive matching the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
