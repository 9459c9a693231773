//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Render an f-string style template
#[derive(Parser, Debug)]
#[command(name = "fstr-cli", version, about, long_about = None)]
pub struct Cli {
    /// Template text, e.g. "Hello {name}, balance {balance:,.2f}"
    pub template: String,

    /// Treat TEMPLATE as a path to a file containing the template
    #[arg(short, long)]
    pub file: bool,

    /// Binding in KEY=VALUE form (repeatable, overrides files)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// TOML or JSON file with a table of bindings
    #[arg(short, long, value_name = "FILE")]
    pub bindings: Option<PathBuf>,

    /// Config file (defaults to <config dir>/fstr/config.toml)
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long)]
    pub no_config: bool,

    /// Only validate the template against the bindings
    #[arg(long)]
    pub check: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter implied by the -v count, used when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
