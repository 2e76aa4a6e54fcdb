//! Entry point for demo-config, a terminal front end for demo launcher
//! preferences.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod cli;
mod diff;
mod format;

use colored::Colorize;

/// Runs the demo-config CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments and dispatches via [`cli::run`]. Errors are printed with
/// their context chain and exit with status 1.
fn main() {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    if let Err(e) = cli::run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
