//! Command-line interface definition and dispatch for demo-config.
//!
//! Uses [`clap`] derive macros. One-shot subcommands load a product's
//! preferences, apply at most one edit and save; `edit` hands the session
//! to the interactive editor in [`edit`].

mod commands;
mod edit;

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use demo_config::prefs::{EntryId, Switch, Target};
use demo_config::session::SaveOutcome;
use demo_config::{Config, Session};

use crate::{diff, format};

/// Top-level CLI structure for demo-config.
#[derive(Parser)]
#[command(
    name = "demo-config",
    about = "Edit demo preferences and generate launch commands"
)]
pub struct Cli {
    /// Directory holding saved preferences (overrides config)
    #[arg(long, global = true)]
    pub prefs_root: Option<String>,
    /// Directory holding the shipped demos (overrides config)
    #[arg(long, global = true)]
    pub demos_dir: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands. The `///` comments double as `--help` text.
#[derive(Subcommand)]
pub enum Commands {
    /// Show a product's options
    Show {
        product: String,
        /// Print the entry model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Turn an entry (`3`) or a radio option (`3.1`) on or off, then save
    Set {
        product: String,
        target: Target,
        #[arg(value_enum)]
        switch: SwitchArg,
    },
    /// Change a file entry's path, then save
    Path {
        product: String,
        id: usize,
        path: String,
    },
    /// Print the launch command the current options produce
    Command { product: String },
    /// Save preferences and launch command
    Save {
        product: String,
        /// Show what would change instead of writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the product's README
    Readme { product: String },
    /// Edit a product's options interactively
    Edit { product: String },
    /// Show the effective settings
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SwitchArg {
    On,
    Off,
    Toggle,
}

impl From<SwitchArg> for Switch {
    fn from(arg: SwitchArg) -> Self {
        match arg {
            SwitchArg::On => Switch::On,
            SwitchArg::Off => Switch::Off,
            SwitchArg::Toggle => Switch::Toggle,
        }
    }
}

/// Parses command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Loads settings, starts logging and runs the chosen subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(root) = cli.prefs_root {
        config.prefs_root = Some(root);
    }
    if let Some(dir) = cli.demos_dir {
        config.demos_dir = Some(dir);
    }
    init_logging(&config);

    match cli.command {
        Commands::Show { product, json } => {
            let session = open_session(&config, &product)?;
            if json {
                println!("{}", serde_json::to_string_pretty(session.prefs())?);
                return Ok(());
            }
            println!("{}", session.source().display().to_string().dimmed());
            print!("{}", format::render_tree(session.prefs()));
            eprint!("{}", format::render_diagnostics(session.diagnostics()));
            Ok(())
        }
        Commands::Set {
            product,
            target,
            switch,
        } => {
            let mut session = open_session(&config, &product)?;
            let state = session.prefs_mut().switch(target, switch.into())?;
            println!("{} {}", target, on_off(state));
            save(&mut session)
        }
        Commands::Path { product, id, path } => {
            let mut session = open_session(&config, &product)?;
            session.prefs_mut().set_file_path(EntryId(id), path)?;
            save(&mut session)
        }
        Commands::Command { product } => {
            let session = open_session(&config, &product)?;
            match session.command() {
                Some(command) => println!("{}", command),
                None => eprintln!("{}", "No launch template; no command is generated.".dimmed()),
            }
            Ok(())
        }
        Commands::Save { product, dry_run } => {
            let mut session = open_session(&config, &product)?;
            if dry_run {
                let preview = preview_save(&session)?;
                if preview.is_empty() {
                    println!("{}", "No changes.".dimmed());
                } else {
                    print!("{}", preview);
                }
                Ok(())
            } else {
                save(&mut session)
            }
        }
        Commands::Readme { product } => {
            let paths = config
                .product_paths(&product)
                .with_context(|| format!("Unable to load preferences for {}", product))?;
            let path = paths.readme();
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Unable to read {}", path.display()))?;
            print!("{}", text);
            Ok(())
        }
        Commands::Edit { product } => {
            let session = open_session(&config, &product)?;
            edit::run_editor(session)
        }
        Commands::Config => {
            let path = Config::config_path()?;
            println!("{} {}", "Config path:".bold(), path.display());
            println!();
            println!("{} {}", "prefs_root:".bold(), config.prefs_root()?.display());
            println!("{} {}", "demos_dir:".bold(), config.demos_dir().display());
            println!("{} {}", "log_level:".bold(), config.log_level());
            Ok(())
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_session(config: &Config, product: &str) -> Result<Session> {
    let paths = config
        .product_paths(product)
        .with_context(|| format!("Unable to load preferences for {}", product))?;
    Session::open(product, paths)
        .with_context(|| format!("Unable to load preferences for {}", product))
}

pub(crate) fn on_off(state: bool) -> colored::ColoredString {
    if state {
        "on".green()
    } else {
        "off".red()
    }
}

pub(crate) fn save(session: &mut Session) -> Result<()> {
    let outcome = session
        .save(None)
        .with_context(|| format!("Unable to save preferences for {}", session.product()))?;
    print_save_outcome(&outcome);
    Ok(())
}

fn print_save_outcome(outcome: &SaveOutcome) {
    println!("{} {}", "saved".green().bold(), outcome.prefs_path.display());
    if let Some(path) = &outcome.command_path {
        println!("{} {}", "wrote".green().bold(), path.display());
    }
}

/// Diffs of both output files against disk. Empty when a save would
/// change nothing.
pub(crate) fn preview_save(session: &Session) -> Result<String> {
    let rendered = session.render()?;
    let paths = session.paths();
    let mut output = diff::against_disk(&paths.saved_prefs(), &rendered.prefs_text);
    if let Some(command) = rendered.command {
        output.push_str(&diff::against_disk(
            &paths.command_output(),
            &format!("{}\n", command),
        ));
    }
    Ok(output)
}
