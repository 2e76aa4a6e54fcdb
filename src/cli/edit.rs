//! Interactive preference editor.
//!
//! A [`rustyline`] loop over one [`Session`]. Each line is a command
//! handled by [`super::commands`]; edits apply immediately to the
//! in-memory tree and reach disk only on `save`.
//!
//! # Readline behavior
//!
//! - **Ctrl+C**: cancels current input, stays in the editor
//! - **Ctrl+D**: exits (unsaved edits are discarded)
//! - History is persisted to `~/.cache/demo-config/edit_history.txt`

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use demo_config::constants::HISTORY_FILENAME;
use demo_config::{Config, Session};

use super::commands::{self, CommandAction};
use crate::format;

pub(crate) fn run_editor(mut session: Session) -> Result<()> {
    println!(
        "{} [{}] (help for commands, Ctrl+D to exit)",
        "demo-config edit".bold().cyan(),
        session.product().yellow(),
    );
    println!();
    print!("{}", format::render_tree(session.prefs()));
    eprint!("{}", format::render_diagnostics(session.diagnostics()));
    println!();

    let mut rl = DefaultEditor::new()?;
    let history_path = Config::cache_dir()?.join(HISTORY_FILENAME);
    if history_path.exists() {
        let _ = rl.load_history(&history_path);
    }

    let mut unsaved = false;

    loop {
        let readline = rl.readline(&format!("{} ", ">".green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match commands::handle_command(&line, &mut session) {
                    Ok(CommandAction::Continue) => {}
                    Ok(CommandAction::Changed) => unsaved = true,
                    Ok(CommandAction::Saved) => unsaved = false,
                    Ok(CommandAction::Quit) => break,
                    Ok(CommandAction::Unknown(cmd)) => {
                        println!("{} Unknown command: {}", "?".yellow(), cmd);
                    }
                    Err(e) => eprintln!("{} {:#}", "error:".red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                break;
            }
        }
    }

    if unsaved {
        println!("{}", "Unsaved changes discarded.".yellow());
    }
    println!("{}", "goodbye.".dimmed());

    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = rl.save_history(&history_path);

    Ok(())
}
