//! Command handlers for the interactive editor.
//!
//! Returns a [`CommandAction`] so the editor loop can track unsaved
//! edits and decide when to stop.

use anyhow::{Context, Result};
use colored::Colorize;

use demo_config::prefs::{EntryId, Switch, Target};
use demo_config::Session;

use crate::format;

/// Action returned by command handling.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandAction {
    /// Nothing changed; keep reading.
    Continue,
    /// The in-memory preferences were edited.
    Changed,
    /// Preferences were written to disk.
    Saved,
    Quit,
    /// Unknown command was entered.
    Unknown(String),
}

/// Dispatch and handle one editor command.
pub(crate) fn handle_command(input: &str, session: &mut Session) -> Result<CommandAction> {
    let input = input.trim();
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default();

    match command {
        "list" | "ls" => {
            print!("{}", format::render_tree(session.prefs()));
            Ok(CommandAction::Continue)
        }
        "on" | "off" | "toggle" => {
            let switch = match command {
                "on" => Switch::On,
                "off" => Switch::Off,
                _ => Switch::Toggle,
            };
            let target: Target = words
                .next()
                .with_context(|| format!("usage: {} <entry>[.<option>]", command))?
                .parse()
                .map_err(anyhow::Error::msg)?;
            let state = session.prefs_mut().switch(target, switch)?;
            println!("{} {}", target, super::on_off(state));
            Ok(CommandAction::Changed)
        }
        "path" => {
            let rest = input.strip_prefix("path").unwrap_or_default().trim_start();
            if rest.is_empty() {
                anyhow::bail!("usage: path <entry> [<value>]");
            }
            // A missing value clears the path.
            let (id, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let id: usize = id
                .parse()
                .with_context(|| format!("invalid entry id {:?}", id))?;
            session
                .prefs_mut()
                .set_file_path(EntryId(id), value.trim())?;
            Ok(CommandAction::Changed)
        }
        "command" => {
            match session.command() {
                Some(command) => println!("{}", command),
                None => println!("{}", "No launch template; no command is generated.".dimmed()),
            }
            Ok(CommandAction::Continue)
        }
        "diff" => {
            let preview = super::preview_save(session)?;
            if preview.is_empty() {
                println!("{}", "No changes.".dimmed());
            } else {
                print!("{}", preview);
            }
            Ok(CommandAction::Continue)
        }
        "save" => {
            super::save(session)?;
            Ok(CommandAction::Saved)
        }
        "help" => {
            println!("{}", "Commands:".bold());
            println!("  {} - show the options", "list".cyan());
            println!(
                "  {} - switch an entry (3) or radio option (3.1)",
                "on|off|toggle <target>".cyan()
            );
            println!(
                "  {} - change (or clear) a file entry's path",
                "path <entry> [<value>]".cyan()
            );
            println!("  {} - show the launch command", "command".cyan());
            println!("  {} - show what save would change", "diff".cyan());
            println!("  {} - write preferences and launch command", "save".cyan());
            println!("  {} - show this help", "help".cyan());
            println!("  {} - exit without saving", "quit".cyan());
            Ok(CommandAction::Continue)
        }
        "quit" | "exit" => Ok(CommandAction::Quit),
        _ => Ok(CommandAction::Unknown(command.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demo_config::prefs::Entry;
    use demo_config::ProductPaths;
    use std::fs;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let paths = ProductPaths::new(
            "demo",
            &dir.path().join("saved"),
            &dir.path().join("demos"),
        )
        .unwrap();
        let launch = paths.demo_dir.join("launch");
        fs::create_dir_all(&launch).unwrap();
        fs::write(
            paths.shipped_prefs(),
            "Demo\n\
BOOL \"Music\" \"-music\" \"-nomusic\" TRUE\n\
FILE \"Save\" \"--save=%s\" \"/tmp/x\" TRUE\n",
        )
        .unwrap();
        fs::write(paths.template(), "./demo\n").unwrap();
        let session = Session::open("demo", paths).unwrap();
        (dir, session)
    }

    #[test]
    fn test_toggle_marks_changed() {
        let (_dir, mut session) = session();
        assert_eq!(
            handle_command("toggle 0", &mut session).unwrap(),
            CommandAction::Changed
        );
        assert_eq!(session.command().unwrap(), "./demo -nomusic --save=/tmp/x");
    }

    #[test]
    fn test_path_keeps_inner_spaces() {
        let (_dir, mut session) = session();
        handle_command("path 1 /tmp/my saves ", &mut session).unwrap();
        match session.prefs().get(EntryId(1)) {
            Some(Entry::File(f)) => assert_eq!(f.path, "/tmp/my saves"),
            other => panic!("expected file, got {:?}", other),
        }
    }

    #[test]
    fn test_path_without_value_clears_it() {
        let (_dir, mut session) = session();
        assert_eq!(
            handle_command("path 1", &mut session).unwrap(),
            CommandAction::Changed
        );
        match session.prefs().get(EntryId(1)) {
            Some(Entry::File(f)) => assert_eq!(f.path, ""),
            other => panic!("expected file, got {:?}", other),
        }
        assert!(handle_command("path", &mut session).is_err());
    }

    #[test]
    fn test_save_writes_both_files() {
        let (_dir, mut session) = session();
        handle_command("off 0", &mut session).unwrap();
        assert_eq!(
            handle_command("save", &mut session).unwrap(),
            CommandAction::Saved
        );
        let command = fs::read_to_string(session.paths().command_output()).unwrap();
        assert_eq!(command, "./demo -nomusic --save=/tmp/x\n");
    }

    #[test]
    fn test_bad_input() {
        let (_dir, mut session) = session();
        assert!(handle_command("toggle", &mut session).is_err());
        assert!(handle_command("toggle x", &mut session).is_err());
        assert!(handle_command("on 1.0", &mut session).is_err());
        assert!(handle_command("path 0 /tmp/y", &mut session).is_err());
        assert_eq!(
            handle_command("frobnicate", &mut session).unwrap(),
            CommandAction::Unknown("frobnicate".to_string())
        );
        assert_eq!(handle_command("quit", &mut session).unwrap(), CommandAction::Quit);
    }
}
