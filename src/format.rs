//! Terminal rendering of a preference tree.
//!
//! Each entry is printed with the id the `set`/`path` commands take.
//! RADIO options get `<entry>.<option>` ids. Anything the user cannot
//! currently change is dimmed.

use colored::Colorize;
use demo_config::prefs::{Entry, MalformedLine, PrefSet};

const RULE: &str = "────────────────────────";

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Format the title and every entry, one line each.
pub fn render_tree(prefs: &PrefSet) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", prefs.title().bold()));

    for (id, entry) in prefs.iter() {
        let number = format!("{:>4}", id.to_string()).dimmed();
        match entry {
            Entry::Label { text } => {
                output.push_str(&format!("{}  {}\n", number, text.bold()));
            }
            Entry::Separator => {
                output.push_str(&format!("{}  {}\n", number, RULE.dimmed()));
            }
            Entry::Bool(b) => {
                output.push_str(&format!(
                    "{}  {} {}  {}\n",
                    number,
                    checkbox(b.value),
                    b.label,
                    b.selected_text().cyan()
                ));
            }
            Entry::Radio(r) => {
                let head = if r.is_locked() {
                    format!("{} {}", "[*]".dimmed(), r.label)
                } else {
                    format!("{} {}", checkbox(r.state.is_active()), r.label)
                };
                output.push_str(&format!("{}  {}\n", number, head));

                for (index, option) in r.options.iter().enumerate() {
                    let line = format!(
                        "{:>8}  {} {}  {}",
                        format!("{}.{}", id, index),
                        checkbox(option.enabled),
                        option.label,
                        option.value
                    );
                    if r.options_interactive() {
                        output.push_str(&format!("{}\n", line));
                    } else {
                        output.push_str(&format!("{}\n", line.dimmed()));
                    }
                }
            }
            Entry::File(f) => {
                let path = if f.path_editable() {
                    f.path.yellow()
                } else {
                    f.path.dimmed()
                };
                output.push_str(&format!(
                    "{}  {} {}  {}\n",
                    number,
                    checkbox(f.enabled),
                    f.label,
                    path
                ));
            }
        }
    }

    output
}

/// Format load diagnostics as warnings, or an empty string when there are none.
pub fn render_diagnostics(diagnostics: &[MalformedLine]) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        let note = if diagnostic.reason.drops_line() {
            "skipped"
        } else {
            "partly ignored"
        };
        output.push_str(&format!(
            "{} {} ({})\n",
            "warning:".yellow().bold(),
            diagnostic,
            note.dimmed()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_tree_numbers_entries_and_options() {
        plain();
        let prefs = PrefSet::parse(
            "Demo\n\
LABEL \"Sound\"\n\
SEPARATOR\n\
BOOL \"Music\" \"-music\" \"-nomusic\" FALSE\n\
RADIO \"Skill\" ALWAYS OPTION \"Easy\" \"-easy\" TRUE\n\
FILE \"Save\" \"--save=%s\" \"/tmp/x\" TRUE\n",
        )
        .unwrap()
        .prefs;

        let tree = render_tree(&prefs);
        let lines: Vec<_> = tree.lines().collect();
        assert_eq!(lines[0], "Demo");
        assert_eq!(lines[1], "   0  Sound");
        assert_eq!(lines[3], "   2  [ ] Music  -nomusic");
        assert_eq!(lines[4], "   3  [*] Skill");
        assert_eq!(lines[5], "     3.0  [x] Easy  -easy");
        assert_eq!(lines[6], "   4  [x] Save  /tmp/x");
    }

    #[test]
    fn test_render_diagnostics() {
        plain();
        let report = PrefSet::parse("T\nSLIDER 1\n").unwrap();
        assert_eq!(
            render_diagnostics(&report.diagnostics),
            "warning: line 2: unknown keyword \"SLIDER\" (skipped)\n"
        );
        assert_eq!(render_diagnostics(&[]), "");
    }
}
