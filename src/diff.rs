//! Unified diff rendering for `save --dry-run` and the editor's `diff`.
//!
//! [`unified_diff`] compares the file on disk with what a save would
//! write; [`new_file_preview`] covers files that do not exist yet.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

/// Generate a colored unified diff string.
///
/// Returns an empty string if the contents are identical.
pub fn unified_diff(old: &str, new: &str, path: &str) -> String {
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    let mut output = String::new();

    output.push_str(&format!("--- a/{}\n", path));
    output.push_str(&format!("+++ b/{}\n", path));

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        output.push_str(&format!("{}", hunk.header()));

        for change in hunk.iter_changes() {
            match change.tag() {
                ChangeTag::Delete => {
                    output.push_str(&format!("{}", format!("-{}", change).red()));
                }
                ChangeTag::Insert => {
                    output.push_str(&format!("{}", format!("+{}", change).green()));
                }
                ChangeTag::Equal => {
                    output.push_str(&format!(" {}", change));
                }
            };
        }
    }

    output
}

/// Generate a colored preview for a file that a save would create.
pub fn new_file_preview(content: &str, path: &str) -> String {
    let mut output = String::new();
    output.push_str("--- /dev/null\n");
    output.push_str(&format!("+++ b/{}\n", path));

    for line in content.lines() {
        output.push_str(&format!("{}", format!("+{}\n", line).green()));
    }

    output
}

/// Diff `new` against whatever is currently at `path`, or preview it as a
/// new file when nothing is there.
pub fn against_disk(path: &std::path::Path, new: &str) -> String {
    let label = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(old) => unified_diff(&old, new, &label),
        Err(_) => new_file_preview(new, &label),
    }
}
