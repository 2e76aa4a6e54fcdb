//! Parsing preference text into a [`PrefSet`].
//!
//! The first line is the title. Every following physical line is joined
//! with its successors while it ends in a backslash, tokenized, and
//! dispatched on its (case-insensitive) keyword. Malformed lines are
//! reported and skipped; loading always continues.

use tracing::{debug, warn};

use super::entry::{
    parse_bool, BoolEntry, Entry, FileEntry, PrefSet, RadioEntry, RadioOption, RadioState,
};
use super::error::{Arity, LineError, MalformedLine, ParseError};
use super::tokenizer::tokenize;

/// Result of a successful parse: the entries plus every recovered problem.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub prefs: PrefSet,
    pub diagnostics: Vec<MalformedLine>,
}

/// Tokens making up one RADIO option: `OPTION <label> <value> <bool>`.
const OPTION_STRIDE: usize = 4;

impl PrefSet {
    /// Parses preference text.
    ///
    /// Fails only when there is no title line; everything else is
    /// recovered into [`LoadReport::diagnostics`].
    pub fn parse(text: &str) -> Result<LoadReport, ParseError> {
        let mut physical = text.lines();
        let title = physical.next().ok_or(ParseError::MissingTitle)?;

        let mut prefs = PrefSet::new(title);
        let mut diagnostics = Vec::new();
        let mut pending = String::new();
        let mut lineno = 1;

        for line in physical {
            lineno += 1;
            if let Some(head) = line.strip_suffix('\\') {
                pending.push_str(head);
                continue;
            }
            pending.push_str(line);
            parse_logical_line(&pending, lineno, &mut prefs, &mut diagnostics);
            pending.clear();
        }
        if !pending.is_empty() {
            debug!(line = lineno, "continuation pending at end of file");
            parse_logical_line(&pending, lineno, &mut prefs, &mut diagnostics);
        }

        Ok(LoadReport { prefs, diagnostics })
    }
}

fn parse_logical_line(
    line: &str,
    lineno: usize,
    prefs: &mut PrefSet,
    diagnostics: &mut Vec<MalformedLine>,
) {
    let args = tokenize(line);
    let Some(keyword) = args.first() else {
        return;
    };

    let mut problems = Vec::new();
    match parse_entry(keyword, &args, &mut problems) {
        Ok(entry) => {
            prefs.push(entry);
        }
        Err(reason) => problems.push(reason),
    }

    for reason in problems {
        warn!(line = lineno, "{}", reason);
        diagnostics.push(MalformedLine { lineno, reason });
    }
}

fn check_arity(
    keyword: &'static str,
    args: &[&str],
    expected: Arity,
) -> Result<(), LineError> {
    let ok = match expected {
        Arity::Exactly(n) => args.len() == n,
        Arity::AtLeast(n) => args.len() >= n,
    };
    if ok {
        Ok(())
    } else {
        Err(LineError::Arity {
            keyword,
            expected,
            found: args.len(),
        })
    }
}

/// Builds one entry. `Err` drops the line; non-fatal problems with
/// individual RADIO options are pushed to `problems` instead.
fn parse_entry(
    keyword: &str,
    args: &[&str],
    problems: &mut Vec<LineError>,
) -> Result<Entry, LineError> {
    if keyword.eq_ignore_ascii_case("LABEL") {
        check_arity("LABEL", args, Arity::Exactly(2))?;
        if args[1].is_empty() {
            return Err(LineError::EmptyLabel);
        }
        Ok(Entry::Label {
            text: args[1].to_string(),
        })
    } else if keyword.eq_ignore_ascii_case("SEPARATOR") {
        if args.len() > 1 {
            debug!("ignoring {} argument(s) to SEPARATOR", args.len() - 1);
        }
        Ok(Entry::Separator)
    } else if keyword.eq_ignore_ascii_case("BOOL") {
        check_arity("BOOL", args, Arity::Exactly(5))?;
        Ok(Entry::Bool(BoolEntry {
            label: args[1].to_string(),
            true_text: args[2].to_string(),
            false_text: args[3].to_string(),
            value: parse_bool(args[4]),
        }))
    } else if keyword.eq_ignore_ascii_case("RADIO") {
        check_arity("RADIO", args, Arity::AtLeast(3 + OPTION_STRIDE))?;
        parse_radio(args, problems).map(Entry::Radio)
    } else if keyword.eq_ignore_ascii_case("FILE") {
        check_arity("FILE", args, Arity::Exactly(5))?;
        let file = FileEntry::new(args[1], args[2], args[3], parse_bool(args[4]))
            .map_err(LineError::BadFormat)?;
        Ok(Entry::File(file))
    } else {
        Err(LineError::UnknownKeyword(keyword.to_string()))
    }
}

/// Fails when no option group survives, since such a group could not be
/// written back in a form the loader accepts.
fn parse_radio(args: &[&str], problems: &mut Vec<LineError>) -> Result<RadioEntry, LineError> {
    let mut radio = RadioEntry {
        label: args[1].to_string(),
        state: RadioState::from_literal(args[2]),
        options: Vec::new(),
    };

    let groups = args[3..].chunks(OPTION_STRIDE);
    for group in groups {
        if group.len() < OPTION_STRIDE {
            problems.push(LineError::TrailingTokens(group.len()));
            break;
        }
        if !group[0].eq_ignore_ascii_case("OPTION") {
            problems.push(LineError::ExpectedOption(group[0].to_string()));
            continue;
        }
        radio.options.push(RadioOption {
            label: group[1].to_string(),
            value: group[2].to_string(),
            enabled: parse_bool(group[3]),
        });
    }
    if radio.options.is_empty() {
        return Err(LineError::NoOptions);
    }
    Ok(radio)
}
