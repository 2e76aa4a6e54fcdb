//! Error and diagnostic types for the preference engine.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::entry::EntryId;

/// The preference text had no title line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("preference file has no title line")]
    MissingTitle,
}

/// Fatal errors while locating or reading a product's preferences.
///
/// Any of these means "no preferences available" for the session; the
/// caller decides whether to continue with an empty option set or abort.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid product name {0:?}")]
    InvalidProduct(String),

    #[error("no preference file found (searched {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("unable to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no title line", .path.display())]
    MissingTitle { path: PathBuf },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A recoverable problem with one logical line of a preference file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {lineno}: {reason}")]
pub struct MalformedLine {
    /// 1-based physical line number (the title is line 1).
    pub lineno: usize,
    pub reason: LineError,
}

/// Why a line was rejected (or partially ignored).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Wrong number of tokens for the keyword.
    #[error("{keyword} requires {expected}, found {found}")]
    Arity {
        keyword: &'static str,
        expected: Arity,
        found: usize,
    },
    #[error("unknown keyword {0:?}")]
    UnknownKeyword(String),
    #[error("LABEL text must not be empty")]
    EmptyLabel,
    #[error("FILE format: {0}")]
    BadFormat(FormatError),
    /// A RADIO line in which no option group was well formed.
    #[error("RADIO has no valid OPTION")]
    NoOptions,
    /// A RADIO option group did not start with `OPTION`; the group was skipped.
    #[error("expected OPTION, found {0:?}; option skipped")]
    ExpectedOption(String),
    /// Tokens left over after the last complete RADIO option group.
    #[error("{0} trailing token(s) after last OPTION ignored")]
    TrailingTokens(usize),
}

impl LineError {
    /// Whether the whole line was dropped, as opposed to a single
    /// malformed RADIO option being ignored.
    pub fn drops_line(&self) -> bool {
        !matches!(
            self,
            LineError::ExpectedOption(_) | LineError::TrailingTokens(_)
        )
    }
}

/// Token count a keyword expects, counting the keyword itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {} tokens", n),
            Arity::AtLeast(n) => write!(f, "at least {} tokens", n),
        }
    }
}

/// Problems with a FILE entry's format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format has no %s placeholder")]
    NoPlaceholder,
    #[error("format has {0} %s placeholders, expected one")]
    TooManyPlaceholders(usize),
    #[error("unsupported conversion {0:?}")]
    Unsupported(String),
}

/// A value the preference syntax cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {value:?} cannot be written to a preference file")]
pub struct SerializeError {
    pub field: &'static str,
    pub value: String,
}

/// Failures while writing the preference or command files.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error("unable to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write to {}: {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected edits coming from a front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("no entry #{0}")]
    UnknownEntry(EntryId),

    #[error("entry #{id} has no option {index}")]
    UnknownOption { id: EntryId, index: usize },

    #[error("entry #{id} is a {found}, not a {expected}")]
    WrongKind {
        id: EntryId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("entry #{0} is always enabled")]
    Locked(EntryId),

    #[error(transparent)]
    Unrepresentable(#[from] SerializeError),
}
