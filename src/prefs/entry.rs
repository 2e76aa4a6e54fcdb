//! The typed option tree.
//!
//! A [`PrefSet`] owns an ordered list of [`Entry`] values. Order is file
//! order and drives both serialization and command synthesis. Front ends
//! address entries through [`EntryId`] handles rather than references.

use std::fmt;

use serde::Serialize;

use super::error::FormatError;
use super::placeholder;

/// Opaque handle to an entry: its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the option tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Label { text: String },
    Separator,
    Bool(BoolEntry),
    Radio(RadioEntry),
    File(FileEntry),
}

impl Entry {
    /// Short kind name, as used in the file format (lowercased).
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Label { .. } => "label",
            Entry::Separator => "separator",
            Entry::Bool(_) => "bool",
            Entry::Radio(_) => "radio",
            Entry::File(_) => "file",
        }
    }
}

/// A checkbox choosing between two command-line fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoolEntry {
    pub label: String,
    pub true_text: String,
    pub false_text: String,
    pub value: bool,
}

impl BoolEntry {
    /// The fragment selected by the current value.
    pub fn selected_text(&self) -> &str {
        if self.value {
            &self.true_text
        } else {
            &self.false_text
        }
    }
}

/// Enabled flag of a RADIO group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioState {
    Off,
    On,
    /// Always active; rendered as a plain label that cannot be toggled.
    Always,
}

impl RadioState {
    /// Parses `true`, `false` or `always` (case-insensitive). Anything
    /// else is treated as `false`.
    pub fn from_literal(token: &str) -> Self {
        if token.eq_ignore_ascii_case("always") {
            RadioState::Always
        } else if parse_bool(token) {
            RadioState::On
        } else {
            RadioState::Off
        }
    }

    pub fn literal(self) -> &'static str {
        match self {
            RadioState::Off => "FALSE",
            RadioState::On => "TRUE",
            RadioState::Always => "ALWAYS",
        }
    }

    pub fn is_active(self) -> bool {
        !matches!(self, RadioState::Off)
    }
}

/// A group of independently checkable options.
///
/// Options are not mutually exclusive: every enabled option contributes
/// its value while the group is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioEntry {
    pub label: String,
    pub state: RadioState,
    pub options: Vec<RadioOption>,
}

impl RadioEntry {
    pub fn is_locked(&self) -> bool {
        self.state == RadioState::Always
    }

    /// Whether a front end should let the user change individual options.
    pub fn options_interactive(&self) -> bool {
        self.state.is_active()
    }

    /// Values of the options that contribute to the command line.
    pub fn active_values(&self) -> impl Iterator<Item = &str> {
        let active = self.state.is_active();
        self.options
            .iter()
            .filter(move |o| active && o.enabled)
            .map(|o| o.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub label: String,
    pub value: String,
    pub enabled: bool,
}

/// A toggleable path formatted into a command-line fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub label: String,
    format: String,
    pub path: String,
    pub enabled: bool,
}

impl FileEntry {
    /// Builds a FILE entry, rejecting formats without exactly one `%s`.
    pub fn new(
        label: impl Into<String>,
        format: impl Into<String>,
        path: impl Into<String>,
        enabled: bool,
    ) -> Result<Self, FormatError> {
        let format = format.into();
        placeholder::validate(&format)?;
        Ok(Self {
            label: label.into(),
            format,
            path: path.into(),
            enabled,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn path_editable(&self) -> bool {
        self.enabled
    }

    /// The format with the current path substituted.
    pub fn fragment(&self) -> String {
        placeholder::render(&self.format, &self.path)
    }
}

/// Case-insensitive `true`; every other literal reads as false.
pub fn parse_bool(token: &str) -> bool {
    token.eq_ignore_ascii_case("true")
}

pub fn bool_literal(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// The in-memory preference set for one product: a title plus ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefSet {
    title: String,
    entries: Vec<Entry>,
}

impl PrefSet {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.get_mut(id.0)
    }

    /// Entries paired with their handles, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    /// Appends an entry and returns its handle.
    pub fn push(&mut self, entry: Entry) -> EntryId {
        self.entries.push(entry);
        EntryId(self.entries.len() - 1)
    }
}
