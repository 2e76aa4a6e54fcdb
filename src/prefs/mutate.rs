//! Edits applied by a front end.
//!
//! Every mutation takes effect immediately on the [`PrefSet`]; there is no
//! batching and no undo. Entries are addressed by [`EntryId`].

use std::fmt;
use std::str::FromStr;

use super::entry::{Entry, EntryId, FileEntry, PrefSet, RadioEntry, RadioState};
use super::error::{MutationError, SerializeError};
use super::serializer::quote;

/// Supplies the live text of a front end's path editors.
///
/// A UI that only pushes path edits at save time implements this and
/// hands it to the save routine, which copies each returned value into
/// the matching FILE entry before serializing.
pub trait PathSource {
    /// Current text for the FILE entry `id`, or `None` if no editor is attached.
    fn current_path(&self, id: EntryId) -> Option<String>;
}

/// What a front end points at: a whole entry or one RADIO option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Entry(EntryId),
    Option(EntryId, usize),
}

impl FromStr for Target {
    type Err = String;

    /// Parses `3` (entry 3) or `3.1` (option 1 of entry 3).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || format!("expected <entry> or <entry>.<option>, got {:?}", s);
        match s.split_once('.') {
            Some((entry, option)) => Ok(Target::Option(
                EntryId(entry.parse().map_err(|_| bad())?),
                option.parse().map_err(|_| bad())?,
            )),
            None => Ok(Target::Entry(EntryId(s.parse().map_err(|_| bad())?))),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Entry(id) => write!(f, "{}", id),
            Target::Option(id, index) => write!(f, "{}.{}", id, index),
        }
    }
}

/// A checkbox action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl Switch {
    fn apply(self, current: bool) -> bool {
        match self {
            Switch::On => true,
            Switch::Off => false,
            Switch::Toggle => !current,
        }
    }
}

impl PrefSet {
    fn entry_mut(&mut self, id: EntryId) -> Result<&mut Entry, MutationError> {
        self.get_mut(id).ok_or(MutationError::UnknownEntry(id))
    }

    fn radio_mut(&mut self, id: EntryId) -> Result<&mut RadioEntry, MutationError> {
        match self.entry_mut(id)? {
            Entry::Radio(r) => Ok(r),
            other => Err(MutationError::WrongKind {
                id,
                expected: "radio",
                found: other.kind(),
            }),
        }
    }

    fn file_mut(&mut self, id: EntryId) -> Result<&mut FileEntry, MutationError> {
        match self.entry_mut(id)? {
            Entry::File(f) => Ok(f),
            other => Err(MutationError::WrongKind {
                id,
                expected: "file",
                found: other.kind(),
            }),
        }
    }

    pub fn set_bool(&mut self, id: EntryId, value: bool) -> Result<(), MutationError> {
        match self.entry_mut(id)? {
            Entry::Bool(b) => {
                b.value = value;
                Ok(())
            }
            other => Err(MutationError::WrongKind {
                id,
                expected: "bool",
                found: other.kind(),
            }),
        }
    }

    /// Flips a BOOL entry and returns its new value.
    pub fn toggle_bool(&mut self, id: EntryId) -> Result<bool, MutationError> {
        let current = match self.get(id) {
            Some(Entry::Bool(b)) => b.value,
            Some(other) => {
                return Err(MutationError::WrongKind {
                    id,
                    expected: "bool",
                    found: other.kind(),
                })
            }
            None => return Err(MutationError::UnknownEntry(id)),
        };
        self.set_bool(id, !current)?;
        Ok(!current)
    }

    /// Switches a RADIO group on or off.
    ///
    /// Option interactivity follows the group (see
    /// [`RadioEntry::options_interactive`]). ALWAYS groups cannot be changed.
    pub fn set_radio_enabled(&mut self, id: EntryId, enabled: bool) -> Result<(), MutationError> {
        let radio = self.radio_mut(id)?;
        if radio.is_locked() {
            return Err(MutationError::Locked(id));
        }
        radio.state = if enabled {
            RadioState::On
        } else {
            RadioState::Off
        };
        Ok(())
    }

    /// Checks or unchecks one option. Other options are left alone.
    pub fn set_option_enabled(
        &mut self,
        id: EntryId,
        index: usize,
        enabled: bool,
    ) -> Result<(), MutationError> {
        let option = self
            .radio_mut(id)?
            .options
            .get_mut(index)
            .ok_or(MutationError::UnknownOption { id, index })?;
        option.enabled = enabled;
        Ok(())
    }

    /// Enables or disables a FILE entry (and with it, its path editor).
    pub fn set_file_enabled(&mut self, id: EntryId, enabled: bool) -> Result<(), MutationError> {
        self.file_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Replaces a FILE entry's path. Paths that could not be written back
    /// to the preference file are rejected.
    pub fn set_file_path(
        &mut self,
        id: EntryId,
        path: impl Into<String>,
    ) -> Result<(), MutationError> {
        let path = path.into();
        quote("path", &path)?;
        self.file_mut(id)?.path = path;
        Ok(())
    }

    /// Flips whatever checkbox `target` names: a BOOL value, a RADIO
    /// group, a RADIO option or a FILE entry's enabled flag. Returns the
    /// new state.
    pub fn switch(&mut self, target: Target, switch: Switch) -> Result<bool, MutationError> {
        match target {
            Target::Option(id, index) => {
                let current = self
                    .radio_mut(id)?
                    .options
                    .get(index)
                    .map(|o| o.enabled)
                    .ok_or(MutationError::UnknownOption { id, index })?;
                let next = switch.apply(current);
                self.set_option_enabled(id, index, next)?;
                Ok(next)
            }
            Target::Entry(id) => match self.entry_mut(id)? {
                Entry::Bool(b) => {
                    b.value = switch.apply(b.value);
                    Ok(b.value)
                }
                Entry::Radio(r) => {
                    let next = switch.apply(r.state.is_active());
                    self.set_radio_enabled(id, next)?;
                    Ok(next)
                }
                Entry::File(f) => {
                    f.enabled = switch.apply(f.enabled);
                    Ok(f.enabled)
                }
                other => Err(MutationError::WrongKind {
                    id,
                    expected: "bool, radio or file",
                    found: other.kind(),
                }),
            },
        }
    }

    /// Copies pending editor text into every FILE entry that has one.
    pub fn refresh_paths(&mut self, source: &dyn PathSource) -> Result<(), SerializeError> {
        for index in 0..self.len() {
            let id = EntryId(index);
            if let Some(Entry::File(file)) = self.get_mut(id) {
                if let Some(path) = source.current_path(id) {
                    quote("path", &path)?;
                    file.path = path;
                }
            }
        }
        Ok(())
    }
}
