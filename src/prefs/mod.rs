//! The preference language and its engine.
//!
//! A preference file is a title line followed by one entry per logical
//! line:
//!
//! ```text
//! <Title>
//! LABEL "<text>"
//! SEPARATOR
//! BOOL "<label>" "<true-text>" "<false-text>" <TRUE|FALSE>
//! RADIO "<label>" <TRUE|FALSE|ALWAYS> \
//! OPTION "<label>" "<value>" <TRUE|FALSE> \
//! OPTION "<label>" "<value>" <TRUE|FALSE>
//! FILE "<label>" "<format>" "<path>" <TRUE|FALSE>
//! ```
//!
//! [`PrefSet::parse`] builds the typed tree, the mutation methods on
//! [`PrefSet`] apply front-end edits, [`PrefSet::to_prefs_text`] writes it
//! back and [`PrefSet::synthesize`] derives the launch command.

mod entry;
mod error;
mod loader;
mod mutate;
mod placeholder;
mod serializer;
mod synth;
mod tokenizer;

pub use entry::{
    BoolEntry, Entry, EntryId, FileEntry, PrefSet, RadioEntry, RadioOption, RadioState,
};
pub use error::{
    Arity, FormatError, LineError, LoadError, MalformedLine, MutationError, ParseError,
    SaveError, SerializeError,
};
pub use loader::LoadReport;
pub use mutate::{PathSource, Switch, Target};
pub use synth::template_line;
pub use tokenizer::{tokenize, Tokens};
