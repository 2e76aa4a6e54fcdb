//! Writing a [`PrefSet`] back to preference-file text.

use super::entry::{bool_literal, Entry, PrefSet};
use super::error::SerializeError;

/// Renders a string so that the tokenizer reads it back unchanged.
///
/// Plain strings are quoted; a carriage return inside quotes is kept
/// as is. A string containing `"` can only be written as a bare token,
/// which requires no whitespace, no leading quote and no trailing
/// backslash.
pub fn quote(field: &'static str, value: &str) -> Result<String, SerializeError> {
    let unrepresentable = || SerializeError {
        field,
        value: value.to_string(),
    };
    if value.contains('\n') {
        return Err(unrepresentable());
    }
    if !value.contains('"') {
        return Ok(format!("\"{}\"", value));
    }
    let bare_ok = !value.starts_with('"')
        && !value.ends_with('\\')
        && !value.bytes().any(|b| b == b' ' || (b'\t'..=b'\r').contains(&b));
    if bare_ok {
        Ok(value.to_string())
    } else {
        Err(unrepresentable())
    }
}

impl PrefSet {
    /// Serializes the title and every entry in list order.
    ///
    /// RADIO groups span one physical line per option, joined with a
    /// trailing backslash.
    pub fn to_prefs_text(&self) -> Result<String, SerializeError> {
        if self.title().contains('\n') || self.title().ends_with('\r') {
            return Err(SerializeError {
                field: "title",
                value: self.title().to_string(),
            });
        }
        let mut out = String::new();
        out.push_str(self.title());
        out.push('\n');

        for entry in self.entries() {
            match entry {
                Entry::Label { text } => {
                    out.push_str(&format!("LABEL {}\n", quote("label", text)?));
                }
                Entry::Separator => out.push_str("SEPARATOR\n"),
                Entry::Bool(b) => {
                    out.push_str(&format!(
                        "BOOL {} {} {} {}\n",
                        quote("label", &b.label)?,
                        quote("true text", &b.true_text)?,
                        quote("false text", &b.false_text)?,
                        bool_literal(b.value)
                    ));
                }
                Entry::Radio(r) => {
                    out.push_str(&format!(
                        "RADIO {} {}",
                        quote("label", &r.label)?,
                        r.state.literal()
                    ));
                    for option in &r.options {
                        out.push_str(&format!(
                            " \\\nOPTION {} {} {}",
                            quote("option label", &option.label)?,
                            quote("option value", &option.value)?,
                            bool_literal(option.enabled)
                        ));
                    }
                    out.push('\n');
                }
                Entry::File(f) => {
                    out.push_str(&format!(
                        "FILE {} {} {} {}\n",
                        quote("label", &f.label)?,
                        quote("format", f.format())?,
                        quote("path", &f.path)?,
                        bool_literal(f.enabled)
                    ));
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::entry::{BoolEntry, FileEntry, RadioEntry, RadioOption, RadioState};

    #[test]
    fn test_quote_plain_and_bare() {
        assert_eq!(quote("label", "Hello world").unwrap(), "\"Hello world\"");
        assert_eq!(quote("label", "").unwrap(), "\"\"");
        assert_eq!(quote("label", "a\"b").unwrap(), "a\"b");
        assert_eq!(quote("label", "a\rb").unwrap(), "\"a\rb\"");
    }

    #[test]
    fn test_quote_rejects_unrepresentable() {
        assert!(quote("label", "a \"b\"").is_err());
        assert!(quote("label", "\"lead").is_err());
        assert!(quote("label", "x\"\\").is_err());
        assert!(quote("path", "two\nlines").is_err());
        assert!(quote("label", "a\"\r").is_err());
    }

    #[test]
    fn test_title_with_trailing_carriage_return_is_rejected() {
        assert!(PrefSet::new("T\r").to_prefs_text().is_err());
        assert_eq!(PrefSet::new("A\rB").to_prefs_text().unwrap(), "A\rB\n");
    }

    #[test]
    fn test_serialize_all_kinds() {
        let mut prefs = PrefSet::new("Demo Title");
        prefs.push(Entry::Label {
            text: "Sound".into(),
        });
        prefs.push(Entry::Separator);
        prefs.push(Entry::Bool(BoolEntry {
            label: "Music".into(),
            true_text: "-music".into(),
            false_text: "-nomusic".into(),
            value: true,
        }));
        prefs.push(Entry::Radio(RadioEntry {
            label: "Difficulty".into(),
            state: RadioState::Always,
            options: vec![
                RadioOption {
                    label: "Easy".into(),
                    value: "-easy".into(),
                    enabled: true,
                },
                RadioOption {
                    label: "Hard".into(),
                    value: "-hard".into(),
                    enabled: false,
                },
            ],
        }));
        prefs.push(Entry::File(
            FileEntry::new("Save", "--save=%s", "/tmp/x", false).unwrap(),
        ));

        let expected = "Demo Title\n\
LABEL \"Sound\"\n\
SEPARATOR\n\
BOOL \"Music\" \"-music\" \"-nomusic\" TRUE\n\
RADIO \"Difficulty\" ALWAYS \\\n\
OPTION \"Easy\" \"-easy\" TRUE \\\n\
OPTION \"Hard\" \"-hard\" FALSE\n\
FILE \"Save\" \"--save=%s\" \"/tmp/x\" FALSE\n";
        assert_eq!(prefs.to_prefs_text().unwrap(), expected);
    }

    #[test]
    fn test_radio_without_options_has_no_continuation() {
        let mut prefs = PrefSet::new("T");
        prefs.push(Entry::Radio(RadioEntry {
            label: "Mode".into(),
            state: RadioState::Always,
            options: Vec::new(),
        }));
        prefs.push(Entry::Separator);
        assert_eq!(
            prefs.to_prefs_text().unwrap(),
            "T\nRADIO \"Mode\" ALWAYS\nSEPARATOR\n"
        );
    }

    #[test]
    fn test_unrepresentable_value_fails_whole_serialization() {
        let mut prefs = PrefSet::new("T");
        prefs.push(Entry::Label {
            text: "say \"hi\" now".into(),
        });
        let err = prefs.to_prefs_text().unwrap_err();
        assert_eq!(err.field, "label");
    }
}
