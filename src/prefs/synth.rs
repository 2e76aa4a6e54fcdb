//! Launch-command synthesis.
//!
//! The command is the template line followed by one space-prefixed
//! fragment per contributing entry, in list order. Labels and separators
//! contribute nothing.

use super::entry::{Entry, PrefSet};

/// Extracts the template from the contents of a launch file: its first
/// line without the line terminator. `None` when that line is empty.
pub fn template_line(contents: &str) -> Option<&str> {
    contents
        .lines()
        .next()
        .filter(|line| !line.is_empty())
}

impl PrefSet {
    /// Command-line fragments contributed by the current values.
    pub fn command_fragments(&self) -> Vec<String> {
        let mut fragments = Vec::new();
        for entry in self.entries() {
            match entry {
                Entry::Label { .. } | Entry::Separator => {}
                Entry::Bool(b) => fragments.push(b.selected_text().to_string()),
                Entry::Radio(r) => {
                    fragments.extend(r.active_values().map(str::to_string));
                }
                Entry::File(f) => {
                    if f.enabled {
                        fragments.push(f.fragment());
                    }
                }
            }
        }
        fragments
    }

    /// Appends every fragment to `template`, each preceded by one space.
    ///
    /// Pure: the same entries always produce the same command.
    pub fn synthesize(&self, template: &str) -> String {
        let mut command = template.to_string();
        for fragment in self.command_fragments() {
            command.push(' ');
            command.push_str(&fragment);
        }
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> PrefSet {
        PrefSet::parse(text).unwrap().prefs
    }

    #[test]
    fn test_template_line() {
        assert_eq!(template_line("./game %s\n./other\n"), Some("./game %s"));
        assert_eq!(template_line("./game\r\n"), Some("./game"));
        assert_eq!(template_line(""), None);
        assert_eq!(template_line("\n./game\n"), None);
    }

    #[test]
    fn test_bool_appends_selected_text() {
        let mut prefs = load("T\nBOOL \"Music\" \"-music\" \"-nomusic\" TRUE\n");
        assert_eq!(prefs.synthesize("./demo"), "./demo -music");

        if let Some(Entry::Bool(b)) = prefs.get_mut(crate::prefs::EntryId(0)) {
            b.value = false;
        }
        assert_eq!(prefs.synthesize("./demo"), "./demo -nomusic");
    }

    #[test]
    fn test_radio_appends_only_enabled_options() {
        let prefs = load(
            "T\n\
RADIO \"Difficulty\" TRUE \\\n\
OPTION \"Easy\" \"-easy\" FALSE \\\n\
OPTION \"Hard\" \"-hard\" TRUE\n",
        );
        assert_eq!(prefs.synthesize("./demo"), "./demo -hard");
    }

    #[test]
    fn test_radio_appends_every_enabled_option() {
        let prefs = load(
            "T\n\
RADIO \"Extras\" ALWAYS \\\n\
OPTION \"A\" \"-a\" TRUE \\\n\
OPTION \"B\" \"-b\" TRUE\n",
        );
        assert_eq!(prefs.synthesize("run"), "run -a -b");
    }

    #[test]
    fn test_disabled_radio_contributes_nothing() {
        let prefs = load("T\nRADIO \"X\" FALSE OPTION \"A\" \"-a\" TRUE\n");
        assert_eq!(prefs.synthesize("run"), "run");
    }

    #[test]
    fn test_file_formats_path_when_enabled() {
        let prefs = load(
            "T\n\
FILE \"Save\" \"--save=%s\" \"/tmp/x\" TRUE\n\
FILE \"Log\" \"--log=%s\" \"/tmp/log\" FALSE\n",
        );
        assert_eq!(prefs.synthesize("run"), "run --save=/tmp/x");
    }

    #[test]
    fn test_labels_and_separators_contribute_nothing() {
        let prefs = load("T\nLABEL \"Hi\"\nSEPARATOR\n");
        assert_eq!(prefs.synthesize("run %s"), "run %s");
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let prefs = load(
            "T\n\
BOOL \"Music\" \"-music\" \"-nomusic\" FALSE\n\
RADIO \"R\" TRUE OPTION \"A\" \"-a\" TRUE\n\
FILE \"Save\" \"--save=%s\" \"/tmp/x\" TRUE\n",
        );
        let first = prefs.synthesize("./demo");
        let second = prefs.synthesize("./demo");
        assert_eq!(first, second);
        assert_eq!(first, "./demo -nomusic -a --save=/tmp/x");
    }
}
