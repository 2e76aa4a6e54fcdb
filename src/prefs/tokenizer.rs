//! Splits one logical preference line into tokens.
//!
//! Tokens are separated by whitespace. A token that starts with `"` runs up
//! to the next `"` (or the end of the line when the quote is never closed);
//! the quotes themselves are not part of the token. There are no escape
//! sequences.

/// Iterator over the tokens of a single logical line.
///
/// Yields borrowed slices of the input, so tokenizing never allocates.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

/// Matches C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(b: u8) -> bool {
    b == b' ' || (b'\t'..=b'\r').contains(&b)
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.line.as_bytes();
        let len = bytes.len();

        while self.pos < len && is_space(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= len {
            return None;
        }

        let quoted = bytes[self.pos] == b'"';
        if quoted {
            self.pos += 1;
        }
        let is_terminator = |b: u8| if quoted { b == b'"' } else { is_space(b) };
        let start = self.pos;
        while self.pos < len && !is_terminator(bytes[self.pos]) {
            self.pos += 1;
        }
        let end = self.pos;

        // Step over the terminator (closing quote or one whitespace byte).
        let terminated = self.pos < len;
        if terminated {
            self.pos += 1;
        }

        // A lone opening quote at the very end of the line is not a token.
        if start == len && !terminated {
            return None;
        }
        Some(&self.line[start..end])
    }
}

/// Tokenizes a logical line into an ordered list of token slices.
pub fn tokenize(line: &str) -> Vec<&str> {
    Tokens::new(line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_unquoted_tokens() {
        assert_eq!(tokenize("SEPARATOR"), vec!["SEPARATOR"]);
        assert_eq!(tokenize("  BOOL  a\tb  "), vec!["BOOL", "a", "b"]);
    }

    #[test]
    fn test_quoted_tokens_keep_inner_whitespace() {
        assert_eq!(
            tokenize(r#"LABEL "Hello world""#),
            vec!["LABEL", "Hello world"]
        );
        assert_eq!(
            tokenize(r#"BOOL "Music" "-music" "-nomusic" TRUE"#),
            vec!["BOOL", "Music", "-music", "-nomusic", "TRUE"]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize(r#"LABEL "open ended"#), vec!["LABEL", "open ended"]);
    }

    #[test]
    fn test_empty_quoted_token() {
        assert_eq!(tokenize(r#"FILE "" x"#), vec!["FILE", "", "x"]);
        assert_eq!(tokenize(r#""""#), vec![""]);
    }

    #[test]
    fn test_lone_quote_at_end_yields_no_token() {
        // Known boundary quirk: an opening quote with nothing after it
        // produces no token at all, not an empty one.
        assert!(tokenize("\"").is_empty());
        assert_eq!(tokenize("LABEL \""), vec!["LABEL"]);
    }

    #[test]
    fn test_closing_quote_terminates_token_without_space() {
        assert_eq!(tokenize(r#""ab"cd"#), vec!["ab", "cd"]);
    }

    #[test]
    fn test_quote_inside_unquoted_token_is_literal() {
        assert_eq!(tokenize(r#"ab"cd ef"#), vec![r#"ab"cd"#, "ef"]);
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(tokenize("LABEL \"Réglages du son\""), vec!["LABEL", "Réglages du son"]);
    }
}
