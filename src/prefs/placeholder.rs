//! `%s` format strings used by FILE entries.
//!
//! Only two conversions exist: `%s` (the path) and `%%` (a literal percent).
//! A valid format has exactly one `%s`.

use super::error::FormatError;

enum Piece<'a> {
    Text(&'a str),
    Percent,
    Path,
}

fn pieces(format: &str) -> Result<Vec<Piece<'_>>, FormatError> {
    let mut out = Vec::new();
    let mut rest = format;
    while let Some(idx) = rest.find('%') {
        if idx > 0 {
            out.push(Piece::Text(&rest[..idx]));
        }
        let after = &rest[idx + 1..];
        match after.chars().next() {
            Some('s') => out.push(Piece::Path),
            Some('%') => out.push(Piece::Percent),
            Some(c) => return Err(FormatError::Unsupported(format!("%{}", c))),
            None => return Err(FormatError::Unsupported("%".to_string())),
        }
        rest = &after[1..];
    }
    if !rest.is_empty() {
        out.push(Piece::Text(rest));
    }
    Ok(out)
}

/// Checks that `format` contains exactly one `%s` and nothing unsupported.
pub fn validate(format: &str) -> Result<(), FormatError> {
    let count = pieces(format)?
        .iter()
        .filter(|p| matches!(p, Piece::Path))
        .count();
    match count {
        0 => Err(FormatError::NoPlaceholder),
        1 => Ok(()),
        n => Err(FormatError::TooManyPlaceholders(n)),
    }
}

/// Substitutes `value` for the placeholder.
///
/// `format` must already have passed [`validate`]; an invalid format is
/// rendered as its literal text.
pub fn render(format: &str, value: &str) -> String {
    let Ok(pieces) = pieces(format) else {
        return format.to_string();
    };
    let mut out = String::with_capacity(format.len() + value.len());
    for piece in pieces {
        match piece {
            Piece::Text(t) => out.push_str(t),
            Piece::Percent => out.push('%'),
            Piece::Path => out.push_str(value),
        }
    }
    out
}
