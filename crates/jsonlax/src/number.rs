//! Anchored matching of numeric literals.
//!
//! The matcher implements the JSON number grammar
//! `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`, anchored at the given
//! offset and taking the longest match. It is deliberately *not* a search:
//! either a number starts exactly at `idx` or there is no match at all.
//!
//! Which leaf hook runs is decided here: a lexeme with a fraction or exponent
//! is a [`NumberLexeme::Float`], anything else a [`NumberLexeme::Integer`].

/// Lexical hint so the decoder can route ints and floats to different hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLexeme<'a> {
    /// No `.` and no exponent.
    Integer(&'a str),
    /// Has a `.` or an exponent.
    Float(&'a str),
}

impl<'a> NumberLexeme<'a> {
    /// The matched text.
    #[must_use]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Integer(t) | Self::Float(t) => t,
        }
    }
}

/// Matches a numeric literal starting exactly at `idx`.
///
/// Returns the lexeme and the offset just past it, or `None` if no number
/// starts there. A trailing `.` or `e` with no digits after it is not
/// consumed: `"1.x"` matches `1` and stops at the dot.
///
/// The special constants `NaN`, `Infinity` and `-Infinity` never match: a
/// lone `-` with no digit behind it is not a number, which is what lets
/// `-Infinity` fall through to the constant path while `-1` never does.
///
/// # Examples
///
/// ```
/// use jsonlax::{NumberLexeme, match_number};
///
/// assert_eq!(
///     match_number("-12.5e3,", 0),
///     Some((NumberLexeme::Float("-12.5e3"), 7))
/// );
/// assert_eq!(match_number("[-1]", 1), Some((NumberLexeme::Integer("-1"), 3)));
/// assert_eq!(match_number("-Infinity", 0), None);
/// ```
#[must_use]
pub fn match_number(text: &str, idx: usize) -> Option<(NumberLexeme<'_>, usize)> {
    let bytes = text.as_bytes();
    let mut pos = idx;

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    // Integer part: 0 | [1-9][0-9]*. Leading zeros do not chain.
    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            pos += 1;
            while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return None,
    }

    let mut float = false;

    // Fraction: a dot counts only when at least one digit follows.
    if bytes.get(pos) == Some(&b'.') && matches!(bytes.get(pos + 1), Some(b'0'..=b'9')) {
        float = true;
        pos += 2;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    // Exponent: e/E, optional sign, then at least one digit; otherwise the
    // marker is left unconsumed ("1e" matches just "1").
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut cursor = pos + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        if matches!(bytes.get(cursor), Some(b'0'..=b'9')) {
            float = true;
            pos = cursor + 1;
            while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
    }

    let lexeme = &text[idx..pos];
    let lexeme = if float {
        NumberLexeme::Float(lexeme)
    } else {
        NumberLexeme::Integer(lexeme)
    };
    Some((lexeme, pos))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{NumberLexeme, match_number};

    #[rstest]
    #[case("0", NumberLexeme::Integer("0"), 1)]
    #[case("-0", NumberLexeme::Integer("-0"), 2)]
    #[case("-1", NumberLexeme::Integer("-1"), 2)]
    #[case("42", NumberLexeme::Integer("42"), 2)]
    #[case("2.5", NumberLexeme::Float("2.5"), 3)]
    #[case("-12.5e3", NumberLexeme::Float("-12.5e3"), 7)]
    #[case("1E+10", NumberLexeme::Float("1E+10"), 5)]
    #[case("1e-2", NumberLexeme::Float("1e-2"), 4)]
    #[case("0.0001", NumberLexeme::Float("0.0001"), 6)]
    fn matches_full_lexeme(
        #[case] text: &str,
        #[case] expected: NumberLexeme<'static>,
        #[case] end: usize,
    ) {
        assert_eq!(match_number(text, 0), Some((expected, end)));
    }

    #[rstest]
    // Trailing markers without digits stay unconsumed.
    #[case("1.", NumberLexeme::Integer("1"), 1)]
    #[case("1e", NumberLexeme::Integer("1"), 1)]
    #[case("1e+", NumberLexeme::Integer("1"), 1)]
    #[case("0.5.6", NumberLexeme::Float("0.5"), 3)]
    // Leading zeros do not chain: "007" is the number 0 plus trailing text.
    #[case("007", NumberLexeme::Integer("0"), 1)]
    #[case("1,2", NumberLexeme::Integer("1"), 1)]
    fn stops_at_longest_valid_prefix(
        #[case] text: &str,
        #[case] expected: NumberLexeme<'static>,
        #[case] end: usize,
    ) {
        assert_eq!(match_number(text, 0), Some((expected, end)));
    }

    #[rstest]
    #[case("NaN")]
    #[case("Infinity")]
    #[case("-Infinity")]
    #[case("-")]
    #[case("-.")]
    #[case(".5")]
    #[case("+1")]
    #[case("")]
    fn rejects_non_numbers(#[case] text: &str) {
        assert_eq!(match_number(text, 0), None);
    }

    #[test]
    fn anchored_mid_document() {
        let text = "[1,22]";
        assert_eq!(match_number(text, 3), Some((NumberLexeme::Integer("22"), 5)));
        // Not a search: offset 0 sits on '[' and fails.
        assert_eq!(match_number(text, 0), None);
    }

    #[test]
    fn past_end_is_no_match() {
        assert_eq!(match_number("1", 1), None);
        assert_eq!(match_number("1", 5), None);
    }
}
