//! The portable string-parsing hook.
//!
//! Owns everything between the quotes: escape sequences, `\uXXXX` decoding,
//! UTF-16 surrogate-pair combination, and the strict-mode policy on raw
//! control characters. The scanner never re-validates string contents; it
//! hands the position just past the opening quote to this hook and trusts the
//! offset it gets back.
use alloc::string::String;

use crate::error::DecodeError;

/// Parses a string literal's body.
///
/// `start` is the offset just past the opening quote. Returns the decoded
/// string and the offset just past the closing quote.
///
/// `strict` rejects raw control characters (below U+0020) inside the
/// literal; when `false` they are taken as-is. Escaped control characters
/// (`\n`, `\t`, ...) are always accepted.
///
/// # Errors
///
/// [`DecodeError::UnterminatedString`] when the closing quote is missing,
/// [`DecodeError::InvalidEscape`] / [`DecodeError::InvalidUnicodeEscape`] for
/// malformed escapes, [`DecodeError::ControlCharacter`] in strict mode, and
/// [`DecodeError::UnexpectedEnd`] when an escape sequence runs off the end of
/// the document.
///
/// # Panics
///
/// `start` must lie on a character boundary of `text`, which is always the
/// case when it points just past a `"`.
pub fn parse_string(text: &str, start: usize, strict: bool) -> Result<(String, usize), DecodeError> {
    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut pos = start;
    // Start of the pending run of characters that need no transformation;
    // pushed as one slice whenever an escape or the closing quote is hit.
    let mut run = start;

    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(DecodeError::UnterminatedString(start.saturating_sub(1)));
        };
        match byte {
            b'"' => {
                out.push_str(&text[run..pos]);
                return Ok((out, pos + 1));
            }
            b'\\' => {
                out.push_str(&text[run..pos]);
                pos = decode_escape(text, pos, &mut out)?;
                run = pos;
            }
            byte if byte < 0x20 => {
                if strict {
                    return Err(DecodeError::ControlCharacter(pos));
                }
                pos += 1;
            }
            _ => {
                // Step one scalar; the input is a &str, so this always
                // decodes.
                let (_, len) = bstr::decode_utf8(&bytes[pos..]);
                pos += len;
            }
        }
    }
}

/// Decodes one escape sequence; `pos` sits on the backslash. Returns the
/// offset just past the sequence.
fn decode_escape(text: &str, pos: usize, out: &mut String) -> Result<usize, DecodeError> {
    let Some(&escape) = text.as_bytes().get(pos + 1) else {
        return Err(DecodeError::UnexpectedEnd(text.len()));
    };
    let decoded = match escape {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\u{0008}',
        b'f' => '\u{000C}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return decode_unicode_escape(text, pos, out),
        _ => return Err(DecodeError::InvalidEscape(pos)),
    };
    out.push(decoded);
    Ok(pos + 2)
}

/// Decodes `\uXXXX`, combining a high surrogate with an immediately
/// following `\uXXXX` low half. `pos` sits on the backslash.
///
/// An unpairable half becomes U+FFFD: the source language of the original
/// decoder tolerates lone surrogates in its strings, which a Rust `String`
/// cannot represent.
fn decode_unicode_escape(text: &str, pos: usize, out: &mut String) -> Result<usize, DecodeError> {
    const REPLACEMENT: char = '\u{FFFD}';

    let unit = hex4(text, pos + 2)?;
    let mut end = pos + 6;

    let decoded = match unit {
        0xD800..=0xDBFF => {
            // High half: combine only when a low half follows directly.
            let bytes = text.as_bytes();
            if bytes.get(end) == Some(&b'\\') && bytes.get(end + 1) == Some(&b'u') {
                let low = hex4(text, end + 2)?;
                if (0xDC00..=0xDFFF).contains(&low) {
                    end += 6;
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(combined).unwrap_or(REPLACEMENT)
                } else {
                    // Not a low half; it decodes on its own next iteration.
                    REPLACEMENT
                }
            } else {
                REPLACEMENT
            }
        }
        0xDC00..=0xDFFF => REPLACEMENT,
        _ => char::from_u32(unit).unwrap_or(REPLACEMENT),
    };
    out.push(decoded);
    Ok(end)
}

/// Reads four hex digits at `at`.
fn hex4(text: &str, at: usize) -> Result<u32, DecodeError> {
    let Some(digits) = text.as_bytes().get(at..at + 4) else {
        return Err(DecodeError::UnexpectedEnd(text.len()));
    };
    let mut code = 0u32;
    for &digit in digits {
        let Some(nibble) = (digit as char).to_digit(16) else {
            return Err(DecodeError::InvalidUnicodeEscape(at));
        };
        code = code * 16 + nibble;
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::parse_string;
    use crate::error::DecodeError;

    fn parse(body_and_rest: &str, strict: bool) -> Result<(String, usize), DecodeError> {
        // Callers hand the hook the offset just past the opening quote.
        parse_string(body_and_rest, 1, strict)
    }

    #[test]
    fn plain_body() {
        assert_eq!(parse("\"hello\"", true).unwrap(), ("hello".into(), 7));
    }

    #[test]
    fn empty_body() {
        assert_eq!(parse("\"\"", true).unwrap(), (String::new(), 2));
    }

    #[test]
    fn stops_at_closing_quote() {
        assert_eq!(parse("\"ab\", 1]", true).unwrap(), ("ab".into(), 4));
    }

    #[test]
    fn simple_escapes() {
        let (s, end) = parse(r#""a\"b\\c\/d\b\f\n\r\t""#, true).unwrap();
        assert_eq!(s, "a\"b\\c/d\u{0008}\u{000C}\n\r\t");
        assert_eq!(end, 22);
    }

    #[test]
    fn unicode_escape_bmp() {
        let (s, _) = parse(r#""\u2603""#, true).unwrap();
        assert_eq!(s, "\u{2603}");
    }

    #[test]
    fn surrogate_pair_combines() {
        // U+1D11E (musical G clef) as a UTF-16 pair.
        let (s, end) = parse(r#""\uD834\uDD1E""#, true).unwrap();
        assert_eq!(s, "\u{1D11E}");
        assert_eq!(end, 14);
    }

    #[test]
    fn lone_high_surrogate_replaced() {
        let (s, _) = parse(r#""\uD834x""#, true).unwrap();
        assert_eq!(s, "\u{FFFD}x");
    }

    #[test]
    fn high_surrogate_followed_by_non_low_escape() {
        // The second escape is not a low half, so it decodes on its own.
        let (s, _) = parse(r#""\uD834A""#, true).unwrap();
        assert_eq!(s, "\u{FFFD}A");
    }

    #[test]
    fn lone_low_surrogate_replaced() {
        let (s, _) = parse(r#""\uDD1E""#, true).unwrap();
        assert_eq!(s, "\u{FFFD}");
    }

    #[test]
    fn multibyte_passthrough() {
        let (s, end) = parse("\"caf\u{E9} \u{1F600}\"", true).unwrap();
        assert_eq!(s, "caf\u{E9} \u{1F600}");
        assert_eq!(end, 12);
    }

    #[test]
    fn unterminated_reports_opening_quote() {
        assert_eq!(
            parse("\"abc", true).unwrap_err(),
            DecodeError::UnterminatedString(0)
        );
    }

    #[test]
    fn invalid_escape_offsets_backslash() {
        assert_eq!(
            parse(r#""a\x""#, true).unwrap_err(),
            DecodeError::InvalidEscape(2)
        );
    }

    #[test]
    fn invalid_unicode_escape() {
        assert_eq!(
            parse(r#""\u12G4""#, true).unwrap_err(),
            DecodeError::InvalidUnicodeEscape(3)
        );
    }

    #[test]
    fn truncated_unicode_escape() {
        assert_eq!(
            parse(r#""\u12"#, true).unwrap_err(),
            DecodeError::UnexpectedEnd(5)
        );
    }

    #[test]
    fn control_character_policy() {
        assert_eq!(
            parse("\"a\tb\"", true).unwrap_err(),
            DecodeError::ControlCharacter(2)
        );
        assert_eq!(parse("\"a\tb\"", false).unwrap(), ("a\tb".into(), 5));
    }
}
