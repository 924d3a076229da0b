//! The portable object- and array-parsing hooks.
//!
//! Both receive the offset just past the opening bracket and recurse through
//! [`ScanState::scan_value`] for every contained value, so nesting depth maps
//! one-to-one onto call-stack depth. Whitespace handling lives here; the
//! scanner itself never skips anything.
use alloc::vec::Vec;

use crate::{
    error::DecodeError,
    scanner::ScanState,
    value::{Array, Key, Value},
};

/// Advances past JSON whitespace: space, tab, line feed, carriage return.
pub(crate) fn skip_ws(text: &str, mut idx: usize) -> usize {
    let bytes = text.as_bytes();
    while matches!(bytes.get(idx), Some(b' ' | b'\t' | b'\n' | b'\r')) {
        idx += 1;
    }
    idx
}

/// Parses an object body; `idx` is just past the `{`.
///
/// Property names go through the string hook and the key memo; member values
/// recurse through the scanner; the finished entries pass through
/// `object_pairs_hook` / `object_hook` per [`ScanState::finish_object`].
///
/// # Errors
///
/// [`DecodeError::ExpectedPropertyName`] when a member does not open with a
/// quote, [`DecodeError::ExpectedColon`] / [`DecodeError::ExpectedDelimiter`]
/// for missing separators, [`DecodeError::UnexpectedEnd`] when the document
/// ends inside the object, and any nested failure verbatim.
pub fn parse_object(
    state: &mut ScanState<'_, '_>,
    idx: usize,
) -> Result<(Value, usize), DecodeError> {
    let text = state.text();
    let mut pairs: Vec<(Key, Value)> = Vec::new();

    let mut pos = skip_ws(text, idx);
    match text.as_bytes().get(pos) {
        Some(b'}') => return Ok((state.finish_object(pairs), pos + 1)),
        Some(b'"') => {}
        Some(_) => return Err(DecodeError::ExpectedPropertyName(pos)),
        None => return Err(DecodeError::UnexpectedEnd(pos)),
    }

    loop {
        // `pos` sits on the opening quote of a property name.
        let (name, after_name) = (state.string_hook())(text, pos + 1, state.strict())?;
        let key = state.intern_key(name);

        let mut cursor = skip_ws(text, after_name);
        if text.as_bytes().get(cursor) != Some(&b':') {
            return Err(DecodeError::ExpectedColon(cursor));
        }
        cursor = skip_ws(text, cursor + 1);

        let (value, after_value) = state.scan_value(cursor)?;
        pairs.push((key, value));

        cursor = skip_ws(text, after_value);
        match text.as_bytes().get(cursor) {
            Some(b'}') => return Ok((state.finish_object(pairs), cursor + 1)),
            Some(b',') => {
                pos = skip_ws(text, cursor + 1);
                if text.as_bytes().get(pos) != Some(&b'"') {
                    return Err(DecodeError::ExpectedPropertyName(pos));
                }
            }
            Some(_) => return Err(DecodeError::ExpectedDelimiter(cursor)),
            None => return Err(DecodeError::UnexpectedEnd(cursor)),
        }
    }
}

/// Parses an array body; `idx` is just past the `[`.
///
/// # Errors
///
/// [`DecodeError::ExpectedDelimiter`] when a value is followed by neither `,`
/// nor `]`, [`DecodeError::UnexpectedEnd`] when the document ends inside the
/// array, and any nested failure verbatim.
pub fn parse_array(
    state: &mut ScanState<'_, '_>,
    idx: usize,
) -> Result<(Value, usize), DecodeError> {
    let text = state.text();
    let mut items = Array::new();

    let mut pos = skip_ws(text, idx);
    if text.as_bytes().get(pos) == Some(&b']') {
        return Ok((Value::Array(items), pos + 1));
    }

    loop {
        let (value, after_value) = state.scan_value(pos)?;
        items.push(value);

        pos = skip_ws(text, after_value);
        match text.as_bytes().get(pos) {
            Some(b']') => return Ok((Value::Array(items), pos + 1)),
            Some(b',') => pos = skip_ws(text, pos + 1),
            Some(_) => return Err(DecodeError::ExpectedDelimiter(pos)),
            None => return Err(DecodeError::UnexpectedEnd(pos)),
        }
    }
}
