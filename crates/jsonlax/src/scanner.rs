//! The grammar engine.
//!
//! A [`Scanner`] maps a position in the document to exactly one decoded value
//! and the offset immediately after it. Two implementations can satisfy the
//! contract: an accelerated one (SIMD or foreign-function; none ships in this
//! repo) and the always-present [`PortableScanner`]. [`select`] picks one per
//! decoder, at construction time, and the choice is never revisited
//! mid-decode.
//!
//! Recursion between the scanner and the container hooks is explicit: the
//! hooks get the live [`ScanState`], whose [`scan_value`] re-enters whichever
//! scanner was selected. No ambient or global lookup is involved, which keeps
//! both sides testable in isolation.
//!
//! [`scan_value`]: ScanState::scan_value
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::{
    error::DecodeError,
    hooks::DecodeHooks,
    memo::KeyMemo,
    number::{NumberLexeme, match_number},
    value::{Key, Map, Value},
};

/// One implementation of the scan contract.
///
/// Implementations must be pure dispatch: read the document through `state`,
/// recurse through [`ScanState::scan_value`], and never retain state of their
/// own between calls: the same instance serves every value of a decode.
pub trait Scanner {
    /// Decodes exactly one value starting at `idx`.
    ///
    /// Returns the value and the offset immediately following it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnexpectedEnd`] when `idx` is at or past the end of the
    /// document, [`DecodeError::InvalidToken`] when no production starts at
    /// `idx`, and any hook failure verbatim.
    fn scan_value(
        &self,
        state: &mut ScanState<'_, '_>,
        idx: usize,
    ) -> Result<(Value, usize), DecodeError>;
}

/// Everything one decode pass carries: the document, the configuration, the
/// key memo, and the selected scanner for recursion.
///
/// Structural hooks receive this by `&mut` and use it to read the text,
/// recurse into contained values, canonicalize keys, and finish objects
/// through the configured object hooks.
pub struct ScanState<'doc, 'cx> {
    pub(crate) text: &'doc str,
    pub(crate) strict: bool,
    pub(crate) hooks: &'cx DecodeHooks,
    pub(crate) memo: &'cx mut KeyMemo,
    pub(crate) scanner: &'cx dyn Scanner,
}

impl<'doc> ScanState<'doc, '_> {
    /// The document being decoded.
    #[must_use]
    pub fn text(&self) -> &'doc str {
        self.text
    }

    /// Whether raw control characters in strings are rejected.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// The configured string hook, for parsing object property names.
    #[must_use]
    pub fn string_hook(&self) -> crate::hooks::StringParser {
        self.hooks.parse_string
    }

    /// Decodes one value at `idx` with the decoder's selected scanner.
    ///
    /// This is the recursion point container hooks call for every element or
    /// member value they contain.
    ///
    /// # Errors
    ///
    /// Whatever the selected scanner returns; see [`Scanner::scan_value`].
    pub fn scan_value(&mut self, idx: usize) -> Result<(Value, usize), DecodeError> {
        let scanner = self.scanner;
        scanner.scan_value(self, idx)
    }

    /// Canonicalizes an object key through the per-decode memo.
    pub fn intern_key(&mut self, key: String) -> Key {
        self.memo.intern(key)
    }

    /// Applies the configured object hooks to a finished set of entries.
    ///
    /// `object_pairs_hook` wins when both hooks are set; with neither, the
    /// entries become a plain [`Map`] in encounter order.
    #[must_use]
    pub fn finish_object(&self, pairs: Vec<(Key, Value)>) -> Value {
        if let Some(hook) = &self.hooks.object_pairs_hook {
            return hook(pairs);
        }
        let map: Map = pairs.into_iter().collect();
        if let Some(hook) = &self.hooks.object_hook {
            hook(map)
        } else {
            Value::Object(map)
        }
    }
}

impl fmt::Debug for ScanState<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanState")
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

/// The portable fallback scanner: the full extended-JSON grammar in plain
/// Rust.
///
/// Dispatch is by leading byte, in an order that matters: the four keyword
/// literals first, then the number grammar, and only then the non-numeric
/// constants. `NaN`, `Infinity` and `-Infinity` are reachable precisely
/// because the number grammar rejects them, while `-1` is consumed as a
/// number before `-Infinity` is ever considered.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortableScanner;

impl Scanner for PortableScanner {
    fn scan_value(
        &self,
        state: &mut ScanState<'_, '_>,
        idx: usize,
    ) -> Result<(Value, usize), DecodeError> {
        let text = state.text();
        let bytes = text.as_bytes();
        let Some(&lead) = bytes.get(idx) else {
            return Err(DecodeError::UnexpectedEnd(idx));
        };

        match lead {
            b'"' => {
                let parse_string = state.hooks.parse_string;
                let (string, end) = parse_string(text, idx + 1, state.strict)?;
                Ok((Value::String(string), end))
            }
            b'{' => {
                let parse_object = state.hooks.parse_object;
                parse_object(state, idx + 1)
            }
            b'[' => {
                let parse_array = state.hooks.parse_array;
                parse_array(state, idx + 1)
            }
            b'u' if bytes[idx..].starts_with(b"undefined") => Ok((Value::Undefined, idx + 9)),
            b'n' if bytes[idx..].starts_with(b"null") => Ok((Value::Null, idx + 4)),
            b't' if bytes[idx..].starts_with(b"true") => Ok((Value::Boolean(true), idx + 4)),
            b'f' if bytes[idx..].starts_with(b"false") => Ok((Value::Boolean(false), idx + 5)),
            _ => {
                if let Some((lexeme, end)) = match_number(text, idx) {
                    let value = match lexeme {
                        NumberLexeme::Integer(t) => (state.hooks.parse_int)(t)?,
                        NumberLexeme::Float(t) => (state.hooks.parse_float)(t)?,
                    };
                    return Ok((value, end));
                }
                let rest = &bytes[idx..];
                if rest.starts_with(b"NaN") {
                    return (state.hooks.parse_constant)("NaN").map(|v| (v, idx + 3));
                }
                if rest.starts_with(b"Infinity") {
                    return (state.hooks.parse_constant)("Infinity").map(|v| (v, idx + 8));
                }
                if rest.starts_with(b"-Infinity") {
                    return (state.hooks.parse_constant)("-Infinity").map(|v| (v, idx + 9));
                }
                Err(DecodeError::InvalidToken(idx))
            }
        }
    }
}

/// Picks the scanner a new decoder will use: the accelerated implementation
/// when one is available, the portable one otherwise. One-time decision per
/// decoder instance.
pub(crate) fn select() -> Box<dyn Scanner> {
    accelerated().unwrap_or_else(|| Box::new(PortableScanner))
}

/// The accelerated-scanner slot. None ships in this repo; a lower-level
/// implementation satisfying [`Scanner`] can be returned here without
/// touching anything else.
fn accelerated() -> Option<Box<dyn Scanner>> {
    None
}
