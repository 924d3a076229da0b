//! Decode failures.
use alloc::string::String;

use thiserror::Error;

/// Everything that can stop a decode.
///
/// The first two variants are the scanner's own; the rest originate in the
/// portable hooks and carry the byte offset at which the hook gave up. A
/// failure anywhere aborts the entire decode call; there is no recovery and
/// no partial result; the only cleanup the core performs is clearing its key
/// memo on the way out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A value was requested at or past the end of the document.
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),

    /// The character at this offset does not begin any recognized production.
    #[error("no value starts at offset {0}")]
    InvalidToken(usize),

    /// A string literal's closing quote was never found. The offset is that
    /// of the opening quote.
    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    /// A backslash escape other than `\" \\ \/ \b \f \n \r \t \u`.
    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    /// A `\u` escape whose four following characters are not hex digits.
    #[error("invalid \\u escape at offset {0}")]
    InvalidUnicodeEscape(usize),

    /// A raw control character inside a string literal, rejected in strict
    /// mode.
    #[error("raw control character in string at offset {0}")]
    ControlCharacter(usize),

    /// An object member did not start with a quoted property name.
    #[error("expected a quoted property name at offset {0}")]
    ExpectedPropertyName(usize),

    /// The `:` separating a property name from its value is missing.
    #[error("expected ':' after property name at offset {0}")]
    ExpectedColon(usize),

    /// Neither a `,` nor the container's closing bracket followed a value.
    #[error("expected ',' delimiter at offset {0}")]
    ExpectedDelimiter(usize),

    /// A user-supplied hook failed. The message is the hook's own; the core
    /// propagates it verbatim and adds nothing.
    #[error("{0}")]
    Delegate(String),
}

impl DecodeError {
    /// Builds a [`DecodeError::Delegate`] from any message.
    ///
    /// Custom `parse_int`/`parse_float`/`parse_constant` hooks use this to
    /// abort a decode with their own diagnostic.
    pub fn delegate(message: impl Into<String>) -> Self {
        Self::Delegate(message.into())
    }

    /// The byte offset embedded in this error, if it carries one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEnd(at)
            | Self::InvalidToken(at)
            | Self::UnterminatedString(at)
            | Self::InvalidEscape(at)
            | Self::InvalidUnicodeEscape(at)
            | Self::ControlCharacter(at)
            | Self::ExpectedPropertyName(at)
            | Self::ExpectedColon(at)
            | Self::ExpectedDelimiter(at) => Some(*at),
            Self::Delegate(_) => None,
        }
    }
}
