//! Lenient JSON decoding for servers that don't quite emit JSON.
//!
//! `jsonlax` is a single-pass recursive-descent decoder for a superset of
//! JSON extended with four non-standard literals (`undefined`, `NaN`,
//! `Infinity` and `-Infinity`) as emitted by servers whose output a strict
//! parser would reject. One fully-resident document goes in; one
//! dynamically-typed [`Value`] tree and the offset where scanning stopped
//! come out.
//!
//! The decoder is hook-driven: string, object, array, float, integer and
//! constant parsing are all collaborator functions bound into a [`Decoder`]
//! at construction, with portable defaults for each. The grammar engine
//! itself sits behind the [`Scanner`] trait so an accelerated implementation
//! can replace the portable one without touching the rest of the crate.
//!
//! # Examples
//!
//! ```rust
//! use jsonlax::{Decoder, DecoderOptions, Value};
//!
//! let mut decoder = Decoder::new(DecoderOptions::default());
//! let (value, _) = decoder
//!     .decode(r#"{"a": undefined, "b": [1, 2.5, NaN]}"#)
//!     .unwrap();
//!
//! let object = value.as_object().unwrap();
//! assert!(object.get("a").unwrap().is_undefined());
//! let b = object.get("b").unwrap().as_array().unwrap();
//! assert_eq!(b[0], Value::Integer(1));
//! assert_eq!(b[1], Value::Float(2.5));
//! assert!(b[2].as_float().unwrap().is_nan());
//! ```
//!
//! Not in scope: serialization, streaming input, schema validation, and
//! trailing-data rejection. `decode` returns the end offset and the caller
//! decides what the rest of the document means.
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod containers;
mod decoder;
mod error;
mod hooks;
mod memo;
mod number;
mod options;
mod scanner;
mod strings;
mod value;

#[cfg(test)]
mod tests;

pub use containers::{parse_array, parse_object};
pub use decoder::Decoder;
pub use error::DecodeError;
pub use hooks::{
    ConstantParser, ContainerParser, DecodeHooks, NumberParser, ObjectHook, PairsHook,
    StringParser,
};
pub use number::{NumberLexeme, match_number};
pub use options::DecoderOptions;
pub use scanner::{PortableScanner, ScanState, Scanner};
pub use strings::parse_string;
pub use value::{Array, Key, Map, MapIter, Value};
