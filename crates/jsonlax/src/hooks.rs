//! The hook table a [`Decoder`] is configured with.
//!
//! Every production the scanner recognizes is parsed or post-processed by a
//! hook from this table: the structural hooks own strings, objects and
//! arrays; the leaf hooks own numeric and constant conversion; the two
//! optional object hooks post-process finished objects. The table is captured
//! once at decoder construction and never changes afterwards: pure
//! composition, no trait objects beyond the closures themselves.
//!
//! [`Decoder`]: crate::Decoder
use alloc::{boxed::Box, format, string::String, vec::Vec};
use core::fmt;

use crate::{
    containers,
    error::DecodeError,
    scanner::ScanState,
    strings,
    value::{Key, Map, Value},
};

/// Structural hook parsing a string literal's body.
///
/// Called with the document, the offset just past the opening quote, and the
/// strict flag; returns the decoded string and the offset just past the
/// closing quote.
pub type StringParser = fn(&str, usize, bool) -> Result<(String, usize), DecodeError>;

/// Structural hook parsing an object or array body.
///
/// Called with the live [`ScanState`] and the offset just past the opening
/// bracket; recurses through [`ScanState::scan_value`] for each contained
/// value and returns the finished container plus the offset just past its
/// closing bracket.
pub type ContainerParser = fn(&mut ScanState<'_, '_>, usize) -> Result<(Value, usize), DecodeError>;

/// Leaf hook converting a matched numeric lexeme into a [`Value`].
pub type NumberParser = Box<dyn Fn(&str) -> Result<Value, DecodeError>>;

/// Leaf hook converting one of the literals `NaN`, `Infinity` or `-Infinity`.
pub type ConstantParser = Box<dyn Fn(&str) -> Result<Value, DecodeError>>;

/// Post-processes a finished object.
pub type ObjectHook = Box<dyn Fn(Map) -> Value>;

/// Post-processes a finished object's entries in encounter order.
///
/// Takes precedence over [`ObjectHook`] when both are set.
pub type PairsHook = Box<dyn Fn(Vec<(Key, Value)>) -> Value>;

/// The full hook table.
///
/// `Default` wires the portable implementations; replace individual fields to
/// customize.
///
/// # Examples
///
/// Parsing every number through the float hook, the way a caller wanting
/// uniform `f64` semantics would:
///
/// ```
/// use jsonlax::{DecodeHooks, Decoder, DecoderOptions, Value};
///
/// let hooks = DecodeHooks {
///     parse_int: Box::new(|lexeme| {
///         lexeme
///             .parse::<f64>()
///             .map(Value::Float)
///             .map_err(|e| jsonlax::DecodeError::delegate(e.to_string()))
///     }),
///     ..Default::default()
/// };
/// let mut decoder = Decoder::with_hooks(DecoderOptions::default(), hooks);
/// let (value, _) = decoder.decode("7").unwrap();
/// assert_eq!(value, Value::Float(7.0));
/// ```
pub struct DecodeHooks {
    /// Parses string literal bodies. Also used for object property names.
    pub parse_string: StringParser,
    /// Parses object bodies.
    pub parse_object: ContainerParser,
    /// Parses array bodies.
    pub parse_array: ContainerParser,
    /// Converts lexemes carrying a fraction or exponent.
    pub parse_float: NumberParser,
    /// Converts plain integer lexemes.
    pub parse_int: NumberParser,
    /// Converts `NaN`, `Infinity` and `-Infinity`.
    pub parse_constant: ConstantParser,
    /// Optional object post-processor.
    pub object_hook: Option<ObjectHook>,
    /// Optional ordered-pairs post-processor; wins over `object_hook`.
    pub object_pairs_hook: Option<PairsHook>,
}

impl Default for DecodeHooks {
    fn default() -> Self {
        Self {
            parse_string: strings::parse_string,
            parse_object: containers::parse_object,
            parse_array: containers::parse_array,
            parse_float: Box::new(default_parse_float),
            parse_int: Box::new(default_parse_int),
            parse_constant: Box::new(default_parse_constant),
            object_hook: None,
            object_pairs_hook: None,
        }
    }
}

impl fmt::Debug for DecodeHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeHooks")
            .field("object_hook", &self.object_hook.is_some())
            .field("object_pairs_hook", &self.object_pairs_hook.is_some())
            .finish_non_exhaustive()
    }
}

fn default_parse_float(lexeme: &str) -> Result<Value, DecodeError> {
    lexeme
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| DecodeError::delegate(format!("not a float literal: {lexeme:?}")))
}

/// Integers that overflow `i64` degrade to `f64` rather than failing; a
/// caller needing exact arbitrary-precision integers installs its own hook.
fn default_parse_int(lexeme: &str) -> Result<Value, DecodeError> {
    if let Ok(n) = lexeme.parse::<i64>() {
        return Ok(Value::Integer(n));
    }
    lexeme
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| DecodeError::delegate(format!("not an integer literal: {lexeme:?}")))
}

fn default_parse_constant(literal: &str) -> Result<Value, DecodeError> {
    match literal {
        "NaN" => Ok(Value::Float(f64::NAN)),
        "Infinity" => Ok(Value::Float(f64::INFINITY)),
        "-Infinity" => Ok(Value::Float(f64::NEG_INFINITY)),
        other => Err(DecodeError::delegate(format!("unknown constant: {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::{default_parse_constant, default_parse_float, default_parse_int};
    use crate::value::Value;

    #[test]
    fn int_lexemes_stay_integral() {
        assert_eq!(default_parse_int("42").unwrap(), Value::Integer(42));
        assert_eq!(default_parse_int("-1").unwrap(), Value::Integer(-1));
        assert_eq!(default_parse_int("0").unwrap(), Value::Integer(0));
    }

    #[test]
    fn int_overflow_degrades_to_float() {
        let wide = "123456789012345678901234567890";
        match default_parse_int(wide).unwrap() {
            Value::Float(f) => assert!(f > 1.2e29 && f < 1.3e29),
            other => panic!("expected Float, got {other:?}"),
        }
    }

    #[test]
    fn float_lexemes() {
        assert_eq!(default_parse_float("2.5").unwrap(), Value::Float(2.5));
        assert_eq!(default_parse_float("1e3").unwrap(), Value::Float(1000.0));
    }

    #[test]
    fn constants_map_to_non_finite_floats() {
        assert!(matches!(
            default_parse_constant("NaN").unwrap(),
            Value::Float(f) if f.is_nan()
        ));
        assert_eq!(
            default_parse_constant("Infinity").unwrap(),
            Value::Float(f64::INFINITY)
        );
        assert_eq!(
            default_parse_constant("-Infinity").unwrap(),
            Value::Float(f64::NEG_INFINITY)
        );
        assert!(default_parse_constant("nan").is_err());
    }
}
