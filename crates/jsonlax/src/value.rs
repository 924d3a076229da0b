//! Decoded value types.
//!
//! This module defines the [`Value`] enum, the dynamically-typed tree a
//! decode produces, together with the order-preserving [`Map`] used for
//! objects. The grammar this crate accepts is a superset of JSON, so `Value`
//! carries two members plain JSON does not need: [`Value::Undefined`] for the
//! `undefined` literal, and non-finite [`Value::Float`]s for `NaN`,
//! `Infinity` and `-Infinity`.
use alloc::{string::String, sync::Arc, vec::Vec};

/// Canonical object-key string.
///
/// Keys are reference-counted so that the per-decode key memo can hand the
/// same allocation to every object repeating a key; `Arc::ptr_eq` on two keys
/// from one decode tells you whether the memo deduplicated them.
pub type Key = Arc<str>;

/// A decoded array.
pub type Array = Vec<Value>;

/// A decoded value.
///
/// # Examples
///
/// ```
/// use jsonlax::{Decoder, DecoderOptions, Value};
///
/// let mut decoder = Decoder::new(DecoderOptions::default());
/// let (value, end) = decoder.decode("[1, 2.5, undefined]").unwrap();
/// assert_eq!(end, 19);
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0], Value::Integer(1));
/// assert_eq!(items[1], Value::Float(2.5));
/// assert!(items[2].is_undefined());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// The non-standard `undefined` literal. Distinct from [`Value::Null`].
    Undefined,
    /// A boolean, represented by a [`bool`].
    Boolean(bool),
    /// A number written without a fraction or exponent, via the integer hook.
    Integer(i64),
    /// A number written with a fraction or exponent, or one of the
    /// non-standard constants (`NaN`, `Infinity`, `-Infinity`), via the float
    /// or constant hook.
    Float(f64),
    /// A string, represented by a [`String`].
    String(String),
    /// An array, represented by a [`Vec`] of values.
    Array(Array),
    /// An object, represented by an insertion-ordered [`Map`].
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Undefined`].
    ///
    /// `undefined` is a sentinel of its own; it is never equal to `null`.
    ///
    /// ```
    /// use jsonlax::Value;
    ///
    /// assert!(Value::Undefined.is_undefined());
    /// assert_ne!(Value::Undefined, Value::Null);
    /// ```
    ///
    /// [`Undefined`]: Value::Undefined
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Float`].
    ///
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` if the value is [`Integer`] or [`Float`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Borrows the inner value if this is a [`Value::Boolean`] or `None`
    /// otherwise.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(v) = self { Some(*v) } else { None }
    }

    /// Borrows the inner value if this is a [`Value::Integer`] or `None`
    /// otherwise.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        if let Self::Integer(v) = self { Some(*v) } else { None }
    }

    /// Borrows the inner value if this is a [`Value::Float`] or `None`
    /// otherwise.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let Self::Float(v) = self { Some(*v) } else { None }
    }

    /// Borrows the inner value if this is a [`Value::String`] or `None`
    /// otherwise.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        if let Self::String(v) = self { Some(v) } else { None }
    }

    /// Borrows the inner value if this is a [`Value::Array`] or `None`
    /// otherwise.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(v) = self { Some(v) } else { None }
    }

    /// Borrows the inner value if this is a [`Value::Object`] or `None`
    /// otherwise.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(v) = self { Some(v) } else { None }
    }
}

/// An object as a sequence of key/value entries in encounter order.
///
/// The decoder's contract makes key order observable, so objects cannot be a
/// sorted or hashed map: iteration yields entries exactly as they appeared in
/// the document. Inserting an existing key replaces its value in place and
/// keeps the original position. Lookup is a linear scan; decoded objects are
/// small and the decoder itself only ever appends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map {
    entries: Vec<(Key, Value)>,
}

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `Map` with space for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present. A replaced key keeps its original position.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Iterates entries in encounter order.
    pub fn iter(&self) -> MapIter<'_> {
        MapIter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates keys in encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates values in encounter order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(Key, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = alloc::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = MapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Map`]'s entries in encounter order.
#[derive(Clone, Debug)]
pub struct MapIter<'a> {
    inner: core::slice::Iter<'a, (Key, Value)>,
}

impl<'a> Iterator for MapIter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MapIter<'_> {}

/// Escapes a string for inclusion in a rendered string literal.
///
/// Replaces quotes, backslashes and control characters with their JSON escape
/// sequences. Used by the [`Display`] impl below; rendering is a diagnostic
/// aid, not a serialization surface.
///
/// [`Display`]: core::fmt::Display
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_ascii_control() => {
                match c {
                    '\u{0008}' => f.write_str("\\b")?,
                    '\u{000C}' => f.write_str("\\f")?,
                    '\n' => f.write_str("\\n")?,
                    '\r' => f.write_str("\\r")?,
                    '\t' => f.write_str("\\t")?,
                    _ => write!(f, "\\u{:04X}", c as u32)?,
                }
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => {
                // Non-finite floats render as the extended literals they were
                // decoded from, so rendering stays within this crate's
                // grammar.
                if n.is_nan() {
                    f.write_str("NaN")
                } else if *n == f64::INFINITY {
                    f.write_str("Infinity")
                } else if *n == f64::NEG_INFINITY {
                    f.write_str("-Infinity")
                } else if *n % 1.0 == 0.0 {
                    // Keep a fraction marker so the text reads back as Float.
                    write!(f, "{n:.1}")
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    f.write_str("\":")?;
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Key, Map, Value};

    #[test]
    fn undefined_is_not_null_or_boolean() {
        assert_ne!(Value::Undefined, Value::Null);
        assert_ne!(Value::Undefined, Value::Boolean(false));
        assert_ne!(Value::Undefined, Value::Boolean(true));
        assert!(Value::Undefined.is_undefined());
        assert!(!Value::Null.is_undefined());
    }

    #[test]
    fn map_preserves_encounter_order() {
        let mut map = Map::new();
        map.insert(Key::from("zebra"), Value::Integer(1));
        map.insert(Key::from("apple"), Value::Integer(2));
        map.insert(Key::from("mango"), Value::Integer(3));
        let keys: alloc::vec::Vec<_> = map.keys().map(|k| &**k).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn map_insert_replaces_in_place() {
        let mut map = Map::new();
        map.insert(Key::from("a"), Value::Integer(1));
        map.insert(Key::from("b"), Value::Integer(2));
        let old = map.insert(Key::from("a"), Value::Integer(9));
        assert_eq!(old, Some(Value::Integer(1)));
        let keys: alloc::vec::Vec<_> = map.keys().map(|k| &**k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Integer(9)));
    }

    #[test]
    fn display_renders_extended_literals() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Integer(-1).to_string(), "-1");
    }

    #[test]
    fn display_escapes_strings() {
        let v = Value::String("a\"b\\c\n\u{0001}".into());
        assert_eq!(v.to_string(), "\"a\\\"b\\\\c\\n\\u0001\"");
    }
}
