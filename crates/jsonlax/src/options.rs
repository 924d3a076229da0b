/// Configuration options for a [`Decoder`].
///
/// Options are captured at construction and immutable for the life of that
/// decoder.
///
/// [`Decoder`]: crate::Decoder
///
/// # Examples
///
/// ```rust
/// use jsonlax::{Decoder, DecoderOptions};
///
/// let mut decoder = Decoder::new(DecoderOptions {
///     strict: false,
///     ..Default::default()
/// });
/// // Raw control characters inside strings are now accepted.
/// let (value, _) = decoder.decode("\"a\tb\"").unwrap();
/// assert_eq!(value.as_string(), Some("a\tb"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions {
    /// Whether raw control characters (below U+0020) inside string literals
    /// are rejected.
    ///
    /// The flag is handed to the string-parsing hook; the scanner itself
    /// never interprets it.
    ///
    /// # Default
    ///
    /// `true`
    pub strict: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}
