//! The decoder context.
use alloc::boxed::Box;

use crate::{
    containers::skip_ws,
    error::DecodeError,
    hooks::DecodeHooks,
    memo::KeyMemo,
    options::DecoderOptions,
    scanner::{self, ScanState, Scanner},
    value::Value,
};

/// Binds options, hooks, the key memo and a scanner into one decode context.
///
/// Construction picks the scanner once (accelerated if available, portable
/// otherwise) and captures the hook table; neither changes for the life of
/// the instance. Decoding takes `&mut self` because the key memo is mutable
/// per-instance state; concurrent callers each construct their own decoder,
/// which costs nothing beyond the hook table itself.
///
/// # Examples
///
/// ```
/// use jsonlax::{Decoder, DecoderOptions, Value};
///
/// let mut decoder = Decoder::new(DecoderOptions::default());
/// let (value, end) = decoder.decode(r#"{"ok": true}"#).unwrap();
/// assert_eq!(end, 12);
/// assert_eq!(value.as_object().unwrap().get("ok"), Some(&Value::Boolean(true)));
/// ```
pub struct Decoder {
    options: DecoderOptions,
    hooks: DecodeHooks,
    scanner: Box<dyn Scanner>,
    memo: KeyMemo,
}

impl core::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Decoder")
            .field("options", &self.options)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl Decoder {
    /// Creates a decoder with the default (portable) hook table.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self::with_hooks(options, DecodeHooks::default())
    }

    /// Creates a decoder with a custom hook table.
    #[must_use]
    pub fn with_hooks(options: DecoderOptions, hooks: DecodeHooks) -> Self {
        Self::with_scanner(options, hooks, scanner::select())
    }

    /// Creates a decoder around a specific [`Scanner`] implementation,
    /// bypassing selection. This is the seam an accelerated scanner (or an
    /// instrumented one, in tests) plugs into.
    #[must_use]
    pub fn with_scanner(
        options: DecoderOptions,
        hooks: DecodeHooks,
        scanner: Box<dyn Scanner>,
    ) -> Self {
        Self {
            options,
            hooks,
            scanner,
            memo: KeyMemo::default(),
        }
    }

    /// Decodes the first value in `text`, skipping leading whitespace.
    ///
    /// Returns the value and the offset at which scanning stopped. Anything
    /// after that offset (trailing whitespace, a second value, garbage) is
    /// the caller's to inspect or reject; this core never reads it.
    ///
    /// # Errors
    ///
    /// See [`DecodeError`]. Failures abort the whole call; there is no
    /// partial result.
    pub fn decode(&mut self, text: &str) -> Result<(Value, usize), DecodeError> {
        let start = skip_ws(text, 0);
        self.decode_at(text, start)
    }

    /// Decodes one value starting exactly at `idx`, with no whitespace
    /// skipped.
    ///
    /// The key memo is cleared on every exit path, success or failure, so no
    /// memo state ever survives into the next call.
    ///
    /// # Errors
    ///
    /// See [`DecodeError`].
    pub fn decode_at(&mut self, text: &str, idx: usize) -> Result<(Value, usize), DecodeError> {
        let memo = MemoGuard(&mut self.memo);
        let mut state = ScanState {
            text,
            strict: self.options.strict,
            hooks: &self.hooks,
            memo: &mut *memo.0,
            scanner: self.scanner.as_ref(),
        };
        state.scan_value(idx)
    }

    #[cfg(test)]
    pub(crate) fn memo_is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

/// Clears the memo when dropped, which covers returns, `?` propagation and
/// unwinding alike.
struct MemoGuard<'a>(&'a mut KeyMemo);

impl Drop for MemoGuard<'_> {
    fn drop(&mut self) {
        self.0.clear();
    }
}
