//! Recursive-descent decoding.
//!
//! One `Cursor` is created per top-level call and threaded by `&mut`
//! through every nested decoder. Errors are forwarded with `?` exactly as the
//! innermost decoder produced them.

mod containers;
mod cursor;
mod literals;


use alloc::vec::Vec;

use self::{
    containers::{decode_array, decode_object},
    cursor::Cursor,
    literals::{decode_boolean, decode_integer, decode_null, decode_string},
};
use crate::{
    error::{DecodeError, ErrorKind},
    options::DecoderOptions,
    value::Value,
};

/// Decodes one value from `input` with the default [`DecoderOptions`].
///
/// Leading whitespace is not skipped and anything after the value is ignored.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered; there is no recovery.
///
/// # Examples
///
/// ```rust
/// use jsondescent::{ErrorKind, Value, decode};
///
/// let input: Vec<char> = "[1, 2] trailing".chars().collect();
/// assert_eq!(
///     decode(&input).unwrap(),
///     Value::Array(vec![Value::Integer(1), Value::Integer(2)])
/// );
///
/// let err = decode(&[]).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::EmptyInput);
/// ```
pub fn decode(input: &[char]) -> Result<Value, DecodeError> {
    Decoder::default().decode(input)
}

/// Collects `input` into code points and decodes it like [`decode`].
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered. Positions count code points,
/// not bytes.
pub fn decode_str(input: &str) -> Result<Value, DecodeError> {
    Decoder::default().decode_str(input)
}

/// A configured decoder.
///
/// The decoder holds no state between calls; each call builds a fresh cursor
/// over its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    /// Creates a decoder with the given options.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes one value from `input`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] encountered.
    pub fn decode(&self, input: &[char]) -> Result<Value, DecodeError> {
        let mut cursor = Cursor::new(input);
        let result = self.decode_document(&mut cursor);
        if let Err(err) = &result {
            tracing::debug!(
                position = err.position(),
                kind = ?err.kind(),
                "decode failed"
            );
        }
        result
    }

    /// Collects `input` into code points and decodes it.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] encountered.
    pub fn decode_str(&self, input: &str) -> Result<Value, DecodeError> {
        let chars: Vec<char> = input.chars().collect();
        self.decode(&chars)
    }

    fn decode_document(&self, cursor: &mut Cursor<'_>) -> Result<Value, DecodeError> {
        if self.options.skip_leading_whitespace {
            cursor.skip_whitespace();
        }

        let value = decode_value(cursor)?;

        if self.options.reject_trailing_content {
            cursor.skip_whitespace();
            if cursor.peek().is_some() {
                return Err(cursor.error(ErrorKind::TrailingContent));
            }
        }
        Ok(value)
    }
}

/// Routes on the lookahead code point to the decoder for that value kind.
pub(crate) fn decode_value(cursor: &mut Cursor<'_>) -> Result<Value, DecodeError> {
    if cursor.is_empty() {
        return Err(cursor.error(ErrorKind::EmptyInput));
    }
    let Some(lookahead) = cursor.peek() else {
        return Err(cursor.error(ErrorKind::UnexpectedEndOfInput));
    };
    tracing::trace!(position = cursor.position(), %lookahead, "decode value");

    match lookahead {
        '"' => decode_string(cursor).map(Value::String),
        '-' | '0'..='9' => decode_integer(cursor).map(Value::Integer),
        '{' => decode_object(cursor).map(Value::Object),
        '[' => decode_array(cursor).map(Value::Array),
        't' | 'f' => decode_boolean(cursor).map(Value::Boolean),
        'n' => decode_null(cursor).map(|()| Value::Null),
        other => Err(cursor.error(ErrorKind::InvalidItemType(other))),
    }
}
