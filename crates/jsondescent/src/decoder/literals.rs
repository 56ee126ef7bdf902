//! Decoders for single lexemes: strings, integers, booleans and `null`.
//!
//! None of these skip whitespace at their own boundaries; the caller must
//! position the cursor on the first code point of the lexeme.

use alloc::string::String;

use super::cursor::Cursor;
use crate::error::{DecodeError, ErrorKind};

/// Decodes a quoted string. A backslash takes the next code point verbatim.
pub(crate) fn decode_string(cursor: &mut Cursor<'_>) -> Result<String, DecodeError> {
    cursor.match_literal(false, "\"")?;

    let mut out = String::new();
    while let Some(ch) = cursor.peek() {
        match ch {
            '\\' => {
                let backslash = cursor.position();
                cursor.advance(1);
                let Some(escaped) = cursor.peek() else {
                    return Err(DecodeError::new(ErrorKind::DanglingEscape, backslash));
                };
                out.push(escaped);
                cursor.advance(1);
            }
            '"' => {
                cursor.advance(1);
                return Ok(out);
            }
            _ => {
                out.push(ch);
                cursor.advance(1);
            }
        }
    }

    Err(cursor.error(ErrorKind::UnterminatedString))
}

/// Decodes an optionally negative run of decimal digits.
///
/// Accumulation stops at the first non-digit, so `1.5` yields `1` and leaves
/// `.5` in the input. Overflow wraps silently.
pub(crate) fn decode_integer(cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
    let negative = cursor.peek() == Some('-');
    if negative {
        cursor.advance(1);
    }
    if !cursor.peek().is_some_and(|ch| ch.is_ascii_digit()) {
        return Err(cursor.error(ErrorKind::InvalidLeadingDigit));
    }

    let mut value: i64 = 0;
    while let Some(digit) = cursor.peek().and_then(|ch| ch.to_digit(10)) {
        value = value.wrapping_mul(10).wrapping_add(i64::from(digit));
        cursor.advance(1);
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

pub(crate) fn decode_boolean(cursor: &mut Cursor<'_>) -> Result<bool, DecodeError> {
    if cursor.match_literal(false, "true").is_ok() {
        return Ok(true);
    }
    if cursor.match_literal(false, "false").is_ok() {
        return Ok(false);
    }
    Err(cursor.error(ErrorKind::InvalidBooleanLiteral))
}

pub(crate) fn decode_null(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor
        .match_literal(false, "null")
        .map_err(|_| cursor.error(ErrorKind::InvalidNullLiteral))
}
