//! A small, single-pass recursive-descent JSON decoder.
//!
//! The decoder accepts a restricted JSON dialect over a fully buffered
//! sequence of code points and produces a generic [`Value`]:
//!
//! - values are strings, signed 64-bit integers, objects, arrays, booleans and
//!   `null`; there is no fractional or exponent number support;
//! - whitespace is only space (U+0020) and line feed (U+000A), and it is only
//!   consumed around the structural tokens `{ } [ ] : ,`;
//! - a backslash inside a string passes the following code point through
//!   unchanged (`"a\"b"` decodes to `a"b`, `"\n"` decodes to `n`);
//! - content after the first complete value is ignored unless
//!   [`DecoderOptions::reject_trailing_content`] is set.
//!
//! ```rust
//! use jsondescent::{Value, decode_str};
//!
//! let value = decode_str(r#"{"a": [1, -2, true], "b": null}"#).unwrap();
//! let Value::Object(map) = value else {
//!     panic!("expected an object");
//! };
//! assert_eq!(
//!     map["a"],
//!     Value::Array(vec![Value::Integer(1), Value::Integer(-2), Value::Boolean(true)])
//! );
//! assert!(map["b"].is_null());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod options;
mod value;


pub use decoder::{Decoder, decode, decode_str};
pub use error::{DecodeError, ErrorKind};
pub use options::DecoderOptions;
pub use value::{Array, Map, Value};
