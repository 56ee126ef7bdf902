//! Decoded value types.
//!
//! This module defines the [`Value`] enum produced by the decoder.
//!
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// Object entries, keyed by member name.
pub type Map = BTreeMap<String, Value>;
/// Array elements, in input order.
pub type Array = Vec<Value>;

/// A decoded document.
///
/// The `Value` enum covers the value kinds the decoder understands:
///
/// - Null
/// - Boolean
/// - Integer (signed 64-bit)
/// - String
/// - Array
/// - Object
///
/// Objects are keyed maps, so two objects compare equal when they hold the
/// same key/value pairs regardless of the order they appeared in the input.
///
/// # Examples
///
/// ```
/// use jsondescent::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::Integer(7));
/// assert_eq!(jsondescent::decode_str(r#"{"key":7}"#).unwrap(), Value::Object(map));
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// The `true` or `false` literal.
    Boolean(bool),
    /// An optionally negative run of decimal digits.
    Integer(i64),
    /// A quoted string with escapes passed through.
    String(String),
    /// A bracketed list of values.
    Array(Array),
    /// A braced set of members; a repeated key keeps its last value.
    Object(Map),
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

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
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
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondescent::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
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

    /// Returns the boolean if the value is a [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if the value is an [`Integer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondescent::Value;
    ///
    /// assert_eq!(Value::Integer(-3).as_i64(), Some(-3));
    /// assert_eq!(Value::Null.as_i64(), None);
    /// ```
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrows the string if the value is a [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the elements if the value is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Borrows the entries if the value is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }
}
