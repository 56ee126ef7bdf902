//! Object and array decoders.
//!
//! Whitespace is consumed only by the structural token matches (`{ } [ ] : ,`),
//! which also leaves the cursor on the first code point of every nested key
//! and value.

use super::{cursor::Cursor, decode_value, literals::decode_string};
use crate::{
    error::DecodeError,
    value::{Array, Map},
};

pub(crate) fn decode_object(cursor: &mut Cursor<'_>) -> Result<Map, DecodeError> {
    let mut map = Map::new();

    cursor.match_literal(true, "{")?;
    if cursor.match_literal(true, "}").is_ok() {
        return Ok(map);
    }

    loop {
        let key = decode_string(cursor)?;
        cursor.match_literal(true, ":")?;
        let value = decode_value(cursor)?;
        // Later occurrences of a key replace earlier ones.
        map.insert(key, value);

        if cursor.match_literal(true, ",").is_err() {
            break;
        }
    }

    cursor.match_literal(true, "}")?;
    Ok(map)
}

pub(crate) fn decode_array(cursor: &mut Cursor<'_>) -> Result<Array, DecodeError> {
    let mut array = Array::new();

    cursor.match_literal(true, "[")?;
    if cursor.match_literal(true, "]").is_ok() {
        return Ok(array);
    }

    loop {
        array.push(decode_value(cursor)?);

        if cursor.match_literal(true, ",").is_err() {
            break;
        }
    }

    cursor.match_literal(true, "]")?;
    Ok(array)
}
