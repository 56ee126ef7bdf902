#![no_main]

use arbitrary::Arbitrary;
use jsondescent::{Decoder, DecoderOptions, Value, decode_str};
use libfuzzer_sys::fuzz_target;
use serde_json::Map;

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(16)? {
            0 => serde_json::Value::Null,
            1 => serde_json::Value::Bool(u.arbitrary()?),
            2..=3 => serde_json::Value::from(u.arbitrary::<i64>()?),
            4..=8 => serde_json::Value::String(u.arbitrary()?),
            9..=12 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                serde_json::Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                serde_json::Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    raw: &'a str,
    value: ArbitraryValue,
    skip_leading_whitespace: bool,
    reject_trailing_content: bool,
}

fn decoder(input: &Input<'_>) {
    let decoder = Decoder::new(DecoderOptions {
        skip_leading_whitespace: input.skip_leading_whitespace,
        reject_trailing_content: input.reject_trailing_content,
    });

    // Arbitrary text must never panic, only fail.
    let _ = decoder.decode_str(input.raw);

    // Serialized integer-only documents always decode. Escapes such as `\n`
    // pass through as the escaped code point, so only the shape is compared.
    let serialized = serde_json::to_string(&input.value.0).expect("serializable");
    let decoded = decode_str(&serialized).expect("serialized value decodes");
    assert!(same_shape(&input.value.0, &decoded), "{serialized}");
}

fn same_shape(expected: &serde_json::Value, actual: &Value) -> bool {
    match (expected, actual) {
        (serde_json::Value::Null, Value::Null) => true,
        (serde_json::Value::Bool(a), Value::Boolean(b)) => a == b,
        (serde_json::Value::Number(a), Value::Integer(b)) => a.as_i64() == Some(*b),
        (serde_json::Value::String(_), Value::String(_)) => true,
        (serde_json::Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_shape(a, b))
        }
        (serde_json::Value::Object(a), Value::Object(b)) => a.len() >= b.len(),
        _ => false,
    }
}

fuzz_target!(|input: Input<'_>| decoder(&input));
