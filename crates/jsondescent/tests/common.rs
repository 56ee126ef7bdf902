#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

pub const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "path": "/v1/\"items\"",
        "retries": 3,
        "verbose": false
    },
    "flags": [
        true,
        false,
        null
    ],
    "offset": -250,
    "empty": {},
    "matrix": [
        [1, 2],
        []
    ]
}
"#;
