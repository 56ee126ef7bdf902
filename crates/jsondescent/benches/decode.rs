//! Benchmark – `jsondescent::decode`
#![allow(missing_docs)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsondescent::{Decoder, DecoderOptions, decode};

/// Produce a *deterministic* document holding `records` small objects inside
/// a top-level array.
fn make_payload(records: usize) -> Vec<char> {
    let mut s = String::from("[");
    for i in 0..records {
        if i > 0 {
            s.push_str(",\n");
        }
        write!(
            s,
            r#"{{"id": {i}, "name": "record \"{i}\"", "active": {}, "tags": ["a", "b"], "parent": null}}"#,
            i % 2 == 0
        )
        .expect("writing to a String never fails");
    }
    s.push(']');
    s.chars().collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.measurement_time(Duration::from_secs(5));

    for records in [10, 100, 1_000] {
        let payload = make_payload(records);

        group.bench_with_input(BenchmarkId::new("default", records), &payload, |b, input| {
            b.iter(|| decode(black_box(input)).expect("payload decodes"));
        });

        let strict = Decoder::new(DecoderOptions {
            skip_leading_whitespace: true,
            reject_trailing_content: true,
        });
        group.bench_with_input(BenchmarkId::new("strict", records), &payload, |b, input| {
            b.iter(|| strict.decode(black_box(input)).expect("payload decodes"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
