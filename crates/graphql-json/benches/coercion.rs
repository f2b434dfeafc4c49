use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use graphql_json::{coerce_str, parse_literal, parse_literal_str, print_value};
use serde_json::{json, Value};

/// A wide, moderately nested document: 200 records of mixed primitives.
fn sample_value() -> Value {
    let records: Vec<Value> = (0..200)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("record-{i}"),
                "score": i as f64 * 1.25,
                "active": i % 2 == 0,
                "tags": ["alpha", "beta", "gamma"],
                "meta": { "created": "2024-01-15T10:30:00Z", "owner": null },
            })
        })
        .collect();
    json!({ "records": records })
}

fn bench_coercion(c: &mut Criterion) {
    let text = print_value(&sample_value()).unwrap();
    let literal = parse_literal_str(&text).unwrap();

    c.bench_function("parse_literal", |b| {
        b.iter(|| parse_literal(black_box(&literal)).unwrap())
    });
    c.bench_function("parse_literal_str", |b| {
        b.iter(|| parse_literal_str(black_box(&text)).unwrap())
    });
    c.bench_function("coerce_str", |b| {
        b.iter(|| coerce_str(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, bench_coercion);
criterion_main!(benches);
