//! Benchmarks for classicrypt transforms.
//!
//! Measures key scheduling for the ciphers with nontrivial key structures,
//! and encode throughput per cipher with and without trace recording.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use classicrypt::{CipherEngine, CipherKind, Direction, Discard, KeyParams, Trace};

/// Plaintext used consistently across all benchmarks.
const BENCH_TEXT: &str = "The quick brown fox jumps over the lazy dog, again and again.";

fn bench_params() -> Vec<KeyParams> {
    vec![
        KeyParams::Caesar { shift: 3 },
        KeyParams::Affine { a: 5, b: 8 },
        KeyParams::Vigenere {
            key: "LEMON".into(),
        },
        KeyParams::Playfair {
            key: "PLAYFAIREXAMPLE".into(),
        },
        KeyParams::Hill {
            matrix: vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]],
        },
    ]
}

/// Benchmarks Playfair grid construction and Hill matrix inversion.
fn bench_key_schedule(c: &mut Criterion) {
    let engine = CipherEngine::default();
    let playfair = KeyParams::Playfair {
        key: "PLAYFAIREXAMPLE".into(),
    };
    let hill = KeyParams::Hill {
        matrix: vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]],
    };

    c.bench_function("key_schedule_playfair", |b| {
        b.iter(|| {
            engine
                .derive_key_material(CipherKind::Playfair, black_box(&playfair))
                .unwrap()
        });
    });
    c.bench_function("key_schedule_hill_3x3", |b| {
        b.iter(|| {
            engine
                .derive_key_material(CipherKind::Hill, black_box(&hill))
                .unwrap()
        });
    });
}

/// Benchmarks encode throughput per cipher, traced and untraced.
///
/// Key material is derived once outside the timed loop.
fn bench_encode(c: &mut Criterion) {
    let engine = CipherEngine::default();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    for params in bench_params() {
        let kind = params.kind();
        let material = engine.derive_key_material(kind, &params).unwrap();

        group.bench_with_input(
            BenchmarkId::new("untraced", kind),
            &material,
            |b, material| {
                b.iter(|| {
                    engine.apply(
                        Direction::Encode,
                        black_box(BENCH_TEXT),
                        material,
                        &mut Discard,
                    )
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("traced", kind), &material, |b, material| {
            b.iter(|| {
                let mut trace = Trace::new();
                let out = engine.apply(Direction::Encode, black_box(BENCH_TEXT), material, &mut trace);
                (out, trace)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_encode);
criterion_main!(benches);
