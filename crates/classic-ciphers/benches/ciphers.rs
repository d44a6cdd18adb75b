//! Encryption throughput for each cipher.
//!
//! Run with:
//! ```bash
//! cargo bench --bench ciphers
//! ```

#![allow(clippy::expect_used)]

use classic_ciphers::{KeySquare, PlayfairCipher, ShiftCipher, VigenereCipher};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

fn sample_text(len: usize) -> String {
    "the quick brown fox jumps over the lazy dog "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_encrypt(c: &mut Criterion) {
    let shift = ShiftCipher::new(13).expect("Failed to create shift cipher");
    let vigenere = VigenereCipher::new("lemon").expect("Failed to create vigenere cipher");
    let playfair = PlayfairCipher::new("playfairexample").expect("Failed to create playfair cipher");

    let mut group = c.benchmark_group("encrypt");

    for size in SIZES {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("shift", size), &text, |b, text| {
            b.iter(|| shift.encrypt(black_box(text)));
        });

        group.bench_with_input(BenchmarkId::new("vigenere", size), &text, |b, text| {
            b.iter(|| vigenere.encrypt(black_box(text)));
        });

        group.bench_with_input(BenchmarkId::new("playfair", size), &text, |b, text| {
            b.iter(|| playfair.encrypt(black_box(text)));
        });
    }

    group.finish();
}

fn bench_key_square(c: &mut Criterion) {
    c.bench_function("key_square/generate", |b| {
        b.iter(|| KeySquare::new(black_box("playfairexample")));
    });
}

criterion_group!(benches, bench_encrypt, bench_key_square);
criterion_main!(benches);
