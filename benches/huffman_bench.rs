// In benches/huffman_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huffpack::{decode, encode};

/// Generates a vector of highly compressible data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Generates a vector of less compressible, more random-looking data.
fn generate_high_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_huffman(c: &mut Criterion) {
    let low_entropy_data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let high_entropy_data = generate_high_entropy_bytes(BENCH_DATA_SIZE);

    // Prepare artifacts once so the decode benchmarks measure only decoding.
    let encoded_low = encode(&low_entropy_data).unwrap();
    let encoded_high = encode(&high_entropy_data).unwrap();

    c.bench_function("encode_low_entropy_64k", |b| {
        b.iter(|| encode(black_box(&low_entropy_data)).unwrap())
    });
    c.bench_function("encode_high_entropy_64k", |b| {
        b.iter(|| encode(black_box(&high_entropy_data)).unwrap())
    });
    c.bench_function("decode_low_entropy_64k", |b| {
        b.iter(|| decode(black_box(&encoded_low)).unwrap())
    });
    c.bench_function("decode_high_entropy_64k", |b| {
        b.iter(|| decode(black_box(&encoded_high)).unwrap())
    });
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
