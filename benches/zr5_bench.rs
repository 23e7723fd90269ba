//! Benchmark for the ZR5 algorithm

use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_hash(c: &mut Criterion) {
    // Header-shaped 80-byte input, the mining hot path
    let header = [0x42u8; 80];

    c.bench_function("zr5_hash", |b| b.iter(|| zr5::hash(black_box(&header))));
}

fn bench_hash512(c: &mut Criterion) {
    let header = [0x42u8; 80];

    c.bench_function("zr5_hash512", |b| {
        b.iter(|| zr5::hash512(black_box(&header)))
    });
}

fn bench_hash_varying_nonce(c: &mut Criterion) {
    c.bench_function("zr5_varying_nonce", |b| {
        let mut header = [0u8; 80];
        let mut nonce: u32 = 0;
        b.iter(|| {
            header[76..80].copy_from_slice(&nonce.to_le_bytes());
            nonce = nonce.wrapping_add(1);
            zr5::hash(black_box(&header))
        })
    });
}

criterion_group!(benches, bench_hash, bench_hash512, bench_hash_varying_nonce);
criterion_main!(benches);
