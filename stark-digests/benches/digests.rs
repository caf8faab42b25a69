//! Keccak-256, SHA-256 and HMAC-SHA-256 throughput benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stark_digests::{hmac_sha256, keccak256, sha256};

const SIZES: [usize; 3] = [32, 136, 1024];

fn bench_keccak256(c: &mut Criterion) {
    let mut group = c.benchmark_group("keccak256");
    for size in SIZES {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size} bytes"), |b| {
            b.iter(|| keccak256(black_box(&data)))
        });
    }
    group.finish();
}

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");
    for size in SIZES {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size} bytes"), |b| {
            b.iter(|| sha256(black_box(&data)))
        });
    }
    group.finish();
}

fn bench_hmac_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac-sha256");
    let key = [0x0bu8; 32];
    let msg = [0x5au8; 97];
    group.bench_function("rfc6979 step", |b| {
        b.iter(|| hmac_sha256(black_box(&key), black_box(&msg)))
    });
    group.finish();
}

criterion_group!(benches, bench_keccak256, bench_sha256, bench_hmac_sha256);
criterion_main!(benches);
