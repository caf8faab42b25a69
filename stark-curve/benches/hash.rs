//! Poseidon, Pedersen and snKeccak benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use stark_curve::{FieldElement, pedersen, poseidon, sn_keccak};
use std::hint::black_box;

const FE_A: FieldElement = FieldElement::from_hex_vartime(
    "03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb",
);
const FE_B: FieldElement = FieldElement::from_hex_vartime(
    "0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a",
);

fn bench_poseidon(c: &mut Criterion) {
    let mut group = c.benchmark_group("poseidon");

    group.bench_function("hash", |b| {
        b.iter(|| poseidon::hash(&black_box(FE_A), &black_box(FE_B)))
    });

    let inputs: Vec<FieldElement> = (0..16).map(FieldElement::from_u64).collect();
    group.bench_function("hash_many/16", |b| {
        b.iter(|| poseidon::hash_many(black_box(&inputs)))
    });

    group.finish();
}

fn bench_pedersen(c: &mut Criterion) {
    let mut group = c.benchmark_group("pedersen");

    group.bench_function("hash", |b| {
        b.iter(|| pedersen::hash(&black_box(FE_A), &black_box(FE_B)))
    });

    let inputs: Vec<FieldElement> = (0..16).map(FieldElement::from_u64).collect();
    group.bench_function("hash_array/16", |b| {
        b.iter(|| pedersen::hash_array(black_box(&inputs)))
    });

    group.finish();
}

fn bench_sn_keccak(c: &mut Criterion) {
    let data = [0xa5u8; 256];
    c.bench_function("sn_keccak/256", |b| b.iter(|| sn_keccak(black_box(&data))));
}

criterion_group!(benches, bench_poseidon, bench_pedersen, bench_sn_keccak);
criterion_main!(benches);
