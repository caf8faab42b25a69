//! Stark curve ECDSA benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use hex_literal::hex;
use stark_curve::{
    FieldElement,
    ecdsa::{SigningKey, generate_k},
};
use std::hint::black_box;

const PRIVATE_KEY: [u8; 32] =
    hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc");

const DIGEST: FieldElement = FieldElement::from_hex_vartime(
    "0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f",
);

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");

    let d = SigningKey::from_bytes(&PRIVATE_KEY).unwrap();
    let private_key = FieldElement::from_be_bytes(&PRIVATE_KEY);

    group.bench_function("generate_k", |b| {
        b.iter(|| generate_k(&black_box(DIGEST), &black_box(private_key)).unwrap())
    });

    group.bench_function("sign_hash", |b| {
        b.iter(|| black_box(&d).sign_hash(&black_box(DIGEST)).unwrap())
    });

    let q = *d.verifying_key();
    let s = d.sign_hash(&DIGEST).unwrap();

    group.bench_function("verify_hash", |b| {
        b.iter(|| black_box(q).verify_hash(&black_box(DIGEST), &black_box(s)))
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
