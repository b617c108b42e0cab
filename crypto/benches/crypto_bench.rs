use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wk_types::PrivateKey;

fn ed25519_sign_bench(c: &mut Criterion) {
    let sk = PrivateKey([7u8; 32]);
    let msg = [42u8; 128];

    c.bench_function("ed25519_sign_128B", |b| {
        b.iter(|| wk_crypto::sign_ed25519(black_box(&msg), &sk))
    });
}

fn secp256k1_recoverable_bench(c: &mut Criterion) {
    let sk = PrivateKey([7u8; 32]);
    let digest = wk_crypto::sha256(b"avalanche");

    c.bench_function("secp256k1_sign_recoverable", |b| {
        b.iter(|| wk_crypto::sign_secp256k1_recoverable(black_box(&digest), &sk))
    });
}

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| wk_crypto::blake2b_256(black_box(&data)))
    });
}

fn sha512_half_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];

    c.bench_function("sha512_half_1KB", |b| {
        b.iter(|| wk_crypto::sha512_half(black_box(&data)))
    });
}

fn base58check_bench(c: &mut Criterion) {
    let payload = [6u8; 23];

    c.bench_function("base58check_encode_23B", |b| {
        b.iter(|| wk_crypto::base58check_encode(black_box(&payload)))
    });
}

criterion_group!(
    benches,
    ed25519_sign_bench,
    secp256k1_recoverable_bench,
    blake2b_256_bench,
    sha512_half_bench,
    base58check_bench,
);
criterion_main!(benches);
