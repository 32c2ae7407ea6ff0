use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key, init, Aes128Key, Tables};

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.bench_function("build", |b| {
        b.iter(Tables::build);
    });
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    init();
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    let key = Aes128Key::from(key_bytes);

    let mut group = c.benchmark_group("cipher");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &key));
    });
    group.finish();
}

criterion_group!(benches, bench_tables, bench_encrypt);
criterion_main!(benches);
