use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| civic_crypto::blake2b_256(black_box(&data)))
    });
}

fn proposal_hash_bench(c: &mut Criterion) {
    let text = "x".repeat(1337);

    c.bench_function("proposal_hash_max_len", |b| {
        b.iter(|| civic_crypto::proposal_hash(black_box(&text)))
    });
}

fn call_hash_bench(c: &mut Criterion) {
    let call_data = vec![0xCDu8; 64];

    c.bench_function("call_hash_64B", |b| {
        b.iter(|| civic_crypto::call_hash(black_box(&call_data), black_box(9)))
    });
}

criterion_group!(benches, blake2b_256_bench, proposal_hash_bench, call_hash_bench);
criterion_main!(benches);
