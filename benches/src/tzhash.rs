//! TZ hash benchmarks: sequential versus parallel hashing of large inputs.
use criterion::{BenchmarkId, Throughput, criterion_group, criterion_main};
use tzhash::{hash_data, hash_par};

mod utils;
use utils::{Benchmarker, config};

const CHUNK_SIZE: usize = 64 * 1024;

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("tzhash");

    for size in &[1 << 16, 1 << 20, 1 << 22] {
        let buf = vec![0xa5u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("hash_data", size), |b| {
            b.iter(|| hash_data(&buf));
        });

        group.bench_function(BenchmarkId::new("hash_par", size), |b| {
            b.iter(|| hash_par(&buf, CHUNK_SIZE));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
