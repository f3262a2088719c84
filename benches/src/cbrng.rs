//! Counter engine benchmarks
use benches::{bencher, Bencher};
use criterion::{criterion_group, criterion_main, BenchmarkId, Throughput};

use cbrng::rand_core::RngCore;
use cbrng::{EngineMapper, Threefry2x64Engine, Threefry4x64Engine};

const KB: usize = 1024;

fn bench_fill_bytes(c: &mut Bencher) {
    let mut group = c.benchmark_group("threefry-fill_bytes");

    for size in &[KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("threefry4x64", size), |b| {
            let mut rng = Threefry4x64Engine::from_word(1234);
            b.iter(|| rng.fill_bytes(&mut buf));
        });

        group.bench_function(BenchmarkId::new("threefry2x64", size), |b| {
            let mut rng = Threefry2x64Engine::from_word(1234);
            b.iter(|| rng.fill_bytes(&mut buf));
        });

        group.bench_function(BenchmarkId::new("mapper-threefry4x64", size), |b| {
            let mut rng = EngineMapper::new(Threefry4x64Engine::from_word(1234));
            b.iter(|| rng.fill_bytes(&mut buf));
        });
    }

    group.finish();
}

fn bench_stream_ops(c: &mut Bencher) {
    let mut group = c.benchmark_group("threefry-stream");

    group.bench_function("discard", |b| {
        let mut rng = Threefry4x64Engine::from_word(1234);
        b.iter(|| rng.discard((1 << 90) + 3));
    });

    group.bench_function("derivate", |b| {
        let rng = Threefry4x64Engine::from_word(1234);
        b.iter(|| rng.derivate_with(42));
    });

    group.bench_function("mapper-derivate", |b| {
        let rng = EngineMapper::new(Threefry4x64Engine::from_word(1234));
        b.iter(|| rng.derivate(42));
    });

    group.finish();
}

criterion_group!(
    name = engine_benches;
    config = bencher();
    targets = bench_fill_bytes, bench_stream_ops
);
criterion_main!(engine_benches);
