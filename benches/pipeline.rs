use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use reiter::{from_slice, Iterable};

// Deep adapter stacks are where per-layer dispatch overhead would show;
// the try_fold-based consumers should keep the whole stack as one loop.

fn benchmark(c: &mut Criterion) {
    let data: Vec<u32> = (0..8192).collect();

    c.bench_function("deep-stack-find", |b| {
        b.iter(|| {
            let found = from_slice(black_box(&data))
                .map(|x| x + 1)
                .filter(|x| x % 3 != 0)
                .skip(100)
                .step_by(2)
                .enumerate()
                .find(|(i, _)| *i == 500);
            black_box(found)
        })
    });

    c.bench_function("deep-stack-count", |b| {
        b.iter(|| {
            let count = from_slice(black_box(&data))
                .filter(|x| *x % 2 == 0)
                .map(|x| x * 7)
                .take(4096)
                .count();
            black_box(count)
        })
    });

    c.bench_function("chunked-sum", |b| {
        b.iter(|| {
            let total: u32 = from_slice(black_box(&data))
                .map(|x| *x)
                .array_chunks(64)
                .map(|chunk| chunk.iter().sum::<u32>())
                .fold(0, |acc, x| acc ^ x);
            black_box(total)
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
