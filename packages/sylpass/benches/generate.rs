//! Benchmarks for password generation

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sylpass::{PasswordGenerator, TableVariant};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for variant in [TableVariant::Standard, TableVariant::Unambiguous] {
        for length in [8usize, 13, 32, 64] {
            let mut generator = PasswordGenerator::with_seed(0x5eed);
            generator.activate(variant);
            group.bench_with_input(
                BenchmarkId::new(variant.name(), length),
                &length,
                |b, &length| {
                    b.iter(|| generator.generate(black_box(length)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
