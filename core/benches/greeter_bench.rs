use criterion::{Criterion, criterion_group, criterion_main};
use helper_core::bench::{BenchCase, FLAT_BENCHES, SUB_BENCHES, TABLE_BENCHES};
use std::hint::black_box;

// Standalone benchmarks with a fixed input each
fn bench_hello_world(c: &mut Criterion) {
    for case in FLAT_BENCHES {
        c.bench_function(case.name, |b| {
            b.iter(|| black_box(case.run_once()));
        });
    }
}

fn bench_group(c: &mut Criterion, group_name: &str, cases: &[BenchCase]) {
    let mut group = c.benchmark_group(group_name);
    for case in cases {
        group.bench_function(case.name, |b| {
            b.iter(|| black_box(case.run_once()));
        });
    }
    group.finish();
}

// Named sub-benchmarks: Sub/Didik, Sub/Nur
fn bench_sub(c: &mut Criterion) {
    bench_group(c, "Sub", SUB_BENCHES);
}

// Table driven: HelloWorldTable/HelloWorld(Didik), ...
fn bench_hello_world_table(c: &mut Criterion) {
    bench_group(c, "HelloWorldTable", TABLE_BENCHES);
}

criterion_group!(greeter, bench_hello_world, bench_sub, bench_hello_world_table);
criterion_main!(greeter);
