use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use service_locator::*;
use std::sync::Arc;

// ===== Micro Benchmarks =====

fn bench_constant_hit(c: &mut Criterion) {
    let services = DefaultServices::new();
    services.add_constant(42u64);

    c.bench_function("constant_hit_u64", |b| {
        b.iter(|| {
            let v = services.get::<u64>().unwrap();
            black_box(v);
        })
    });
}

fn bench_lazy_singleton(c: &mut Criterion) {
    struct ExpensiveToCreate {
        data: Vec<u64>,
    }

    let mut group = c.benchmark_group("lazy_singleton");

    group.bench_function("cold", |b| {
        b.iter_batched(
            || {
                let services = DefaultServices::new();
                services.add_lazy_singleton(|| ExpensiveToCreate {
                    data: (0..1000).collect(),
                });
                services
            },
            |services| {
                let v = services.get_required::<ExpensiveToCreate>();
                black_box(v.data.len());
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let services = DefaultServices::new();
    services.add_lazy_singleton(|| ExpensiveToCreate { data: vec![1] });
    // Prime the singleton
    let _ = services.get_required::<ExpensiveToCreate>();

    group.bench_function("warm", |b| {
        b.iter(|| {
            let v = services.get_required::<ExpensiveToCreate>();
            black_box(&v.data);
        })
    });

    group.finish();
}

fn bench_transient(c: &mut Criterion) {
    #[derive(Clone)]
    struct Service {
        data: [u8; 64],
    }

    let services = DefaultServices::new();
    services.add_factory(|| Service { data: [0; 64] });

    c.bench_function("transient", |b| {
        b.iter(|| {
            let v = services.get_required::<Service>();
            black_box(&v.data);
        })
    });
}

fn bench_concrete_vs_trait(c: &mut Criterion) {
    trait Speaker: Send + Sync {
        fn speak(&self) -> u32;
    }

    struct Loud;
    impl Speaker for Loud {
        fn speak(&self) -> u32 {
            7
        }
    }

    let mut group = c.benchmark_group("concrete_vs_trait");

    let services = DefaultServices::new();
    services.add_constant(7u32);
    services.add_constant_trait::<dyn Speaker>(Arc::new(Loud));

    group.bench_function("concrete", |b| {
        b.iter(|| black_box(*services.get_required::<u32>()))
    });

    group.bench_function("trait", |b| {
        b.iter(|| black_box(services.get_required_trait::<dyn Speaker>().speak()))
    });

    group.finish();
}

fn bench_miss(c: &mut Criterion) {
    struct Missing;
    let services = DefaultServices::new();

    c.bench_function("miss", |b| {
        b.iter(|| black_box(services.get::<Missing>().unwrap().is_none()))
    });
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");

    let services = DefaultServices::new();
    services.add_lazy_singleton(|| 42u64);
    // Prime the singleton
    let _ = services.get::<u64>().unwrap();

    for &thread_count in &[1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("singleton_threads", thread_count),
            &thread_count,
            |b, &threads| {
                b.iter_custom(|iters| {
                    let start = std::time::Instant::now();
                    crossbeam_utils::thread::scope(|s| {
                        for _ in 0..threads {
                            let services_ref = &services;
                            s.spawn(move |_| {
                                for _ in 0..iters / threads as u64 {
                                    let v = services_ref.get::<u64>().unwrap();
                                    black_box(v);
                                }
                            });
                        }
                    })
                    .unwrap();
                    start.elapsed()
                })
            },
        );
    }

    group.finish();
}

// ===== Macro Benchmarks =====

fn bench_large_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_registry");

    for &service_count in &[10, 100, 1000] {
        let services = DefaultServices::new();

        // Register a baseline service we'll always resolve
        services.add_constant(42u64);

        // Fill the registry with named entries of another type
        for i in 0..service_count {
            services.add_named_constant(&format!("entry-{}", i), i as u32);
        }

        group.bench_with_input(
            BenchmarkId::new("resolve_from_large_registry", service_count),
            &service_count,
            |b, _| {
                b.iter(|| {
                    let v = services.get::<u64>().unwrap();
                    black_box(v);
                })
            },
        );
    }

    group.finish();
}

fn bench_global_locator(c: &mut Criterion) {
    register_container(None);
    get_container().add_constant(1u16);

    c.bench_function("global_locator_hit", |b| {
        b.iter(|| black_box(locator::get::<u16>().unwrap()))
    });

    register_container(None);
}

criterion_group!(
    micro_benches,
    bench_constant_hit,
    bench_lazy_singleton,
    bench_transient,
    bench_concrete_vs_trait,
    bench_miss,
    bench_contention
);

criterion_group!(macro_benches, bench_large_registry, bench_global_locator);

criterion_main!(micro_benches, macro_benches);
