// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// open/unlink cost per strategy.
//
// Run with:
//   cargo bench --bench open_unlink
//
// Groups:
//   normalize    — name normalization alone (no syscalls)
//   create_unlink — create + close + unlink of one object, per strategy

use std::sync::atomic::{AtomicUsize, Ordering};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use libshm::{flags, shm_name, Mode, NativeShm, ShmBackend};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn bench_name() -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("/libshm_bench_{}_{n}", std::process::id())
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for name in ["foo", "/foo", "////////foo"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, n| {
            b.iter(|| black_box(shm_name::normalize(black_box(n))));
        });
    }

    group.finish();
}

fn create_unlink<B: ShmBackend>(name: &str) {
    let shm = B::open(name, flags::CREATE | flags::EXCL | flags::RDWR, Mode::from(0o600))
        .expect("create");
    drop(shm);
    B::unlink(name).expect("unlink");
}

fn bench_create_unlink(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_unlink");
    let name = bench_name();

    #[cfg(target_os = "linux")]
    group.bench_function("dev_shm", |b| b.iter(|| create_unlink::<libshm::DevShm>(&name)));

    group.bench_function("native", |b| b.iter(|| create_unlink::<NativeShm>(&name)));

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_create_unlink);
criterion_main!(benches);
