use criterion::{criterion_group, criterion_main, Criterion};
use float_visibility::delay::ThreadSleep;
use float_visibility::Floating;
use std::hint::black_box;
use std::sync::Arc;

fn noop_backend(_visible: bool) -> anyhow::Result<()> {
    Ok(())
}

fn bench_override(c: &mut Criterion) {
    let floating = Floating::new(Arc::new(noop_backend), Arc::new(ThreadSleep));
    c.bench_function("override_toggle", |b| {
        b.iter(|| black_box(floating.override_toggle().unwrap()))
    });
    c.bench_function("is_overridden", |b| b.iter(|| black_box(floating.is_overridden())));
}

fn bench_timeout(c: &mut Criterion) {
    let floating = Floating::new(Arc::new(noop_backend), Arc::new(ThreadSleep));
    c.bench_function("hide_after_timeout_zero", |b| {
        b.iter(|| floating.hide_after_timeout(0).unwrap().join())
    });
}

criterion_group!(benches, bench_override, bench_timeout);
criterion_main!(benches);
