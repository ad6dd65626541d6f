#[macro_use]
extern crate criterion;
use criterion::Criterion;

mod hot_path {
    use super::*;
    use mem_counters::stat::CounterStore;
    use mem_counters::utils::WallClock;

    pub fn bench_add(c: &mut Criterion) {
        let store = CounterStore::with_limits(1024, 50);
        let counter = store.resolve_or_create("bench_hot").unwrap();
        let clock = WallClock::new(10, 30, 500);
        c.bench_function("counter add", |b| b.iter(|| counter.add(clock, 1)));
    }

    pub fn bench_samples(c: &mut Criterion) {
        let store = CounterStore::with_limits(1024, 50);
        for i in 0..128 {
            store
                .resolve_or_create(&format!("bench_{}", i))
                .unwrap()
                .add(WallClock::new(1, 1, 1), 1);
        }
        c.bench_function("store samples 128", |b| {
            b.iter(|| store.samples(WallClock::new(1, 2, 3)))
        });
    }
}

criterion_group!(benches, hot_path::bench_add, hot_path::bench_samples);
criterion_main!(benches);
