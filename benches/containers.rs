use assoc_containers::{OrderedMap, ProbingHashMap};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Cheap deterministic shuffle so the tree doesn't degenerate into a list.
fn scrambled(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7_919) % n as i64).collect()
}

fn ordered_map_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_map");

    for &size in SIZES.iter() {
        let keys: Vec<String> = scrambled(size).iter().map(|k| format!("Key{}", k)).collect();
        let map: OrderedMap<usize> = keys.iter().cloned().zip(0..).collect();

        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = OrderedMap::new();
                for (i, k) in keys.iter().enumerate() {
                    map.insert(k.as_str(), i);
                }
                black_box(map.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("search_hit", size), &keys, |b, keys| {
            let probe = keys[size / 2].to_uppercase();
            b.iter(|| black_box(map.search(&probe)));
        });

        group.bench_with_input(BenchmarkId::new("traverse", size), &map, |b, map| {
            b.iter(|| black_box(map.traverse_in_order().len()));
        });
    }

    group.finish();
}

fn probing_map_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("probing_map");

    for &size in SIZES.iter() {
        let keys = scrambled(size);

        // half full, so probes mostly stay short
        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ProbingHashMap::new(size * 2);
                for &k in keys {
                    let _ = map.insert(k, k);
                }
                black_box(map.len())
            });
        });

        let mut churned = ProbingHashMap::new(size * 2);
        for &k in &keys {
            let _ = churned.insert(k, k);
        }
        for &k in keys.iter().step_by(2) {
            churned.delete(k);
        }

        group.bench_function(BenchmarkId::new("search_past_tombstones", size), |b| {
            let probe = keys[1];
            b.iter(|| black_box(churned.search(probe)));
        });
    }

    group.finish();
}

criterion_group!(benches, ordered_map_benches, probing_map_benches);
criterion_main!(benches);
