//! Benchmarks the promised O(log n) behavior across ascending, descending,
//! and random insertion orders, the same size sweep the teacher's
//! `benches/hierarchies.rs` used for its own tree constructions.

use avl_core::tree::{Pool, Tree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;

fn build_ascending(n: u64) -> (Pool<()>, Tree) {
    let mut pool = Pool::with_capacity(n as usize);
    let mut tree = Tree::new();
    for key in 0..n {
        let idx = pool.push(key, ());
        tree.insert(pool.as_mut_slice(), idx);
    }
    (pool, tree)
}

fn build_descending(n: u64) -> (Pool<()>, Tree) {
    let mut pool = Pool::with_capacity(n as usize);
    let mut tree = Tree::new();
    for key in (0..n).rev() {
        let idx = pool.push(key, ());
        tree.insert(pool.as_mut_slice(), idx);
    }
    (pool, tree)
}

fn build_random(n: u64) -> (Pool<()>, Tree) {
    let mut keys: Vec<u64> = (0..n).collect();
    keys.shuffle(&mut rand::rng());

    let mut pool = Pool::with_capacity(n as usize);
    let mut tree = Tree::new();
    for key in keys {
        let idx = pool.push(key, ());
        tree.insert(pool.as_mut_slice(), idx);
    }
    (pool, tree)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[10u64, 100, 1_000, 10_000] {
        group.bench_with_input(format!("ascending_{n}"), &n, |b, &n| {
            b.iter(|| black_box(build_ascending(n)));
        });
        group.bench_with_input(format!("descending_{n}"), &n, |b, &n| {
            b.iter(|| black_box(build_descending(n)));
        });
        group.bench_with_input(format!("random_{n}"), &n, |b, &n| {
            b.iter(|| black_box(build_random(n)));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for &n in &[10u64, 100, 1_000, 10_000] {
        let (pool, tree) = build_random(n);
        group.bench_with_input(format!("hit_{n}"), &n, |b, &n| {
            b.iter(|| black_box(tree.lookup(pool.as_slice(), n / 2)));
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &n in &[10u64, 100, 1_000, 10_000] {
        group.bench_with_input(format!("random_{n}"), &n, |b, &n| {
            b.iter(|| {
                let (mut pool, mut tree) = build_random(n);
                for key in 0..n {
                    tree.remove(pool.as_mut_slice(), key);
                }
                black_box(tree.is_empty())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove);
criterion_main!(benches);
