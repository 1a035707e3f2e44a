//! Estimated versus measured memory.
//!
//! `Trie::size_of` is an estimate from node counts. This benchmark measures
//! what jemalloc actually hands out while building each trie and prints
//! both side by side, then times the builds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tikv_jemalloc_ctl::{epoch, stats};
use wordtrie::{Trie, TrieKind};

#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn get_allocated_bytes() -> usize {
    // Statistics only refresh when the epoch advances.
    epoch::advance().unwrap();
    stats::allocated::read().unwrap()
}

fn generate_keys(n: usize) -> Vec<String> {
    let stems = ["inter", "trans", "under", "over", "re", "pre", "de", "un"];
    let tails = ["act", "ion", "ing", "ed", "ly", "ness", "ment", "able"];
    (0..n)
        .map(|i| {
            let stem = stems[i % stems.len()];
            let tail = tails[(i / stems.len()) % tails.len()];
            let id: String = format!("{}", i / (stems.len() * tails.len()))
                .bytes()
                .map(|d| (b'a' + (d - b'0')) as char)
                .collect();
            format!("{stem}{id}{tail}")
        })
        .collect()
}

fn measure(kind: TrieKind, keys: &[String]) -> (usize, usize) {
    let before = get_allocated_bytes();
    let mut trie = kind.build();
    for key in keys {
        trie.insert(key);
    }
    let after = get_allocated_bytes();
    let estimate = trie.size_of();
    drop(trie);
    (estimate, after.saturating_sub(before))
}

fn print_memory_report() {
    println!("\n=== Estimated vs Measured Memory ===\n");
    println!(
        "{:<12} {:>8} {:>14} {:>14} {:>10}",
        "Encoding", "Keys", "Estimate", "Allocated", "Ratio"
    );
    println!("{}", "-".repeat(62));

    for size in [1_000, 10_000, 100_000] {
        let keys = generate_keys(size);
        for kind in TrieKind::ALL {
            let (estimate, allocated) = measure(kind, &keys);
            println!(
                "{:<12} {:>8} {:>14} {:>14} {:>10.2}",
                kind.name(),
                size,
                estimate,
                allocated,
                allocated as f64 / estimate.max(1) as f64
            );
        }
    }
    println!();
}

fn bench_build(c: &mut Criterion) {
    print_memory_report();

    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for size in [10_000, 100_000] {
        let keys = generate_keys(size);
        for kind in TrieKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &keys, |b, keys| {
                b.iter(|| {
                    let mut trie = kind.build();
                    for key in keys {
                        trie.insert(key);
                    }
                    black_box(trie.count())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
