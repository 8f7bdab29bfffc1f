//! 最短路径基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labelgraph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// n x n 网格图，边权随机
fn grid(n: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let label = |r: usize, c: usize| format!("{}_{}", r, c);

    for r in 0..n {
        for c in 0..n {
            graph.add_vertex(&label(r, c)).unwrap();
        }
    }
    for r in 0..n {
        for c in 0..n {
            if c + 1 < n {
                graph
                    .add_edge(&label(r, c), &label(r, c + 1), rng.gen_range(1..100))
                    .unwrap();
            }
            if r + 1 < n {
                graph
                    .add_edge(&label(r, c), &label(r + 1, c), rng.gen_range(1..100))
                    .unwrap();
            }
        }
    }
    graph
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for n in [10usize, 50, 100] {
        let graph = grid(n, 42);
        let end = format!("{}_{}", n - 1, n - 1);
        group.bench_with_input(BenchmarkId::new("grid", n), &graph, |b, g| {
            b.iter(|| g.shortest_path(black_box("0_0"), black_box(&end)).unwrap())
        });
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("add_remove_vertex_with_edges", |b| {
        let mut graph = grid(30, 7);
        b.iter(|| {
            graph.add_vertex("hub").unwrap();
            for i in 0..30 {
                graph.add_edge("hub", &format!("{}_{}", i, i), 1).unwrap();
            }
            graph.remove_vertex("hub").unwrap();
        })
    });
}

criterion_group!(benches, bench_shortest_path, bench_mutation);
criterion_main!(benches);
