/// Performance benchmarks for the union-find forest and Kruskal's algorithm
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mstkit::{kruskal_mst, solve_all, DisjointSet, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a random graph with about `density` edges per vertex
fn generate_graph(vertices: usize, density: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(vertices);
    for _ in 0..vertices * density {
        graph.add_edge(
            rng.gen_range(0..vertices),
            rng.gen_range(0..vertices),
            rng.gen_range(0..1_000_000),
        );
    }
    graph
}

/// Benchmark: single-graph Kruskal
fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for size in [1_000, 10_000, 100_000].iter() {
        let graph = generate_graph(*size, 8, 42);
        group.throughput(Throughput::Elements(graph.edges().len() as u64));
        group.sample_size(10);

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| kruskal_mst(black_box(graph)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark: union-find on a worst-case chain of unions
fn bench_union_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_chain");

    for size in [10_000, 1_000_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.sample_size(10);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut ds = DisjointSet::new(size);
                for i in 1..size {
                    ds.union(i, i - 1).unwrap();
                }
                black_box(ds.find(0).unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark: many independent graphs solved in parallel
fn bench_solve_all(c: &mut Criterion) {
    let graphs: Vec<Graph> = (0..64)
        .map(|seed| generate_graph(5_000, 4, seed))
        .collect();

    c.bench_function("solve_all_64x5k", |b| {
        b.iter(|| solve_all(black_box(&graphs)));
    });
}

criterion_group!(benches, bench_kruskal, bench_union_chain, bench_solve_all);

criterion_main!(benches);
