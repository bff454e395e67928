use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use wirth_graph::CsrGraph;

#[derive(Debug, Clone)]
struct GraphSpec {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    fn build(&self) -> CsrGraph<u64> {
        let mut g: CsrGraph<u64> = CsrGraph::new(self.vertex_count);
        for v in 0..self.vertex_count {
            let _ = g.set_vertex_data(v, (v as u64).wrapping_mul(2654435761) % 1000);
        }
        let _ = g.add_edges(self.edges.iter().copied());
        g
    }
}

fn build_spec(vertex_count: usize, fanout: usize) -> GraphSpec {
    let mut edges: Vec<(usize, usize)> = Vec::new();

    // A spine to guarantee connectivity.
    for i in 0..vertex_count.saturating_sub(1) {
        edges.push((i, i + 1));
    }

    for i in 0..vertex_count {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_add(k);
            if to >= vertex_count {
                break;
            }
            edges.push((i, to));
        }
    }

    GraphSpec {
        vertex_count,
        edges,
    }
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_rebuild");
    group.measurement_time(Duration::from_secs(5));

    let cases = [("v50_f3", 50usize, 3usize), ("v200_f4", 200, 4)];

    for (name, vertices, fanout) in cases {
        let spec = build_spec(vertices, fanout);

        group.bench_with_input(BenchmarkId::new("add_edge", name), &spec, |b, spec| {
            b.iter_batched(
                || CsrGraph::<u64>::new(spec.vertex_count),
                |mut g| {
                    for &(u, v) in &spec.edges {
                        let _ = g.add_edge(black_box(u), black_box(v));
                    }
                    black_box(g.edge_count());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("remove_vertex", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    while g.remove_vertex(black_box(0)) {}
                    black_box(g.vertex_count());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sorted_vertex_data", name), &spec, |b, spec| {
            let g = spec.build();
            b.iter(|| black_box(g.sorted_vertex_data()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rebuild);
criterion_main!(benches);
