use commute_core::{graph::Graph, route::compute_route, search::dijkstra::Dijkstra};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, dijkstra_on_grid, route_on_grid);
criterion_main!(benches);

/// Square grid of `size * size` locations with random road weights.
fn grid_graph(size: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut g = Graph::with_capacity(size * size, 2 * size * size);
    let name = |x: usize, y: usize| format!("{x}/{y}");

    for x in 0..size {
        for y in 0..size {
            g.add_location(name(x, y)).unwrap();
        }
    }

    for x in 0..size {
        for y in 0..size {
            if x + 1 < size {
                g.add_road(&name(x, y), &name(x + 1, y), rng.gen_range(1.0..10.0))
                    .unwrap();
            }
            if y + 1 < size {
                g.add_road(&name(x, y), &name(x, y + 1), rng.gen_range(1.0..10.0))
                    .unwrap();
            }
        }
    }
    g
}

pub fn dijkstra_on_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_on_grid");
    for size in [10, 50, 100].iter() {
        let g = grid_graph(*size);
        let s = g.node_index("0/0").unwrap();
        let t = g.node_index(&format!("{0}/{0}", size - 1)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra.search(black_box(s), black_box(t));
            })
        });
    }
    group.finish();
}

pub fn route_on_grid(c: &mut Criterion) {
    let g = grid_graph(50);

    c.bench_with_input(BenchmarkId::new("route_on_grid", 50), &g, |b, g| {
        b.iter(|| compute_route(g, black_box("0/0"), black_box("49/49")))
    });
}
