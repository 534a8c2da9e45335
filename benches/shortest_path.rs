//! 最短路径基准
//!
//! 在网格图上比较 A*（曼哈顿距离）与 Dijkstra。

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphkit::algorithm::{AStar, CostTable};
use graphkit::{Graph, VertexId};

/// side x side 的无向网格，顶点标签为坐标，边权为 1
fn grid(side: i64) -> (Graph<(i64, i64), f64>, VertexId, VertexId) {
    let mut graph = Graph::undirected();
    let mut ids = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            ids.push(graph.add_vertex((x, y)));
        }
    }
    let at = |x: i64, y: i64| ids[(y * side + x) as usize];
    for y in 0..side {
        for x in 0..side {
            if x + 1 < side {
                graph.add_edge(at(x, y), at(x + 1, y), 1.0).unwrap();
            }
            if y + 1 < side {
                graph.add_edge(at(x, y), at(x, y + 1), 1.0).unwrap();
            }
        }
    }
    (graph, at(0, 0), at(side - 1, side - 1))
}

fn manhattan(a: &(i64, i64), b: &(i64, i64)) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}

fn edge_weight(w: &f64) -> f64 {
    *w
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path/grid");

    for side in [16, 48] {
        let (graph, source, target) = grid(side);

        group.bench_with_input(BenchmarkId::new("astar", side), &side, |b, _| {
            let solver = AStar::new(manhattan);
            b.iter(|| {
                let mut costs = CostTable::new();
                black_box(solver.shortest_path(&graph, source, target, &mut costs, &edge_weight))
            });
        });

        group.bench_with_input(BenchmarkId::new("dijkstra", side), &side, |b, _| {
            let solver = AStar::dijkstra();
            b.iter(|| {
                let mut costs = CostTable::new();
                black_box(solver.shortest_path(&graph, source, target, &mut costs, &edge_weight))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
