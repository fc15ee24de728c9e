use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

use waypath_lib::{
    astar, load_map, manhattan, plan_route, Cell, GridGraph, RouteRequest, WaypointGraph,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/harbor_map.json")
}

static MAP: Lazy<WaypointGraph> = Lazy::new(|| load_map(&fixture_path()).expect("fixture loads"));

static MAZE: Lazy<GridGraph> = Lazy::new(|| {
    let mut grid = GridGraph::open(64, 64);
    // Horizontal walls every fourth row, each with a single gap, so the
    // search has to snake across the whole grid.
    for y in (2..64).step_by(4) {
        for x in 0..64 {
            grid.set_blocked(Cell::new(x, y), true);
        }
        grid.set_blocked(Cell::new((y * 7) % 64, y), false);
    }
    grid
});

fn benchmark_pathfinding(c: &mut Criterion) {
    c.bench_function("astar_harbor_summit", |b| {
        let map = &*MAP;
        let request = RouteRequest::astar("Harbor", "Summit");
        b.iter(|| {
            let plan = plan_route(map, &request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("dijkstra_harbor_summit", |b| {
        let map = &*MAP;
        let request = RouteRequest::dijkstra("Harbor", "Summit");
        b.iter(|| {
            let plan = plan_route(map, &request).expect("route exists");
            black_box(plan.total_cost)
        });
    });

    c.bench_function("astar_grid_maze", |b| {
        let maze = &*MAZE;
        let start = Cell::new(0, 0);
        let goal = Cell::new(63, 63);
        b.iter(|| {
            let path = astar(
                maze,
                start,
                goal,
                |g: &GridGraph, from, to| g.step_cost(from, to),
                |_, from, to| manhattan(from, to),
            );
            black_box(path.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
