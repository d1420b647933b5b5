extern crate sequential_pathfinding;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use sequential_pathfinding::prelude::*;

/// An open Grid with the Start in one corner, the Exit in the opposite one and the Markers
/// spread along the diagonal.
fn uniform_grid(size: usize, markers: usize) -> Grid {
    let mut rows = vec![vec![".".to_string(); size]; size];
    place_goals(&mut rows, markers);
    Grid::parse(rows).unwrap()
}

/// Like [`uniform_grid`], but every Tile gets a random Cost, and some become Walls or Traps.
///
/// The Goals and their direct Neighbors stay open, so every Leg has a way out.
fn random_grid(size: usize, markers: usize) -> Grid {
    let mut rng = WyRand::new_seed(4);
    let mut rows: Vec<Vec<String>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.generate_range(0_u32..20) {
                    0 => "#".to_string(),
                    1 => "T".to_string(),
                    cost => (cost % 10).to_string(),
                })
                .collect()
        })
        .collect();
    for pos in goal_positions(size, markers) {
        for (row, col) in [pos, (pos.0.saturating_sub(1), pos.1), (pos.0, pos.1.saturating_sub(1))] {
            rows[row][col] = "1".to_string();
        }
    }
    place_goals(&mut rows, markers);
    Grid::parse(rows).unwrap()
}

fn goal_positions(size: usize, markers: usize) -> Vec<(usize, usize)> {
    (0..markers + 2)
        .map(|i| {
            let pos = i * (size - 1) / (markers + 1);
            (pos, pos)
        })
        .collect()
}

fn place_goals(rows: &mut [Vec<String>], markers: usize) {
    let size = rows.len();
    let positions = goal_positions(size, markers);
    let last = positions.len() - 1;
    for (i, (row, col)) in positions.into_iter().enumerate() {
        rows[row][col] = match i {
            0 => "P".to_string(),
            i if i == last => "E".to_string(),
            i => format!("Y{}", i),
        };
    }
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "warn") // Change this to debug to see every Tour, or trace to see every expansion.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_plan_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("Plan Tour");

    init();

    let grids = [
        ("Uniform", 64, uniform_grid(64, 4)),
        ("Random", 64, random_grid(64, 4)),
    ];
    for (name, size, grid) in grids.iter() {
        let planner = TourPlanner::new(grid, SearchConfig::default());
        for strategy in Strategy::ALL {
            let id = format!(
                "{}, {} Map, Map Size: ({}, {}), Markers: {}",
                strategy,
                name,
                size,
                size,
                grid.marker_count()
            );
            group.bench_function(&id, |b| b.iter(|| planner.plan(strategy)));
        }
    }

    // For large maps, use a smaller sample size so they don't take 30+s per run.
    group.sample_size(10);

    let size = 512;
    let grid = random_grid(size, 8);
    let planner = TourPlanner::new(&grid, SearchConfig::default());
    for strategy in [Strategy::Ucs, Strategy::AStar] {
        let id = format!(
            "{}, Large Random Map, Map Size: ({}, {}), Markers: {}",
            strategy,
            size,
            size,
            grid.marker_count()
        );
        group.bench_function(&id, |b| b.iter(|| planner.plan(strategy)));
    }
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compare Strategies");
    group.sample_size(10);

    let size = 256;
    let grid = random_grid(size, 6);
    let planner = TourPlanner::new(&grid, SearchConfig::default());

    #[cfg(feature = "parallel")]
    let id = format!(
        "All Strategies, Random Map, Parallel, Map Size: ({}, {})",
        size, size
    );
    #[cfg(not(feature = "parallel"))]
    let id = format!(
        "All Strategies, Random Map, Single Threaded, Map Size: ({}, {})",
        size, size
    );
    group.bench_function(&id, |b| b.iter(|| planner.compare(&Strategy::ALL)));
}

criterion_group!(benches, bench_plan_tour, bench_compare);
criterion_main!(benches);
