//! Checks that hold on any Grid, run on randomly generated ones.

use nanorand::{Rng, WyRand};
use sequential_pathfinding::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_grid(rng: &mut WyRand) -> Grid {
    let size = rng.generate_range(3_usize..=8);
    let mut rows: Vec<Vec<String>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.generate_range(0_u32..10) {
                    0 | 1 => "#".to_string(),
                    2 => "T".to_string(),
                    3..=5 => ".".to_string(),
                    _ => rng.generate_range(0_u32..10).to_string(),
                })
                .collect()
        })
        .collect();

    let mut positions: Vec<Point> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    rng.shuffle(&mut positions);

    let markers = rng.generate_range(0_usize..=3);
    let mut tokens = vec!["P".to_string(), "E".to_string()];
    tokens.extend((1..=markers).map(|id| format!("Y{}", id)));
    for (token, (row, col)) in tokens.into_iter().zip(positions) {
        rows[row][col] = token;
    }
    Grid::parse(rows).unwrap()
}

fn grids() -> impl Iterator<Item = Grid> {
    let mut rng = WyRand::new_seed(4);
    (0..300).map(move |_| random_grid(&mut rng))
}

#[test]
fn tours_are_walkable() {
    init();
    for grid in grids() {
        let config = SearchConfig::default();
        let planner = TourPlanner::new(&grid, config);
        for strategy in Strategy::ALL {
            let Some(tour) = planner.plan(strategy) else {
                continue;
            };
            let expander = NeighborExpander::new(&grid, config.trap_policy(strategy));

            assert_eq!(tour.path.first(), Some(&grid.start_position()), "{}\n{}", strategy, grid);
            assert_eq!(tour.path.last(), Some(&grid.exit_position()), "{}\n{}", strategy, grid);
            assert_eq!(
                expander.path_cost(&tour.path),
                Some(tour.cost()),
                "{}\n{}",
                strategy,
                grid
            );

            let goals: Vec<Point> = tour.legs.iter().map(|leg| leg.to).collect();
            let mut expected: Vec<Point> = grid.markers().map(|(_, pos)| pos).collect();
            expected.push(grid.exit_position());
            assert_eq!(goals, expected, "{}\n{}", strategy, grid);

            let mut remaining = goals.iter().peekable();
            for pos in tour.path.iter() {
                if remaining.peek() == Some(&pos) {
                    remaining.next();
                }
            }
            assert_eq!(remaining.next(), None, "{}\n{}", strategy, grid);
        }
    }
}

#[test]
fn bfs_takes_fewest_steps() {
    init();
    for grid in grids() {
        let planner = TourPlanner::new(&grid, SearchConfig::UNINFORMED_TERRAIN);
        let bfs = planner.plan(Strategy::Bfs);
        for strategy in Strategy::ALL {
            let other = planner.plan(strategy);
            assert_eq!(other.is_some(), bfs.is_some(), "{}\n{}", strategy, grid);

            let (Some(bfs), Some(other)) = (&bfs, other) else {
                continue;
            };
            for (bfs_leg, leg) in bfs.legs.iter().zip(&other.legs) {
                assert!(bfs_leg.steps <= leg.steps, "{}\n{}", strategy, grid);
            }
        }
    }
}

#[test]
fn ucs_is_cheapest() {
    init();
    for grid in grids() {
        let planner = TourPlanner::new(&grid, SearchConfig::default());
        let ucs = planner.plan(Strategy::Ucs);
        for strategy in [Strategy::Gbfs, Strategy::AStar] {
            let other = planner.plan(strategy);
            assert_eq!(other.is_some(), ucs.is_some(), "{}\n{}", strategy, grid);

            let (Some(ucs), Some(other)) = (&ucs, other) else {
                continue;
            };
            for (ucs_leg, leg) in ucs.legs.iter().zip(&other.legs) {
                assert!(ucs_leg.cost <= leg.cost, "{}\n{}", strategy, grid);
            }
        }
    }
}

#[test]
fn admissible_a_star_is_optimal() {
    init();
    for grid in grids() {
        let planner = TourPlanner::new(&grid, SearchConfig::ADMISSIBLE);
        let ucs = planner.plan(Strategy::Ucs);
        let a_star = planner.plan(Strategy::AStar);
        assert_eq!(
            ucs.as_ref().map(Tour::cost),
            a_star.as_ref().map(Tour::cost),
            "\n{}",
            grid
        );
    }
}

#[test]
fn repeated_plans_agree() {
    init();
    for grid in grids().take(50) {
        let planner = TourPlanner::new(&grid, SearchConfig::default());
        let first = planner.compare(&Strategy::ALL);
        let second = planner.compare(&Strategy::ALL);
        assert_eq!(first, second, "\n{}", grid);
    }
}
