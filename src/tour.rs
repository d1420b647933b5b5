//! Chains the searches of all Legs into a complete Tour.

use crate::{
	config::SearchConfig,
	error::Result,
	goals::GoalSequencer,
	grid::Grid,
	neighbors::NeighborExpander,
	path::{Cost, Path},
	search::{search, SearchResult, Strategy},
	Point,
};

use log::{debug, warn};
use std::fmt;

/// The statistics of a single search between two consecutive Goals
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg {
	/// where the Leg starts
	pub from: Point,
	/// the Goal of the Leg
	pub to: Point,
	/// the size of the Frontier when the Goal was found
	pub frontier: usize,
	/// the number of expanded Nodes
	pub explored: usize,
	/// the Cost of the Path of this Leg
	pub cost: Cost,
	/// the number of steps in the Path of this Leg
	pub steps: usize,
}

impl Leg {
	fn new(from: Point, to: Point, result: &SearchResult, path: &Path<Point>) -> Leg {
		Leg {
			from,
			to,
			frontier: result.frontier,
			explored: result.explored.len(),
			cost: path.cost,
			steps: path.steps(),
		}
	}
}

/// A complete walk from the Start over all Markers to the Exit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
	/// the Strategy used for every Leg
	pub strategy: Strategy,
	/// the full Path, where consecutive Legs share their junction Point only once
	pub path: Path<Point>,
	/// the sum of the Frontier sizes of all Legs
	pub frontier: usize,
	/// the sum of the expanded Nodes of all Legs
	pub explored: usize,
	/// the individual Legs, in order
	pub legs: Vec<Leg>,
}

impl Tour {
	fn new(strategy: Strategy) -> Tour {
		Tour {
			strategy,
			path: Path::new(vec![], 0),
			frontier: 0,
			explored: 0,
			legs: vec![],
		}
	}

	/// The total Cost of all Legs
	pub fn cost(&self) -> Cost {
		self.path.cost
	}

	fn add_leg(&mut self, leg: Leg, path: &Path<Point>) {
		self.path.join(path);
		self.frontier += leg.frontier;
		self.explored += leg.explored;
		self.legs.push(leg);
	}
}

impl fmt::Display for Tour {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		writeln!(fmt, "Path: {:?}", &self.path.path)?;
		writeln!(fmt, "Total Frontier Nodes: {}", self.frontier)?;
		writeln!(fmt, "Total Explored Nodes: {}", self.explored)?;
		write!(fmt, "Total Cost: {}", self.cost())
	}
}

/// Plans Tours over a [`Grid`].
///
/// Every call to [`plan`](TourPlanner::plan) starts with a fresh [`GoalSequencer`], so planning
/// the same Strategy twice gives the same Tour.
///
/// ## Examples
/// ```
/// use sequential_pathfinding::prelude::*;
///
/// let grid: Grid = "
///     P . #
///     ## Y1 .
///     E . .
/// "
/// .parse()
/// .unwrap();
/// let planner = TourPlanner::new(&grid, SearchConfig::default());
///
/// let tour = planner.plan(Strategy::Bfs).unwrap();
/// assert_eq!(tour.path.path, vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]);
/// assert_eq!(tour.legs.len(), 2);
///
/// assert_eq!(
///     tour.to_string(),
///     "Path: [(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]\n\
///      Total Frontier Nodes: 0\n\
///      Total Explored Nodes: 10\n\
///      Total Cost: 2"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TourPlanner<'a> {
	grid: &'a Grid,
	config: SearchConfig,
}

impl<'a> TourPlanner<'a> {
	/// Creates a TourPlanner for `grid`
	pub fn new(grid: &'a Grid, config: SearchConfig) -> Self {
		TourPlanner { grid, config }
	}

	/// The Grid Tours are planned on
	pub fn grid(&self) -> &'a Grid {
		self.grid
	}

	/// The options used for every search
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Plans the Tour Start → Marker 1 → ... → Marker K → Exit using `strategy` for every Leg.
	///
	/// Returns `None` if any Leg has no Path, or if the Markers have a gap so that the Exit is
	/// never revealed. There are no partial Tours.
	pub fn plan(&self, strategy: Strategy) -> Option<Tour> {
		let expander = NeighborExpander::new(self.grid, self.config.trap_policy(strategy));
		let mut goals = GoalSequencer::new(self.grid);
		let mut current = self.grid.start_position();
		let mut tour = Tour::new(strategy);

		while let Some(goal) = goals.current_goal() {
			let result = search(strategy, &expander, current, goal, &self.config);
			let Some(path) = result.path.as_ref() else {
				warn!(
					"{}: no path from {:?} to {:?} after {} collected goals",
					strategy,
					current,
					goal,
					goals.collected()
				);
				return None;
			};
			tour.add_leg(Leg::new(current, goal, &result, path), path);

			goals.advance();
			current = goal;
		}

		if current != self.grid.exit_position() {
			warn!(
				"{}: the goals ran out after {} legs, Marker {} is missing",
				strategy,
				goals.collected(),
				goals.collected() + 1
			);
			return None;
		}

		debug!(
			"{}: tour of {} legs, cost {}, frontier {}, explored {}",
			strategy,
			tour.legs.len(),
			tour.cost(),
			tour.frontier,
			tour.explored
		);
		Some(tour)
	}

	/// Like [`plan`](TourPlanner::plan), with the Strategy given as its tag
	/// (`"BFS"`, `"DFS"`, `"UCS"`, `"GBFS"` or `"A*"`).
	///
	/// An unknown tag fails with [`Error::InvalidStrategy`](crate::Error::InvalidStrategy)
	/// before anything is searched.
	pub fn plan_named(&self, tag: &str) -> Result<Option<Tour>> {
		let strategy: Strategy = tag.parse()?;
		Ok(self.plan(strategy))
	}

	/// Plans one independent Tour per Strategy.
	///
	/// With the `parallel` feature the Tours are planned on the rayon thread pool. The Legs
	/// within a Tour are always searched one after the other.
	/// ```
	/// # use sequential_pathfinding::prelude::*;
	/// let grid: Grid = "P . .\n. # .\n. Y1 E".parse().unwrap();
	/// let planner = TourPlanner::new(&grid, SearchConfig::default());
	///
	/// let tours = planner.compare(&Strategy::ALL);
	/// assert_eq!(tours.len(), 5);
	/// for (strategy, tour) in tours {
	///     assert_eq!(tour, planner.plan(strategy));
	/// }
	/// ```
	pub fn compare(&self, strategies: &[Strategy]) -> Vec<(Strategy, Option<Tour>)> {
		#[cfg(feature = "parallel")]
		{
			use rayon::prelude::*;
			strategies
				.par_iter()
				.map(|&strategy| (strategy, self.plan(strategy)))
				.collect()
		}
		#[cfg(not(feature = "parallel"))]
		{
			strategies
				.iter()
				.map(|&strategy| (strategy, self.plan(strategy)))
				.collect()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	#[test]
	fn legs_add_up() {
		let grid: Grid = "
			P . . # Y2
			# T . # .
			. . Y1 . .
			# . . T .
			. . . . E
		"
		.parse()
		.unwrap();
		let tour = TourPlanner::new(&grid, SearchConfig::default())
			.plan(Strategy::Bfs)
			.unwrap();

		let ends: Vec<_> = tour.legs.iter().map(|leg| (leg.from, leg.to)).collect();
		assert_eq!(ends, vec![((0, 0), (2, 2)), ((2, 2), (0, 4)), ((0, 4), (4, 4))]);
		assert_eq!(
			tour.legs.iter().map(|leg| leg.frontier).sum::<usize>(),
			tour.frontier
		);
		assert_eq!(
			tour.legs.iter().map(|leg| leg.explored).sum::<usize>(),
			tour.explored
		);
		assert_eq!(tour.legs.iter().map(|leg| leg.cost).sum::<Cost>(), tour.cost());
		assert_eq!(
			tour.legs.iter().map(|leg| leg.steps).sum::<usize>(),
			tour.path.steps()
		);
	}

	#[test]
	fn only_exit() {
		let grid: Grid = "P 4\n3 E".parse().unwrap();
		let tour = TourPlanner::new(&grid, SearchConfig::default())
			.plan(Strategy::Ucs)
			.unwrap();
		assert_eq!(tour.path.path, vec![(0, 0), (1, 0), (1, 1)]);
		assert_eq!(tour.cost(), 3);
		assert_eq!(tour.legs.len(), 1);
	}

	#[test]
	fn marker_gap() {
		let grid: Grid = "P Y1 Y3\n. . .\n. . E".parse().unwrap();
		let planner = TourPlanner::new(&grid, SearchConfig::default());
		for strategy in Strategy::ALL {
			assert_eq!(planner.plan(strategy), None);
		}
	}

	#[test]
	fn invalid_tag() {
		let grid: Grid = "P .\n. E".parse().unwrap();
		let planner = TourPlanner::new(&grid, SearchConfig::default());
		assert_eq!(
			planner.plan_named("IDDFS"),
			Err(Error::InvalidStrategy("IDDFS".into()))
		);
		assert!(planner.plan_named("DFS").unwrap().is_some());
	}
}
