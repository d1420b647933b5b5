//! The five search Strategies.
//!
//! All Strategies run the same routine and only differ in the order in which discovered Nodes
//! are expanded:
//!
//! | Strategy | Frontier | Traps (default) | Guarantee |
//! |----------|----------|-----------------|-----------|
//! | BFS      | FIFO Queue | solid | fewest steps |
//! | DFS      | LIFO Stack | solid | none |
//! | UCS      | lowest Cost so far | expensive | cheapest Path |
//! | GBFS     | lowest Heuristic | expensive | none |
//! | A*       | lowest Cost + Heuristic | expensive | cheapest Path, if the Heuristic is admissible |
//!
//! Ties are always broken in favor of the Node that was discovered first, and Neighbors are
//! discovered in the order north, east, south, west.

mod engine;
mod frontier;
mod node_list;

use self::engine::best_first;
use self::frontier::{Key, PriorityQueue, Queue, Stack};
use crate::{
	config::SearchConfig,
	error::Error,
	grid::Grid,
	neighbors::{NeighborExpander, Neighborhood, Variant},
	path::{Cost, Path},
	Point,
};

use log::debug;
use std::{fmt, str::FromStr};

/// A search Strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Breadth-First Search (`"BFS"`)
	Bfs,
	/// Depth-First Search (`"DFS"`)
	Dfs,
	/// Uniform-Cost Search (`"UCS"`)
	Ucs,
	/// Greedy Best-First Search (`"GBFS"`)
	Gbfs,
	/// A* Search (`"A*"`)
	AStar,
}

impl Strategy {
	/// All Strategies, uninformed ones first
	pub const ALL: [Strategy; 5] = [
		Strategy::Bfs,
		Strategy::Dfs,
		Strategy::Ucs,
		Strategy::Gbfs,
		Strategy::AStar,
	];

	/// The [`Variant`] this Strategy belongs to
	pub fn variant(self) -> Variant {
		match self {
			Strategy::Bfs | Strategy::Dfs => Variant::Uninformed,
			Strategy::Ucs | Strategy::Gbfs | Strategy::AStar => Variant::Costed,
		}
	}

	/// The tag of this Strategy, as accepted by [`FromStr`]
	pub fn tag(self) -> &'static str {
		match self {
			Strategy::Bfs => "BFS",
			Strategy::Dfs => "DFS",
			Strategy::Ucs => "UCS",
			Strategy::Gbfs => "GBFS",
			Strategy::AStar => "A*",
		}
	}
}

impl FromStr for Strategy {
	type Err = Error;

	/// ```
	/// # use sequential_pathfinding::{Error, Strategy};
	/// assert_eq!("A*".parse(), Ok(Strategy::AStar));
	/// assert_eq!("GBFS".parse(), Ok(Strategy::Gbfs));
	/// assert_eq!("dijkstra".parse::<Strategy>(), Err(Error::InvalidStrategy("dijkstra".into())));
	/// ```
	fn from_str(tag: &str) -> Result<Strategy, Error> {
		Strategy::ALL
			.into_iter()
			.find(|strategy| strategy.tag() == tag)
			.ok_or_else(|| Error::InvalidStrategy(tag.to_owned()))
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.write_str(self.tag())
	}
}

/// The outcome of a single search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
	/// The Path from start to goal, or `None` if the goal is unreachable
	pub path: Option<Path<Point>>,
	/// The number of discovered but unexpanded Nodes when the search ended
	pub frontier: usize,
	/// The expanded Nodes in the order they were expanded, including start and goal
	pub explored: Vec<Point>,
}

impl SearchResult {
	pub(crate) fn not_found(frontier: usize, explored: Vec<Point>) -> SearchResult {
		SearchResult {
			path: None,
			frontier,
			explored,
		}
	}

	/// `true` if a Path was found
	pub fn is_found(&self) -> bool {
		self.path.is_some()
	}

	/// The Cost of the Path, or `0` if there is none
	pub fn cost(&self) -> Cost {
		self.path.as_ref().map_or(0, |path| path.cost)
	}

	/// The number of expanded Nodes
	pub fn explored_count(&self) -> usize {
		self.explored.len()
	}
}

/// Searches a Path from `start` to `goal` with the given `strategy`.
///
/// The `expander` decides which Tiles are walkable and what stepping on them costs. Note that
/// it is used as is: [`SearchConfig::variant`] and [`SearchConfig::trap_cost`] only apply to
/// expanders built by [`search_grid`] or the [`TourPlanner`](crate::TourPlanner).
///
/// If the goal cannot be reached, the [`SearchResult`] has no Path and the counts of the
/// exhausted search.
///
/// ## Examples
/// ```
/// use sequential_pathfinding::{neighbors::{NeighborExpander, TrapPolicy}, prelude::*};
///
/// let grid: Grid = "
///     P . . .
///     . # # .
///     . # E .
///     . . . .
/// "
/// .parse()
/// .unwrap();
/// let expander = NeighborExpander::new(&grid, TrapPolicy::Impassable);
/// let config = SearchConfig::default();
///
/// let bfs = search(Strategy::Bfs, &expander, (0, 0), (2, 2), &config);
/// let dfs = search(Strategy::Dfs, &expander, (0, 0), (2, 2), &config);
///
/// let expected = vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (2, 2)];
/// assert_eq!(bfs.path.unwrap().path, expected);
/// assert_eq!(dfs.path.unwrap().path, expected);
///
/// // BFS spreads out evenly, DFS runs around the wall first
/// assert_eq!(bfs.explored.len(), 13);
/// assert_eq!(&dfs.explored[..7], &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3)]);
/// assert_eq!(dfs.explored.len(), 12);
/// ```
pub fn search<N: Neighborhood>(
	strategy: Strategy,
	expander: &NeighborExpander<'_, N>,
	start: Point,
	goal: Point,
	config: &SearchConfig,
) -> SearchResult {
	let result = match strategy {
		Strategy::Bfs => best_first(expander, Queue::default(), start, goal, config),
		Strategy::Dfs => best_first(expander, Stack::default(), start, goal, config),
		Strategy::Ucs => best_first(expander, PriorityQueue::new(Key::Cost), start, goal, config),
		Strategy::Gbfs => best_first(
			expander,
			PriorityQueue::new(Key::Estimate),
			start,
			goal,
			config,
		),
		Strategy::AStar => best_first(
			expander,
			PriorityQueue::new(Key::CostPlusEstimate),
			start,
			goal,
			config,
		),
	};
	debug!(
		"{} {:?} -> {:?}: cost {:?}, frontier {}, explored {}",
		strategy,
		start,
		goal,
		result.path.as_ref().map(|path| path.cost),
		result.frontier,
		result.explored.len()
	);
	result
}

/// Searches a Path on `grid`, with Traps handled according to `config` and `strategy`.
///
/// See [`search`].
pub fn search_grid(
	grid: &Grid,
	strategy: Strategy,
	start: Point,
	goal: Point,
	config: &SearchConfig,
) -> SearchResult {
	let expander = NeighborExpander::new(grid, config.trap_policy(strategy));
	search(strategy, &expander, start, goal, config)
}
