//! Neighborhoods, Heuristics and the rules for which Tiles can be walked on.

use crate::{
	grid::{Cell, Grid},
	path::Cost,
	utils::{get_in_dir, Dir},
	Point,
};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// This Trait provides a function to query all neighboring Points of an existing Point and a
/// Heuristic for how long it might take to reach a goal from a Point.
///
/// The order in which the Neighbors are produced matters: the searches explore them in exactly
/// that order, so it decides between Paths of equal quality.
pub trait Neighborhood: Clone + Debug {
	/// Provides a list of Neighbors of a Point
	///
	/// Note that it is not necessary to check weather the Tile at a Point is solid or not.
	/// That check is done by the [`NeighborExpander`].
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
	/// Gives a Heuristic for how long it takes to reach `goal` from `point`.
	///
	/// This is usually the Distance between the two Points in the Metric of your Neighborhood.
	fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Neighbors are produced in the order north, east, south, west.
///
/// ```text
/// A: Agent, 1-4: reachable in one step, in that order
///   1
///   |
/// 4-A-2
///   |
///   3
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	rows: usize,
	cols: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, cols }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		target.extend(Dir::all().filter_map(|dir| get_in_dir(point, dir, (self.rows, self.cols))));
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
	}
}

/// The Heuristic used by GBFS and A*
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
	/// The Distance in the Metric of the [`Neighborhood`].
	///
	/// This is **not necessarily admissible**: Markers, the Start, the Exit and `0` Tiles
	/// can be crossed for free, so the actual Cost may be lower than the Distance.
	#[default]
	Manhattan,
	/// Always `0`. Admissible on every Grid, which makes A* behave like UCS.
	Zero,
}

/// How Traps are treated by the searches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrapPolicy {
	/// Traps are as solid as Walls
	Impassable,
	/// Traps can be walked over at the given Cost
	Costly(Cost),
}

/// The two flavors of the puzzle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
	/// BFS and DFS: Traps are solid, Costs are only reported
	Uninformed,
	/// UCS, GBFS and A*: Traps are passable at `trap_cost`
	Costed,
}

impl Variant {
	/// The [`TrapPolicy`] of this Variant
	/// ```
	/// # use sequential_pathfinding::neighbors::{TrapPolicy, Variant};
	/// assert_eq!(Variant::Uninformed.trap_policy(10), TrapPolicy::Impassable);
	/// assert_eq!(Variant::Costed.trap_policy(10), TrapPolicy::Costly(10));
	/// ```
	pub fn trap_policy(self, trap_cost: Cost) -> TrapPolicy {
		match self {
			Variant::Uninformed => TrapPolicy::Impassable,
			Variant::Costed => TrapPolicy::Costly(trap_cost),
		}
	}
}

/// Produces the walkable Neighbors of a Point on a [`Grid`].
///
/// Neighbors outside of the Grid and Walls are always excluded, Traps depending on the
/// [`TrapPolicy`].
///
/// ## Examples
/// ```
/// use sequential_pathfinding::{neighbors::{NeighborExpander, TrapPolicy}, Grid};
///
/// let grid: Grid = "
///     P . #
///     T . .
///     . Y1 E
/// "
/// .parse()
/// .unwrap();
///
/// let mut neighbors = vec![];
///
/// let expander = NeighborExpander::new(&grid, TrapPolicy::Impassable);
/// expander.neighbors((1, 1), &mut neighbors);
/// assert_eq!(neighbors, vec![(0, 1), (1, 2), (2, 1)]);
///
/// let expander = NeighborExpander::new(&grid, TrapPolicy::Costly(50));
/// expander.neighbors((1, 1), &mut neighbors);
/// assert_eq!(neighbors, vec![(0, 1), (1, 2), (2, 1), (1, 0)]);
/// assert_eq!(expander.step_cost((1, 0)), Some(50));
/// ```
#[derive(Clone, Debug)]
pub struct NeighborExpander<'a, N: Neighborhood = ManhattanNeighborhood> {
	grid: &'a Grid,
	neighborhood: N,
	traps: TrapPolicy,
}

impl<'a> NeighborExpander<'a> {
	/// Creates a NeighborExpander moving along the 4 cardinal directions
	pub fn new(grid: &'a Grid, traps: TrapPolicy) -> Self {
		let neighborhood = ManhattanNeighborhood::new(grid.size(), grid.size());
		NeighborExpander::with_neighborhood(grid, neighborhood, traps)
	}
}

impl<'a, N: Neighborhood> NeighborExpander<'a, N> {
	/// Creates a NeighborExpander with a custom [`Neighborhood`]
	pub fn with_neighborhood(grid: &'a Grid, neighborhood: N, traps: TrapPolicy) -> Self {
		NeighborExpander {
			grid,
			neighborhood,
			traps,
		}
	}

	/// The Grid this expander walks on
	pub fn grid(&self) -> &'a Grid {
		self.grid
	}

	/// How Traps are treated
	pub fn traps(&self) -> TrapPolicy {
		self.traps
	}

	/// The Cost of stepping onto `point`, or `None` if it cannot be walked on.
	pub fn step_cost(&self, point: Point) -> Option<Cost> {
		match self.grid.cell_at(point)? {
			Cell::Trap => match self.traps {
				TrapPolicy::Impassable => None,
				TrapPolicy::Costly(cost) => Some(cost),
			},
			cell => cell.cost(),
		}
	}

	/// `true` if `point` can be walked on
	pub fn is_passable(&self, point: Point) -> bool {
		self.step_cost(point).is_some()
	}

	/// Replaces the content of `target` with the walkable Neighbors of `point`, in the order of
	/// the [`Neighborhood`].
	pub fn neighbors(&self, point: Point, target: &mut Vec<Point>) {
		target.clear();
		self.neighborhood.get_all_neighbors(point, target);
		target.retain(|&other| self.is_passable(other));
	}

	/// The estimated Cost from `point` to `goal`
	pub fn estimate(&self, heuristic: Heuristic, point: Point, goal: Point) -> Cost {
		match heuristic {
			Heuristic::Manhattan => self.neighborhood.heuristic(point, goal),
			Heuristic::Zero => 0,
		}
	}

	/// `true` if `to` is one of the walkable Neighbors of `from`
	pub fn is_valid_step(&self, from: Point, to: Point) -> bool {
		let mut neighbors = Vec::with_capacity(4);
		self.neighbors(from, &mut neighbors);
		neighbors.contains(&to)
	}

	/// The Cost of walking along `steps`, or `None` if any step is not a valid Neighbor
	/// transition.
	///
	/// The first Point is free, every following Point costs its [`step_cost`](Self::step_cost).
	/// ```
	/// # use sequential_pathfinding::{neighbors::{NeighborExpander, TrapPolicy}, Grid};
	/// let grid: Grid = "P 3 #\n. 4 .\nE . .".parse().unwrap();
	/// let expander = NeighborExpander::new(&grid, TrapPolicy::Impassable);
	///
	/// assert_eq!(expander.path_cost(&[(0, 0), (0, 1), (1, 1)]), Some(7));
	/// assert_eq!(expander.path_cost(&[(0, 0), (1, 1)]), None);
	/// assert_eq!(expander.path_cost(&[(0, 1), (0, 2)]), None);
	/// ```
	pub fn path_cost(&self, steps: &[Point]) -> Option<Cost> {
		if !self.is_passable(*steps.first()?) {
			return None;
		}
		steps.windows(2).try_fold(0, |cost, step| {
			if self.is_valid_step(step[0], step[1]) {
				Some(Cost::saturating_add(cost, self.step_cost(step[1])?))
			} else {
				None
			}
		})
	}
}
