//! Reveals the Goals of a Tour one at a time.

use crate::{
	grid::{Grid, MarkerId},
	Point,
};

/// Tracks the collected Markers and the single Goal that is currently revealed.
///
/// The revealed Goal is always
/// - the Marker with id `collected + 1`, if the Grid has one
/// - otherwise the Exit, if exactly all Markers were collected
/// - otherwise `None`: the sequence is exhausted
///
/// ## Examples
/// ```
/// use sequential_pathfinding::{GoalSequencer, Grid};
///
/// let grid: Grid = "P Y2 .\n. Y1 .\n. . E".parse().unwrap();
/// let mut goals = GoalSequencer::new(&grid);
///
/// assert_eq!(goals.current_goal(), Some((1, 1)));
/// assert_eq!(goals.advance(), Some((0, 1)));
/// assert_eq!(goals.advance(), Some((2, 2)));
/// assert_eq!(goals.advance(), None);
/// assert!(goals.is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct GoalSequencer<'a> {
	grid: &'a Grid,
	collected: usize,
	revealed: Option<Point>,
}

impl<'a> GoalSequencer<'a> {
	/// Creates a GoalSequencer with no Markers collected yet
	pub fn new(grid: &'a Grid) -> Self {
		GoalSequencer {
			grid,
			collected: 0,
			revealed: reveal(grid, 0),
		}
	}

	/// The currently revealed Goal
	pub fn current_goal(&self) -> Option<Point> {
		self.revealed
	}

	/// The number of completed Legs
	pub fn collected(&self) -> usize {
		self.collected
	}

	/// `true` once there is nothing left to reveal
	pub fn is_exhausted(&self) -> bool {
		self.revealed.is_none()
	}

	/// `true` if `pos` is the revealed Goal
	pub fn goal_test(&self, pos: Point) -> bool {
		self.revealed == Some(pos)
	}

	/// Marks the revealed Goal as reached and reveals the next one.
	///
	/// Has to be called exactly once per completed Leg.
	pub fn advance(&mut self) -> Option<Point> {
		self.collected += 1;
		self.revealed = reveal(self.grid, self.collected);
		self.revealed
	}
}

fn reveal(grid: &Grid, collected: usize) -> Option<Point> {
	MarkerId::try_from(collected + 1)
		.ok()
		.and_then(|id| grid.marker_position(id))
		.or_else(|| (collected == grid.marker_count()).then(|| grid.exit_position()))
}
