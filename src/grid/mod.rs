//! The Grid the Agent walks on.

mod cell;
pub use self::cell::{Cell, MarkerId, DEFAULT_COST, TRAP_COST};

use crate::{
	error::{Error, Result},
	path::Cost,
	Point,
};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// A square Grid of [`Cell`]s with exactly one Start and one Exit.
///
/// The Grid is immutable once parsed.
///
/// ## Examples
/// ```
/// use sequential_pathfinding::{Cell, Grid};
///
/// let grid = Grid::parse([
///     ["P", ".", "Y2"],
///     ["#", "T", "4"],
///     ["Y1", ".", "E"],
/// ])
/// .unwrap();
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.start_position(), (0, 0));
/// assert_eq!(grid.exit_position(), (2, 2));
/// assert_eq!(grid.marker_position(1), Some((2, 0)));
/// assert_eq!(grid.cell_at((1, 0)), Some(Cell::Wall));
/// assert_eq!(grid.cost_at((1, 2)), Some(4));
/// assert_eq!(grid.cost_at((1, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	size: usize,
	cells: Vec<Cell>,
	start: Point,
	exit: Point,
	markers: BTreeMap<MarkerId, Point>,
}

impl Grid {
	/// Parses a Grid from rows of tokens.
	///
	/// Tokens are `P` (start), `E` (exit), `#` (wall), `T` (trap), `.` or a non-negative
	/// integer (open terrain and its Cost) and `Y<id>` (Marker `id`, starting at 1).
	///
	/// Fails with [`Error::MalformedGrid`] if the Grid is empty or not square, if there is not
	/// exactly one Start and one Exit, if a Marker id is used twice or if a token is unknown.
	/// ```
	/// # use sequential_pathfinding::{Error, Grid};
	/// let missing_exit = Grid::parse([["P", "."], [".", "."]]);
	/// assert!(matches!(missing_exit, Err(Error::MalformedGrid(_))));
	///
	/// let not_square = Grid::parse(vec![vec!["P", ".", "E"], vec![".", ".", "."]]);
	/// assert!(matches!(not_square, Err(Error::MalformedGrid(_))));
	/// ```
	pub fn parse<I, R, T>(rows: I) -> Result<Grid>
	where
		I: IntoIterator<Item = R>,
		R: IntoIterator<Item = T>,
		T: AsRef<str>,
	{
		let rows = rows
			.into_iter()
			.map(|row| {
				row.into_iter()
					.map(|token| token.as_ref().trim().parse::<Cell>())
					.collect::<Result<Vec<Cell>>>()
			})
			.collect::<Result<Vec<Vec<Cell>>>>()?;

		let size = rows.len();
		if size == 0 {
			return Err(Error::MalformedGrid("the Grid is empty".into()));
		}

		let mut cells = Vec::with_capacity(size * size);
		let mut start = None;
		let mut exit = None;
		let mut markers = BTreeMap::new();

		for (row, row_cells) in rows.into_iter().enumerate() {
			if row_cells.len() != size {
				return Err(Error::MalformedGrid(format!(
					"row {} has {} cells, but the Grid has {} rows",
					row,
					row_cells.len(),
					size
				)));
			}
			for (col, cell) in row_cells.into_iter().enumerate() {
				let pos = (row, col);
				let duplicate = match cell {
					Cell::Start => start.replace(pos).is_some(),
					Cell::Exit => exit.replace(pos).is_some(),
					Cell::Marker(id) => markers.insert(id, pos).is_some(),
					_ => false,
				};
				if duplicate {
					return Err(Error::MalformedGrid(format!(
						"`{}` appears more than once, again at {:?}",
						cell, pos
					)));
				}
				cells.push(cell);
			}
		}

		let start =
			start.ok_or_else(|| Error::MalformedGrid("the Grid has no Start `P`".into()))?;
		let exit = exit.ok_or_else(|| Error::MalformedGrid("the Grid has no Exit `E`".into()))?;

		Ok(Grid {
			size,
			cells,
			start,
			exit,
			markers,
		})
	}

	/// The number of rows (and columns) of the Grid
	pub fn size(&self) -> usize {
		self.size
	}

	/// `true` if `pos` lies within the Grid
	pub fn contains(&self, pos: Point) -> bool {
		pos.0 < self.size && pos.1 < self.size
	}

	/// The Cell at `pos`, or `None` if `pos` is outside of the Grid
	pub fn cell_at(&self, pos: Point) -> Option<Cell> {
		if self.contains(pos) {
			Some(self.cells[pos.0 * self.size + pos.1])
		} else {
			None
		}
	}

	/// The Cost of stepping onto `pos`. See [`Cell::cost`].
	///
	/// Returns `None` for Walls and Points outside of the Grid.
	pub fn cost_at(&self, pos: Point) -> Option<Cost> {
		self.cell_at(pos).and_then(Cell::cost)
	}

	/// The position of Marker `id`, if the Grid has one
	pub fn marker_position(&self, id: MarkerId) -> Option<Point> {
		self.markers.get(&id).copied()
	}

	/// All Markers with their positions, ordered by id
	pub fn markers(&self) -> impl Iterator<Item = (MarkerId, Point)> + '_ {
		self.markers.iter().map(|(&id, &pos)| (id, pos))
	}

	/// The number of Markers on the Grid
	pub fn marker_count(&self) -> usize {
		self.markers.len()
	}

	/// Where the Agent starts (`P`)
	pub fn start_position(&self) -> Point {
		self.start
	}

	/// The final Goal (`E`)
	pub fn exit_position(&self) -> Point {
		self.exit
	}
}

impl FromStr for Grid {
	type Err = Error;

	/// Parses whitespace separated tokens, one row per non-empty line.
	fn from_str(s: &str) -> Result<Grid> {
		Grid::parse(
			s.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(str::split_whitespace),
		)
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for row in self.cells.chunks(self.size) {
			let mut cells = row.iter();
			if let Some(first) = cells.next() {
				write!(fmt, "{}", first)?;
			}
			for cell in cells {
				write!(fmt, " {}", cell)?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}
