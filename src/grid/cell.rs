use crate::{error::Error, path::Cost};
use std::{fmt, str::FromStr};

/// The id of a Marker. Markers are collected in increasing order, starting at `1`.
pub type MarkerId = u32;

/// The Cost of walking onto a Trap, unless configured otherwise.
pub const TRAP_COST: Cost = 99_999;

/// The Cost of walking onto a `.` Tile.
pub const DEFAULT_COST: Cost = 1;

/// The content of a single Tile on the [`Grid`](super::Grid)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
	/// open terrain with the Cost of stepping onto it (`.` or an integer)
	Empty(Cost),
	/// `#`, can never be walked over
	Wall,
	/// `T`, either solid or very expensive, depending on the [`Variant`](crate::neighbors::Variant)
	Trap,
	/// `P`, where the Agent starts
	Start,
	/// `Y<id>`, a Marker that has to be collected in order
	Marker(MarkerId),
	/// `E`, the final Goal once all Markers are collected
	Exit,
}

impl Cell {
	/// The Cost of stepping onto this Cell, with Traps at [`TRAP_COST`].
	///
	/// Start, Markers and the Exit are free, Walls have no Cost since they are solid.
	/// ```
	/// # use sequential_pathfinding::{Cell, grid::TRAP_COST};
	/// assert_eq!(Cell::Empty(7).cost(), Some(7));
	/// assert_eq!(Cell::Marker(3).cost(), Some(0));
	/// assert_eq!(Cell::Trap.cost(), Some(TRAP_COST));
	/// assert_eq!(Cell::Wall.cost(), None);
	/// ```
	pub fn cost(self) -> Option<Cost> {
		match self {
			Cell::Empty(cost) => Some(cost),
			Cell::Wall => None,
			Cell::Trap => Some(TRAP_COST),
			Cell::Start | Cell::Marker(_) | Cell::Exit => Some(0),
		}
	}

	/// `true` for `T`
	pub fn is_trap(self) -> bool {
		self == Cell::Trap
	}
}

impl FromStr for Cell {
	type Err = Error;

	fn from_str(token: &str) -> Result<Cell, Error> {
		match token {
			"P" => Ok(Cell::Start),
			"E" => Ok(Cell::Exit),
			"#" => Ok(Cell::Wall),
			"T" => Ok(Cell::Trap),
			"." => Ok(Cell::Empty(DEFAULT_COST)),
			_ => {
				if let Some(id) = token.strip_prefix('Y') {
					match parse_digits::<MarkerId>(id) {
						Some(id) if id > 0 => Ok(Cell::Marker(id)),
						_ => Err(Error::MalformedGrid(format!(
							"invalid marker `{}`, ids start at 1",
							token
						))),
					}
				} else {
					parse_digits::<Cost>(token)
						.map(Cell::Empty)
						.ok_or_else(|| Error::MalformedGrid(format!("unknown token `{}`", token)))
				}
			}
		}
	}
}

/// plain decimal digits only, no sign
fn parse_digits<N: FromStr>(digits: &str) -> Option<N> {
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	digits.parse().ok()
}

/// Writes the token of the Cell.
///
/// `.` and `1` are the same Cell, which is always written as `.`:
/// ```
/// # use sequential_pathfinding::Cell;
/// assert_eq!("1".parse::<Cell>().unwrap().to_string(), ".");
/// assert_eq!("5".parse::<Cell>().unwrap().to_string(), "5");
/// ```
impl fmt::Display for Cell {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Cell::Empty(DEFAULT_COST) => write!(fmt, "."),
			Cell::Empty(cost) => write!(fmt, "{}", cost),
			Cell::Wall => write!(fmt, "#"),
			Cell::Trap => write!(fmt, "T"),
			Cell::Start => write!(fmt, "P"),
			Cell::Marker(id) => write!(fmt, "Y{}", id),
			Cell::Exit => write!(fmt, "E"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_tokens() {
		assert_eq!("P".parse(), Ok(Cell::Start));
		assert_eq!("E".parse(), Ok(Cell::Exit));
		assert_eq!("#".parse(), Ok(Cell::Wall));
		assert_eq!("T".parse(), Ok(Cell::Trap));
		assert_eq!(".".parse(), Ok(Cell::Empty(1)));
		assert_eq!("0".parse(), Ok(Cell::Empty(0)));
		assert_eq!("12".parse(), Ok(Cell::Empty(12)));
		assert_eq!("Y1".parse(), Ok(Cell::Marker(1)));
		assert_eq!("Y17".parse(), Ok(Cell::Marker(17)));
	}

	#[test]
	fn reject_tokens() {
		for token in ["Y0", "Y", "Yx", "Y+3", "-3", "+5", " 4", "X", ""] {
			assert!(
				matches!(token.parse::<Cell>(), Err(Error::MalformedGrid(_))),
				"token {:?} should be rejected",
				token
			);
		}
	}

	#[test]
	fn display_round_trip() {
		for token in ["P", "E", "#", "T", ".", "4", "Y3"] {
			let cell: Cell = token.parse().unwrap();
			assert_eq!(cell.to_string(), token);
		}
		assert_eq!("1".parse::<Cell>().unwrap().to_string(), ".");
	}

	#[test]
	fn huge_costs() {
		let token = usize::MAX.to_string();
		assert_eq!(token.parse(), Ok(Cell::Empty(usize::MAX)));
		assert!(matches!(
			format!("{}0", token).parse::<Cell>(),
			Err(Error::MalformedGrid(_))
		));
	}
}
