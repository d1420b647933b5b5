use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
	NORTH = 0,
	EAST = 1,
	SOUTH = 2,
	WEST = 3,
}
pub use self::Dir::*;

impl Dir {
	/// all Directions in exploration order
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
		[NORTH, EAST, SOUTH, WEST].iter().copied()
	}
	pub fn num(self) -> usize {
		self as usize
	}
}

const UNIT_CIRCLE: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

pub fn get_in_dir(pos: Point, dir: Dir, (rows, cols): (usize, usize)) -> Option<Point> {
	let diff = UNIT_CIRCLE[dir.num()];
	if (pos.0 == 0 && diff.0 < 0)
		|| (pos.1 == 0 && diff.1 < 0)
		|| (pos.0 + 1 >= rows && diff.0 > 0)
		|| (pos.1 + 1 >= cols && diff.1 > 0)
	{
		None
	} else {
		Some((
			(pos.0 as isize + diff.0) as usize,
			(pos.1 as isize + diff.1) as usize,
		))
	}
}
