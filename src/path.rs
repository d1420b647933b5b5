//! The Path type returned by all searches.

/// a Type to represent the Cost of traversing a Tile
pub type Cost = usize;

/// A generic implementation of a Path
///
/// Stores a sequence of Nodes in `path` and the total Cost of traversing these Nodes in `cost`.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	/// the Path
	pub path: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use sequential_pathfinding::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 42);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// The number of steps (edges) in the Path
	/// ```
	/// # use sequential_pathfinding::Path;
	/// assert_eq!(Path::new(vec!['a', 'b', 'c'], 42).steps(), 2);
	/// assert_eq!(Path::new(vec!['a'], 0).steps(), 0);
	/// ```
	pub fn steps(&self) -> usize {
		self.path.len().saturating_sub(1)
	}

	/// Continues the Path with `other`, which has to start where this Path ends.
	///
	/// The shared junction Node is only kept once and the Costs are added up.
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use sequential_pathfinding::Path;
	/// let mut path = Path::new(vec!['a', 'b', 'c'], 42);
	/// path.join(&Path::new(vec!['c', 'd'], 5));
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c', 'd']);
	/// assert_eq!(path.cost, 47);
	/// ```
	pub fn join(&mut self, other: &Path<P>) -> &mut Self
	where
		P: Clone + PartialEq,
	{
		debug_assert!(
			self.path.is_empty() || self.path.last() == other.path.first(),
			"joined Paths must share their junction"
		);
		let skip = usize::from(!self.path.is_empty());
		self.path.extend(other.path.iter().skip(skip).cloned());
		self.cost = self.cost.saturating_add(other.cost);
		self
	}
}

/// The Points of the Path, from its start to its end
impl<P> std::ops::Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

#[cfg(test)]
mod tests {
	use super::Path;

	#[test]
	fn slice_access() {
		let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 42);

		assert_eq!(path.first(), Some(&(0, 0)));
		assert_eq!(path.last(), Some(&(1, 1)));
		assert_eq!(path.len(), 3);
		assert_eq!(path.steps(), 2);
	}

	#[test]
	fn join_saturates() {
		let mut path = Path::new(vec![(0, 0), (0, 1)], usize::MAX - 1);
		path.join(&Path::new(vec![(0, 1), (1, 1)], 5));

		assert_eq!(path.cost, usize::MAX);
	}

	#[test]
	fn join_onto_empty() {
		let mut path = Path::new(vec![], 0);
		path.join(&Path::new(vec![(0, 0), (0, 1)], 2));
		path.join(&Path::new(vec![(0, 1), (1, 1)], 4));

		assert_eq!(path.path, vec![(0, 0), (0, 1), (1, 1)]);
		assert_eq!(path.cost, 6);
	}
}
