use crate::{path::Cost, Point, PointMap};
use std::ops::{Index, IndexMut};

/// The Type used to reference a Node of the search tree
pub(crate) type NodeID = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
	Frontier,
	Explored,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
	pub pos: Point,
	/// cost of the best known Path from the start
	pub cost: Cost,
	pub parent: Option<NodeID>,
	pub state: NodeState,
}

/// Every Node a search discovered, with parent pointers back to the start.
#[derive(Clone, Debug)]
pub(crate) struct NodeList {
	nodes: slab::Slab<SearchNode>,
	pos_map: PointMap<NodeID>,
}

impl NodeList {
	pub fn new() -> Self {
		Self {
			nodes: slab::Slab::default(),
			pos_map: PointMap::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.pos_map.len()
	}

	/// Adds a Node to the Frontier state
	pub fn add_node(&mut self, pos: Point, cost: Cost, parent: Option<NodeID>) -> NodeID {
		let id = self.nodes.insert(SearchNode {
			pos,
			cost,
			parent,
			state: NodeState::Frontier,
		});
		self.pos_map.insert(pos, id);
		id
	}

	pub fn id_at(&self, pos: Point) -> Option<NodeID> {
		self.pos_map.get(&pos).copied()
	}

	/// Follows the parent pointers of `id` back to the root
	pub fn path_to(&self, id: NodeID) -> Vec<Point> {
		let mut steps = vec![];
		let mut current = Some(id);
		while let Some(id) = current {
			let node = &self[id];
			steps.push(node.pos);
			current = node.parent;
		}
		steps.reverse();
		steps
	}
}

impl Index<NodeID> for NodeList {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, index: NodeID) -> &SearchNode {
		&self.nodes[index]
	}
}

impl IndexMut<NodeID> for NodeList {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut SearchNode {
		&mut self.nodes[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn path_to_root() {
		let mut nodes = NodeList::new();
		let a = nodes.add_node((0, 0), 0, None);
		let b = nodes.add_node((0, 1), 1, Some(a));
		let c = nodes.add_node((1, 1), 3, Some(b));
		let d = nodes.add_node((1, 0), 2, Some(a));

		assert_eq!(nodes.len(), 4);
		assert_eq!(nodes.path_to(c), vec![(0, 0), (0, 1), (1, 1)]);
		assert_eq!(nodes.path_to(d), vec![(0, 0), (1, 0)]);
		assert_eq!(nodes.path_to(a), vec![(0, 0)]);
		assert_eq!(nodes.id_at((1, 1)), Some(c));
		assert_eq!(nodes.id_at((2, 2)), None);
	}

	#[test]
	fn reparent() {
		let mut nodes = NodeList::new();
		let a = nodes.add_node((0, 0), 0, None);
		let b = nodes.add_node((0, 1), 9, Some(a));
		let c = nodes.add_node((1, 0), 1, Some(a));
		let d = nodes.add_node((1, 1), 2, Some(c));

		nodes[b].cost = 3;
		nodes[b].parent = Some(d);

		assert_eq!(nodes[b].state, NodeState::Frontier);
		assert_eq!(nodes.path_to(b), vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
	}
}
