use super::node_list::NodeID;
use crate::path::Cost;

use hashbrown::HashMap;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;

/// The set of discovered Nodes that were not expanded yet.
///
/// The Frontier decides the order in which Nodes are expanded, which is the only thing that
/// differs between the Strategies.
pub(crate) trait Frontier: Debug {
	/// Adds a Node, or moves it to its new position if it is already present.
	///
	/// `cost` is the Cost of the best known Path to the Node, `estimate` the Heuristic.
	fn push(&mut self, id: NodeID, cost: Cost, estimate: Cost);

	/// Adds the newly discovered Neighbors of a single expansion, in Neighborhood order.
	fn extend(&mut self, batch: &[(NodeID, Cost, Cost)]) {
		for &(id, cost, estimate) in batch {
			self.push(id, cost, estimate);
		}
	}

	/// Removes the Node that should be expanded next
	fn pop(&mut self) -> Option<NodeID>;

	/// The number of distinct Nodes in the Frontier
	fn len(&self) -> usize;

	/// `true` if a cheaper Path to a Node that is already in the Frontier should replace the
	/// old one
	fn allows_decrease_key(&self) -> bool {
		false
	}
}

/// FIFO: Breadth-First Search
#[derive(Debug, Default)]
pub(crate) struct Queue(VecDeque<NodeID>);

impl Frontier for Queue {
	fn push(&mut self, id: NodeID, _: Cost, _: Cost) {
		self.0.push_back(id);
	}
	fn pop(&mut self) -> Option<NodeID> {
		self.0.pop_front()
	}
	fn len(&self) -> usize {
		self.0.len()
	}
}

/// LIFO: Depth-First Search
#[derive(Debug, Default)]
pub(crate) struct Stack(Vec<NodeID>);

impl Frontier for Stack {
	fn push(&mut self, id: NodeID, _: Cost, _: Cost) {
		self.0.push(id);
	}
	/// pushed in reverse, so that the first Neighbor is on top of the Stack
	fn extend(&mut self, batch: &[(NodeID, Cost, Cost)]) {
		self.0.extend(batch.iter().rev().map(|&(id, _, _)| id));
	}
	fn pop(&mut self) -> Option<NodeID> {
		self.0.pop()
	}
	fn len(&self) -> usize {
		self.0.len()
	}
}

/// What a [`PriorityQueue`] sorts by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Key {
	/// Uniform-Cost Search
	Cost,
	/// Greedy Best-First Search
	Estimate,
	/// A*
	CostPlusEstimate,
}

impl Key {
	fn priority(self, cost: Cost, estimate: Cost) -> Cost {
		match self {
			Key::Cost => cost,
			Key::Estimate => estimate,
			Key::CostPlusEstimate => cost.saturating_add(estimate),
		}
	}
}

/// Lowest priority first, ties broken by insertion order.
///
/// Moving a Node pushes a new entry, the old one is skipped when it reaches the top.
#[derive(Debug)]
pub(crate) struct PriorityQueue {
	key: Key,
	heap: BinaryHeap<Element>,
	/// the insertion number of the live entry of every Node in the Frontier
	latest: HashMap<NodeID, u64>,
	inserted: u64,
}

impl PriorityQueue {
	pub fn new(key: Key) -> Self {
		PriorityQueue {
			key,
			heap: BinaryHeap::new(),
			latest: HashMap::new(),
			inserted: 0,
		}
	}
}

impl Frontier for PriorityQueue {
	fn push(&mut self, id: NodeID, cost: Cost, estimate: Cost) {
		let seq = self.inserted;
		self.inserted += 1;
		self.latest.insert(id, seq);
		self.heap.push(Element {
			id,
			priority: self.key.priority(cost, estimate),
			seq,
		});
	}
	fn pop(&mut self) -> Option<NodeID> {
		while let Some(Element { id, seq, .. }) = self.heap.pop() {
			if self.latest.get(&id) == Some(&seq) {
				self.latest.remove(&id);
				return Some(id);
			}
		}
		None
	}
	fn len(&self) -> usize {
		self.latest.len()
	}
	fn allows_decrease_key(&self) -> bool {
		self.key != Key::Estimate
	}
}

#[derive(Debug, PartialEq, Eq)]
struct Element {
	id: NodeID,
	priority: Cost,
	seq: u64,
}
impl PartialOrd for Element {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Element {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.priority
			.cmp(&self.priority)
			.then_with(|| rhs.seq.cmp(&self.seq))
	}
}
