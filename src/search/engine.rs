use super::frontier::Frontier;
use super::node_list::{NodeList, NodeState};
use super::SearchResult;
use crate::{
	config::SearchConfig,
	neighbors::{NeighborExpander, Neighborhood},
	path::Path,
	Point,
};

use log::{trace, warn};

/// The search routine shared by all Strategies.
///
/// Nodes enter the Frontier when they are discovered and are goal-tested when they leave it.
/// A Node is never discovered twice: the Frontier and the explored Nodes are checked together.
/// The only exception is a cheaper Path to a Node that is still in the Frontier, if the
/// Frontier [allows it](Frontier::allows_decrease_key).
pub(crate) fn best_first<F: Frontier, N: Neighborhood>(
	expander: &NeighborExpander<'_, N>,
	mut frontier: F,
	start: Point,
	goal: Point,
	config: &SearchConfig,
) -> SearchResult {
	let mut explored = vec![];
	if !expander.is_passable(start) {
		warn!("search started on the solid Tile {:?}", start);
		return SearchResult::not_found(0, explored);
	}

	let mut nodes = NodeList::new();
	let start_id = nodes.add_node(start, 0, None);
	frontier.push(start_id, 0, expander.estimate(config.heuristic, start, goal));

	let mut all_neighbors = vec![];
	let mut batch = vec![];

	loop {
		if let Some(limit) = config.max_expansions {
			if explored.len() >= limit && frontier.len() > 0 {
				warn!(
					"gave up searching {:?} -> {:?} after {} expansions",
					start, goal, limit
				);
				return SearchResult::not_found(frontier.len(), explored);
			}
		}
		let Some(current_id) = frontier.pop() else {
			break;
		};

		let current = &mut nodes[current_id];
		current.state = NodeState::Explored;
		let (current_pos, current_cost) = (current.pos, current.cost);
		explored.push(current_pos);
		trace!("expanding {:?} at cost {}", current_pos, current_cost);

		if current_pos == goal {
			let path = Path::new(nodes.path_to(current_id), current_cost);
			trace!("discovered {} Nodes", nodes.len());
			return SearchResult {
				path: Some(path),
				frontier: frontier.len(),
				explored,
			};
		}

		expander.neighbors(current_pos, &mut all_neighbors);
		batch.clear();
		for &other_pos in all_neighbors.iter() {
			let Some(step_cost) = expander.step_cost(other_pos) else {
				continue;
			};
			let other_cost = current_cost.saturating_add(step_cost);

			match nodes.id_at(other_pos) {
				None => {
					let id = nodes.add_node(other_pos, other_cost, Some(current_id));
					let estimate = expander.estimate(config.heuristic, other_pos, goal);
					batch.push((id, other_cost, estimate));
				}
				Some(id) => {
					let other = &mut nodes[id];
					if frontier.allows_decrease_key()
						&& other.state == NodeState::Frontier
						&& other_cost < other.cost
					{
						other.cost = other_cost;
						other.parent = Some(current_id);
						let estimate = expander.estimate(config.heuristic, other_pos, goal);
						batch.push((id, other_cost, estimate));
					}
				}
			}
		}
		frontier.extend(&batch);
	}

	SearchResult::not_found(frontier.len(), explored)
}
