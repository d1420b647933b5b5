//! Options shared by all searches.

use crate::{
	grid::TRAP_COST,
	neighbors::{Heuristic, TrapPolicy, Variant},
	path::Cost,
	search::Strategy,
};

/// Options for configuring the searches of a [`TourPlanner`](crate::TourPlanner)
///
/// Default options:
/// ```
/// # use sequential_pathfinding::{SearchConfig, neighbors::Heuristic};
/// assert_eq!(
/// 	SearchConfig {
/// 		trap_cost: 99_999,
/// 		heuristic: Heuristic::Manhattan,
/// 		max_expansions: None,
/// 		variant: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The Cost of stepping onto a Trap when Traps are passable (defaults to `99_999`)
	pub trap_cost: Cost,
	/// The Heuristic used by GBFS and A* (defaults to [`Heuristic::Manhattan`])
	///
	/// The default is not necessarily admissible, so A* may return a Path that is more
	/// expensive than the one UCS finds. Use [`Heuristic::Zero`] if that matters.
	pub heuristic: Heuristic,
	/// `Some(n)`: a search gives up after expanding `n` Nodes and reports that no Path exists.
	///
	/// `None` (default): searches run until the Goal is found or everything reachable is explored.
	pub max_expansions: Option<usize>,
	/// `None` (default): BFS and DFS treat Traps as solid, UCS, GBFS and A* as expensive.
	///
	/// `Some(variant)`: every Strategy uses the Trap rules of `variant`.
	pub variant: Option<Variant>,
}

impl SearchConfig {
	/// a SearchConfig whose A* searches are guaranteed to find the cheapest Path
	///
	/// Values:
	/// ```
	/// # use sequential_pathfinding::{SearchConfig, neighbors::Heuristic};
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		trap_cost: 99_999,
	/// 		heuristic: Heuristic::Zero,
	/// 		max_expansions: None,
	/// 		variant: None,
	/// 	},
	/// 	SearchConfig::ADMISSIBLE
	/// );
	/// ```
	pub const ADMISSIBLE: SearchConfig = SearchConfig {
		trap_cost: TRAP_COST,
		heuristic: Heuristic::Zero,
		max_expansions: None,
		variant: None,
	};
	/// a SearchConfig where every Strategy treats Traps as solid
	///
	/// Useful to compare all Strategies on the same walkable Tiles.
	pub const UNINFORMED_TERRAIN: SearchConfig = SearchConfig {
		trap_cost: TRAP_COST,
		heuristic: Heuristic::Manhattan,
		max_expansions: None,
		variant: Some(Variant::Uninformed),
	};
	/// a SearchConfig where every Strategy may cross Traps at [`TRAP_COST`]
	pub const COSTED_TERRAIN: SearchConfig = SearchConfig {
		trap_cost: TRAP_COST,
		heuristic: Heuristic::Manhattan,
		max_expansions: None,
		variant: Some(Variant::Costed),
	};

	/// The [`Variant`] a search with `strategy` runs in
	/// ```
	/// # use sequential_pathfinding::{SearchConfig, Strategy, neighbors::Variant};
	/// let config = SearchConfig::default();
	/// assert_eq!(config.variant_for(Strategy::Dfs), Variant::Uninformed);
	/// assert_eq!(config.variant_for(Strategy::AStar), Variant::Costed);
	///
	/// let config = SearchConfig::UNINFORMED_TERRAIN;
	/// assert_eq!(config.variant_for(Strategy::AStar), Variant::Uninformed);
	/// ```
	pub fn variant_for(&self, strategy: Strategy) -> Variant {
		self.variant.unwrap_or_else(|| strategy.variant())
	}

	/// How a search with `strategy` treats Traps
	pub fn trap_policy(&self, strategy: Strategy) -> TrapPolicy {
		self.variant_for(strategy).trap_policy(self.trap_cost)
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			trap_cost: TRAP_COST,
			heuristic: Heuristic::Manhattan,
			max_expansions: None,
			variant: None,
		}
	}
}
