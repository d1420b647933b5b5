#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to collect numbered Markers in order on a Grid.
//!
//! ## Introduction
//! The Grid consists of open Tiles, Walls, Traps, a single Start, a single Exit and a set of
//! numbered Markers (`Y1`, `Y2`, ...). An Agent starts on the Start, has to visit every Marker
//! in increasing order and finally walk to the Exit. At any time only a single Goal is
//! "revealed": the next uncollected Marker, or the Exit once all Markers are collected.
//!
//! Every step of that journey (a "Leg") is a regular search from the current position to the
//! revealed Goal. This crate provides five interchangeable Strategies for those searches:
//! - uninformed: Breadth-First Search ([`Strategy::Bfs`]) and Depth-First Search ([`Strategy::Dfs`]).
//!   Traps are treated as solid.
//! - costed: Uniform-Cost Search ([`Strategy::Ucs`]), Greedy Best-First Search ([`Strategy::Gbfs`])
//!   and A* ([`Strategy::AStar`]). Traps can be walked over, but at a prohibitive Cost.
//!
//! All Strategies share the same bookkeeping, so the reported Frontier and Explored counts can be
//! compared between them.
//!
//! ## Examples
//! Parsing a Grid and planning a Tour:
//! ```
//! use sequential_pathfinding::prelude::*;
//!
//! // P = start, E = exit, # = wall, T = trap, Y<n> = Marker n
//! let grid: Grid = "
//!     P . . # Y2
//!     ## T . # .
//!     . . Y1 . .
//!     ## . . T .
//!     . . . . E
//! "
//! .parse()
//! .unwrap();
//!
//! let planner = TourPlanner::new(&grid, SearchConfig::default());
//! let tour = planner.plan(Strategy::Bfs).unwrap();
//!
//! assert_eq!(tour.path.first(), Some(&(0, 0)));
//! assert_eq!(tour.path.last(), Some(&(4, 4)));
//! assert!(tour.path.contains(&(2, 2))); // Y1
//! assert!(tour.path.contains(&(0, 4))); // Y2
//! assert_eq!(tour.frontier, 3);
//! assert_eq!(tour.explored, 28);
//! ```
//!
//! Grids with Costs use integers instead of `.`:
//! ```
//! use sequential_pathfinding::prelude::*;
//!
//! let grid: Grid = "
//!     P 2 # 5 Y2
//!     T 2 3 # 1
//!     0 7 Y1 4 2
//!     ## T 2 1 3
//!     1 3 0 2 E
//! "
//! .parse()
//! .unwrap();
//!
//! let planner = TourPlanner::new(&grid, SearchConfig::default());
//!
//! let ucs = planner.plan(Strategy::Ucs).unwrap();
//! let a_star = planner.plan_named("A*").unwrap().unwrap();
//!
//! assert_eq!(ucs.cost(), 20);
//! assert_eq!(a_star.cost(), 20);
//! ```
//!
//! A single Leg can also be searched directly:
//! ```
//! use sequential_pathfinding::prelude::*;
//!
//! let grid: Grid = "P . .\n# # .\nE . .".parse().unwrap();
//!
//! let result = search_grid(
//!     &grid,
//!     Strategy::Bfs,
//!     grid.start_position(),
//!     grid.exit_position(),
//!     &SearchConfig::default(),
//! );
//!
//! let path = result.path.unwrap();
//! assert_eq!(path.len(), 7);
//! assert_eq!(result.explored.len(), 7);
//! ```
//!
//! ### Configuration
//! All searches take a [`SearchConfig`] to adjust the Trap Cost, the Heuristic used by GBFS and
//! A*, an optional cap on the number of expanded Nodes and the Trap handling.
//! [`SearchConfig::ADMISSIBLE`] switches to a Heuristic that keeps A* optimal.
//!
//! ### Logging
//! The crate reports Legs and failures through the [`log`](https://docs.rs/log) facade.

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by Points
pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;

mod utils;

pub mod config;
pub use self::config::SearchConfig;

pub mod error;
pub use self::error::{Error, Result};

pub mod grid;
pub use self::grid::{Cell, Grid, MarkerId};

pub mod goals;
pub use self::goals::GoalSequencer;

pub mod neighbors;

pub mod path;
pub use self::path::{Cost, Path};

pub mod search;
pub use self::search::{search, search_grid, SearchResult, Strategy};

pub mod tour;
pub use self::tour::{Leg, Tour, TourPlanner};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		neighbors::{
			Heuristic, ManhattanNeighborhood, NeighborExpander, Neighborhood, TrapPolicy, Variant,
		},
		search, search_grid, Cell, Cost, Error, GoalSequencer, Grid, Path, Point, SearchConfig,
		SearchResult, Strategy, Tour, TourPlanner,
	};
}
