//! The Errors this crate can produce.
//!
//! Note that an unreachable Goal is not an Error: searches report it through an empty
//! [`SearchResult`](crate::SearchResult) and Tours through `None`.

use thiserror::Error;

/// Errors that can occur while reading a Grid or selecting a Strategy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The Grid is not square, has no (or several) Start or Exit, repeats a Marker or contains
	/// an unknown token
	#[error("malformed grid: {0}")]
	MalformedGrid(String),

	/// The Strategy tag is not one of `BFS`, `DFS`, `UCS`, `GBFS` or `A*`
	#[error("invalid strategy `{0}`, expected one of BFS, DFS, UCS, GBFS, A*")]
	InvalidStrategy(String),
}

/// Result type for Grid and Strategy operations
pub type Result<T> = std::result::Result<T, Error>;
