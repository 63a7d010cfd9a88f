/// How the open set of a search picks the next Node to expand.
///
/// Both kinds select the exact same Nodes in the exact same order and therefore return the
/// same Paths. They only differ in performance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrontierKind {
	/// Scans all open Nodes for the best one. Cheap for a handful of open Nodes, but every
	/// expansion costs `O(open Nodes)`.
	LinearScan,
	/// Keeps the open Nodes in a [`BinaryHeap`](std::collections::BinaryHeap). Scales to large
	/// Grids.
	BinaryHeap,
}

/// Options for configuring a [`PathFinder`](crate::PathFinder)
///
/// Default options:
/// ```
/// # use grid_astar::{FrontierKind, SearchConfig};
/// assert_eq!(
///     SearchConfig {
///         frontier: FrontierKind::BinaryHeap,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
	/// The open set implementation (defaults to [`FrontierKind::BinaryHeap`])
	pub frontier: FrontierKind,
}

impl SearchConfig {
	/// a SearchConfig for Grids of no more than a few hundred Nodes
	///
	/// Values:
	/// ```
	/// # use grid_astar::{FrontierKind, SearchConfig};
	/// assert_eq!(
	///     SearchConfig {
	///         frontier: FrontierKind::LinearScan,
	///     },
	///     SearchConfig::SMALL_GRID
	/// );
	/// ```
	pub const SMALL_GRID: SearchConfig = SearchConfig {
		frontier: FrontierKind::LinearScan,
	};
	/// a SearchConfig for everything larger
	///
	/// Values:
	/// ```
	/// # use grid_astar::{FrontierKind, SearchConfig};
	/// assert_eq!(
	///     SearchConfig {
	///         frontier: FrontierKind::BinaryHeap,
	///     },
	///     SearchConfig::LARGE_GRID
	/// );
	/// ```
	pub const LARGE_GRID: SearchConfig = SearchConfig {
		frontier: FrontierKind::BinaryHeap,
	};
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::LARGE_GRID
	}
}
