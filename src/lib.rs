#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths between World positions on a walkable Grid.
//!
//! ## Introduction
//! Agents in a World usually know where they are and where they want to go, but not which way
//! to take. This crate answers that question by discretizing the World into a Graph of
//! [`Node`]s, mapping both positions onto that Graph and searching it with A*. The result is an
//! ordered list of Waypoints that an Agent can walk towards one after the other.
//!
//! Steps along the axes of the Grid cost `10`, diagonal steps cost `14` (see
//! [`heuristic::octile_distance`]). The returned Paths are always the cheapest ones under
//! that cost model. When several Paths are equally cheap, the same one is returned every time.
//!
//! The search does not store anything in the Graph. Every call to
//! [`find_path`](PathFinder::find_path) works on its own bookkeeping, which means that any
//! number of searches can run on the same Graph at once, including from multiple threads.
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use grid_astar::{prelude::*, Point};
//! use glam::Vec3;
//!
//! // create and initialize Grid
//! // 0 = empty, 1 = wall
//! let grid = [
//!     [0, 0, 1, 0, 0],
//!     [0, 0, 1, 0, 0],
//!     [0, 0, 1, 0, 0],
//!     [0, 0, 1, 0, 0],
//!     [0, 0, 0, 0, 0],
//! ];
//! let (width, depth) = (grid[0].len(), grid.len());
//!
//! let graph = GridGraph::new(
//!     GridConfig {
//!         cell_size: 2.0, // every Cell covers 2x2 World units
//!         origin: Vec3::new(-5.0, 0.0, -5.0), // the corner of Cell (0, 0)
//!         ..GridConfig::with_size(width, depth)
//!     },
//!     |(x, z): Point| grid[z][x] == 0, // which Cells can be walked over
//!     MooreNeighborhood::new(width, depth), // the Neighborhood
//! )
//! .unwrap();
//! ```
//! The Graph is only a view of the Grid. Whenever a Cell changes, the Graph has to be told:
//! ```
//! # use grid_astar::{prelude::*, Point};
//! # use glam::Vec3;
//! # let mut grid = [
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 0, 0, 0],
//! # ];
//! # let (width, depth) = (grid[0].len(), grid.len());
//! # let mut graph = GridGraph::new(
//! #     GridConfig {
//! #         cell_size: 2.0,
//! #         origin: Vec3::new(-5.0, 0.0, -5.0),
//! #         ..GridConfig::with_size(width, depth)
//! #     },
//! #     |(x, z): Point| grid[z][x] == 0,
//! #     MooreNeighborhood::new(width, depth),
//! # )
//! # .unwrap();
//! grid[0][2] = 0;
//! grid[4][2] = 1;
//!
//! graph.tiles_changed(&[(2, 0), (2, 4)], |(x, z)| grid[z][x] == 0);
//! ```
//!
//! ### Pathfinding
//! ```
//! # use grid_astar::{prelude::*, Point};
//! # use glam::Vec3;
//! # let grid = [
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 1, 0, 0],
//! #     [0, 0, 0, 0, 0],
//! # ];
//! # let (width, depth) = (grid[0].len(), grid.len());
//! # let graph = GridGraph::new(
//! #     GridConfig {
//! #         cell_size: 2.0,
//! #         origin: Vec3::new(-5.0, 0.0, -5.0),
//! #         ..GridConfig::with_size(width, depth)
//! #     },
//! #     |(x, z): Point| grid[z][x] == 0,
//! #     MooreNeighborhood::new(width, depth),
//! # )
//! # .unwrap();
//! #
//! let path_finder = PathFinder::new(&graph);
//!
//! let agent = Vec3::new(-4.0, 0.0, -4.0); // on Cell (0, 0)
//! let goal = Vec3::new(4.0, 0.0, -4.0); // on Cell (4, 0)
//!
//! let path = path_finder.find_path(agent, goal).unwrap();
//!
//! // the only way across the wall is through Cell (2, 4)
//! assert!(path.points().any(|point| point == (2, 4)));
//! assert_eq!(path.points().last(), Some((4, 0)));
//!
//! assert_eq!(path.cost(), 96);
//!
//! // the Agent walks towards the first Waypoint, one Cell away
//! let next = path.positions().next().unwrap();
//! assert!(next.distance(agent) < 3.0);
//!
//! // positions outside of the Grid are errors, unreachable goals are empty Paths
//! assert!(path_finder.find_path(agent, Vec3::new(40.0, 0.0, 0.0)).is_err());
//! ```
//!
//! ### Configuration
//! The [`SearchConfig`] decides how the search keeps track of the Nodes it still has to visit.
//! This only affects performance, never the resulting Paths.
//! ```
//! # use grid_astar::prelude::*;
//! # let graph = GridGraph::new(GridConfig::with_size(5, 5), |_| true, MooreNeighborhood::new(5, 5))
//! #     .unwrap();
//! let path_finder = PathFinder::with_config(&graph, SearchConfig::SMALL_GRID);
//!
//! assert_eq!(path_finder.config().frontier, FrontierKind::LinearScan);
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): enables [`PathFinder::find_paths_parallel`] using `rayon`
//! - `log`: traces the duration of the individual search phases using the `log` crate

/// A shorthand for Points on the grid: `(grid_x, grid_z)`
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by Grid Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

/// The Type used for the Cost of walking along a Path
pub type Cost = usize;

mod error;
pub use self::error::{GridError, PathError};

mod node;
pub use self::node::{Node, NodeId, NodeIdHasher, NodeIdMap};

mod graph;
pub use self::graph::Graph;

mod grid_graph;
pub use self::grid_graph::{GridConfig, GridGraph};

mod path;
pub use self::path::Path;

mod path_finder;
pub use self::path_finder::{FrontierKind, PathFinder, SearchConfig, SearchNode};

pub mod heuristic;
pub mod neighbors;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		heuristic::{Heuristic, Octile},
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		FrontierKind, Graph, GridConfig, GridError, GridGraph, Path, PathError, PathFinder,
		SearchConfig,
	};
}
