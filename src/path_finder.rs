use crate::heuristic::{Heuristic, Octile};
use crate::{Graph, Node, NodeId, NodeIdMap, Path, PathError};
use glam::Vec3;
use hashbrown::hash_map::Entry;

mod frontier;
use self::frontier::{Frontier, Priority};

mod search_config;
pub use self::search_config::{FrontierKind, SearchConfig};

mod search_node;
pub use self::search_node::SearchNode;

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
	($msg: literal, $timer: ident) => {
		let now = std::time::Instant::now();
		log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
		#[allow(unused)]
		let $timer = now;
	};
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
	// does nothing without log feature
	($msg: literal, $timer: ident) => {};
}

/// Finds the shortest Paths between World positions on a [`Graph`] using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The PathFinder never modifies the Graph. All the state of a search is created when the
/// search starts and dropped when it ends, so searches never influence each other and the
/// same PathFinder can be used from several threads at once.
///
/// `G` is usually a reference to a Graph, so that the Graph can still be modified between
/// searches.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<G, H = Octile> {
	graph: G,
	heuristic: H,
	config: SearchConfig,
}

impl<G: Graph> PathFinder<G> {
	/// Creates a new PathFinder with the default [`SearchConfig`] and the [`Octile`] Heuristic
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// use grid_astar::{prelude::*, Point};
	/// use glam::Vec3;
	///
	/// // create and initialize Grid
	/// // 0 = empty, 1 = wall
	/// let grid = [
	///     [0, 1, 0, 0, 0],
	///     [0, 1, 0, 1, 0],
	///     [0, 1, 0, 1, 0],
	///     [0, 1, 0, 1, 0],
	///     [0, 0, 0, 1, 0],
	/// ];
	/// let (width, depth) = (grid[0].len(), grid.len());
	///
	/// let graph = GridGraph::new(
	///     GridConfig::with_size(width, depth),
	///     |(x, z): Point| grid[z][x] == 0,
	///     ManhattanNeighborhood::new(width, depth),
	/// )
	/// .unwrap();
	///
	/// let path_finder = PathFinder::new(&graph);
	///
	/// let path = path_finder
	///     .find_path(Vec3::new(0.5, 0.0, 0.5), Vec3::new(4.5, 0.0, 4.5))
	///     .unwrap();
	///
	/// assert_eq!(path.len(), 16);
	/// assert_eq!(path.cost(), 160);
	/// assert_eq!(path[0].point(), (0, 1));
	/// ```
	pub fn new(graph: G) -> PathFinder<G> {
		PathFinder::with_config(graph, SearchConfig::default())
	}

	/// Creates a new PathFinder with the [`Octile`] Heuristic
	pub fn with_config(graph: G, config: SearchConfig) -> PathFinder<G> {
		PathFinder::with_heuristic(graph, Octile, config)
	}
}

impl<G: Graph, H: Heuristic> PathFinder<G, H> {
	/// Creates a new PathFinder with a custom [`Heuristic`]
	///
	/// The Heuristic is also used as the Cost of a step between two neighboring Nodes.
	pub fn with_heuristic(graph: G, heuristic: H, config: SearchConfig) -> PathFinder<G, H> {
		PathFinder {
			graph,
			heuristic,
			config,
		}
	}

	/// The Graph this PathFinder searches on
	pub fn graph(&self) -> &G {
		&self.graph
	}

	/// The options this PathFinder was created with
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Finds the shortest Path from `start` to `target`.
	///
	/// Both positions are mapped to their Nodes using [`Graph::node_at`]. The returned Path
	/// starts with the first step after the start Node and ends with the target Node.
	///
	/// The Path is empty if the target cannot be reached, or if both positions lie on the same
	/// Node.
	///
	/// ## Errors
	/// [`PathError::StartOutOfBounds`] or [`PathError::TargetOutOfBounds`] if a position is not
	/// covered by the Graph.
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::prelude::*;
	/// # use glam::Vec3;
	/// let graph = GridGraph::new(GridConfig::with_size(5, 5), |_| true, MooreNeighborhood::new(5, 5))
	///     .unwrap();
	/// let path_finder = PathFinder::new(&graph);
	///
	/// let path = path_finder
	///     .find_path(Vec3::new(0.5, 0.0, 0.5), Vec3::new(4.5, 0.0, 4.5))
	///     .unwrap();
	/// assert_eq!(path.points().collect::<Vec<_>>(), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
	/// assert_eq!(path.cost(), 56);
	///
	/// let error = path_finder.find_path(Vec3::new(-50.0, 0.0, 0.5), Vec3::new(4.5, 0.0, 4.5));
	/// assert_eq!(error, Err(PathError::StartOutOfBounds(Vec3::new(-50.0, 0.0, 0.5))));
	/// ```
	pub fn find_path(&self, start: Vec3, target: Vec3) -> Result<Path<Node>, PathError> {
		let start_id = self
			.graph
			.node_at(start)
			.ok_or(PathError::StartOutOfBounds(start))?;
		let target_id = self
			.graph
			.node_at(target)
			.ok_or(PathError::TargetOutOfBounds(target))?;

		Ok(self.find_path_between(start_id, target_id))
	}

	/// Runs one search per `(start, target)` pair, returning the results in the same order.
	pub fn find_paths(&self, requests: &[(Vec3, Vec3)]) -> Vec<Result<Path<Node>, PathError>> {
		requests
			.iter()
			.map(|&(start, target)| self.find_path(start, target))
			.collect()
	}

	/// Same as [`find_paths`](PathFinder::find_paths), but runs the searches in parallel.
	#[cfg(feature = "parallel")]
	pub fn find_paths_parallel(
		&self,
		requests: &[(Vec3, Vec3)],
	) -> Vec<Result<Path<Node>, PathError>>
	where
		G: Sync,
		H: Sync,
	{
		use rayon::prelude::*;

		requests
			.par_iter()
			.map(|&(start, target)| self.find_path(start, target))
			.collect()
	}

	/// Finds the shortest Path between two Nodes of the Graph.
	///
	/// Same as [`find_path`](PathFinder::find_path), for callers that already know the Nodes.
	pub fn find_path_between(&self, start: NodeId, target: NodeId) -> Path<Node> {
		#[cfg(feature = "log")]
		let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

		if start == target {
			return Path::empty();
		}

		let graph = &self.graph;
		let target_point = graph.node(target).point();
		let size_hint = graph.node_count();

		let mut visited = NodeIdMap::with_capacity_and_hasher(size_hint / 4, Default::default());
		let mut open = Frontier::new(self.config.frontier, size_hint / 8);

		let start_point = graph.node(start).point();
		let start_node = SearchNode {
			h_cost: self.heuristic.estimate(start_point, target_point),
			..SearchNode::new()
		};
		visited.insert(start, start_node);
		open.push(start, Priority::new(&start_node, start_point));

		let mut neighbours = vec![];
		let mut found = false;

		re_trace!("search setup", timer);

		while let Some(current_id) = open.pop(|id| visited[&id].closed) {
			let Some(current) = visited.get_mut(&current_id) else {
				continue;
			};
			current.closed = true;
			let current_cost = current.g_cost;

			if current_id == target {
				found = true;
				break;
			}

			let current_point = graph.node(current_id).point();

			neighbours.clear();
			graph.neighbours_of(current_id, &mut neighbours);
			for &other_id in neighbours.iter() {
				let other = graph.node(other_id);
				if !other.walkable {
					continue;
				}
				let other_point = other.point();
				let other_cost = current_cost + self.heuristic.estimate(current_point, other_point);

				match visited.entry(other_id) {
					Entry::Occupied(mut entry) => {
						let node = entry.get_mut();
						if node.closed || other_cost >= node.g_cost {
							continue;
						}
						node.g_cost = other_cost;
						node.h_cost = self.heuristic.estimate(other_point, target_point);
						node.parent = Some(current_id);
						open.decrease(other_id, Priority::new(node, other_point));
					}
					Entry::Vacant(entry) => {
						let node = entry.insert(SearchNode {
							g_cost: other_cost,
							h_cost: self.heuristic.estimate(other_point, target_point),
							parent: Some(current_id),
							closed: false,
						});
						open.push(other_id, Priority::new(node, other_point));
					}
				}
			}
		}

		re_trace!("search loop", timer);

		if !found {
			#[cfg(feature = "log")]
			log::debug!(
				"no path from {:?} to {:?} after visiting {} nodes",
				start_point,
				target_point,
				visited.len()
			);
			return Path::empty();
		}

		let steps = {
			let mut steps = vec![];
			let mut current = target;

			// only the start has no parent
			while let Some(parent) = visited[&current].parent {
				steps.push(*graph.node(current));
				current = parent;
			}
			steps.reverse();
			steps
		};

		re_trace!("retrace path", timer);
		re_trace!("search total", outer_timer);

		Path::new(steps, visited[&target].g_cost)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::prelude::*;

	// 0 = empty, 1 = wall
	fn graph_from(grid: &[[u8; 5]; 5]) -> GridGraph<MooreNeighborhood> {
		GridGraph::new(
			GridConfig::with_size(5, 5),
			|(x, z)| grid[z][x] == 0,
			MooreNeighborhood::new(5, 5),
		)
		.unwrap()
	}

	fn center(x: usize, z: usize) -> Vec3 {
		Vec3::new(x as f32 + 0.5, 0.0, z as f32 + 0.5)
	}

	#[test]
	fn diagonal() {
		let graph = graph_from(&[[0; 5]; 5]);
		for config in [SearchConfig::SMALL_GRID, SearchConfig::LARGE_GRID] {
			let path = PathFinder::with_config(&graph, config)
				.find_path(center(0, 0), center(4, 4))
				.unwrap();

			assert_eq!(path.len(), 4);
			assert_eq!(path.cost(), 4 * 14);
			assert_eq!(
				path.points().collect::<Vec<_>>(),
				vec![(1, 1), (2, 2), (3, 3), (4, 4)]
			);
		}
	}

	#[test]
	fn same_node() {
		let graph = graph_from(&[[0; 5]; 5]);
		let path = PathFinder::new(&graph)
			.find_path(Vec3::new(2.1, 0.0, 2.1), Vec3::new(2.9, 0.0, 2.9))
			.unwrap();

		assert!(path.is_empty());
		assert_eq!(path.cost(), 0);
	}

	#[test]
	fn unwalkable_target() {
		let mut grid = [[0; 5]; 5];
		grid[3][3] = 1;
		let graph = graph_from(&grid);

		let path = PathFinder::new(&graph)
			.find_path(center(0, 0), center(3, 3))
			.unwrap();
		assert!(path.is_empty());
	}

	#[test]
	fn walled_off_target() {
		let grid = [
			[0, 0, 0, 0, 0],
			[0, 0, 0, 0, 0],
			[0, 0, 0, 1, 1],
			[0, 0, 0, 1, 0],
			[0, 0, 0, 1, 0],
		];
		let graph = graph_from(&grid);

		for config in [SearchConfig::SMALL_GRID, SearchConfig::LARGE_GRID] {
			let path = PathFinder::with_config(&graph, config)
				.find_path(center(0, 0), center(4, 4))
				.unwrap();
			assert!(path.is_empty());
		}
	}

	#[test]
	fn unwalkable_start() {
		let mut grid = [[0; 5]; 5];
		grid[0][0] = 1;
		let graph = graph_from(&grid);

		let path = PathFinder::new(&graph)
			.find_path(center(0, 0), center(2, 0))
			.unwrap();
		assert_eq!(path.points().collect::<Vec<_>>(), vec![(1, 0), (2, 0)]);
	}

	#[test]
	fn out_of_bounds() {
		let graph = graph_from(&[[0; 5]; 5]);
		let path_finder = PathFinder::new(&graph);

		let far_away = Vec3::new(1000.0, 0.0, -1000.0);
		assert_eq!(
			path_finder.find_path(far_away, center(1, 1)),
			Err(PathError::StartOutOfBounds(far_away))
		);
		assert_eq!(
			path_finder.find_path(center(1, 1), far_away),
			Err(PathError::TargetOutOfBounds(far_away))
		);
	}

	#[test]
	fn path_never_contains_walls() {
		let grid = [
			[0, 1, 0, 0, 0],
			[0, 1, 0, 1, 0],
			[0, 1, 0, 1, 0],
			[0, 0, 0, 1, 0],
			[1, 1, 0, 0, 0],
		];
		let graph = graph_from(&grid);

		let path = PathFinder::new(&graph)
			.find_path(center(0, 0), center(4, 0))
			.unwrap();

		assert!(!path.is_empty());
		assert!(path.iter().all(|node| node.walkable));
		assert_eq!(path.iter().last().map(Node::point), Some((4, 0)));
	}

	#[test]
	fn find_paths() {
		let graph = graph_from(&[[0; 5]; 5]);
		let path_finder = PathFinder::new(&graph);

		let requests = [
			(center(0, 0), center(4, 4)),
			(center(0, 0), Vec3::new(-1.0, 0.0, 0.0)),
			(center(2, 2), center(2, 4)),
		];
		let results = path_finder.find_paths(&requests);

		assert_eq!(results.len(), 3);
		assert_eq!(results[0].as_ref().map(Path::cost), Ok(56));
		assert!(results[1].is_err());
		assert_eq!(results[2].as_ref().map(Path::cost), Ok(20));
	}

	#[cfg(feature = "parallel")]
	#[test]
	fn find_paths_parallel() {
		let graph = graph_from(&[[0; 5]; 5]);
		let path_finder = PathFinder::new(&graph);

		let requests: Vec<(Vec3, Vec3)> = (0..5)
			.flat_map(|x| (0..5).map(move |z| (center(0, 0), center(x, z))))
			.collect();

		assert_eq!(
			path_finder.find_paths_parallel(&requests),
			path_finder.find_paths(&requests)
		);
	}
}
