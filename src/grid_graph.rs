use crate::{neighbors::Neighborhood, Graph, GridError, Node, NodeId, Point, PointMap};
use glam::Vec3;

mod grid_config;
pub use self::grid_config::GridConfig;

/// A [`Graph`] over a regular Grid of square Cells on the xz plane.
///
/// Every Cell of the Grid is a [`Node`]. Which Nodes are adjacent is decided by the
/// [`Neighborhood`].
#[derive(Clone, Debug)]
pub struct GridGraph<N: Neighborhood> {
	config: GridConfig,
	nodes: slab::Slab<Node>,
	pos_map: PointMap<NodeId>,
	neighborhood: N,
}

impl<N: Neighborhood> GridGraph<N> {
	/// Creates a new GridGraph
	///
	/// ## Arguments
	/// - `config` - the size and World placement of the Grid. (See [`GridConfig`])
	/// - `is_walkable` - called once for every Point of the Grid
	/// - `neighborhood` - the Neighborhood to use. (See [`Neighborhood`])
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// use grid_astar::{prelude::*, Point};
	///
	/// // create and initialize Grid
	/// // 0 = empty, 1 = wall
	/// let grid = [
	///     [0, 1, 0, 0, 0],
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
	/// assert_eq!(graph.node_count(), 15);
	/// assert!(!graph.node_at_point((1, 0)).unwrap().walkable);
	/// ```
	///
	/// A Grid without Cells is rejected:
	/// ```
	/// # use grid_astar::prelude::*;
	/// let graph = GridGraph::new(
	///     GridConfig::with_size(0, 3),
	///     |_| true,
	///     MooreNeighborhood::new(0, 3),
	/// );
	///
	/// assert_eq!(graph.unwrap_err(), GridError::EmptyGrid { width: 0, depth: 3 });
	/// ```
	pub fn new(
		config: GridConfig,
		mut is_walkable: impl FnMut(Point) -> bool,
		neighborhood: N,
	) -> Result<GridGraph<N>, GridError> {
		if config.width == 0 || config.depth == 0 {
			return Err(GridError::EmptyGrid {
				width: config.width,
				depth: config.depth,
			});
		}
		if !(config.cell_size.is_finite() && config.cell_size > 0.0) {
			return Err(GridError::InvalidCellSize(config.cell_size));
		}

		let count = config.width * config.depth;
		let mut nodes = slab::Slab::with_capacity(count);
		let mut pos_map = PointMap::with_capacity(count);

		for z in 0..config.depth {
			for x in 0..config.width {
				let node = Node::new(is_walkable((x, z)), config.cell_center(x, z), x, z);
				let id = nodes.insert(node);
				pos_map.insert((x, z), id);
			}
		}

		#[cfg(feature = "log")]
		log::debug!(
			"created {}x{} grid with {} walkable nodes",
			config.width,
			config.depth,
			nodes.iter().filter(|(_, node)| node.walkable).count()
		);

		Ok(GridGraph {
			config,
			nodes,
			pos_map,
			neighborhood,
		})
	}

	/// The layout this Grid was created with
	pub fn config(&self) -> &GridConfig {
		&self.config
	}

	/// The number of Cells along the x axis
	pub fn width(&self) -> usize {
		self.config.width
	}

	/// The number of Cells along the z axis
	pub fn depth(&self) -> usize {
		self.config.depth
	}

	/// The Id of the Node at a Point, if the Point is on the Grid
	pub fn id_at(&self, point: Point) -> Option<NodeId> {
		self.pos_map.get(&point).copied()
	}

	/// The Node at a Point, if the Point is on the Grid
	pub fn node_at_point(&self, point: Point) -> Option<&Node> {
		self.id_at(point).map(|id| &self.nodes[id])
	}

	/// The Grid Point containing a World position. The y coordinate is ignored.
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::prelude::*;
	/// # use glam::Vec3;
	/// let config = GridConfig {
	///     cell_size: 2.0,
	///     origin: Vec3::new(-5.0, 0.0, -5.0),
	///     ..GridConfig::with_size(5, 5)
	/// };
	/// let graph = GridGraph::new(config, |_| true, MooreNeighborhood::new(5, 5)).unwrap();
	///
	/// assert_eq!(graph.point_at(Vec3::new(-5.0, 3.0, -5.0)), Some((0, 0)));
	/// assert_eq!(graph.point_at(Vec3::new(0.0, 0.0, 4.9)), Some((2, 4)));
	/// assert_eq!(graph.point_at(Vec3::new(5.0, 0.0, 0.0)), None);
	/// ```
	pub fn point_at(&self, position: Vec3) -> Option<Point> {
		let local = (position - self.config.origin) / self.config.cell_size;
		// also rejects NaN
		if !(local.x >= 0.0 && local.z >= 0.0) {
			return None;
		}
		let (x, z) = (local.x.floor() as usize, local.z.floor() as usize);
		if x < self.config.width && z < self.config.depth {
			Some((x, z))
		} else {
			None
		}
	}

	/// Iterates over all Nodes and their Ids
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
		self.nodes.iter()
	}

	/// Changes the walkability of a single Point.
	///
	/// Returns `false` if the Point is not on the Grid.
	pub fn set_walkable(&mut self, point: Point, walkable: bool) -> bool {
		match self.id_at(point) {
			Some(id) => {
				self.nodes[id].walkable = walkable;
				true
			}
			None => false,
		}
	}

	/// Re-evaluates the walkability of the given Points after the underlying World changed.
	///
	/// Points outside of the Grid are ignored.
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::{prelude::*, Point};
	/// let mut grid = [[true; 4]; 4];
	/// let mut graph = GridGraph::new(
	///     GridConfig::with_size(4, 4),
	///     |(x, z): Point| grid[z][x],
	///     MooreNeighborhood::new(4, 4),
	/// )
	/// .unwrap();
	///
	/// grid[1][2] = false;
	/// graph.tiles_changed(&[(2, 1), (7, 7)], |(x, z)| grid[z][x]);
	///
	/// assert!(!graph.node_at_point((2, 1)).unwrap().walkable);
	/// ```
	pub fn tiles_changed(&mut self, tiles: &[Point], mut is_walkable: impl FnMut(Point) -> bool) {
		for &point in tiles {
			if let Some(id) = self.id_at(point) {
				self.nodes[id].walkable = is_walkable(point);
			}
		}
		#[cfg(feature = "log")]
		log::trace!("updated walkability of {} tiles", tiles.len());
	}

	/// Sets the walkability of all given Points to the same value.
	///
	/// Points outside of the Grid are skipped. Returns how many Points were on the Grid.
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::prelude::*;
	/// let mut graph =
	///     GridGraph::new(GridConfig::with_size(4, 4), |_| true, MooreNeighborhood::new(4, 4))
	///         .unwrap();
	///
	/// // a wall along the third column
	/// let wall: Vec<_> = (0..4).map(|z| (2, z)).collect();
	/// assert_eq!(graph.set_walkable_many(&wall, false), 4);
	///
	/// assert!(!graph.node_at_point((2, 3)).unwrap().walkable);
	/// ```
	pub fn set_walkable_many(&mut self, points: &[Point], walkable: bool) -> usize {
		let mut changed = 0;
		for &point in points {
			if let Some(id) = self.id_at(point) {
				self.nodes[id].walkable = walkable;
				changed += 1;
			}
		}
		#[cfg(feature = "log")]
		log::trace!("set {} of {} tiles to walkable = {}", changed, points.len(), walkable);
		changed
	}
}

impl<N: Neighborhood> Graph for GridGraph<N> {
	fn node_at(&self, position: Vec3) -> Option<NodeId> {
		self.point_at(position).and_then(|point| self.id_at(point))
	}

	#[track_caller]
	fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id]
	}

	fn neighbours_of(&self, id: NodeId, neighbours: &mut Vec<NodeId>) {
		self.neighborhood
			.for_each_neighbor(self.nodes[id].point(), |point| {
				if let Some(other) = self.id_at(point) {
					neighbours.push(other);
				}
			});
	}

	fn node_count(&self) -> usize {
		self.nodes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{ManhattanNeighborhood, MooreNeighborhood};

	fn open_grid(width: usize, depth: usize) -> GridGraph<MooreNeighborhood> {
		GridGraph::new(
			GridConfig::with_size(width, depth),
			|_| true,
			MooreNeighborhood::new(width, depth),
		)
		.unwrap()
	}

	#[test]
	fn new() {
		let graph = open_grid(4, 3);
		assert_eq!(graph.node_count(), 12);

		for (id, node) in graph.iter() {
			assert_eq!(graph.id_at(node.point()), Some(id));
			assert_eq!(node.position, graph.config().cell_center(node.grid_x, node.grid_z));
		}
	}

	#[test]
	fn invalid_cell_size() {
		for cell_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
			let result = GridGraph::new(
				GridConfig {
					cell_size,
					..GridConfig::with_size(3, 3)
				},
				|_| true,
				ManhattanNeighborhood::new(3, 3),
			);
			assert!(matches!(result, Err(GridError::InvalidCellSize(_))));
		}
	}

	#[test]
	fn node_at() {
		let graph = open_grid(5, 5);

		let id = graph.node_at(Vec3::new(3.2, 0.0, 1.7)).unwrap();
		assert_eq!(graph.node(id).point(), (3, 1));

		assert_eq!(graph.node_at(Vec3::new(-0.1, 0.0, 1.0)), None);
		assert_eq!(graph.node_at(Vec3::new(1.0, 0.0, 5.0)), None);
		assert_eq!(graph.node_at(Vec3::new(500.0, 0.0, 500.0)), None);
		assert_eq!(graph.node_at(Vec3::new(f32::NAN, 0.0, 1.0)), None);
	}

	#[test]
	fn node_at_center_round_trip() {
		let graph = open_grid(6, 4);
		for (id, node) in graph.iter() {
			assert_eq!(graph.node_at(node.position), Some(id));
		}
	}

	#[test]
	fn neighbours_of() {
		let graph = GridGraph::new(
			GridConfig::with_size(3, 3),
			|_| true,
			ManhattanNeighborhood::new(3, 3),
		)
		.unwrap();

		let center = graph.id_at((1, 1)).unwrap();
		let mut neighbours = vec![];
		graph.neighbours_of(center, &mut neighbours);

		let points: Vec<Point> = neighbours.iter().map(|&id| graph.node(id).point()).collect();
		assert_eq!(points, vec![(1, 0), (2, 1), (1, 2), (0, 1)]);
	}

	#[test]
	fn neighbours_of_appends() {
		let graph = open_grid(3, 3);
		let corner = graph.id_at((0, 0)).unwrap();
		let center = graph.id_at((1, 1)).unwrap();

		let mut neighbours = vec![];
		graph.neighbours_of(corner, &mut neighbours);
		assert_eq!(neighbours.len(), 3);

		// the same buffer is reused by the search, neighbours are only ever appended
		graph.neighbours_of(center, &mut neighbours);
		assert_eq!(neighbours.len(), 3 + 8);
		assert_eq!(graph.node(neighbours[3]).point(), (1, 0));

		neighbours.clear();
		graph.neighbours_of(center, &mut neighbours);
		assert_eq!(neighbours.len(), 8);
	}

	#[test]
	fn set_walkable() {
		let mut graph = open_grid(3, 3);

		assert!(graph.set_walkable((2, 0), false));
		assert!(!graph.node_at_point((2, 0)).unwrap().walkable);
		assert!(!graph.set_walkable((3, 0), false));

		graph.tiles_changed(&[(2, 0), (0, 0)], |(x, _)| x == 2);
		assert!(graph.node_at_point((2, 0)).unwrap().walkable);
		assert!(!graph.node_at_point((0, 0)).unwrap().walkable);
	}

	#[test]
	fn set_walkable_many() {
		let mut graph = open_grid(4, 4);

		let wall = [(1, 0), (1, 1), (1, 2), (9, 9)];
		assert_eq!(graph.set_walkable_many(&wall, false), 3);
		for point in &wall[..3] {
			assert!(!graph.node_at_point(*point).unwrap().walkable);
		}
		assert!(graph.node_at_point((1, 3)).unwrap().walkable);

		assert_eq!(graph.set_walkable_many(&wall[1..], true), 2);
		assert!(!graph.node_at_point((1, 0)).unwrap().walkable);
		assert!(graph.node_at_point((1, 1)).unwrap().walkable);
		assert!(graph.node_at_point((1, 2)).unwrap().walkable);
	}
}
