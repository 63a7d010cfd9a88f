//! The most common Neighborhoods of a Grid

use crate::Point;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
///
/// The order in which neighbors are produced must be stable, since it decides which of several
/// equally good Paths is found.
pub trait Neighborhood: Clone + Debug {
	/// Calls `f` with every Neighbor of a Point, in a stable order
	///
	/// Note that it is not necessary to check whether the Node at a Point is walkable or not.
	/// That check is done by the search.
	fn for_each_neighbor(&self, point: Point, f: impl FnMut(Point));

	/// Appends all Neighbors of a Point to `target`
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		self.for_each_neighbor(point, |neighbor| target.push(neighbor));
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	depth: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `depth` are the size of the Grid to move on.
	pub fn new(width: usize, depth: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, depth }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn for_each_neighbor(&self, point: Point, f: impl FnMut(Point)) {
		for_each_in_bounds(point, &[(0, -1), (1, 0), (0, 1), (-1, 0)], (self.width, self.depth), f);
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Diagonal steps are allowed even if both adjacent straight Nodes are not walkable.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
	width: usize,
	depth: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `depth` are the size of the Grid to move on.
	pub fn new(width: usize, depth: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, depth }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn for_each_neighbor(&self, point: Point, f: impl FnMut(Point)) {
		for_each_in_bounds(
			point,
			&[
				(0, -1),
				(1, -1),
				(1, 0),
				(1, 1),
				(0, 1),
				(-1, 1),
				(-1, 0),
				(-1, -1),
			],
			(self.width, self.depth),
			f,
		);
	}
}

fn for_each_in_bounds(
	point: Point,
	offsets: &[(isize, isize)],
	(width, depth): (usize, usize),
	f: impl FnMut(Point),
) {
	offsets
		.iter()
		.map(|(dx, dz)| (point.0 as isize + dx, point.1 as isize + dz))
		.filter(|&(x, z)| x >= 0 && z >= 0 && (x as usize) < width && (z as usize) < depth)
		.map(|(x, z)| (x as usize, z as usize))
		.for_each(f);
}
