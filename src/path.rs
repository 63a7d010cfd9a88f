use crate::{Cost, Node, Point};
use glam::Vec3;

/// A sequence of Waypoints and the total Cost of walking along them.
///
/// The starting position of a search is never part of the Path: the first element is the
/// first step to take and the last element is the target. An empty Path means there is nothing
/// to walk, either because the target was already reached or because it cannot be reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
	path: Vec<P>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Waypoints and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_astar::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost(), 42);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// an empty Path with Cost 0
	pub fn empty() -> Path<P> {
		Path::new(Vec::new(), 0)
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the number of Waypoints in the Path
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if there is nowhere to go
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns an Iterator over the Waypoints, first step first
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}

	/// consumes the Path, returning the Waypoints
	pub fn into_vec(self) -> Vec<P> {
		self.path
	}
}

impl Path<Node> {
	/// The World positions of the Waypoints
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::{Node, Path};
	/// # use glam::Vec3;
	/// let path = Path::new(
	///     vec![
	///         Node::new(true, Vec3::new(1.5, 0.0, 0.5), 1, 0),
	///         Node::new(true, Vec3::new(2.5, 0.0, 1.5), 2, 1),
	///     ],
	///     24,
	/// );
	///
	/// let positions: Vec<Vec3> = path.positions().collect();
	/// assert_eq!(positions, vec![Vec3::new(1.5, 0.0, 0.5), Vec3::new(2.5, 0.0, 1.5)]);
	/// ```
	pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
		self.path.iter().map(|node| node.position)
	}

	/// The Grid coordinates of the Waypoints
	pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
		self.path.iter().map(Node::point)
	}
}

impl<P> Default for Path<P> {
	fn default() -> Path<P> {
		Path::empty()
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.iter()
	}
}

impl<P> IntoIterator for Path<P> {
	type Item = P;
	type IntoIter = std::vec::IntoIter<P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path == *rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		self.path.as_slice() == *rhs
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
