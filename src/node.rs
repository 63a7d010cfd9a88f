//! The permanent Node record of a Graph and the Ids used to reference it

use crate::Point;
use glam::Vec3;
use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a Node in a [`Graph`](crate::Graph)
pub type NodeId = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIds with a faster Hasher
pub type NodeIdMap<V> = hashbrown::HashMap<NodeId, V, BuildHasherDefault<NodeIdHasher>>;

/// A [`Hasher`] specialized on NodeIds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIdHasher(u64);

impl Hasher for NodeIdHasher {
	/// panics, since only NodeIds are supposed to be used
	fn write(&mut self, _: &[u8]) {
		unreachable!("This Hasher only works with NodeIds")
	}
	/// Writes a single NodeId into this hasher.
	fn write_usize(&mut self, id: NodeId) {
		// hashbrown reads the top 7 bits, so consecutive ids have to be spread out
		self.0 = (id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

/// A single Cell of the Grid.
///
/// A Node only stores what stays the same for the lifetime of a Graph: where it is and whether
/// it can be walked over. Everything a search learns about a Node is kept by that search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	/// `false` if the Node can never be part of a Path
	pub walkable: bool,
	/// the center of the Cell in World Space
	pub position: Vec3,
	/// the column of the Node on the Grid
	pub grid_x: usize,
	/// the row of the Node on the Grid
	pub grid_z: usize,
}

impl Node {
	/// Creates a new Node
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::Node;
	/// # use glam::Vec3;
	/// let node = Node::new(true, Vec3::new(2.5, 0.0, 0.5), 2, 0);
	///
	/// assert!(node.walkable);
	/// assert_eq!(node.point(), (2, 0));
	/// ```
	pub fn new(walkable: bool, position: Vec3, grid_x: usize, grid_z: usize) -> Node {
		Node {
			walkable,
			position,
			grid_x,
			grid_z,
		}
	}

	/// The Grid coordinates `(grid_x, grid_z)` of the Node
	pub fn point(&self) -> Point {
		(self.grid_x, self.grid_z)
	}
}
