use crate::{Node, NodeId};
use glam::Vec3;

/// The Graph a [`PathFinder`](crate::PathFinder) searches on.
///
/// A Graph owns its [`Node`]s and hands out stable [`NodeId`]s for them. The search only ever
/// reads from the Graph, which is why a single Graph can serve any number of searches at once.
///
/// [`GridGraph`](crate::GridGraph) is the implementation for regular Grids. Implement this
/// Trait to search on other layouts (multiple floors, irregular cells, ...).
pub trait Graph {
	/// Maps a World position to the Node containing it.
	///
	/// Returns `None` if the position is not covered by the Graph. Must be deterministic.
	fn node_at(&self, position: Vec3) -> Option<NodeId>;

	/// The Node with the given Id.
	///
	/// May panic if `id` was not handed out by this Graph.
	fn node(&self, id: NodeId) -> &Node;

	/// Appends the Ids of all Nodes adjacent to `id` to `neighbours`.
	///
	/// Walkability is checked by the search, so unwalkable Nodes may be included. The order
	/// has to be stable, since it decides which of several equally good Paths is found.
	fn neighbours_of(&self, id: NodeId, neighbours: &mut Vec<NodeId>);

	/// The number of Nodes in the Graph. Only used as a capacity hint.
	fn node_count(&self) -> usize {
		0
	}
}

impl<G: Graph + ?Sized> Graph for &G {
	fn node_at(&self, position: Vec3) -> Option<NodeId> {
		(**self).node_at(position)
	}
	fn node(&self, id: NodeId) -> &Node {
		(**self).node(id)
	}
	fn neighbours_of(&self, id: NodeId, neighbours: &mut Vec<NodeId>) {
		(**self).neighbours_of(id, neighbours)
	}
	fn node_count(&self) -> usize {
		(**self).node_count()
	}
}
