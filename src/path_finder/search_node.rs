use crate::{Cost, NodeId};

/// What a single search knows about a Node.
///
/// Every call to [`find_path`](crate::PathFinder::find_path) creates its own table of these,
/// keyed by [`NodeId`], and drops it when it returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchNode {
	/// the Cost of the best known Path from the start to this Node
	pub g_cost: Cost,
	/// the estimated Cost from this Node to the target
	pub h_cost: Cost,
	/// the previous Node on the best known Path. `None` for the start.
	pub parent: Option<NodeId>,
	/// whether the Node was already expanded
	pub closed: bool,
}

impl SearchNode {
	/// A SearchNode with both Costs at 0 and no parent
	pub fn new() -> SearchNode {
		SearchNode::default()
	}

	/// `g_cost + h_cost`, the priority of the Node in the open set
	///
	/// ## Examples
	/// ```
	/// # use grid_astar::SearchNode;
	/// let node = SearchNode {
	///     g_cost: 24,
	///     h_cost: 30,
	///     ..SearchNode::new()
	/// };
	///
	/// assert_eq!(node.f_cost(), 54);
	/// ```
	pub fn f_cost(&self) -> Cost {
		self.g_cost + self.h_cost
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initial_state() {
		let node = SearchNode::new();
		assert_eq!(node.g_cost, 0);
		assert_eq!(node.h_cost, 0);
		assert_eq!(node.f_cost(), 0);
		assert_eq!(node.parent, None);
		assert!(!node.closed);
	}
}
