use super::{FrontierKind, SearchNode};
use crate::{Cost, NodeId, Point};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Order of the open set: lowest `f_cost`, then lowest `h_cost`, then lowest Grid coordinate.
///
/// Grid coordinates are unique, so no two open Nodes ever compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Priority {
	f_cost: Cost,
	h_cost: Cost,
	point: Point,
}

impl Priority {
	pub fn new(node: &SearchNode, point: Point) -> Priority {
		Priority {
			f_cost: node.f_cost(),
			h_cost: node.h_cost,
			point,
		}
	}
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct HeuristicElement(pub NodeId, pub Priority);
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		// reversed, because BinaryHeap is a max-heap
		rhs.1.cmp(&self.1)
	}
}

/// The open set of a search
#[derive(Debug)]
pub(crate) enum Frontier {
	LinearScan(Vec<HeuristicElement>),
	/// may contain outdated entries for Nodes whose Cost decreased. Those are skipped on pop.
	BinaryHeap(BinaryHeap<HeuristicElement>),
}

impl Frontier {
	pub fn new(kind: FrontierKind, size_hint: usize) -> Frontier {
		match kind {
			FrontierKind::LinearScan => Frontier::LinearScan(Vec::with_capacity(size_hint)),
			FrontierKind::BinaryHeap => Frontier::BinaryHeap(BinaryHeap::with_capacity(size_hint)),
		}
	}

	/// adds a Node that is not in the open set yet
	pub fn push(&mut self, id: NodeId, priority: Priority) {
		match self {
			Frontier::LinearScan(open) => open.push(HeuristicElement(id, priority)),
			Frontier::BinaryHeap(open) => open.push(HeuristicElement(id, priority)),
		}
	}

	/// lowers the priority of a Node that is already in the open set
	pub fn decrease(&mut self, id: NodeId, priority: Priority) {
		match self {
			Frontier::LinearScan(open) => {
				match open.iter_mut().find(|element| element.0 == id) {
					Some(element) => element.1 = priority,
					None => open.push(HeuristicElement(id, priority)),
				}
			}
			Frontier::BinaryHeap(open) => open.push(HeuristicElement(id, priority)),
		}
	}

	/// removes and returns the best open Node.
	///
	/// `is_closed` filters out outdated entries of Nodes that were expanded in the meantime.
	pub fn pop(&mut self, mut is_closed: impl FnMut(NodeId) -> bool) -> Option<NodeId> {
		match self {
			Frontier::LinearScan(open) => {
				let best = open
					.iter()
					.enumerate()
					.min_by_key(|(_, element)| element.1)
					.map(|(index, _)| index)?;
				Some(open.swap_remove(best).0)
			}
			Frontier::BinaryHeap(open) => {
				while let Some(HeuristicElement(id, _)) = open.pop() {
					if !is_closed(id) {
						return Some(id);
					}
				}
				None
			}
		}
	}
}
