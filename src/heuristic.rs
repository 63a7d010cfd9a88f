//! Estimates for the remaining Cost between two Points on the Grid

use crate::{Cost, Point};
use std::fmt::Debug;

/// Cost of a single step along one axis
pub const STRAIGHT_COST: Cost = 10;
/// Cost of a single diagonal step. Approximates `STRAIGHT_COST * sqrt(2)`
pub const DIAGONAL_COST: Cost = 14;

/// Estimates how expensive it is to get from one Point to another.
///
/// The [`PathFinder`](crate::PathFinder) uses the same estimate for the cost of a single step
/// between two neighboring Nodes, so the estimate doubles as the edge cost of the Grid.
///
/// The returned Paths are only guaranteed to be the shortest ones if the Heuristic is consistent:
/// it may never overestimate the actual Cost, and `estimate(a, c) <= estimate(a, b) + estimate(b, c)`.
pub trait Heuristic: Debug {
	/// Estimates the Cost of walking from `a` to `b`
	fn estimate(&self, a: Point, b: Point) -> Cost;
}

/// The octile distance. See [`octile_distance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Octile;

impl Heuristic for Octile {
	fn estimate(&self, a: Point, b: Point) -> Cost {
		octile_distance(a, b)
	}
}

/// Distance on a Grid where straight steps cost [`STRAIGHT_COST`] and diagonal steps cost
/// [`DIAGONAL_COST`].
///
/// ## Examples
/// ```
/// # use grid_astar::heuristic::octile_distance;
/// assert_eq!(octile_distance((0, 0), (4, 4)), 4 * 14);
/// assert_eq!(octile_distance((0, 0), (3, 1)), 14 + 2 * 10);
/// assert_eq!(octile_distance((2, 2), (2, 2)), 0);
/// ```
pub fn octile_distance(a: Point, b: Point) -> Cost {
	let dx = a.0.abs_diff(b.0);
	let dz = a.1.abs_diff(b.1);
	let (min, max) = if dx < dz { (dx, dz) } else { (dz, dx) };
	DIAGONAL_COST * min + STRAIGHT_COST * (max - min)
}
