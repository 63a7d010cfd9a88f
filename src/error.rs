use glam::Vec3;
use thiserror::Error;

/// Errors returned by [`PathFinder::find_path`](crate::PathFinder::find_path)
///
/// Note that an unreachable target is not an error. It results in an empty [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PathError {
	/// the start position does not lie on any Node of the Graph
	#[error("start position {0} is outside of the grid")]
	StartOutOfBounds(Vec3),
	/// the target position does not lie on any Node of the Graph
	#[error("target position {0} is outside of the grid")]
	TargetOutOfBounds(Vec3),
}

/// Errors returned when constructing a [`GridGraph`](crate::GridGraph)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
	/// at least one of the dimensions is zero
	#[error("grid of size {width}x{depth} contains no cells")]
	EmptyGrid {
		/// the requested width
		width: usize,
		/// the requested depth
		depth: usize,
	},
	/// the cell size is zero, negative or not finite
	#[error("invalid cell size {0}, expected a positive finite number")]
	InvalidCellSize(f32),
}
