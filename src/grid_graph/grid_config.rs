use glam::Vec3;

/// Options for the layout of a [`GridGraph`](crate::GridGraph)
///
/// Default options:
/// ```
/// # use grid_astar::GridConfig;
/// # use glam::Vec3;
/// assert_eq!(
///     GridConfig {
///         width: 10,
///         depth: 10,
///         cell_size: 1.0,
///         origin: Vec3::ZERO,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
	/// The number of Cells along the x axis (defaults to `10`)
	pub width: usize,
	/// The number of Cells along the z axis (defaults to `10`)
	pub depth: usize,
	/// The edge length of a single square Cell in World units (defaults to `1.0`)
	pub cell_size: f32,
	/// The World position of the outer corner of Cell `(0, 0)` (defaults to the origin).
	///
	/// The Grid extends from here towards positive x and z. The y coordinate is copied into the
	/// position of every Node.
	pub origin: Vec3,
}

impl GridConfig {
	/// a GridConfig with unit Cells starting at the World origin. Only the size differs from
	/// the default.
	///
	/// Values:
	/// ```
	/// # use grid_astar::GridConfig;
	/// # use glam::Vec3;
	/// assert_eq!(
	///     GridConfig {
	///         width: 5,
	///         depth: 3,
	///         ..GridConfig::UNIT
	///     },
	///     GridConfig::with_size(5, 3)
	/// );
	/// assert_eq!(GridConfig::UNIT.origin, Vec3::ZERO);
	/// ```
	pub const UNIT: GridConfig = GridConfig {
		width: 10,
		depth: 10,
		cell_size: 1.0,
		origin: Vec3::ZERO,
	};

	/// Creates a GridConfig of the given size with unit Cells at the World origin
	pub const fn with_size(width: usize, depth: usize) -> GridConfig {
		GridConfig {
			width,
			depth,
			..GridConfig::UNIT
		}
	}

	/// The World position of the center of the Cell at `(grid_x, grid_z)`
	pub fn cell_center(&self, grid_x: usize, grid_z: usize) -> Vec3 {
		self.origin
			+ Vec3::new(
				(grid_x as f32 + 0.5) * self.cell_size,
				0.0,
				(grid_z as f32 + 0.5) * self.cell_size,
			)
	}
}

impl Default for GridConfig {
	fn default() -> GridConfig {
		GridConfig::UNIT
	}
}
