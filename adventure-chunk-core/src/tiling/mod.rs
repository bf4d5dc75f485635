//! partitions a drivetime polygon into a grid of fixed-size chunks.
//!
//! the grid is laid out in plain degrees starting at the south-west corner of
//! the polygon's bounding box. chunk height uses a constant
//! [`KM_PER_DEGREE_LATITUDE`], and chunk width is widened by the cosine of the
//! bounding box's center latitude so chunks stay roughly square anywhere on
//! the globe. a chunk is kept when its center falls inside the polygon.
mod grid_steps;
mod grid_tiler;

pub use grid_steps::GridSteps;
pub use grid_tiler::generate_chunks;

/// approximate length of one degree of latitude.
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.0;

/// largest grid, in candidate cells, a single tiling may walk.
pub const MAX_GRID_CELLS: usize = 1_000_000;
