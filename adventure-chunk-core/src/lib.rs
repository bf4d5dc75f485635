pub mod cache;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod taxa;
pub mod tiling;

pub use error::ChunkFinderError;
