//! the request-level operations, composed from the core library and the
//! upstream providers.
mod chunk_service;
mod service_ops;

pub use chunk_service::{ChunkService, ChunkServiceSettings};
pub use service_ops::{validate_chunk_size, validate_drive_time};
