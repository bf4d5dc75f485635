mod chunk_finder_config;

pub use chunk_finder_config::{ChunkFinderConfig, ENV_PREFIX, MAX_DRIVE_TIME_MINUTES};
