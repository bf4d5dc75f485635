use adventure_chunk_core::ChunkFinderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading configuration: {source}")]
    ConfigLoadError {
        #[from]
        source: config::ConfigError,
    },
    #[error("failure building HTTP client: {source}")]
    HttpClientError {
        #[from]
        source: reqwest::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error(transparent)]
    ChunkFinderError(#[from] ChunkFinderError),
}
