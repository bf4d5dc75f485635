mod app_error;
mod chunk_app;

pub use app_error::AppError;
pub use chunk_app::{AdventureChunkApp, AdventureChunkOperation};
