use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChunkFinderError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("API rate limit exceeded, please wait a moment and try again with a smaller area or shorter drivetime: {0}")]
    UpstreamRateLimited(String),
    #[error("an external API error occurred{}: {message}", status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },
    #[error("unable to calculate drivetime area for {minutes} minutes, try a shorter drivetime")]
    NoBoundaryFound { minutes: u32 },
    #[error("no valid taxa found for filter: '{0}'")]
    NoTaxaResolved(String),
    #[error("unexpected error: {0}")]
    Internal(String),
}

impl ChunkFinderError {
    /// errors caused by the caller's input rather than an upstream service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChunkFinderError::Validation(_)
                | ChunkFinderError::NoBoundaryFound { .. }
                | ChunkFinderError::NoTaxaResolved(_)
        )
    }

    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        ChunkFinderError::Upstream {
            status,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}
