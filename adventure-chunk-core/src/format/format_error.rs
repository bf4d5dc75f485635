use thiserror::Error;

/// why a single upstream record could not be formatted.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("record does not match the observation schema: {source}")]
    InvalidRecord {
        #[from]
        source: serde_json::Error,
    },
    #[error("first photo of observation {0:?} has no url")]
    MissingPhotoUrl(Option<u64>),
}
