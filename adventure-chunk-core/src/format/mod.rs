mod format_error;
mod observation_formatter;

pub use format_error::FormatError;
pub use observation_formatter::{format_observation, format_observations, parse_location};

/// species guesses that carry no identification.
pub const PLACEHOLDER_SPECIES_GUESSES: [&str; 3] = ["unknown", "n/a", "unidentified"];

/// iconic taxon name used when the upstream record has none.
pub const UNKNOWN_ICONIC_TAXON: &str = "Unknown";

/// observation URL used when the upstream record has no permalink.
pub const MISSING_OBSERVATION_URL: &str = "#";
