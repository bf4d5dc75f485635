use serde::{Deserialize, Serialize};

/// a display-ready observation, derived from an upstream record for a single
/// response and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub id: Option<u64>,
    #[serde(rename = "species_guess")]
    pub species_name: String,
    pub iconic_taxon_name: String,
    pub photo_url: Option<String>,
    pub observation_url: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
