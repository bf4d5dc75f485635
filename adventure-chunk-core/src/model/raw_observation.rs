use serde::{Deserialize, Serialize};

/// one entry of an iNaturalist `/v1/observations` result page. every field is
/// optional upstream; only the fields used for formatting are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub species_guess: Option<String>,
    /// "lat,lon"
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<RawPhoto>>,
    #[serde(default)]
    pub taxon: Option<RawTaxon>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTaxon {
    #[serde(default)]
    pub iconic_taxon_name: Option<String>,
}

impl RawObservation {
    pub fn has_photos(&self) -> bool {
        self.photos.as_ref().is_some_and(|p| !p.is_empty())
    }
}
