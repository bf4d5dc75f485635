//! reqwest-backed implementations of the upstream provider contracts.
mod http_ops;
mod inaturalist_client;
mod mapbox_isochrone;

pub use http_ops::{build_http_client, classify_failure};
pub use inaturalist_client::{observation_params, parse_taxa_response, INaturalistClient};
pub use mapbox_isochrone::{parse_isochrone_response, MapboxIsochroneProvider};
