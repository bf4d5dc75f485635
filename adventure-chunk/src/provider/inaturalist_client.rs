use adventure_chunk_core::{
    provider::{
        ObservationPage, ObservationQuery, ObservationSearchProvider, QueryKind,
        TaxonSearchProvider,
    },
    ChunkFinderError,
};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::http_ops;

/// taxa and observation search against the iNaturalist v1 API.
pub struct INaturalistClient {
    client: Client,
    base_url: String,
}

impl INaturalistClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }
}

impl TaxonSearchProvider for INaturalistClient {
    fn search_taxa(&self, name: &str) -> Result<Vec<i64>, ChunkFinderError> {
        let params = [
            ("q", name.to_string()),
            ("is_active", String::from("true")),
        ];
        let url = self.endpoint("taxa");
        let body = http_ops::get_text(&self.client, "inaturalist taxa", &url, &params)?;
        parse_taxa_response(&body)
    }
}

impl ObservationSearchProvider for INaturalistClient {
    fn search_observations(
        &self,
        query: &ObservationQuery,
    ) -> Result<ObservationPage, ChunkFinderError> {
        let params = observation_params(query);
        let body = http_ops::get_text(
            &self.client,
            "inaturalist observations",
            &self.endpoint("observations"),
            &params,
        )?;
        serde_json::from_str(&body).map_err(|e| {
            ChunkFinderError::upstream(None, format!("failure decoding observations: {e}"))
        })
    }
}

#[derive(Deserialize)]
struct TaxaResponse {
    #[serde(default)]
    results: Vec<TaxonResult>,
}

#[derive(Deserialize)]
struct TaxonResult {
    id: i64,
}

/// reads the taxon IDs of a `/v1/taxa` response, most relevant first.
pub fn parse_taxa_response(body: &str) -> Result<Vec<i64>, ChunkFinderError> {
    let response: TaxaResponse = serde_json::from_str(body).map_err(|e| {
        ChunkFinderError::upstream(None, format!("failure decoding taxa search: {e}"))
    })?;
    Ok(response.results.into_iter().map(|t| t.id).collect())
}

/// query string for `/v1/observations`. the rectangle is given by its
/// north-east and south-west corners.
pub fn observation_params(query: &ObservationQuery) -> Vec<(&'static str, String)> {
    let b = &query.bounds;
    let mut params = vec![
        ("nelat", b.max_lat().to_string()),
        ("nelng", b.max_lon().to_string()),
        ("swlat", b.min_lat().to_string()),
        ("swlng", b.min_lon().to_string()),
        ("verifiable", String::from("true")),
        ("per_page", query.per_page.to_string()),
    ];
    if let Some(taxon_id) = query.taxon_id_param() {
        params.push(("taxon_id", taxon_id));
    }
    if query.kind == QueryKind::Listing {
        params.push(("photos", String::from("true")));
        params.push(("order", String::from("desc")));
        params.push(("order_by", String::from("observed_on")));
    }
    params
}
