use adventure_chunk_core::{
    model::{BoundingPolygon, GeoPoint},
    provider::IsochroneProvider,
    ChunkFinderError,
};
use reqwest::blocking::Client;

use super::http_ops;
use crate::app::AppError;

/// drivetime polygons from the Mapbox Isochrone API.
/// see <https://docs.mapbox.com/api/navigation/isochrone/>
pub struct MapboxIsochroneProvider {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MapboxIsochroneProvider {
    const PROFILE: &'static str = "mapbox/driving";

    pub fn new(client: Client, base_url: &str, access_token: &str) -> Result<Self, AppError> {
        if access_token.trim().is_empty() {
            return Err(AppError::ConfigurationError(format!(
                "a Mapbox access token is required, set {}_MAPBOX_API_KEY",
                crate::config::ENV_PREFIX
            )));
        }
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }
}

impl IsochroneProvider for MapboxIsochroneProvider {
    fn isochrone(
        &self,
        center: &GeoPoint,
        minutes: u32,
    ) -> Result<BoundingPolygon, ChunkFinderError> {
        let url = format!(
            "{}/isochrone/v1/{}/{},{}",
            self.base_url,
            Self::PROFILE,
            center.longitude,
            center.latitude
        );
        let params = [
            ("contours_minutes", minutes.to_string()),
            ("polygons", String::from("true")),
            ("access_token", self.access_token.clone()),
        ];
        let body = http_ops::get_text(&self.client, "mapbox isochrone", &url, &params)?;
        let polygon = parse_isochrone_response(&body, minutes)?;
        log::debug!(
            "isochrone of {minutes} minutes around {center} has {} vertices",
            polygon.polygon().exterior().0.len()
        );
        Ok(polygon)
    }
}

/// reads the first contour of an isochrone FeatureCollection. GeoJSON
/// positions are `[lon, lat]`.
pub fn parse_isochrone_response(
    body: &str,
    minutes: u32,
) -> Result<BoundingPolygon, ChunkFinderError> {
    let collection: geojson::FeatureCollection = serde_json::from_str(body).map_err(|e| {
        ChunkFinderError::upstream(None, format!("failure decoding isochrone response: {e}"))
    })?;
    let geometry = collection
        .features
        .into_iter()
        .next()
        .and_then(|f| f.geometry)
        .ok_or(ChunkFinderError::NoBoundaryFound { minutes })?;
    let rings = match geometry.value {
        geojson::Value::Polygon(rings) => rings,
        _ => {
            return Err(ChunkFinderError::upstream(
                None,
                "isochrone geometry is not a Polygon",
            ))
        }
    };
    let exterior = rings
        .into_iter()
        .next()
        .ok_or(ChunkFinderError::NoBoundaryFound { minutes })?;
    let ring = exterior
        .iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok(GeoPoint::new(*lat, *lon)),
            _ => Err(ChunkFinderError::upstream(
                None,
                format!("invalid isochrone position: {position:?}"),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoundingPolygon::from_ring(ring))
}
