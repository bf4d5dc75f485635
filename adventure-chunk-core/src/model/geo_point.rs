use serde::{Deserialize, Serialize};

use crate::ChunkFinderError;

/// a WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// confirms both ordinates are finite and inside the WGS84 ranges.
    pub fn validate(&self) -> Result<(), ChunkFinderError> {
        validate_latitude(self.latitude)?;
        validate_longitude(self.longitude)?;
        Ok(())
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        geo::coord! { x: value.longitude, y: value.latitude }
    }
}

impl From<geo::Coord<f64>> for GeoPoint {
    fn from(value: geo::Coord<f64>) -> Self {
        GeoPoint::new(value.y, value.x)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

pub(crate) fn validate_latitude(lat: f64) -> Result<(), ChunkFinderError> {
    validate_range(lat, -90.0, 90.0)
        .map_err(|e| ChunkFinderError::Validation(format!("invalid latitude: {e}")))
}

pub(crate) fn validate_longitude(lon: f64) -> Result<(), ChunkFinderError> {
    validate_range(lon, -180.0, 180.0)
        .map_err(|e| ChunkFinderError::Validation(format!("invalid longitude: {e}")))
}

fn validate_range(v: f64, min: f64, max: f64) -> Result<(), String> {
    if !v.is_finite() {
        Err(format!("'{v}' is not a finite number"))
    } else if v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(())
    }
}
