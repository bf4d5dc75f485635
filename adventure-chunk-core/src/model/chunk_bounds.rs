use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{
    geo_point::{validate_latitude, validate_longitude},
    GeoPoint,
};
use crate::ChunkFinderError;

/// axis-aligned rectangle in WGS84 degrees, the unit of spatial granularity
/// for every observation lookup.
///
/// serializes as a `[min_lon, min_lat, max_lon, max_lat]` array, matching the
/// ordering of a GeoJSON bbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", try_from = "[f64; 4]")]
pub struct ChunkBounds {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
}

impl ChunkBounds {
    /// builds bounds from caller input, rejecting values outside WGS84 or
    /// rectangles with no extent.
    pub fn try_new(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    ) -> Result<ChunkBounds, ChunkFinderError> {
        validate_longitude(min_lon)?;
        validate_longitude(max_lon)?;
        validate_latitude(min_lat)?;
        validate_latitude(max_lat)?;
        if !(min_lon < max_lon) {
            return Err(ChunkFinderError::Validation(format!(
                "bounds: min_lon must be less than max_lon, but found [{min_lon},{max_lon}]"
            )));
        }
        if !(min_lat < max_lat) {
            return Err(ChunkFinderError::Validation(format!(
                "bounds: min_lat must be less than max_lat, but found [{min_lat},{max_lat}]"
            )));
        }
        Ok(ChunkBounds {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// builds bounds from the north-east and south-west corners of a map view.
    pub fn from_corners(ne: GeoPoint, sw: GeoPoint) -> Result<ChunkBounds, ChunkFinderError> {
        ChunkBounds::try_new(sw.longitude, sw.latitude, ne.longitude, ne.latitude)
    }

    /// a tiler cell. steps are positive; cells on the last row or column may
    /// overhang the polygon's bounding box.
    pub(crate) fn from_grid_cell(
        min_lon: f64,
        min_lat: f64,
        lon_step: f64,
        lat_step: f64,
    ) -> Self {
        ChunkBounds {
            min_lon,
            min_lat,
            max_lon: min_lon + lon_step,
            max_lat: min_lat + lat_step,
        }
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// geometric center of the rectangle.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}

impl From<ChunkBounds> for [f64; 4] {
    fn from(value: ChunkBounds) -> Self {
        value.as_array()
    }
}

impl TryFrom<[f64; 4]> for ChunkBounds {
    type Error = ChunkFinderError;

    fn try_from(value: [f64; 4]) -> Result<Self, Self::Error> {
        let [min_lon, min_lat, max_lon, max_lat] = value;
        ChunkBounds::try_new(min_lon, min_lat, max_lon, max_lat)
    }
}

impl FromStr for ChunkBounds {
    type Err = ChunkFinderError;

    /// parses `min_lon,min_lat,max_lon,max_lat`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(ChunkFinderError::Validation(format!(
                "expected format: min_lon,min_lat,max_lon,max_lat, got: {s}"
            )));
        }
        let values = parts
            .iter()
            .map(|p| {
                p.trim().parse::<f64>().map_err(|_| {
                    ChunkFinderError::Validation(format!("bounds: not a number: {p}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        ChunkBounds::try_new(values[0], values[1], values[2], values[3])
    }
}

impl std::fmt::Display for ChunkBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

#[cfg(test)]
mod test {
    use super::ChunkBounds;
    use crate::model::GeoPoint;

    #[test]
    fn test_try_new_rejects_inverted_axes() {
        assert!(ChunkBounds::try_new(145.0, -37.8, 144.9, -37.7).is_err());
        assert!(ChunkBounds::try_new(144.9, -37.7, 145.0, -37.8).is_err());
        assert!(ChunkBounds::try_new(144.9, -37.8, 144.9, -37.7).is_err());
    }

    #[test]
    fn test_from_corners_orders_sw_first() {
        let bounds =
            ChunkBounds::from_corners(GeoPoint::new(-37.7, 145.0), GeoPoint::new(-37.8, 144.9))
                .unwrap();
        assert_eq!(bounds.as_array(), [144.9, -37.8, 145.0, -37.7]);
    }

    #[test]
    fn test_center() {
        let bounds = ChunkBounds::try_new(0.0, 10.0, 2.0, 14.0).unwrap();
        assert_eq!(bounds.center(), GeoPoint::new(12.0, 1.0));
    }

    #[test]
    fn test_parse_from_str() {
        let bounds: ChunkBounds = "144.9, -37.8, 145.0, -37.7".parse().unwrap();
        assert_eq!(bounds.min_lat(), -37.8);
        assert!("144.9,-37.8,145.0".parse::<ChunkBounds>().is_err());
        assert!("a,b,c,d".parse::<ChunkBounds>().is_err());
    }

    #[test]
    fn test_serde_as_array() {
        let bounds = ChunkBounds::try_new(144.9, -37.8, 145.0, -37.7).unwrap();
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(json, "[144.9,-37.8,145.0,-37.7]");
        let decoded: ChunkBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, bounds);
        assert!(serde_json::from_str::<ChunkBounds>("[1.0,1.0,0.0,2.0]").is_err());
    }
}
