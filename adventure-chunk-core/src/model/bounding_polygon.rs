use geo::{Area, BoundingRect, Contains, LineString, Polygon, Rect};

use super::GeoPoint;

/// the drivetime isochrone: a closed ring of WGS84 positions.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingPolygon(Polygon<f64>);

impl BoundingPolygon {
    /// builds the polygon from an ordered ring. the ring is closed if the
    /// last point does not repeat the first.
    pub fn from_ring(ring: Vec<GeoPoint>) -> Self {
        let exterior = ring
            .into_iter()
            .map(geo::Coord::from)
            .collect::<LineString<f64>>();
        BoundingPolygon(Polygon::new(exterior, vec![]))
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.0
    }

    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.0.bounding_rect()
    }

    /// true when the ring is empty or encloses no area.
    pub fn is_degenerate(&self) -> bool {
        self.0.exterior().0.len() < 4 || self.0.unsigned_area() == 0.0
    }

    /// interior test; points on the ring itself are outside.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let p: geo::Point<f64> = geo::Coord::from(*point).into();
        self.0.contains(&p)
    }
}

impl From<Polygon<f64>> for BoundingPolygon {
    fn from(value: Polygon<f64>) -> Self {
        BoundingPolygon(value)
    }
}
