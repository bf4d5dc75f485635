mod bounding_polygon;
mod chunk_bounds;
mod geo_point;
mod observation_record;
mod raw_observation;

pub use bounding_polygon::BoundingPolygon;
pub use chunk_bounds::ChunkBounds;
pub use geo_point::GeoPoint;
pub use observation_record::ObservationRecord;
pub use raw_observation::{RawObservation, RawPhoto, RawTaxon};
