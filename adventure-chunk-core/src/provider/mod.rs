//! contracts for the third-party services the chunk finder depends on.
//! implementations perform blocking I/O and must be shareable across threads.
mod observation_query;

pub use observation_query::{ObservationPage, ObservationQuery, QueryKind};

use crate::model::{BoundingPolygon, GeoPoint};
use crate::ChunkFinderError;

/// computes drivetime polygons.
pub trait IsochroneProvider: Send + Sync {
    /// returns the area reachable from `center` within `minutes` of driving.
    /// fails with [`ChunkFinderError::NoBoundaryFound`] when the service
    /// answers but has no polygon for the request.
    fn isochrone(
        &self,
        center: &GeoPoint,
        minutes: u32,
    ) -> Result<BoundingPolygon, ChunkFinderError>;
}

/// searches the upstream taxonomy by name.
pub trait TaxonSearchProvider: Send + Sync {
    /// identifiers of active taxa matching `name`, most relevant first.
    fn search_taxa(&self, name: &str) -> Result<Vec<i64>, ChunkFinderError>;
}

/// searches verifiable observations inside a rectangle.
pub trait ObservationSearchProvider: Send + Sync {
    fn search_observations(
        &self,
        query: &ObservationQuery,
    ) -> Result<ObservationPage, ChunkFinderError>;
}
