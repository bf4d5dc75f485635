use adventure_chunk_core::{
    cache::{ObservationCache, SystemClock},
    format::format_observations,
    model::{ChunkBounds, GeoPoint, ObservationRecord},
    provider::{
        IsochroneProvider, ObservationQuery, ObservationSearchProvider, TaxonSearchProvider,
    },
    taxa::{TaxaFilter, TaxaResolver},
    tiling::generate_chunks,
    ChunkFinderError,
};
use chrono::TimeDelta;
use std::sync::Arc;

use super::service_ops::{validate_chunk_size, validate_drive_time};
use crate::{
    app::AppError,
    config::{ChunkFinderConfig, MAX_DRIVE_TIME_MINUTES},
    provider::{build_http_client, INaturalistClient, MapboxIsochroneProvider},
};

/// request limits applied by [`ChunkService`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkServiceSettings {
    pub max_drive_time_minutes: u32,
    pub listing_page_size: u32,
}

impl Default for ChunkServiceSettings {
    fn default() -> Self {
        Self {
            max_drive_time_minutes: MAX_DRIVE_TIME_MINUTES,
            listing_page_size: 200,
        }
    }
}

impl From<&ChunkFinderConfig> for ChunkServiceSettings {
    fn from(conf: &ChunkFinderConfig) -> Self {
        Self {
            max_drive_time_minutes: conf.max_drive_time_minutes,
            listing_page_size: conf.listing_page_size,
        }
    }
}

/// finds drivetime chunks and answers observation questions about them.
///
/// each call runs independently. the only state shared between calls is
/// the presence cache, which may also be shared with other services.
pub struct ChunkService {
    isochrones: Arc<dyn IsochroneProvider>,
    observations: Arc<dyn ObservationSearchProvider>,
    taxa: TaxaResolver,
    cache: Arc<ObservationCache>,
    settings: ChunkServiceSettings,
}

impl ChunkService {
    pub fn new(
        isochrones: Arc<dyn IsochroneProvider>,
        observations: Arc<dyn ObservationSearchProvider>,
        taxa: TaxaResolver,
        cache: Arc<ObservationCache>,
        settings: ChunkServiceSettings,
    ) -> Self {
        Self {
            isochrones,
            observations,
            taxa,
            cache,
            settings,
        }
    }

    /// wires the Mapbox and iNaturalist clients up from configuration.
    pub fn try_from_config(conf: &ChunkFinderConfig) -> Result<ChunkService, AppError> {
        conf.validate()?;
        let client = build_http_client(conf.request_timeout_seconds)?;
        let mapbox = MapboxIsochroneProvider::new(
            client.clone(),
            &conf.mapbox_base_url,
            &conf.mapbox_api_key,
        )?;
        let inaturalist = Arc::new(INaturalistClient::new(client, &conf.inaturalist_base_url));
        let taxon_search: Arc<dyn TaxonSearchProvider> = inaturalist.clone();
        let cache = ObservationCache::new(
            TimeDelta::minutes(conf.cache_ttl_minutes),
            Arc::new(SystemClock),
        );
        Ok(ChunkService::new(
            Arc::new(mapbox),
            inaturalist,
            TaxaResolver::new(taxon_search, conf.taxa_failure_policy),
            Arc::new(cache),
            ChunkServiceSettings::from(conf),
        ))
    }

    pub fn cache(&self) -> &ObservationCache {
        &self.cache
    }

    /// tiles the drivetime area around `center` into chunks of
    /// `chunk_size_km` on a side, in row-major order from the south-west.
    ///
    /// the taxa filter is accepted for symmetry with the observation calls
    /// but does not narrow the result; callers check chunks individually.
    pub fn find_chunks(
        &self,
        center: GeoPoint,
        drive_time_minutes: i64,
        chunk_size_km: f64,
        taxa_filter: Option<&str>,
    ) -> Result<Vec<ChunkBounds>, ChunkFinderError> {
        center.validate()?;
        let max_minutes = self.settings.max_drive_time_minutes;
        let minutes = validate_drive_time(drive_time_minutes, max_minutes)?;
        let chunk_size_km = validate_chunk_size(chunk_size_km)?;
        if let Some(filter) = TaxaFilter::parse_optional(taxa_filter) {
            log::debug!("find_chunks received taxa filter '{filter}', not applied to tiling");
        }

        let polygon = self.isochrones.isochrone(&center, minutes)?;
        let chunks = generate_chunks(&polygon, chunk_size_km)?;
        log::info!(
            "{} chunks of {chunk_size_km}km within {minutes} minutes of {center}",
            chunks.len()
        );
        Ok(chunks)
    }

    /// whether any verifiable observation matching the filter lies inside
    /// `bounds`. answers from the cache while a prior result is fresh.
    pub fn chunk_has_observations(
        &self,
        bounds: ChunkBounds,
        taxa_filter: Option<&str>,
    ) -> Result<bool, ChunkFinderError> {
        let filter = TaxaFilter::parse_optional(taxa_filter);
        let taxa_ids = self.resolve_filter(filter.as_ref())?;
        if let Some(hit) = self.cache.get(&bounds, taxa_ids.as_deref()) {
            log::debug!("presence cache hit for {bounds}");
            return Ok(hit);
        }
        let query = ObservationQuery::presence(bounds, taxa_ids.clone());
        let page = self.observations.search_observations(&query)?;
        let found = page.has_observations();
        self.cache.put(&bounds, taxa_ids.as_deref(), found);
        log::debug!("chunk {bounds} has observations: {found}");
        Ok(found)
    }

    /// photographed observations inside `bounds`, newest first. a filter
    /// that names only unknown taxa is an error rather than an unfiltered
    /// listing.
    pub fn list_chunk_observations(
        &self,
        bounds: ChunkBounds,
        taxa_filter: Option<&str>,
    ) -> Result<Vec<ObservationRecord>, ChunkFinderError> {
        let filter = TaxaFilter::parse_optional(taxa_filter);
        let taxa_ids = self.resolve_filter(filter.as_ref())?;
        if let (Some(f), Some(ids)) = (&filter, &taxa_ids) {
            if ids.is_empty() {
                return Err(ChunkFinderError::NoTaxaResolved(f.to_string()));
            }
        }
        self.list_observations(bounds, taxa_ids)
    }

    /// photographed observations in the rectangle spanned by two corners.
    /// when no filter name resolves the listing is unfiltered.
    pub fn resolve_category_observations(
        &self,
        north_east: GeoPoint,
        south_west: GeoPoint,
        taxa_filter: Option<&str>,
    ) -> Result<Vec<ObservationRecord>, ChunkFinderError> {
        let bounds = ChunkBounds::from_corners(north_east, south_west)?;
        let filter = TaxaFilter::parse_optional(taxa_filter);
        let taxa_ids = self.resolve_filter(filter.as_ref())?;
        self.list_observations(bounds, taxa_ids)
    }

    fn resolve_filter(
        &self,
        filter: Option<&TaxaFilter>,
    ) -> Result<Option<Vec<i64>>, ChunkFinderError> {
        match filter {
            None => Ok(None),
            Some(f) => self.taxa.resolve_taxa_ids(f.names()).map(Some),
        }
    }

    fn list_observations(
        &self,
        bounds: ChunkBounds,
        taxa_ids: Option<Vec<i64>>,
    ) -> Result<Vec<ObservationRecord>, ChunkFinderError> {
        let query = ObservationQuery::listing(bounds, taxa_ids, self.settings.listing_page_size);
        let page = self.observations.search_observations(&query)?;
        let records = format_observations(&page.results);
        log::info!(
            "{} of {} raw observations in {bounds} kept after formatting",
            records.len(),
            page.results.len()
        );
        Ok(records)
    }
}
