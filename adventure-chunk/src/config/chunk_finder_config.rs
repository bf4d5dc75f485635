use adventure_chunk_core::{cache::DEFAULT_TTL_MINUTES, taxa::TaxaFailurePolicy};
use serde::{Deserialize, Serialize};

use crate::app::AppError;

/// environment variables with this prefix override file settings, e.g.
/// `ADVENTURE_CHUNK_MAPBOX_API_KEY`.
pub const ENV_PREFIX: &str = "ADVENTURE_CHUNK";

/// longest drivetime the Mapbox isochrone API accepts.
pub const MAX_DRIVE_TIME_MINUTES: u32 = 60;

/// settings for the upstream services and the chunk service.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChunkFinderConfig {
    pub mapbox_api_key: String,
    pub mapbox_base_url: String,
    pub inaturalist_base_url: String,
    pub request_timeout_seconds: u64,
    pub cache_ttl_minutes: i64,
    pub max_drive_time_minutes: u32,
    /// observations requested per chunk listing, 200 at most upstream
    pub listing_page_size: u32,
    pub taxa_failure_policy: TaxaFailurePolicy,
}

impl Default for ChunkFinderConfig {
    fn default() -> Self {
        Self {
            mapbox_api_key: String::new(),
            mapbox_base_url: String::from("https://api.mapbox.com"),
            inaturalist_base_url: String::from("https://api.inaturalist.org"),
            request_timeout_seconds: 30,
            cache_ttl_minutes: DEFAULT_TTL_MINUTES,
            max_drive_time_minutes: MAX_DRIVE_TIME_MINUTES,
            listing_page_size: 200,
            taxa_failure_policy: TaxaFailurePolicy::Abort,
        }
    }
}

impl ChunkFinderConfig {
    /// layers the defaults, an optional TOML or JSON file, and `ADVENTURE_CHUNK_*`
    /// environment variables, in increasing precedence.
    pub fn load(file: Option<&str>) -> Result<ChunkFinderConfig, AppError> {
        Self::load_with_env(file, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// like [`ChunkFinderConfig::load`] with an explicit environment layer.
    pub fn load_with_env(
        file: Option<&str>,
        env: config::Environment,
    ) -> Result<ChunkFinderConfig, AppError> {
        let defaults = config::Config::try_from(&ChunkFinderConfig::default())?;
        let mut builder = config::Config::builder().add_source(defaults);
        if let Some(f) = file {
            log::info!("reading adventure-chunk configuration from {f}");
            builder = builder.add_source(config::File::with_name(f));
        }
        let conf: ChunkFinderConfig = builder
            .add_source(env)
            .build()?
            .try_deserialize()?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_drive_time_minutes == 0 || self.max_drive_time_minutes > MAX_DRIVE_TIME_MINUTES
        {
            return Err(AppError::ConfigurationError(format!(
                "max_drive_time_minutes must be in [1,{MAX_DRIVE_TIME_MINUTES}], found {}",
                self.max_drive_time_minutes
            )));
        }
        if self.listing_page_size == 0 || self.listing_page_size > 200 {
            return Err(AppError::ConfigurationError(format!(
                "listing_page_size must be in [1,200], found {}",
                self.listing_page_size
            )));
        }
        if self.cache_ttl_minutes <= 0 {
            return Err(AppError::ConfigurationError(format!(
                "cache_ttl_minutes must be positive, found {}",
                self.cache_ttl_minutes
            )));
        }
        if self.request_timeout_seconds == 0 {
            return Err(AppError::ConfigurationError(String::from(
                "request_timeout_seconds must be positive",
            )));
        }
        Ok(())
    }
}
