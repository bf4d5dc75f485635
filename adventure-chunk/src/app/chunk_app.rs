use adventure_chunk_core::model::{ChunkBounds, GeoPoint};
use clap::{Parser, Subcommand};
use serde_json::json;

use super::AppError;
use crate::{config::ChunkFinderConfig, service::ChunkService};

/// command line tool for finding observation-rich chunks of a drivetime area
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct AdventureChunkApp {
    /// TOML or JSON configuration file. ADVENTURE_CHUNK_* environment
    /// variables override its values.
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: AdventureChunkOperation,
}

impl AdventureChunkApp {
    /// loads configuration and runs the selected operation, returning the
    /// JSON document to print.
    pub fn run(&self) -> Result<serde_json::Value, AppError> {
        let conf = ChunkFinderConfig::load(self.config.as_deref())?;
        let service = ChunkService::try_from_config(&conf)?;
        self.op.run(&service)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum AdventureChunkOperation {
    /// tiles the area reachable by car from a point into square chunks
    FindChunks {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// drivetime in minutes, at most 60
        #[arg(long, allow_negative_numbers = true)]
        drive_time: i64,
        /// chunk side length in kilometers
        #[arg(long, default_value_t = 1.0)]
        chunk_size: f64,
        /// comma-separated taxa names, e.g. "Aves,Insecta"
        #[arg(long)]
        taxa_filter: Option<String>,
    },
    /// reports whether a chunk has any verifiable observations
    HasObservations {
        /// chunk as min_lon,min_lat,max_lon,max_lat
        #[arg(long, allow_hyphen_values = true)]
        bounds: ChunkBounds,
        #[arg(long)]
        taxa_filter: Option<String>,
    },
    /// lists photographed observations in a chunk, newest first
    ListObservations {
        /// chunk as min_lon,min_lat,max_lon,max_lat
        #[arg(long, allow_hyphen_values = true)]
        bounds: ChunkBounds,
        #[arg(long)]
        taxa_filter: Option<String>,
    },
    /// lists photographed observations in a map view given by its corners
    Observations {
        #[arg(long, allow_negative_numbers = true)]
        nelat: f64,
        #[arg(long, allow_negative_numbers = true)]
        nelng: f64,
        #[arg(long, allow_negative_numbers = true)]
        swlat: f64,
        #[arg(long, allow_negative_numbers = true)]
        swlng: f64,
        #[arg(long)]
        taxa_filter: Option<String>,
    },
}

impl AdventureChunkOperation {
    pub fn run(&self, service: &ChunkService) -> Result<serde_json::Value, AppError> {
        match self {
            AdventureChunkOperation::FindChunks {
                lat,
                lon,
                drive_time,
                chunk_size,
                taxa_filter,
            } => {
                let chunks = service.find_chunks(
                    GeoPoint::new(*lat, *lon),
                    *drive_time,
                    *chunk_size,
                    taxa_filter.as_deref(),
                )?;
                Ok(json!({ "chunks": serde_json::to_value(chunks)? }))
            }
            AdventureChunkOperation::HasObservations {
                bounds,
                taxa_filter,
            } => {
                let found = service.chunk_has_observations(*bounds, taxa_filter.as_deref())?;
                Ok(json!({ "has_observations": found }))
            }
            AdventureChunkOperation::ListObservations {
                bounds,
                taxa_filter,
            } => {
                let records = service.list_chunk_observations(*bounds, taxa_filter.as_deref())?;
                Ok(json!({ "observations": serde_json::to_value(records)? }))
            }
            AdventureChunkOperation::Observations {
                nelat,
                nelng,
                swlat,
                swlng,
                taxa_filter,
            } => {
                let records = service.resolve_category_observations(
                    GeoPoint::new(*nelat, *nelng),
                    GeoPoint::new(*swlat, *swlng),
                    taxa_filter.as_deref(),
                )?;
                Ok(json!({ "observations": serde_json::to_value(records)? }))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AdventureChunkApp, AdventureChunkOperation};
    use clap::Parser;

    #[test]
    fn test_parse_find_chunks() {
        let app = AdventureChunkApp::try_parse_from([
            "adventure-chunk",
            "find-chunks",
            "--lat",
            "-37.8136",
            "--lon",
            "144.9631",
            "--drive-time",
            "15",
            "--taxa-filter",
            "Aves,Insecta",
        ])
        .unwrap();
        match app.op {
            AdventureChunkOperation::FindChunks {
                lat,
                drive_time,
                chunk_size,
                taxa_filter,
                ..
            } => {
                assert_eq!(lat, -37.8136);
                assert_eq!(drive_time, 15);
                assert_eq!(chunk_size, 1.0);
                assert_eq!(taxa_filter.as_deref(), Some("Aves,Insecta"));
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_parse_bounds_argument() {
        let app = AdventureChunkApp::try_parse_from([
            "adventure-chunk",
            "--config",
            "conf.toml",
            "has-observations",
            "--bounds",
            "144.9,-37.85,145.0,-37.8",
        ])
        .unwrap();
        assert_eq!(app.config.as_deref(), Some("conf.toml"));
        match app.op {
            AdventureChunkOperation::HasObservations { bounds, .. } => {
                assert_eq!(bounds.as_array(), [144.9, -37.85, 145.0, -37.8]);
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_reject_inverted_bounds() {
        let result = AdventureChunkApp::try_parse_from([
            "adventure-chunk",
            "list-observations",
            "--bounds",
            "145.0,-37.85,144.9,-37.8",
        ]);
        assert!(result.is_err());
    }
}
