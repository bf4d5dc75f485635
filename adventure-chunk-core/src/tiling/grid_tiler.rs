use itertools::Itertools;

use super::grid_steps::{resolves, steps_between, GridSteps};
use super::MAX_GRID_CELLS;
use crate::model::{BoundingPolygon, ChunkBounds};
use crate::ChunkFinderError;

/// generates every grid chunk whose center lies inside the polygon.
///
/// chunks are walked row by row from the south-west corner of the polygon's
/// bounding box, ascending in latitude and then longitude, so identical inputs
/// always produce the identical ordered list. a chunk near the boundary is
/// judged by its center alone: it may extend outside the polygon, and chunks
/// that overlap the polygon with an outside center are left out.
///
/// # Arguments
///
/// * `polygon` - drivetime isochrone to tile
/// * `chunk_size_km` - chunk edge length, expected to be positive
///
/// # Returns
///
/// the included chunks, empty for degenerate polygons or unusable chunk
/// sizes. fails with a validation error when the chunks are too small to
/// represent in degrees or the grid would exceed [`MAX_GRID_CELLS`].
pub fn generate_chunks(
    polygon: &BoundingPolygon,
    chunk_size_km: f64,
) -> Result<Vec<ChunkBounds>, ChunkFinderError> {
    if polygon.is_degenerate() {
        log::debug!("polygon has no area, no chunks generated");
        return Ok(vec![]);
    }
    let Some(rect) = polygon.bounding_rect() else {
        return Ok(vec![]);
    };
    let (min, max) = (rect.min(), rect.max());
    let center_latitude = (min.y + max.y) / 2.0;
    let Some(steps) = GridSteps::new(chunk_size_km, center_latitude) else {
        log::warn!("chunk size {chunk_size_km}km produces no usable grid step");
        return Ok(vec![]);
    };
    if !resolves(min.y, max.y, steps.lat_step) || !resolves(min.x, max.x, steps.lon_step) {
        return Err(ChunkFinderError::Validation(format!(
            "chunk size {chunk_size_km}km is below the coordinate precision of the area"
        )));
    }

    let rows = steps_between(min.y, max.y, steps.lat_step);
    let cols = steps_between(min.x, max.x, steps.lon_step);
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_GRID_CELLS => {}
        _ => {
            return Err(ChunkFinderError::Validation(format!(
                "chunk size {chunk_size_km}km needs a {rows}x{cols} grid, more than \
                 {MAX_GRID_CELLS} cells, use a larger chunk size"
            )))
        }
    }
    log::debug!(
        "tiling {rows}x{cols} grid with steps lat={} lon={}",
        steps.lat_step,
        steps.lon_step
    );

    let chunks = (0..rows)
        .cartesian_product(0..cols)
        .filter_map(|(row, col)| {
            let chunk = ChunkBounds::from_grid_cell(
                min.x + (col as f64) * steps.lon_step,
                min.y + (row as f64) * steps.lat_step,
                steps.lon_step,
                steps.lat_step,
            );
            polygon.contains(&chunk.center()).then_some(chunk)
        })
        .collect_vec();
    Ok(chunks)
}
