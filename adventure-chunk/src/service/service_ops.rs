use adventure_chunk_core::ChunkFinderError;

/// accepts drivetimes in `(0, max_minutes]`.
pub fn validate_drive_time(minutes: i64, max_minutes: u32) -> Result<u32, ChunkFinderError> {
    if minutes <= 0 {
        return Err(ChunkFinderError::Validation(format!(
            "drive time must be positive, found {minutes} minutes"
        )));
    }
    match u32::try_from(minutes) {
        Ok(m) if m <= max_minutes => Ok(m),
        _ => Err(ChunkFinderError::Validation(format!(
            "drive time cannot exceed {max_minutes} minutes, found {minutes}"
        ))),
    }
}

pub fn validate_chunk_size(chunk_size_km: f64) -> Result<f64, ChunkFinderError> {
    if chunk_size_km.is_finite() && chunk_size_km > 0.0 {
        Ok(chunk_size_km)
    } else {
        Err(ChunkFinderError::Validation(format!(
            "chunk size must be a positive number of kilometers, found {chunk_size_km}"
        )))
    }
}
