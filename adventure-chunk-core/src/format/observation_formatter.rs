use super::{
    FormatError, MISSING_OBSERVATION_URL, PLACEHOLDER_SPECIES_GUESSES, UNKNOWN_ICONIC_TAXON,
};
use crate::model::{ObservationRecord, RawObservation};

/// formats a page of raw upstream records, skipping any record that is
/// filtered out or fails to format. one bad record never fails the batch.
pub fn format_observations(raw_records: &[serde_json::Value]) -> Vec<ObservationRecord> {
    raw_records
        .iter()
        .filter_map(|value| {
            let raw: RawObservation = match serde_json::from_value(value.clone()) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("error formatting observation: {}", FormatError::from(e));
                    return None;
                }
            };
            match format_observation(&raw) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("error formatting observation: {e}");
                    None
                }
            }
        })
        .collect()
}

/// shapes one upstream record for display.
///
/// # Returns
///
/// * `Ok(None)` - the record is filtered out: it has no photos, or its species
///   guess is blank or a placeholder such as "unknown"
/// * `Ok(Some(record))` - the formatted record
/// * `Err` - the record passed the filters but could not be formatted
pub fn format_observation(raw: &RawObservation) -> Result<Option<ObservationRecord>, FormatError> {
    if !raw.has_photos() {
        return Ok(None);
    }
    let Some(species_name) = identified_species(raw.species_guess.as_deref()) else {
        return Ok(None);
    };

    let (latitude, longitude) = match raw.location.as_deref().and_then(parse_location) {
        Some((lat, lon)) => (Some(lat), Some(lon)),
        None => (None, None),
    };

    let photo_url = match raw.photos.as_ref().and_then(|p| p.first()) {
        Some(photo) => {
            let url = photo
                .url
                .as_ref()
                .ok_or(FormatError::MissingPhotoUrl(raw.id))?;
            Some(url.replace("square", "medium"))
        }
        None => None,
    };

    let iconic_taxon_name = raw
        .taxon
        .as_ref()
        .and_then(|t| t.iconic_taxon_name.clone())
        .unwrap_or_else(|| String::from(UNKNOWN_ICONIC_TAXON));

    Ok(Some(ObservationRecord {
        id: raw.id,
        species_name,
        iconic_taxon_name,
        photo_url,
        observation_url: raw
            .uri
            .clone()
            .unwrap_or_else(|| String::from(MISSING_OBSERVATION_URL)),
        latitude,
        longitude,
    }))
}

/// parses an iNaturalist `"lat,lon"` location string.
pub fn parse_location(location: &str) -> Option<(f64, f64)> {
    let (lat, lon) = location.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lon = lon.trim().parse::<f64>().ok()?;
    Some((lat, lon))
}

fn identified_species(species_guess: Option<&str>) -> Option<String> {
    let trimmed = species_guess?.trim();
    let lower = trimmed.to_lowercase();
    if trimmed.is_empty() || PLACEHOLDER_SPECIES_GUESSES.contains(&lower.as_str()) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{format_observations, parse_location};
    use serde_json::json;

    fn heron() -> serde_json::Value {
        json!({
            "id": 123456,
            "species_guess": "Great Blue Heron",
            "location": "-37.81,144.96",
            "photos": [{"url": "https://static.inaturalist.org/photos/1/square.jpg"}],
            "taxon": {"iconic_taxon_name": "Aves"},
            "uri": "https://www.inaturalist.org/observations/123456"
        })
    }

    #[test]
    fn test_keeps_identified_observation_and_rewrites_photo_size() {
        let records = format_observations(&[heron()]);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, Some(123456));
        assert_eq!(record.species_name, "Great Blue Heron");
        assert_eq!(record.iconic_taxon_name, "Aves");
        assert_eq!(
            record.photo_url.as_deref(),
            Some("https://static.inaturalist.org/photos/1/medium.jpg")
        );
        assert_eq!(record.latitude, Some(-37.81));
        assert_eq!(record.longitude, Some(144.96));
    }

    #[test]
    fn test_drops_placeholder_species_guesses() {
        for guess in ["Unknown", "UNKNOWN", " n/a ", "Unidentified", "", "   "] {
            let mut raw = heron();
            raw["species_guess"] = json!(guess);
            assert!(
                format_observations(&[raw]).is_empty(),
                "'{guess}' should be dropped"
            );
        }
        let mut raw = heron();
        raw["species_guess"] = json!(null);
        assert!(format_observations(&[raw]).is_empty());
    }

    #[test]
    fn test_drops_records_without_photos() {
        let mut raw = heron();
        raw["photos"] = json!([]);
        let mut missing = heron();
        missing.as_object_mut().unwrap().remove("photos");
        assert!(format_observations(&[raw, missing]).is_empty());
    }

    #[test]
    fn test_bad_location_keeps_record_without_coordinates() {
        let mut raw = heron();
        raw["location"] = json!("somewhere near the river");
        let records = format_observations(&[raw]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].latitude, None);
        assert_eq!(records[0].longitude, None);
    }

    #[test]
    fn test_defaults_for_missing_taxon_and_uri() {
        let mut raw = heron();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("taxon");
        obj.remove("uri");
        let records = format_observations(&[raw]);
        assert_eq!(records[0].iconic_taxon_name, "Unknown");
        assert_eq!(records[0].observation_url, "#");
    }

    #[test]
    fn test_malformed_record_is_skipped_without_failing_batch() {
        let mut no_url = heron();
        no_url["photos"] = json!([{"url": null}]);
        let mut wrong_type = heron();
        wrong_type["id"] = json!("not-a-number");
        let records = format_observations(&[no_url, heron(), wrong_type]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].species_name, "Great Blue Heron");
    }

    #[test]
    fn test_species_guess_is_trimmed() {
        let mut raw = heron();
        raw["species_guess"] = json!("  Superb Fairywren ");
        assert_eq!(format_observations(&[raw])[0].species_name, "Superb Fairywren");
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location("-37.8, 144.9"), Some((-37.8, 144.9)));
        assert_eq!(parse_location("-37.8"), None);
        assert_eq!(parse_location("-37.8,144.9,3"), None);
        assert_eq!(parse_location(""), None);
    }
}
