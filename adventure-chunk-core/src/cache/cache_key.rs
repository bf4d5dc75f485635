use serde_json::json;
use sha2::{Digest, Sha256};

use crate::model::ChunkBounds;

/// deterministic digest of a chunk and its taxa filter.
///
/// bounds are hashed exactly as given. taxa IDs are sorted so their order does
/// not matter, and a missing filter (`None`) hashes differently from an empty
/// one.
pub fn cache_key(bounds: &ChunkBounds, taxa_ids: Option<&[i64]>) -> String {
    let taxa = taxa_ids.map(|ids| {
        let mut sorted = ids.to_vec();
        sorted.sort_unstable();
        sorted
    });
    let key_data = json!({
        "bounds": bounds.as_array(),
        "taxa": taxa,
    });
    let digest = Sha256::digest(key_data.to_string().as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod test {
    use super::cache_key;
    use crate::model::ChunkBounds;

    fn bounds() -> ChunkBounds {
        ChunkBounds::try_new(144.95, -37.82, 144.96, -37.81).unwrap()
    }

    #[test]
    fn test_taxa_order_is_ignored() {
        assert_eq!(
            cache_key(&bounds(), Some(&[3, 1, 2])),
            cache_key(&bounds(), Some(&[1, 2, 3]))
        );
    }

    #[test]
    fn test_no_filter_differs_from_empty_filter() {
        assert_ne!(cache_key(&bounds(), None), cache_key(&bounds(), Some(&[])));
    }

    #[test]
    fn test_bounds_are_not_rounded() {
        let nudged = ChunkBounds::try_new(144.95, -37.82, 144.96, -37.809_999_999).unwrap();
        assert_ne!(cache_key(&bounds(), None), cache_key(&nudged, None));
    }

    #[test]
    fn test_key_is_hex_sha256() {
        let key = cache_key(&bounds(), Some(&[47158]));
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
