use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::ChunkBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// only the total count matters
    Presence,
    /// newest first, photographed observations only
    Listing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservationQuery {
    pub bounds: ChunkBounds,
    pub taxa_ids: Option<Vec<i64>>,
    pub per_page: u32,
    pub kind: QueryKind,
}

impl ObservationQuery {
    pub fn presence(bounds: ChunkBounds, taxa_ids: Option<Vec<i64>>) -> Self {
        Self {
            bounds,
            taxa_ids,
            per_page: 1,
            kind: QueryKind::Presence,
        }
    }

    pub fn listing(bounds: ChunkBounds, taxa_ids: Option<Vec<i64>>, per_page: u32) -> Self {
        Self {
            bounds,
            taxa_ids,
            per_page,
            kind: QueryKind::Listing,
        }
    }

    /// comma-joined taxon filter, omitted when no IDs were resolved.
    pub fn taxon_id_param(&self) -> Option<String> {
        self.taxa_ids
            .as_ref()
            .filter(|ids| !ids.is_empty())
            .map(|ids| ids.iter().join(","))
    }
}

/// one page of raw observation results. records are left as JSON so that a
/// malformed record only affects itself when formatted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationPage {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

impl ObservationPage {
    pub fn has_observations(&self) -> bool {
        self.total_results > 0
    }
}

#[cfg(test)]
mod test {
    use super::ObservationQuery;
    use crate::model::ChunkBounds;

    #[test]
    fn test_taxon_id_param() {
        let bounds = ChunkBounds::try_new(0.0, 0.0, 1.0, 1.0).unwrap();
        let q = ObservationQuery::presence(bounds, Some(vec![3, 47158]));
        assert_eq!(q.taxon_id_param(), Some(String::from("3,47158")));
        assert_eq!(q.per_page, 1);
        let q = ObservationQuery::presence(bounds, Some(vec![]));
        assert_eq!(q.taxon_id_param(), None);
        let q = ObservationQuery::listing(bounds, None, 200);
        assert_eq!(q.taxon_id_param(), None);
    }
}
