use serde::{Deserialize, Serialize};

/// what a taxa resolution does when one name's lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxaFailurePolicy {
    /// the whole resolution fails with the first lookup error.
    #[default]
    Abort,
    /// a failed lookup contributes no IDs, like a name with zero results.
    /// rate limiting still fails the resolution.
    Skip,
}
