use rayon::prelude::*;
use std::sync::Arc;

use super::{IconicTaxon, TaxaFailurePolicy};
use crate::provider::TaxonSearchProvider;
use crate::ChunkFinderError;

/// turns category names into upstream taxonomy identifiers.
pub struct TaxaResolver {
    provider: Arc<dyn TaxonSearchProvider>,
    policy: TaxaFailurePolicy,
}

impl TaxaResolver {
    pub fn new(provider: Arc<dyn TaxonSearchProvider>, policy: TaxaFailurePolicy) -> Self {
        Self { provider, policy }
    }

    /// looks up every name (in parallel, one request each) and keeps the top
    /// result's ID. output follows input order, duplicates included. names
    /// with no results contribute nothing.
    ///
    /// # Returns
    ///
    /// the resolved IDs, or the first lookup error when the policy is
    /// [`TaxaFailurePolicy::Abort`] or the upstream is rate limiting
    pub fn resolve_taxa_ids(&self, names: &[String]) -> Result<Vec<i64>, ChunkFinderError> {
        let resolved = names
            .par_iter()
            .map(|name| self.resolve_one(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(resolved.into_iter().flatten().collect())
    }

    fn resolve_one(&self, name: &str) -> Result<Option<i64>, ChunkFinderError> {
        let search_term = IconicTaxon::search_term(name);
        match self.provider.search_taxa(search_term) {
            Ok(ids) => {
                let first = ids.first().copied();
                match first {
                    Some(id) => log::debug!("taxa name '{name}' resolved to {id}"),
                    None => log::warn!("no taxa found for '{name}', ignoring it"),
                }
                Ok(first)
            }
            Err(e @ ChunkFinderError::UpstreamRateLimited(_)) => Err(e),
            Err(e) if self.policy == TaxaFailurePolicy::Skip => {
                log::warn!("taxa lookup for '{name}' failed, ignoring it: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::TaxaResolver;
    use crate::provider::TaxonSearchProvider;
    use crate::taxa::TaxaFailurePolicy;
    use crate::ChunkFinderError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubTaxa {
        responses: HashMap<&'static str, Result<Vec<i64>, ChunkFinderError>>,
        calls: AtomicUsize,
    }

    impl TaxonSearchProvider for StubTaxa {
        fn search_taxa(&self, name: &str) -> Result<Vec<i64>, ChunkFinderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses.get(name).cloned().unwrap_or(Ok(vec![]))
        }
    }

    fn resolver(policy: TaxaFailurePolicy) -> (TaxaResolver, Arc<StubTaxa>) {
        let stub = Arc::new(StubTaxa {
            responses: HashMap::from([
                ("Birds", Ok(vec![3, 7251])),
                ("Aves", Ok(vec![3])),
                ("Insecta", Ok(vec![47158])),
                ("Broken", Err(ChunkFinderError::upstream(Some(500), "boom"))),
                (
                    "Throttled",
                    Err(ChunkFinderError::UpstreamRateLimited(String::from(
                        "throttling",
                    ))),
                ),
            ]),
            calls: AtomicUsize::new(0),
        });
        (TaxaResolver::new(stub.clone(), policy), stub)
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_unresolved_name_is_dropped() {
        let (resolver, _) = resolver(TaxaFailurePolicy::Abort);
        let ids = resolver
            .resolve_taxa_ids(&names(&["Birds", "Insects"]))
            .unwrap();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let (resolver, stub) = resolver(TaxaFailurePolicy::Abort);
        let ids = resolver
            .resolve_taxa_ids(&names(&["Insecta", "Aves", "Insecta"]))
            .unwrap();
        assert_eq!(ids, vec![47158, 3, 47158]);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_abort_policy_fails_whole_resolution() {
        let (resolver, _) = resolver(TaxaFailurePolicy::Abort);
        let result = resolver.resolve_taxa_ids(&names(&["Aves", "Broken"]));
        assert_eq!(result, Err(ChunkFinderError::upstream(Some(500), "boom")));
    }

    #[test]
    fn test_skip_policy_drops_failed_lookup() {
        let (resolver, _) = resolver(TaxaFailurePolicy::Skip);
        let ids = resolver
            .resolve_taxa_ids(&names(&["Broken", "Aves"]))
            .unwrap();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_rate_limit_aborts_under_skip_policy() {
        let (resolver, _) = resolver(TaxaFailurePolicy::Skip);
        let result = resolver.resolve_taxa_ids(&names(&["Aves", "Throttled"]));
        assert!(matches!(
            result,
            Err(ChunkFinderError::UpstreamRateLimited(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let (resolver, stub) = resolver(TaxaFailurePolicy::Abort);
        assert_eq!(resolver.resolve_taxa_ids(&[]).unwrap(), Vec::<i64>::new());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }
}
