mod iconic_taxon;
mod taxa_failure_policy;
mod taxa_filter;
mod taxa_resolver;

pub use iconic_taxon::IconicTaxon;
pub use taxa_failure_policy::TaxaFailurePolicy;
pub use taxa_filter::TaxaFilter;
pub use taxa_resolver::TaxaResolver;
