use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the broad observation categories offered for filtering. these are
/// iNaturalist's iconic taxa and search under their scientific names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconicTaxon {
    Aves,
    Amphibia,
    Reptilia,
    Mammalia,
    Actinopterygii,
    Mollusca,
    Arachnida,
    Insecta,
    Plantae,
    Fungi,
    Protozoa,
    Unknown,
}

impl IconicTaxon {
    pub const ALL: [IconicTaxon; 12] = [
        IconicTaxon::Aves,
        IconicTaxon::Amphibia,
        IconicTaxon::Reptilia,
        IconicTaxon::Mammalia,
        IconicTaxon::Actinopterygii,
        IconicTaxon::Mollusca,
        IconicTaxon::Arachnida,
        IconicTaxon::Insecta,
        IconicTaxon::Plantae,
        IconicTaxon::Fungi,
        IconicTaxon::Protozoa,
        IconicTaxon::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IconicTaxon::Aves => "Aves",
            IconicTaxon::Amphibia => "Amphibia",
            IconicTaxon::Reptilia => "Reptilia",
            IconicTaxon::Mammalia => "Mammalia",
            IconicTaxon::Actinopterygii => "Actinopterygii",
            IconicTaxon::Mollusca => "Mollusca",
            IconicTaxon::Arachnida => "Arachnida",
            IconicTaxon::Insecta => "Insecta",
            IconicTaxon::Plantae => "Plantae",
            IconicTaxon::Fungi => "Fungi",
            IconicTaxon::Protozoa => "Protozoa",
            IconicTaxon::Unknown => "Unknown",
        }
    }

    /// the query sent to the taxonomy search for a filter name: the
    /// category's scientific name, or the name verbatim when it is not one of
    /// the iconic taxa.
    pub fn search_term(name: &str) -> &str {
        match IconicTaxon::from_str(name) {
            Ok(taxon) => taxon.name(),
            Err(_) => name,
        }
    }
}

impl Display for IconicTaxon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IconicTaxon {
    type Err = String;

    /// exact, case-sensitive match on the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconicTaxon::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| format!("'{s}' is not an iconic taxon"))
    }
}

#[cfg(test)]
mod test {
    use super::IconicTaxon;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("Aves".parse::<IconicTaxon>(), Ok(IconicTaxon::Aves));
        assert!("aves".parse::<IconicTaxon>().is_err());
        assert!("Birds".parse::<IconicTaxon>().is_err());
    }

    #[test]
    fn test_search_term_falls_back_to_verbatim() {
        assert_eq!(IconicTaxon::search_term("Insecta"), "Insecta");
        assert_eq!(IconicTaxon::search_term("Birds"), "Birds");
    }
}
