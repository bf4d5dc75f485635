/// the category names of a caller's comma-separated taxa filter text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaxaFilter {
    names: Vec<String>,
}

impl TaxaFilter {
    /// splits filter text on commas, trimming each name and dropping empty
    /// ones. returns None when no names remain.
    pub fn parse(text: &str) -> Option<TaxaFilter> {
        let names = text
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        if names.is_empty() {
            None
        } else {
            Some(TaxaFilter { names })
        }
    }

    /// like [`TaxaFilter::parse`], for optional filter text.
    pub fn parse_optional(text: Option<&str>) -> Option<TaxaFilter> {
        text.and_then(TaxaFilter::parse)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl std::fmt::Display for TaxaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}

#[cfg(test)]
mod test {
    use super::TaxaFilter;

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let filter = TaxaFilter::parse(" Aves, ,Insecta,").unwrap();
        assert_eq!(filter.names(), &["Aves", "Insecta"]);
    }

    #[test]
    fn test_blank_filter_is_none() {
        assert_eq!(TaxaFilter::parse(" , "), None);
        assert_eq!(TaxaFilter::parse_optional(None), None);
        assert_eq!(TaxaFilter::parse_optional(Some("")), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let filter = TaxaFilter::parse("Aves,Aves").unwrap();
        assert_eq!(filter.names().len(), 2);
    }
}
