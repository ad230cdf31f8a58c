use tracing::debug;

use super::record::{ServiceCategory, ServiceRecord};
use super::store::Catalog;

/// Free-text search never returns more than this many suggestions.
pub const SUGGESTION_CAP: usize = 6;

impl Catalog {
    /// All records in the given category, in catalog insertion order.
    pub fn filter_by_category(&self, category: ServiceCategory) -> Vec<&ServiceRecord> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, localized name, and
    /// description (absent descriptions match as the empty string).
    ///
    /// Queries of one character or fewer return nothing; the gate counts raw
    /// characters, untrimmed, so a single space is still a one-character
    /// query. Matches come back in catalog insertion order, truncated to
    /// [`SUGGESTION_CAP`] without reordering.
    pub fn search(&self, query: &str) -> Vec<&ServiceRecord> {
        if query.chars().count() <= 1 {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let matches: Vec<&ServiceRecord> = self
            .records
            .iter()
            .filter(|record| {
                record
                    .search_haystacks()
                    .iter()
                    .any(|haystack| haystack.to_lowercase().contains(&needle))
            })
            .take(SUGGESTION_CAP)
            .collect();

        debug!(query_len = query.chars().count(), matches = matches.len(), "catalog search");
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": "one", "category": "loan", "name": "Home Loan", "localizedName": "गृह कर्ज",
                 "description": "Finance a flat purchase"},
                {"id": "two", "category": "mortgage", "name": "Search Report", "localizedName": "सर्च रिपोर्ट"},
                {"id": "three", "category": "service", "name": "Property Card", "localizedName": "मालमत्ता पत्रक"}
            ]"#,
        )
        .expect("fixture parses")
    }

    #[test]
    fn single_character_query_returns_nothing() {
        let catalog = fixture();
        assert!(catalog.search("h").is_empty());
        assert!(catalog.search(" ").is_empty());
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let catalog = fixture();
        assert_eq!(catalog.search("HOME").len(), 1);
        assert_eq!(catalog.search("flat purchase").len(), 1);
        assert_eq!(catalog.search("सर्च")[0].id, "two");
    }

    #[test]
    fn category_filter_preserves_insertion_order() {
        let catalog = fixture();
        let loans = catalog.filter_by_category(ServiceCategory::Loan);
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].id, "one");
    }
}
