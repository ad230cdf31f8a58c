use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use tracing::info;

use super::record::ServiceRecord;

static BUNDLED_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// The full offering catalog. Loaded once, read-only for the life of the
/// process; iteration order is the insertion order of the bundled dataset.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) records: Vec<ServiceRecord>,
}

impl Catalog {
    /// Parses a catalog from its JSON representation (an ordered array of
    /// records). Rejects duplicate record ids; subtype ids live in their
    /// parent's namespace and are not checked against the catalog.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ServiceRecord> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        info!(records = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// The catalog shipped with the binary. Parsed on first use and shared
    /// for the rest of the process.
    pub fn bundled() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::from_json(BUNDLED_CATALOG_JSON).expect("bundled catalog data is valid")
        })
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lookup by the id used in detail routes. Unknown ids surface as
    /// `NotFound`; no default record is substituted.
    pub fn get(&self, id: &str) -> Result<&ServiceRecord, CatalogError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    DuplicateId(String),
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "catalog data failed to parse: {}", err),
            CatalogError::DuplicateId(id) => write!(f, "duplicate record id {}", id),
            CatalogError::NotFound(id) => write!(f, "no catalog record with id {}", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            CatalogError::DuplicateId(_) | CatalogError::NotFound(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses_and_is_nonempty() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id": "a", "category": "loan", "name": "A", "localizedName": "अ"},
            {"id": "a", "category": "service", "name": "A again", "localizedName": "अ"}
        ]"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn missing_id_is_not_found() {
        let catalog = Catalog::bundled();
        match catalog.get("no-such-offering") {
            Err(CatalogError::NotFound(id)) => assert_eq!(id, "no-such-offering"),
            other => panic!("expected not found, got {:?}", other.map(|r| &r.id)),
        }
    }
}
