use serde::Deserialize;

/// Closed set of offering categories. The category decides which display
/// metrics are meaningful: loans carry rate/amount/tenure, services carry
/// duration/cost, mortgage offerings carry neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Loan,
    Mortgage,
    Service,
}

impl ServiceCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Loan, Self::Mortgage, Self::Service]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Loan => "Loan Products",
            Self::Mortgage => "Mortgage Services",
            Self::Service => "Other Services",
        }
    }
}

/// Discriminator selecting which income-proof bucket applies to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantType {
    #[default]
    Salaried,
    Business,
}

impl ApplicantType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::Business => "Business",
        }
    }

    /// Heading printed above the applicant-specific bucket in exports.
    pub const fn documents_heading(self) -> &'static str {
        match self {
            Self::Salaried => "Income Documents (Salaried):",
            Self::Business => "Business Documents:",
        }
    }
}

/// Per-bucket documentation requirements for loan and mortgage offerings.
/// An empty bucket means the record does not require that bucket at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBuckets {
    #[serde(default)]
    pub basic_kyc: Vec<String>,
    #[serde(default)]
    pub salaried: Vec<String>,
    #[serde(default)]
    pub business: Vec<String>,
    #[serde(default)]
    pub property: Vec<String>,
}

impl DocumentBuckets {
    pub fn for_applicant(&self, applicant: ApplicantType) -> &[String] {
        match applicant {
            ApplicantType::Salaried => &self.salaried,
            ApplicantType::Business => &self.business,
        }
    }
}

/// Documentation requirements come in two shapes: plain services list a flat
/// checklist, loan and mortgage offerings group documents into named buckets.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocumentSet {
    Checklist(Vec<String>),
    Bucketed(DocumentBuckets),
}

/// A named variant of an offering. A subtype that carries its own documents
/// block replaces the parent's block entirely when selected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSubtype {
    pub id: String,
    pub name: String,
    pub localized_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub documents: Option<DocumentSet>,
}

/// One loan, mortgage, or documentation service offering. Immutable after
/// catalog load; metric fields are display strings, never parsed as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub category: ServiceCategory,
    pub name: String,
    pub localized_name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<String>,
    #[serde(default)]
    pub max_amount: Option<String>,
    #[serde(default)]
    pub tenure: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub documents: Option<DocumentSet>,
    #[serde(default)]
    pub process: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<ServiceSubtype>,
}

impl ServiceRecord {
    /// Subtype lookup is keyed within this record's own subtype list, not the
    /// global catalog namespace.
    pub fn subtype(&self, subtype_id: &str) -> Option<&ServiceSubtype> {
        self.subtypes.iter().find(|subtype| subtype.id == subtype_id)
    }

    /// Resolves the documents block for an export or detail view. A selected
    /// subtype overrides the parent block wholesale; there is no merging, and
    /// a subtype without its own block yields no documents at all.
    pub fn documents_for<'a>(
        &'a self,
        selected: Option<&'a ServiceSubtype>,
    ) -> Option<&'a DocumentSet> {
        match selected {
            Some(subtype) => subtype.documents.as_ref(),
            None => self.documents.as_ref(),
        }
    }

    /// Path-style identifier the presentation layer routes on.
    pub fn detail_route(&self) -> String {
        match self.category {
            ServiceCategory::Service => format!("/service/{}", self.id),
            ServiceCategory::Loan | ServiceCategory::Mortgage => format!("/loan/{}", self.id),
        }
    }

    pub(crate) fn search_haystacks(&self) -> [&str; 3] {
        [
            self.name.as_str(),
            self.localized_name.as_str(),
            self.description.as_deref().unwrap_or(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_subtype() -> ServiceRecord {
        serde_json::from_str(
            r#"{
                "id": "home-loan-flat-purchase",
                "category": "loan",
                "name": "Home Loan (Flat Purchase)",
                "localizedName": "गृह कर्ज (फ्लॅट खरेदी)",
                "documents": {
                    "basicKyc": ["PAN card"],
                    "property": ["Agreement to sale"]
                },
                "subtypes": [
                    {
                        "id": "resale-flat",
                        "name": "Resale Flat",
                        "localizedName": "रिसेल फ्लॅट",
                        "documents": { "basicKyc": ["Aadhaar card"] }
                    },
                    {
                        "id": "under-construction",
                        "name": "Under Construction",
                        "localizedName": "बांधकामाधीन"
                    }
                ]
            }"#,
        )
        .expect("record parses")
    }

    #[test]
    fn subtype_documents_replace_parent_block() {
        let record = record_with_subtype();
        let subtype = record.subtype("resale-flat").expect("subtype present");

        let docs = record.documents_for(Some(subtype)).expect("override block");
        match docs {
            DocumentSet::Bucketed(buckets) => {
                assert_eq!(buckets.basic_kyc, vec!["Aadhaar card"]);
                assert!(buckets.property.is_empty(), "parent buckets must not leak");
            }
            DocumentSet::Checklist(_) => panic!("expected bucketed documents"),
        }
    }

    #[test]
    fn subtype_without_documents_yields_none() {
        let record = record_with_subtype();
        let subtype = record.subtype("under-construction").expect("subtype present");
        assert!(record.documents_for(Some(subtype)).is_none());
    }

    #[test]
    fn flat_checklist_deserializes_from_array() {
        let record: ServiceRecord = serde_json::from_str(
            r#"{
                "id": "ferfar-download",
                "category": "service",
                "name": "Ferfar Download",
                "localizedName": "फेरफार उतारा",
                "documents": ["Survey number", "Owner name"]
            }"#,
        )
        .expect("record parses");

        match record.documents.expect("documents present") {
            DocumentSet::Checklist(items) => assert_eq!(items.len(), 2),
            DocumentSet::Bucketed(_) => panic!("expected flat checklist"),
        }
    }

    #[test]
    fn routes_split_by_category() {
        let record = record_with_subtype();
        assert_eq!(record.detail_route(), "/loan/home-loan-flat-purchase");
    }
}
