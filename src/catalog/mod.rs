mod icons;
mod query;
mod record;
mod store;

pub use icons::{icon_url, IconGlyph, FALLBACK_ICON_URL};
pub use query::SUGGESTION_CAP;
pub use record::{
    ApplicantType, DocumentBuckets, DocumentSet, ServiceCategory, ServiceRecord, ServiceSubtype,
};
pub use store::{Catalog, CatalogError};
