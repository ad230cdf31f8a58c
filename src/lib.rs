//! Core library for the Tirupati Agencies storefront: a read-only catalog of
//! loan, mortgage, and documentation-service offerings, free-text search and
//! category filtering over it, a paginated PDF brochure exporter, and the
//! share action's fallback chain.
//!
//! The presentation layer (routing, rendering, transient UI state) lives
//! outside this crate; it resolves a record by id, calls the query engine or
//! exporter, and consumes the results.

pub mod catalog;
pub mod config;
pub mod export;
pub mod share;
pub mod telemetry;

pub use catalog::{Catalog, CatalogError, ServiceRecord};
pub use export::{export_pdf, ExportReceipt, ExportSelection};
pub use share::{share_with_fallback, ShareOutcome, SharePayload};
