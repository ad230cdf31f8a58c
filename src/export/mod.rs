//! Document exporter: lays a service record out onto paginated A4 pages and
//! delivers the rendered PDF through a host-supplied sink. Export is
//! all-or-nothing per call; failures propagate to the caller with no retry
//! and no partial-artifact cleanup.

mod compose;
mod layout;
mod pdf;

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;
use tracing::info;

pub use compose::{lay_out, ExportSelection, RenderedDocument};
pub use layout::{
    text_width, wrap_text, FontWeight, Page, PageBuilder, TextSpan, MARGIN, MASTHEAD_HEIGHT,
    PAGE_HEIGHT, PAGE_WIDTH,
};

use crate::config::Branding;

/// Fixed organizational suffix appended to every derived artifact name.
pub const ARTIFACT_SUFFIX: &str = "_tirupati_agencies.pdf";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("pdf rendering failed: {0}")]
    Render(#[from] lopdf::Error),
    #[error("artifact delivery failed: {0}")]
    Deliver(#[from] io::Error),
}

/// Destination for the finished artifact; the host environment decides what
/// "saving" means. Delivery is single-shot and not idempotent: two calls
/// produce two artifacts.
pub trait ArtifactSink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes artifacts into a download directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.dir.join(file_name), bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub pages: usize,
}

/// Derives the artifact name from a display name: case-folded, every run of
/// whitespace collapsed to a single underscore, organizational suffix
/// appended.
pub fn artifact_filename(display_name: &str) -> String {
    let mut stem = String::with_capacity(display_name.len());
    let mut in_whitespace = false;
    for c in display_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
                in_whitespace = true;
            }
        } else {
            stem.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    format!("{}{}", stem, ARTIFACT_SUFFIX)
}

/// Lays out, renders, and delivers the selection in one shot. Each call
/// builds its own document state; overlapping exports do not interfere.
pub fn export_pdf(
    selection: &ExportSelection<'_>,
    branding: &Branding,
    sink: &mut dyn ArtifactSink,
) -> Result<ExportReceipt, ExportError> {
    let document = lay_out(selection, branding, Local::now().date_naive());
    let bytes = pdf::render_pdf(&document)?;

    let file_name = artifact_filename(&selection.record.name);
    sink.deliver(&file_name, &bytes)?;

    info!(file = %file_name, pages = document.pages.len(), "export complete");
    Ok(ExportReceipt {
        file_name,
        pages: document.pages.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_folds_case_and_collapses_whitespace() {
        assert_eq!(
            artifact_filename("Home Loan (Flat Purchase)"),
            "home_loan_(flat_purchase)_tirupati_agencies.pdf"
        );
        assert_eq!(
            artifact_filename("Search  Report\tService"),
            "search_report_service_tirupati_agencies.pdf"
        );
    }
}
