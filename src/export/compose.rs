use chrono::NaiveDate;

use crate::catalog::{
    ApplicantType, DocumentBuckets, DocumentSet, ServiceCategory, ServiceRecord, ServiceSubtype,
};
use crate::config::Branding;

use super::layout::{FontWeight, Page, PageBuilder, MARGIN};

/// Caller-supplied export input: a resolved record, an optional subtype
/// narrowing the documents block, and the applicant-type discriminator.
#[derive(Debug, Clone, Copy)]
pub struct ExportSelection<'a> {
    pub record: &'a ServiceRecord,
    pub subtype: Option<&'a ServiceSubtype>,
    pub applicant_type: ApplicantType,
}

impl<'a> ExportSelection<'a> {
    pub fn new(record: &'a ServiceRecord) -> Self {
        Self {
            record,
            subtype: None,
            applicant_type: ApplicantType::default(),
        }
    }

    pub fn with_subtype(mut self, subtype: &'a ServiceSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    pub fn with_applicant_type(mut self, applicant_type: ApplicantType) -> Self {
        self.applicant_type = applicant_type;
        self
    }
}

/// A fully laid-out document: positioned text on a sequence of pages, ready
/// for rendering to an artifact format.
#[derive(Debug)]
pub struct RenderedDocument {
    pub title: String,
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    /// Every span's text, in page order then draw order. Test and preview
    /// helper.
    pub fn text_lines(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.spans.iter().map(|span| span.text.as_str()))
            .collect()
    }
}

/// Lays the selection out into pages. Block order is fixed: masthead, title,
/// localized name, description, metrics, documents, process, benefits,
/// footer. Sections with no data are omitted outright, except the metrics
/// band whose absent values render as dashes.
pub fn lay_out(
    selection: &ExportSelection<'_>,
    branding: &Branding,
    generated_on: NaiveDate,
) -> RenderedDocument {
    let record = selection.record;
    let mut builder = PageBuilder::new();

    masthead(&mut builder, branding);

    builder.line(MARGIN, 14.0, FontWeight::Bold, &record.name, 20.0);
    if !record.localized_name.is_empty() {
        builder.line(MARGIN, 10.0, FontWeight::Regular, &record.localized_name, 20.0);
    }

    if let Some(description) = record.description.as_deref() {
        if !description.trim().is_empty() {
            builder.wrapped(MARGIN, 11.0, FontWeight::Regular, description, 14.0);
            builder.advance(8.0);
        }
    }

    metrics_band(&mut builder, record);
    documents_section(&mut builder, selection);
    process_section(&mut builder, record);
    benefits_section(&mut builder, record);
    footer(&mut builder, branding, generated_on);

    RenderedDocument {
        title: record.name.clone(),
        pages: builder.finish(),
    }
}

fn masthead(builder: &mut PageBuilder, branding: &Branding) {
    builder.place_absolute(MARGIN, 40.0, 18.0, FontWeight::Bold, &branding.organization);
    builder.place_absolute(MARGIN, 56.0, 10.0, FontWeight::Regular, &branding.tagline);
}

/// Fixed-column metrics: three columns for loans, two for services, none for
/// mortgage offerings. Column positions are preserved by printing a dash for
/// absent values instead of dropping the column.
fn metrics_band(builder: &mut PageBuilder, record: &ServiceRecord) {
    let (title, columns): (&str, Vec<(&str, Option<&str>)>) = match record.category {
        ServiceCategory::Loan => (
            "Key Metrics",
            vec![
                ("Interest Rate", record.interest_rate.as_deref()),
                ("Max Amount", record.max_amount.as_deref()),
                ("Tenure", record.tenure.as_deref()),
            ],
        ),
        ServiceCategory::Service => (
            "Service Info",
            vec![
                ("Processing Time", record.duration.as_deref()),
                ("Starting Cost", record.cost.as_deref()),
            ],
        ),
        ServiceCategory::Mortgage => return,
    };

    builder.heading(title);
    let column_width = PageBuilder::content_width() / columns.len() as f64;
    let label_y = builder.y();
    for (index, (label, value)) in columns.iter().enumerate() {
        let x = MARGIN + column_width * index as f64;
        builder.place_absolute(x, label_y, 9.0, FontWeight::Regular, label);
        builder.place_absolute(
            x,
            label_y + 14.0,
            11.0,
            FontWeight::Bold,
            value.unwrap_or("-"),
        );
    }
    builder.advance(14.0 + 16.0 + 6.0);
}

fn documents_section(builder: &mut PageBuilder, selection: &ExportSelection<'_>) {
    let Some(documents) = selection.record.documents_for(selection.subtype) else {
        return;
    };
    if document_set_is_empty(documents) {
        return;
    }

    builder.heading("Required Documents");
    match documents {
        DocumentSet::Checklist(items) => checklist_items(builder, items),
        DocumentSet::Bucketed(buckets) => bucketed_items(builder, buckets, selection.applicant_type),
    }
    builder.advance(8.0);
}

fn document_set_is_empty(documents: &DocumentSet) -> bool {
    match documents {
        DocumentSet::Checklist(items) => items.is_empty(),
        DocumentSet::Bucketed(buckets) => {
            buckets.basic_kyc.is_empty()
                && buckets.salaried.is_empty()
                && buckets.business.is_empty()
                && buckets.property.is_empty()
        }
    }
}

fn checklist_items(builder: &mut PageBuilder, items: &[String]) {
    for item in items {
        builder.wrapped(
            MARGIN + 10.0,
            11.0,
            FontWeight::Regular,
            &format!("- {}", item),
            12.0,
        );
    }
}

fn bucketed_items(builder: &mut PageBuilder, buckets: &DocumentBuckets, applicant: ApplicantType) {
    bucket(builder, "Basic KYC:", &buckets.basic_kyc);
    bucket(builder, applicant.documents_heading(), buckets.for_applicant(applicant));
    bucket(builder, "Property / Other Documents:", &buckets.property);
}

fn bucket(builder: &mut PageBuilder, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    builder.line(MARGIN, 11.0, FontWeight::Regular, label, 16.0);
    for item in items {
        builder.wrapped(
            MARGIN + 10.0,
            11.0,
            FontWeight::Regular,
            &format!("- {}", item),
            12.0,
        );
    }
}

fn process_section(builder: &mut PageBuilder, record: &ServiceRecord) {
    if record.process.is_empty() {
        return;
    }
    builder.heading("Process");
    for (index, step) in record.process.iter().enumerate() {
        builder.wrapped(
            MARGIN,
            11.0,
            FontWeight::Regular,
            &format!("{}. {}", index + 1, step),
            12.0,
        );
        builder.advance(6.0);
    }
    builder.advance(6.0);
}

fn benefits_section(builder: &mut PageBuilder, record: &ServiceRecord) {
    if record.benefits.is_empty() {
        return;
    }
    builder.heading("Benefits");
    for benefit in &record.benefits {
        builder.wrapped(
            MARGIN + 6.0,
            11.0,
            FontWeight::Regular,
            &format!("- {}", benefit),
            12.0,
        );
    }
}

fn footer(builder: &mut PageBuilder, branding: &Branding, generated_on: NaiveDate) {
    let text = format!(
        "{} • Call: {} • Generated {}",
        branding.organization,
        branding.contact_phone,
        generated_on.format("%B %d, %Y"),
    );
    builder.place_absolute(MARGIN, super::layout::PAGE_HEIGHT - 30.0, 10.0, FontWeight::Regular, &text);
}
