use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::compose::RenderedDocument;
use super::layout::{FontWeight, PAGE_HEIGHT};
use super::ExportError;

/// Renders laid-out pages into PDF bytes. Layout positions measure down from
/// the top of the page; PDF text space measures up from the bottom, so `y`
/// flips here and nowhere else.
pub(crate) fn render_pdf(document: &RenderedDocument) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_font,
            "F2" => bold_font,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let mut operations = Vec::with_capacity(page.spans.len() * 5);
        for span in &page.spans {
            let font = match span.weight {
                FontWeight::Regular => "F1",
                FontWeight::Bold => "F2",
            };
            // Layout positions are fractional points; whole points are more
            // than enough resolution for text placement.
            let x = span.x.round() as i64;
            let y = (PAGE_HEIGHT - span.y).round() as i64;
            let size = span.size.round() as i64;

            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![font.into(), size.into()]));
            operations.push(Operation::new("Td", vec![x.into(), y.into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(span.text.as_str())],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
