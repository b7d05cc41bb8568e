use super::ExtractionError;

/// Extract the embedded text layer from a digital PDF.
///
/// Scanned PDFs without a text layer come back (near-)empty; the caller
/// turns that into [`ExtractionError::EmptyText`] after normalization
/// rather than passing blank content downstream.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))
}

/// Builds minimal single-page PDFs with a real text layer, for extraction
/// tests across this crate.
#[cfg(test)]
pub(crate) mod test_pdf {
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    pub fn make_test_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let resources = dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        };

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        });

        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", pages_id);
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });

        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
