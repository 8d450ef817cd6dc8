//! PDF text extraction using the pdf-extract crate.
//!
//! Reads the embedded text layer of digital PDFs. Scanned PDFs without a
//! text layer come back (near-)empty and fall through to the empty-document
//! check in `extract_text`.

use super::ExtractionError;

pub fn extract(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate a valid single-page PDF with the given text using lopdf.
    fn make_test_pdf(text: &str) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("failed to serialize test PDF");
        bytes
    }

    #[test]
    fn extracts_embedded_text_layer() {
        let pdf = make_test_pdf("Balance Sheet: Assets and Liabilities");
        let text = extract(&pdf).unwrap();
        assert!(text.contains("Balance Sheet"), "got: {text:?}");
        assert!(text.contains("Liabilities"));
    }

    #[test]
    fn corrupt_bytes_error() {
        let result = extract(b"%PDF-1.7 this is not a real pdf body");
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn empty_input_errors() {
        assert!(extract(&[]).is_err());
    }
}
