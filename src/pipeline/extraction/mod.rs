//! Format-dispatched text extraction.
//!
//! Each supported format has an independent strategy; a failing strategy is
//! never retried with another one. Failures are recovered by the caller into
//! an `unknown` analysis so one unreadable file does not abort the batch.

pub mod format;
pub mod office;
pub mod pdf;
pub mod sanitize;
pub mod sheet;
pub mod text;

pub use format::*;
pub use sanitize::*;

use thiserror::Error;

use super::UploadedFile;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("document container error: {0}")]
    Archive(String),

    #[error("text encoding error: {0}")]
    Encoding(String),

    #[error("document contained no extractable text")]
    EmptyDocument,
}

/// Extract plain text from a file's raw bytes, dispatching on its declared
/// extension (refined by content type for generic claims). The returned text
/// is sanitized; a result with no visible characters is an error.
pub fn extract_text(file: &UploadedFile) -> Result<String, ExtractionError> {
    let format = FileFormat::detect(&file.filename, &file.content_type);

    tracing::debug!(
        file = %file.filename,
        format = format.as_str(),
        size = file.bytes.len(),
        "extracting text"
    );

    let raw = match format {
        FileFormat::Pdf => pdf::extract(&file.bytes)?,
        FileFormat::Docx => office::extract_docx(&file.bytes)?,
        FileFormat::Pptx => office::extract_pptx(&file.bytes)?,
        FileFormat::Xlsx => sheet::extract_xlsx(&file.bytes)?,
        FileFormat::LegacyOffice => office::salvage_text(&file.bytes),
        FileFormat::Csv => sheet::extract_csv(&file.bytes),
        FileFormat::PlainText => text::read_plain(&file.bytes),
        FileFormat::Unsupported => {
            return Err(ExtractionError::UnsupportedFormat(file.filename.clone()))
        }
    };

    let clean = sanitize_extracted_text(&raw);
    if clean.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_roundtrip() {
        let file = UploadedFile::new("notes.txt", "text/plain", b"Revenue: $1,000".to_vec());
        let text = extract_text(&file).unwrap();
        assert!(text.contains("Revenue"));
        assert!(text.contains("$1,000"));
    }

    #[test]
    fn whitespace_only_payload_is_empty_document() {
        let file = UploadedFile::new("blank.txt", "text/plain", b"  \n\t \n".to_vec());
        assert!(matches!(extract_text(&file), Err(ExtractionError::EmptyDocument)));
    }

    #[test]
    fn unsupported_format_is_refused() {
        let file = UploadedFile::new("archive.rar", "application/octet-stream", vec![1, 2, 3]);
        assert!(matches!(
            extract_text(&file),
            Err(ExtractionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn corrupt_pdf_fails_without_panicking() {
        let file = UploadedFile::new("broken.pdf", "application/pdf", b"%PDF-1.4 garbage".to_vec());
        assert!(extract_text(&file).is_err());
    }
}
