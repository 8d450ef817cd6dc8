//! Extraction strategy dispatch.
//!
//! The declared extension is the primary signal; the declared content type
//! only refines blank or generic claims (`application/octet-stream`). There
//! is no magic-byte sniffing here: a wrong claim surfaces downstream as an
//! extraction failure on that file alone.

use serde::Serialize;

/// How a file's text will be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    Pdf,
    Docx,
    Pptx,
    Xlsx,
    /// Binary OLE formats (.doc, .ppt, .xls); printable-run salvage.
    LegacyOffice,
    Csv,
    PlainText,
    Unsupported,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Xlsx => "xlsx",
            Self::LegacyOffice => "legacy_office",
            Self::Csv => "csv",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "pptx" => Self::Pptx,
            "xlsx" => Self::Xlsx,
            "doc" | "ppt" | "xls" => Self::LegacyOffice,
            "csv" => Self::Csv,
            "txt" => Self::PlainText,
            _ => Self::Unsupported,
        }
    }

    fn from_content_type(content_type: &str) -> Self {
        let ct = content_type.to_ascii_lowercase();
        if ct == "application/pdf" {
            Self::Pdf
        } else if ct.contains("wordprocessingml") {
            Self::Docx
        } else if ct.contains("presentationml") {
            Self::Pptx
        } else if ct.contains("spreadsheetml") {
            Self::Xlsx
        } else if ct.contains("msword") || ct.contains("ms-powerpoint") || ct.contains("ms-excel") {
            Self::LegacyOffice
        } else if ct == "text/csv" {
            Self::Csv
        } else if ct.starts_with("text/") {
            Self::PlainText
        } else {
            Self::Unsupported
        }
    }

    /// Determine the strategy for a declared filename + content type.
    pub fn detect(filename: &str, content_type: &str) -> Self {
        let by_extension = filename
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Self::Unsupported);

        if by_extension != Self::Unsupported {
            return by_extension;
        }
        Self::from_content_type(content_type)
    }
}
