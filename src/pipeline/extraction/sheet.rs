//! Spreadsheet extraction: XLSX workbooks and CSV.
//!
//! XLSX text lives in `xl/sharedStrings.xml` (shared cell strings) and the
//! worksheet XML (inline strings and numeric cell values); both are scanned
//! as character data. Legacy .xls goes through the office salvage path.

use super::office::{open_archive, read_entry, xml_character_data};
use super::ExtractionError;

pub fn extract_xlsx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open_archive(bytes)?;

    let mut entries: Vec<String> = archive
        .file_names()
        .filter(|name| {
            *name == "xl/sharedStrings.xml"
                || (name.starts_with("xl/worksheets/") && name.ends_with(".xml"))
        })
        .map(String::from)
        .collect();
    if entries.is_empty() {
        return Err(ExtractionError::Archive("workbook has no worksheets".into()));
    }
    entries.sort();

    let mut parts = Vec::with_capacity(entries.len());
    for name in &entries {
        let xml = read_entry(&mut archive, name)?;
        parts.push(xml_character_data(&xml));
    }
    Ok(parts.join("\n"))
}

/// Flatten CSV into scan-friendly text: one line per record, cells joined
/// with spaces. Quoting is handled only to the extent scoring needs: quote
/// characters are trimmed, cell contents are kept verbatim.
pub fn extract_csv(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.lines()
        .map(|line| {
            line.split(|c| matches!(c, ',' | ';' | '\t'))
                .map(|cell| cell.trim().trim_matches('"').trim())
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
