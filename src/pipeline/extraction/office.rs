//! Word and PowerPoint extraction.
//!
//! OOXML documents (.docx/.pptx) are zip containers; the text lives as XML
//! character data in `word/document.xml` and `ppt/slides/slideN.xml`. Only
//! the character data matters for scoring, so a tag-state scan is enough;
//! no XML object model is built.
//!
//! Legacy OLE formats (.doc/.ppt/.xls) have no such container; they get a
//! printable-run salvage over the raw bytes (single-byte and UTF-16LE runs).

use std::io::{Cursor, Read};

use zip::ZipArchive;

use super::ExtractionError;

/// Minimum salvage run length; shorter runs are binary noise.
const MIN_SALVAGE_RUN: usize = 4;

pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open_archive(bytes)?;
    let xml = read_entry(&mut archive, "word/document.xml")?;
    Ok(xml_character_data(&xml))
}

pub fn extract_pptx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open_archive(bytes)?;

    let mut slides: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(String::from)
        .collect();
    if slides.is_empty() {
        return Err(ExtractionError::Archive("presentation has no slides".into()));
    }
    slides.sort();

    let mut parts = Vec::with_capacity(slides.len());
    for name in &slides {
        let xml = read_entry(&mut archive, name)?;
        parts.push(xml_character_data(&xml));
    }
    Ok(parts.join("\n"))
}

pub(crate) fn open_archive(bytes: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>, ExtractionError> {
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Archive(e.to_string()))
}

pub(crate) fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<String, ExtractionError> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| ExtractionError::Archive(format!("{name}: {e}")))?;
    let mut raw = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut raw)
        .map_err(|e| ExtractionError::Archive(format!("{name}: {e}")))?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Keep character data between tags, drop tags and attributes. Adjacent
/// text runs are separated by a space so words from different runs don't
/// glue together.
pub(crate) fn xml_character_data(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_tag = false;
    for c in xml.chars() {
        match c {
            '<' => {
                in_tag = true;
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    decode_xml_entities(&out)
}

/// The five predefined XML entities; OOXML text runs use no others.
fn decode_xml_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Salvage readable text runs from a legacy binary office file.
///
/// Word/Excel 97 store text as CP-1252 or UTF-16LE scattered through OLE
/// streams; runs of printable characters of useful length are recovered,
/// everything else is discarded. An empty result degrades to the normal
/// empty-document handling upstream.
pub fn salvage_text(bytes: &[u8]) -> String {
    let mut runs: Vec<String> = Vec::new();
    collect_single_byte_runs(bytes, &mut runs);
    collect_utf16le_runs(bytes, &mut runs);
    runs.join("\n")
}

fn is_texty(b: u8) -> bool {
    (0x20..0x7f).contains(&b) || b == b'\n' || b == b'\r' || b == b'\t'
}

fn flush_run(current: &mut String, runs: &mut Vec<String>) {
    let trimmed = current.trim();
    if trimmed.len() >= MIN_SALVAGE_RUN && trimmed.chars().any(|c| c.is_alphabetic()) {
        runs.push(trimmed.to_string());
    }
    current.clear();
}

fn collect_single_byte_runs(bytes: &[u8], runs: &mut Vec<String>) {
    let mut current = String::new();
    for &b in bytes {
        if is_texty(b) {
            current.push(b as char);
        } else {
            flush_run(&mut current, runs);
        }
    }
    flush_run(&mut current, runs);
}

fn collect_utf16le_runs(bytes: &[u8], runs: &mut Vec<String>) {
    let mut current = String::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i + 1] == 0 && is_texty(bytes[i]) {
            current.push(bytes[i] as char);
            i += 2;
        } else {
            flush_run(&mut current, runs);
            i += 1;
        }
    }
    flush_run(&mut current, runs);
}
