//! Plain-text read: lossy UTF-8 with BOM stripping.

pub fn read_plain(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}
