/// Sanitize extracted text before scoring.
/// Strips control characters, collapses blank lines, preserves the
/// punctuation and currency symbols financial documents rely on.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '+'
                        | '='
                        | '%'
                        | '#'
                        | '@'
                        | '&'
                        | '\''
                        | '"'
                        | '!'
                        | '?'
                        | '<'
                        | '>'
                        | '*'
                        | '_'
                        | '$'
                        | '€'
                        | '£'
                        | '¥'
                        | '\u{2013}' // En-dash
                        | '\u{2014}' // Em-dash
                        | '\u{2019}' // Right single quotation mark
                        | '\u{2018}' // Left single quotation mark
                        | '\u{201C}' // Left double quotation mark
                        | '\u{201D}' // Right double quotation mark
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_bytes() {
        let clean = sanitize_extracted_text("Tech\x00Start financials");
        assert!(!clean.contains('\x00'));
        assert!(clean.contains("financials"));
    }

    #[test]
    fn strips_control_characters() {
        let clean = sanitize_extracted_text("Revenue: $1,000\x01\x02\nEBITDA: $250");
        assert!(!clean.contains('\x01'));
        assert!(clean.contains("Revenue: $1,000"));
        assert!(clean.contains("EBITDA: $250"));
    }

    #[test]
    fn preserves_currency_symbols() {
        let clean = sanitize_extracted_text("Assets $500,000 / €400.000 (audited)");
        assert!(clean.contains('$'));
        assert!(clean.contains('€'));
        assert!(clean.contains("(audited)"));
    }

    #[test]
    fn collapses_blank_lines() {
        let clean = sanitize_extracted_text("line one\n\n\n   \nline two");
        assert_eq!(clean, "line one\nline two");
    }
}
