//! Per-file analysis record produced by the validation pipeline.

use serde::{Deserialize, Serialize};

/// What a file's content appears to be. Classification is a pure function
/// of the measured signals (see `pipeline::scoring::classify`); the label
/// is never assigned independently of the scores that justify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedType {
    /// Enough distinct financial categories matched.
    Financial,
    /// Some financial vocabulary, but below the acceptance threshold.
    PotentiallyFinancial,
    /// Too many personal-content red flags, whatever else matched.
    NonFinancialPersonal,
    /// Readable text with no financial signal at all.
    NonFinancialOther,
    /// Extraction failed; nothing could be said about the content.
    Unknown,
}

impl DetectedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::PotentiallyFinancial => "potentially_financial",
            Self::NonFinancialPersonal => "non_financial_personal",
            Self::NonFinancialOther => "non_financial_other",
            Self::Unknown => "unknown",
        }
    }
}

/// Analysis of a single uploaded file.
///
/// Serialized form carries exactly the fields the API layer returns to the
/// submitter; the raw extracted text stays in-process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// Original filename as submitted.
    pub filename: String,
    /// Extracted plain text; empty when extraction failed. Not serialized.
    #[serde(skip_serializing, default)]
    pub extracted_text: String,
    pub is_financial: bool,
    pub detected_type: DetectedType,
    /// Count of distinct financial categories with at least one keyword hit.
    pub financial_score: u32,
    pub startup_consistent: bool,
    /// Similarity between the claimed startup name and the text, in [0, 1].
    pub startup_score: f64,
    /// Matched red-flag keywords, deduplicated, in vocabulary order.
    pub red_flags: Vec<String>,
}

impl FileAnalysis {
    /// The analysis recorded for a file whose content could not be extracted.
    /// The batch continues; the aggregator turns this into a blocking error.
    pub fn extraction_failed(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            extracted_text: String::new(),
            is_financial: false,
            detected_type: DetectedType::Unknown,
            financial_score: 0,
            startup_consistent: false,
            startup_score: 0.0,
            red_flags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_type_serializes_snake_case() {
        let json = serde_json::to_string(&DetectedType::NonFinancialPersonal).unwrap();
        assert_eq!(json, "\"non_financial_personal\"");
        assert_eq!(DetectedType::PotentiallyFinancial.as_str(), "potentially_financial");
    }

    #[test]
    fn extraction_failed_analysis_is_inert() {
        let analysis = FileAnalysis::extraction_failed("broken.pdf");
        assert_eq!(analysis.detected_type, DetectedType::Unknown);
        assert_eq!(analysis.financial_score, 0);
        assert!(!analysis.is_financial);
        assert!(!analysis.startup_consistent);
        assert!(analysis.red_flags.is_empty());
    }

    #[test]
    fn extracted_text_not_serialized() {
        let mut analysis = FileAnalysis::extraction_failed("a.pdf");
        analysis.extracted_text = "secret internals".into();
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(!json.contains("secret internals"));
        assert!(!json.contains("extracted_text"));
        assert!(json.contains("\"filename\":\"a.pdf\""));
    }
}
