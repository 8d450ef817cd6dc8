//! Batch-level validation verdict.

use serde::{Deserialize, Serialize};

use super::FileAnalysis;

/// Outcome of validating one submission batch.
///
/// Created fresh per validation call and never mutated afterwards. Every
/// failure condition is represented here as data; the pipeline does not
/// raise at its contract boundary, because the caller must render a
/// structured explanation rather than a generic failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no blocking error fired.
    pub accepted: bool,
    /// Blocking problems, each naming a specific file or cross-file rule.
    /// Non-empty iff `accepted` is false.
    pub errors: Vec<String>,
    /// Non-blocking concerns; the batch may still be accepted.
    pub warnings: Vec<String>,
    /// One analysis per analyzed input file, in input order. Empty when the
    /// batch was rejected structurally before any extraction.
    pub file_analyses: Vec<FileAnalysis>,
}

impl ValidationResult {
    /// A batch rejected before extraction (structural errors only).
    pub fn rejected(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            accepted: false,
            errors,
            warnings: Vec::new(),
            file_analyses: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_rejection_has_no_analyses() {
        let result = ValidationResult::rejected(vec!["No files were uploaded".into()]);
        assert!(!result.accepted);
        assert_eq!(result.errors.len(), 1);
        assert!(result.file_analyses.is_empty());
    }

    #[test]
    fn serializes_api_shape() {
        let result = ValidationResult {
            accepted: true,
            errors: vec![],
            warnings: vec!["weak name match".into()],
            file_analyses: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"accepted\":true"));
        assert!(json.contains("\"warnings\":[\"weak name match\"]"));
        assert!(json.contains("\"file_analyses\":[]"));
    }
}
