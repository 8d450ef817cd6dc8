//! Cross-file consistency rules and the final batch verdict.
//!
//! The aggregator never fails: every per-file and per-batch condition is
//! represented as data in the returned `ValidationResult`, because the API
//! layer must render a structured explanation to the submitter.

use std::collections::BTreeSet;

use crate::config::ValidationConfig;
use crate::models::{DetectedType, FileAnalysis, ValidationResult};

use super::consistency;

/// Distinct company-reference tokens across a batch above which the files
/// look like they describe several different companies.
const MAX_DISTINCT_COMPANY_REFS: usize = 5;

/// Combine per-file analyses into the batch verdict.
pub fn aggregate(
    analyses: Vec<FileAnalysis>,
    startup_name: &str,
    config: &ValidationConfig,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Per-file disqualifications: unreadable files and personal content.
    let mut disqualified = 0usize;
    for analysis in &analyses {
        match analysis.detected_type {
            DetectedType::Unknown => {
                disqualified += 1;
                errors.push(format!(
                    "Content of file '{}' could not be extracted; the file may be corrupted or empty",
                    analysis.filename
                ));
            }
            DetectedType::NonFinancialPersonal => {
                disqualified += 1;
                errors.push(format!(
                    "File '{}' appears to contain personal, non-business content (red flags: {})",
                    analysis.filename,
                    analysis.red_flags.join(", ")
                ));
            }
            _ => {}
        }
    }

    // The batch must contain financial content somewhere. When every file
    // was already disqualified above, this would restate those errors, so
    // it only fires while at least one file survived the per-file checks.
    if disqualified < analyses.len() && !analyses.iter().any(|a| a.is_financial) {
        errors.push("No financial content detected in any uploaded file".to_string());
    }

    // Weak name match on an otherwise financial file is a soft signal:
    // legitimate documents sometimes omit the company name verbatim.
    for analysis in &analyses {
        if analysis.is_financial && !analysis.startup_consistent {
            warnings.push(format!(
                "File '{}' may not be related to startup '{}' (consistency score: {:.2}); \
                 if it belongs to a different company, re-upload it under the correct startup",
                analysis.filename, startup_name, analysis.startup_score
            ));
        }
    }

    // Majority check: one correctly-named file must not carry a batch whose
    // other documents point at a different company. A tie does not block.
    let financially_relevant: Vec<&FileAnalysis> =
        analyses.iter().filter(|a| a.is_financial).collect();
    let disagreeing = financially_relevant
        .iter()
        .filter(|a| !a.startup_consistent)
        .count();
    let agreeing = financially_relevant.len() - disagreeing;
    if disagreeing > agreeing {
        errors.push(format!(
            "Most uploaded files appear to reference a different company than '{startup_name}'; \
             please verify the documents belong to this startup"
        ));
    }

    // Many distinct company-suffixed tokens across several files suggests
    // documents from different companies were mixed into one submission.
    if analyses.len() >= 2 {
        let mut references: BTreeSet<String> = BTreeSet::new();
        for analysis in &analyses {
            references.extend(consistency::company_references(&analysis.extracted_text, config));
        }
        if references.len() > MAX_DISTINCT_COMPANY_REFS {
            warnings.push(
                "Files reference several different company names; \
                 please ensure all documents belong to the same startup"
                    .to_string(),
            );
        }
    }

    ValidationResult {
        accepted: errors.is_empty(),
        errors,
        warnings,
        file_analyses: analyses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    fn financial(filename: &str, consistent: bool) -> FileAnalysis {
        FileAnalysis {
            filename: filename.into(),
            extracted_text: "balance sheet revenue cash flow".into(),
            is_financial: true,
            detected_type: DetectedType::Financial,
            financial_score: 3,
            startup_consistent: consistent,
            startup_score: if consistent { 1.0 } else { 0.0 },
            red_flags: vec![],
        }
    }

    fn personal(filename: &str) -> FileAnalysis {
        FileAnalysis {
            filename: filename.into(),
            extracted_text: "diary family grocery".into(),
            is_financial: false,
            detected_type: DetectedType::NonFinancialPersonal,
            financial_score: 0,
            startup_consistent: false,
            startup_score: 0.0,
            red_flags: vec!["diary".into(), "family".into(), "grocery".into()],
        }
    }

    #[test]
    fn clean_financial_batch_accepted() {
        let result = aggregate(vec![financial("a.pdf", true)], "TechStart", &config());
        assert!(result.accepted);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.file_analyses.len(), 1);
    }

    #[test]
    fn unreadable_file_blocks_and_names_the_file() {
        let analyses = vec![FileAnalysis::extraction_failed("broken.pdf")];
        let result = aggregate(analyses, "TechStart", &config());
        assert!(!result.accepted);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("broken.pdf"));
    }

    #[test]
    fn personal_file_blocks_with_single_error() {
        let result = aggregate(vec![personal("diary.txt")], "TechStart", &config());
        assert!(!result.accepted);
        assert_eq!(result.errors.len(), 1, "errors: {:?}", result.errors);
        assert!(result.errors[0].contains("diary.txt"));
        assert!(result.errors[0].contains("diary"));
    }

    #[test]
    fn no_financial_content_blocks() {
        let mut benign = financial("notes.txt", true);
        benign.is_financial = false;
        benign.detected_type = DetectedType::PotentiallyFinancial;
        benign.financial_score = 1;

        let result = aggregate(vec![benign], "TechStart", &config());
        assert!(!result.accepted);
        assert!(result.errors.iter().any(|e| e.contains("No financial content")));
    }

    #[test]
    fn inconsistent_financial_file_warns_with_score() {
        let result = aggregate(
            vec![financial("ours.pdf", true), financial("theirs.pdf", false)],
            "TechStart",
            &config(),
        );
        assert!(result.accepted, "errors: {:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("theirs.pdf"));
        assert!(result.warnings[0].contains("0.00"));
    }

    #[test]
    fn tie_does_not_block() {
        // 1 agreeing vs 1 disagreeing is not a majority.
        let result = aggregate(
            vec![financial("a.pdf", true), financial("b.pdf", false)],
            "TechStart",
            &config(),
        );
        assert!(result.accepted);
    }

    #[test]
    fn strict_majority_blocks() {
        let result = aggregate(
            vec![
                financial("a.pdf", true),
                financial("b.pdf", false),
                financial("c.pdf", false),
            ],
            "TechStart",
            &config(),
        );
        assert!(!result.accepted);
        assert!(result.errors.iter().any(|e| e.contains("different company")));
    }

    #[test]
    fn many_company_references_warn() {
        let mut a = financial("a.pdf", true);
        a.extracted_text =
            "Acme Inc, Beta LLC, Gamma Ltd and the Delta Corporation startup".into();
        let mut b = financial("b.pdf", true);
        b.extracted_text = "Epsilon company, a business venture of Zeta enterprise".into();

        let result = aggregate(vec![a, b], "TechStart", &config());
        assert!(result.accepted);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("several different company names")));
    }

    #[test]
    fn single_file_never_gets_cross_reference_warning() {
        let mut a = financial("a.pdf", true);
        a.extracted_text =
            "Acme Inc, Beta LLC, Gamma Ltd, Delta Corporation, a startup business venture".into();
        let result = aggregate(vec![a], "TechStart", &config());
        assert!(!result.warnings.iter().any(|w| w.contains("several different")));
    }

    #[test]
    fn analyses_preserved_in_input_order() {
        let result = aggregate(
            vec![financial("first.pdf", true), personal("second.txt")],
            "TechStart",
            &config(),
        );
        assert_eq!(result.file_analyses[0].filename, "first.pdf");
        assert_eq!(result.file_analyses[1].filename, "second.txt");
    }
}
