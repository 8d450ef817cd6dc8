//! Content-type classification as a pure function of the measured signals.

use crate::config::ValidationConfig;
use crate::models::DetectedType;

/// Classify a file from its scan results. The precedence is fixed:
/// extraction failure, then personal red flags, then the financial
/// threshold, then weak financial signal, then nothing.
pub fn classify(
    extraction_succeeded: bool,
    financial_score: u32,
    red_flag_count: usize,
    config: &ValidationConfig,
) -> DetectedType {
    if !extraction_succeeded {
        return DetectedType::Unknown;
    }
    if red_flag_count > config.red_flag_limit {
        return DetectedType::NonFinancialPersonal;
    }
    if financial_score >= config.min_financial_score {
        return DetectedType::Financial;
    }
    if financial_score > 0 {
        return DetectedType::PotentiallyFinancial;
    }
    DetectedType::NonFinancialOther
}
