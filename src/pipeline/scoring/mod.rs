//! Financial and red-flag keyword scanning.
//!
//! The financial score counts distinct categories with at least one match,
//! not total keyword occurrences: a document touching both the balance sheet
//! and cash flow vocabularies outranks one repeating "revenue" fifty times.
//! A single over-represented word cannot push a file over the threshold.

pub mod classify;

pub use classify::classify;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{FinancialCategory, ValidationConfig};

/// A keyword compiled for scanning. Keywords with word characters match on
/// word boundaries; symbol-only keywords (e.g. `$`) match as substrings,
/// since `\b` has no meaning next to them.
enum TermMatcher {
    Word(Regex),
    Substring(String),
}

struct CompiledTerm {
    keyword: String,
    matcher: TermMatcher,
}

impl CompiledTerm {
    fn compile(keyword: &str) -> Self {
        let matcher = if keyword.chars().any(|c| c.is_alphanumeric()) {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword).replace(' ', r"\s+"));
            TermMatcher::Word(Regex::new(&pattern).expect("invalid keyword pattern"))
        } else {
            TermMatcher::Substring(keyword.to_string())
        };
        Self {
            keyword: keyword.to_string(),
            matcher,
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match &self.matcher {
            TermMatcher::Word(regex) => regex.is_match(text),
            TermMatcher::Substring(needle) => text.contains(needle.as_str()),
        }
    }
}

/// Keyword tables compiled once per configuration.
pub struct KeywordSets {
    financial: Vec<(FinancialCategory, Vec<CompiledTerm>)>,
    red_flags: Vec<CompiledTerm>,
}

static SHARED: LazyLock<KeywordSets> =
    LazyLock::new(|| KeywordSets::compile(ValidationConfig::shared()));

impl KeywordSets {
    pub fn compile(config: &ValidationConfig) -> Self {
        let financial = config
            .financial_keywords
            .iter()
            .map(|(category, terms)| {
                let compiled = terms.iter().map(|t| CompiledTerm::compile(t)).collect();
                (*category, compiled)
            })
            .collect();
        let red_flags = config
            .non_financial_keywords
            .iter()
            .map(|t| CompiledTerm::compile(t))
            .collect();
        Self { financial, red_flags }
    }

    /// Compiled tables for the process-wide default configuration.
    pub fn shared() -> &'static KeywordSets {
        &SHARED
    }
}

/// Everything the scorer measured about one file's text.
#[derive(Debug, Clone, Default)]
pub struct FinancialSignals {
    /// Distinct categories with at least one hit, in category order.
    pub categories: Vec<FinancialCategory>,
    /// Matched red-flag keywords, deduplicated, in vocabulary order.
    pub red_flags: Vec<String>,
}

impl FinancialSignals {
    pub fn financial_score(&self) -> u32 {
        self.categories.len() as u32
    }
}

/// Scan extracted text against the compiled keyword tables.
/// Deterministic: identical text always yields identical signals.
pub fn scan_text(text: &str, sets: &KeywordSets) -> FinancialSignals {
    let mut signals = FinancialSignals::default();

    for (category, terms) in &sets.financial {
        if terms.iter().any(|term| term.is_match(text)) {
            signals.categories.push(*category);
        }
    }

    for term in &sets.red_flags {
        if term.is_match(text) && !signals.red_flags.iter().any(|k| k == &term.keyword) {
            signals.red_flags.push(term.keyword.clone());
        }
    }

    signals
}
