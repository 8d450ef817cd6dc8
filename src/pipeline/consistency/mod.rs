//! Startup-name consistency scoring.
//!
//! Measures how well extracted text corroborates the claimed startup name:
//! the case-folded, punctuation-stripped name is split into tokens, each
//! token is matched exactly or fuzzily against the text's tokens, and the
//! score is the mean per-token similarity. Exact occurrence scores 1.0, no
//! occurrence 0.0, a near-miss (typo, OCR slip) an intermediate value.
//!
//! Per-file only; cross-file agreement is the aggregator's job.

use std::collections::HashSet;

use crate::config::ValidationConfig;

/// Tokens shorter than this carry no identity signal ("co", "ag", "of").
const MIN_TOKEN_LEN: usize = 3;

/// Fuzzy matching applies only to tokens long enough that a small edit
/// distance still identifies the word.
const FUZZY_MIN_LEN: usize = 5;

/// Maximum edit distance accepted as a fuzzy occurrence.
const FUZZY_MAX_DISTANCE: usize = 2;

/// Case-fold and strip punctuation, keeping alphanumerics and whitespace.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn name_tokens(name: &str) -> Vec<String> {
    normalize(name)
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(String::from)
        .collect()
}

/// Similarity between the claimed startup name and the text, in [0, 1].
pub fn startup_score(claimed_name: &str, text: &str) -> f64 {
    let tokens = name_tokens(claimed_name);
    if tokens.is_empty() {
        return 0.0;
    }

    let normalized = normalize(text);
    let text_tokens: Vec<&str> = normalized.split_whitespace().collect();
    let exact: HashSet<&str> = text_tokens.iter().copied().collect();

    let total: f64 = tokens
        .iter()
        .map(|token| token_similarity(token, &exact, &text_tokens))
        .sum();
    total / tokens.len() as f64
}

fn token_similarity(token: &str, exact: &HashSet<&str>, text_tokens: &[&str]) -> f64 {
    if exact.contains(token) {
        return 1.0;
    }
    if token.len() < FUZZY_MIN_LEN {
        return 0.0;
    }

    let mut best = 0.0f64;
    for candidate in text_tokens {
        if candidate.len().abs_diff(token.len()) > FUZZY_MAX_DISTANCE {
            continue;
        }
        let distance = levenshtein(token, candidate);
        if distance <= FUZZY_MAX_DISTANCE {
            let similarity = 1.0 - distance as f64 / token.len() as f64;
            best = best.max(similarity);
        }
    }
    best
}

/// Classic two-row Levenshtein distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

/// Word tokens that look like company-name mentions: any token containing a
/// company-suffix keyword ("inc", "llc", "corporation", …). Deduplicated and
/// sorted for deterministic cross-file comparison.
pub fn company_references(text: &str, config: &ValidationConfig) -> Vec<String> {
    let normalized = normalize(text);
    let mut references: Vec<String> = normalized
        .split_whitespace()
        .filter(|token| config.company_keywords.iter().any(|kw| token.contains(kw.as_str())))
        .map(String::from)
        .collect();
    references.sort();
    references.dedup();
    references
}
