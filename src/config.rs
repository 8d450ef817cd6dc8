//! Immutable validation configuration: keyword tables, thresholds, limits.
//!
//! Built once at process start and shared by reference across concurrent
//! validations. Misconfiguration (e.g. an empty keyword table) is a
//! programming error and fails loudly at construction, never per-request.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One financial vocabulary group. A document's financial score is the
/// number of distinct categories it matches, not the raw hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialCategory {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
    CapTable,
    FinancialProjections,
    GeneralFinancial,
}

impl FinancialCategory {
    pub const ALL: [FinancialCategory; 6] = [
        Self::BalanceSheet,
        Self::IncomeStatement,
        Self::CashFlow,
        Self::CapTable,
        Self::FinancialProjections,
        Self::GeneralFinancial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "balance_sheet",
            Self::IncomeStatement => "income_statement",
            Self::CashFlow => "cash_flow",
            Self::CapTable => "cap_table",
            Self::FinancialProjections => "financial_projections",
            Self::GeneralFinancial => "general_financial",
        }
    }
}

const BALANCE_SHEET_TERMS: &[&str] = &[
    "assets", "liabilities", "equity", "balance sheet", "current assets",
    "fixed assets", "accounts payable", "accounts receivable", "inventory",
    "cash", "retained earnings", "shareholder equity", "working capital",
];

const INCOME_STATEMENT_TERMS: &[&str] = &[
    "revenue", "income", "expenses", "profit", "loss", "ebitda", "ebit",
    "gross profit", "net income", "operating expenses", "cost of goods sold",
    "depreciation", "amortization", "interest expense", "tax expense",
];

const CASH_FLOW_TERMS: &[&str] = &[
    "cash flow", "operating cash flow", "investing cash flow",
    "financing cash flow", "cash receipts", "cash payments",
    "net cash flow", "beginning cash", "ending cash",
];

const CAP_TABLE_TERMS: &[&str] = &[
    "shares", "ownership", "equity", "stockholders", "shareholders",
    "common stock", "preferred stock", "options", "warrants",
    "dilution", "valuation", "share price", "capitalization table",
    "voting rights", "liquidation preference",
];

const FINANCIAL_PROJECTIONS_TERMS: &[&str] = &[
    "forecast", "projection", "budget", "plan", "targets",
    "assumptions", "growth rate", "market size", "projections",
];

const GENERAL_FINANCIAL_TERMS: &[&str] = &[
    "financial", "money", "dollar", "currency", "investment",
    "funding", "capital", "valuation", "metrics", "kpi",
    "performance", "analysis", "report", "statement", "$",
];

/// Indicators of personal / non-business content. More than
/// `red_flag_limit` distinct matches disqualifies a file.
const NON_FINANCIAL_TERMS: &[&str] = &[
    "recipe", "cooking", "personal", "diary", "vacation", "travel",
    "photo", "image", "music", "video", "game", "entertainment",
    "social media", "facebook", "instagram", "twitter", "personal note",
    "shopping list", "grocery", "family", "wedding", "birthday",
];

/// Company-suffix words used to spot company-name mentions across files.
const COMPANY_TERMS: &[&str] = &[
    "company", "corporation", "inc", "llc", "ltd", "startup",
    "business", "enterprise", "firm", "organization", "venture",
];

const ALLOWED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "csv", "txt",
];

/// Default decision thresholds.
pub mod thresholds {
    /// Minimum distinct financial categories for a file to count as financial.
    pub const MIN_FINANCIAL_SCORE: u32 = 3;

    /// More than this many distinct red flags marks a file as personal content.
    pub const RED_FLAG_LIMIT: usize = 2;

    /// Minimum startup-name similarity for a file to be considered consistent.
    pub const MIN_STARTUP_CONSISTENCY: f64 = 0.7;

    /// Upload cap per startup, matching the external submission form.
    pub const MAX_FILES_PER_UPLOAD: usize = 3;
}

/// Process-wide validation configuration. Loaded once, immutable thereafter,
/// safely shared across concurrent validations without locking.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Accepted file suffixes (lowercase, without the leading dot).
    pub allowed_extensions: BTreeSet<String>,
    /// Financial vocabulary per category. BTreeMap keeps scan order
    /// deterministic regardless of how the table was assembled.
    pub financial_keywords: BTreeMap<FinancialCategory, Vec<String>>,
    /// Red-flag vocabulary for personal / non-business content.
    pub non_financial_keywords: Vec<String>,
    /// Company-suffix words for cross-file company-reference detection.
    pub company_keywords: Vec<String>,
    pub min_financial_score: u32,
    pub red_flag_limit: usize,
    pub min_startup_consistency: f64,
    pub max_files_per_upload: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let mut financial_keywords = BTreeMap::new();
        for (category, terms) in [
            (FinancialCategory::BalanceSheet, BALANCE_SHEET_TERMS),
            (FinancialCategory::IncomeStatement, INCOME_STATEMENT_TERMS),
            (FinancialCategory::CashFlow, CASH_FLOW_TERMS),
            (FinancialCategory::CapTable, CAP_TABLE_TERMS),
            (FinancialCategory::FinancialProjections, FINANCIAL_PROJECTIONS_TERMS),
            (FinancialCategory::GeneralFinancial, GENERAL_FINANCIAL_TERMS),
        ] {
            financial_keywords.insert(category, terms.iter().map(|s| s.to_string()).collect());
        }

        Self {
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            financial_keywords,
            non_financial_keywords: NON_FINANCIAL_TERMS.iter().map(|s| s.to_string()).collect(),
            company_keywords: COMPANY_TERMS.iter().map(|s| s.to_string()).collect(),
            min_financial_score: thresholds::MIN_FINANCIAL_SCORE,
            red_flag_limit: thresholds::RED_FLAG_LIMIT,
            min_startup_consistency: thresholds::MIN_STARTUP_CONSISTENCY,
            max_files_per_upload: thresholds::MAX_FILES_PER_UPLOAD,
        }
    }
}

static SHARED: LazyLock<ValidationConfig> = LazyLock::new(|| {
    let config = ValidationConfig::default();
    config.assert_valid();
    config
});

impl ValidationConfig {
    /// The process-wide default configuration.
    pub fn shared() -> &'static ValidationConfig {
        &SHARED
    }

    /// Panic on configurations that could never validate anything sensibly.
    /// Called once at construction time by `Validator::new`.
    pub fn assert_valid(&self) {
        assert!(
            !self.allowed_extensions.is_empty(),
            "allowed_extensions must not be empty"
        );
        assert!(
            self.financial_keywords.values().any(|terms| !terms.is_empty()),
            "financial keyword tables must not all be empty"
        );
        assert!(self.min_financial_score > 0, "min_financial_score must be positive");
        assert!(
            (0.0..=1.0).contains(&self.min_startup_consistency),
            "min_startup_consistency must be within [0, 1]"
        );
        assert!(self.max_files_per_upload > 0, "max_files_per_upload must be positive");
    }

    /// Comma-separated list of accepted extensions, for user-facing messages.
    pub fn allowed_extensions_display(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
