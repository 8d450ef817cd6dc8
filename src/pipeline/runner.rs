//! Validation entry point.
//!
//! Structural checks run first (batch size, extensions, empty payloads) and
//! reject before any extraction. Surviving files are analyzed concurrently,
//! one blocking worker per file, bounded by the upload cap. A barrier join
//! in input order precedes the cross-file verdict, which needs every
//! analysis to exist.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::ValidationConfig;
use crate::models::{FileAnalysis, ValidationResult};

use super::consistency;
use super::extraction;
use super::scoring::{self, classify, KeywordSets};
use super::verdict;
use super::UploadedFile;

/// The validation pipeline, holding the immutable configuration and the
/// keyword tables compiled from it. Cheap to share; safe to use from any
/// number of concurrent validations.
pub struct Validator {
    config: Arc<ValidationConfig>,
    keywords: Arc<KeywordSets>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl Validator {
    /// Build a validator. Panics on nonsensical configuration; that is a
    /// programming error and belongs at process startup, not per-request.
    pub fn new(config: ValidationConfig) -> Self {
        config.assert_valid();
        let keywords = Arc::new(KeywordSets::compile(&config));
        Self {
            config: Arc::new(config),
            keywords,
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a submission batch against the claimed startup name.
    ///
    /// `existing_file_count` is the number of documents the startup already
    /// has stored; it only affects batch-size messaging, never scoring.
    /// Always returns a complete `ValidationResult`; failures are data.
    pub async fn validate(
        &self,
        files: Vec<UploadedFile>,
        startup_name: &str,
        existing_file_count: usize,
    ) -> ValidationResult {
        let batch_id = Uuid::new_v4();
        tracing::info!(
            batch = %batch_id,
            files = files.len(),
            startup = startup_name,
            "validation started"
        );

        if let Some(rejected) = self.structural_reject(&files, existing_file_count) {
            tracing::info!(
                batch = %batch_id,
                errors = rejected.errors.len(),
                "batch rejected before extraction"
            );
            return rejected;
        }

        let mut handles = Vec::with_capacity(files.len());
        for file in files {
            let config = Arc::clone(&self.config);
            let keywords = Arc::clone(&self.keywords);
            let name = startup_name.to_string();
            let filename = file.filename.clone();
            let handle =
                tokio::task::spawn_blocking(move || analyze_file(&file, &name, &config, &keywords));
            handles.push((filename, handle));
        }

        // Barrier join in input order; a crashed worker degrades to an
        // extraction failure on that file instead of poisoning the batch.
        let mut analyses = Vec::with_capacity(handles.len());
        for (filename, handle) in handles {
            let analysis = match handle.await {
                Ok(analysis) => analysis,
                Err(e) => {
                    tracing::error!(batch = %batch_id, file = %filename, error = %e, "analysis worker failed");
                    FileAnalysis::extraction_failed(&filename)
                }
            };
            analyses.push(analysis);
        }

        let result = verdict::aggregate(analyses, startup_name, &self.config);
        tracing::info!(
            batch = %batch_id,
            accepted = result.accepted,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "validation finished"
        );
        result
    }

    /// Synchronous variant with identical semantics, for callers without a
    /// runtime. Workers run on scoped threads.
    pub fn validate_blocking(
        &self,
        files: Vec<UploadedFile>,
        startup_name: &str,
        existing_file_count: usize,
    ) -> ValidationResult {
        if let Some(rejected) = self.structural_reject(&files, existing_file_count) {
            return rejected;
        }

        let analyses: Vec<FileAnalysis> = std::thread::scope(|scope| {
            let handles: Vec<_> = files
                .iter()
                .map(|file| {
                    scope.spawn(move || analyze_file(file, startup_name, &self.config, &self.keywords))
                })
                .collect();
            handles
                .into_iter()
                .zip(files.iter())
                .map(|(handle, file)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| FileAnalysis::extraction_failed(&file.filename))
                })
                .collect()
        });

        verdict::aggregate(analyses, startup_name, &self.config)
    }

    /// Structural validation: conditions that make the upload invalid before
    /// looking at any content. These never produce a `FileAnalysis`.
    fn structural_reject(
        &self,
        files: &[UploadedFile],
        existing_file_count: usize,
    ) -> Option<ValidationResult> {
        let mut errors = Vec::new();

        if files.is_empty() {
            return Some(ValidationResult::rejected(vec![
                "No files were uploaded".to_string(),
            ]));
        }

        let cap = self.config.max_files_per_upload;
        if existing_file_count + files.len() > cap {
            if existing_file_count > 0 {
                errors.push(format!(
                    "Too many files: this startup already has {existing_file_count} stored \
                     document(s) and {} more were uploaded, exceeding the limit of {cap} per startup",
                    files.len()
                ));
            } else {
                errors.push(format!(
                    "Too many files uploaded: {} exceeds the limit of {cap} per submission",
                    files.len()
                ));
            }
        }

        for file in files {
            if file.filename.trim().is_empty() {
                errors.push("A file with an empty filename was uploaded".to_string());
                continue;
            }
            let allowed = file
                .extension()
                .is_some_and(|ext| self.config.allowed_extensions.contains(&ext));
            if !allowed {
                errors.push(format!(
                    "File '{}' has an unsupported format. Allowed formats: {}",
                    file.filename,
                    self.config.allowed_extensions_display()
                ));
                continue;
            }
            if file.bytes.is_empty() {
                errors.push(format!("File '{}' is empty", file.filename));
            }
        }

        if errors.is_empty() {
            None
        } else {
            Some(ValidationResult::rejected(errors))
        }
    }
}

/// Analyze one file: extract, score, and check name consistency. Extraction
/// failure is recovered into an `unknown` analysis here; the aggregator
/// turns it into a blocking error later.
fn analyze_file(
    file: &UploadedFile,
    startup_name: &str,
    config: &ValidationConfig,
    keywords: &KeywordSets,
) -> FileAnalysis {
    let text = match extraction::extract_text(file) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(file = %file.filename, error = %e, "extraction failed");
            return FileAnalysis::extraction_failed(&file.filename);
        }
    };

    let signals = scoring::scan_text(&text, keywords);
    let financial_score = signals.financial_score();
    let detected_type = classify(true, financial_score, signals.red_flags.len(), config);
    let startup_score = consistency::startup_score(startup_name, &text);

    let analysis = FileAnalysis {
        filename: file.filename.clone(),
        is_financial: financial_score >= config.min_financial_score,
        detected_type,
        financial_score,
        startup_consistent: startup_score >= config.min_startup_consistency,
        startup_score,
        red_flags: signals.red_flags,
        extracted_text: text,
    };
    tracing::debug!(
        file = %analysis.filename,
        detected = analysis.detected_type.as_str(),
        financial_score,
        startup_score,
        "file analyzed"
    );
    analysis
}
