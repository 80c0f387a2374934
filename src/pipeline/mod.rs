//! Extraction pipeline
//!
//! [`NgramExtractor`] composes segmentation, tokenization, n-gram
//! generation, and parallel aggregation behind the explicit
//! configuration surface, and hands the final table to the JSON
//! serializer.

pub mod aggregator;
pub mod mode;
pub mod processor;

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{DocumentFailure, Result};
use crate::output::json;
use crate::pipeline::aggregator::{aggregate, AggregateOutcome};
use crate::pipeline::mode::{Aggregation, CountAggregation, DocumentSetAggregation};
use crate::types::{AggregationKind, Document, ExtractorConfig};

/// Caller-facing summary of a completed extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Number of input documents.
    pub documents: usize,
    /// Number of distinct n-grams in the aggregated table.
    pub distinct_ngrams: usize,
    /// Documents whose processing failed and contributed nothing.
    pub failures: Vec<DocumentFailure>,
}

/// Corpus-to-n-gram extraction pipeline.
///
/// Construction validates the configured range, so a run never starts
/// with an unusable range.
#[derive(Debug, Clone)]
pub struct NgramExtractor {
    config: ExtractorConfig,
}

impl NgramExtractor {
    /// Create an extractor, rejecting an unusable n-gram range up
    /// front.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this extractor runs with.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Aggregate occurrence counts across `docs`.
    pub fn extract_counts(&self, docs: &[Document]) -> Result<AggregateOutcome<CountAggregation>> {
        aggregate::<CountAggregation>(docs, &self.config.range, self.config.num_threads)
    }

    /// Aggregate distinct-document sets across `docs`.
    pub fn extract_document_sets(
        &self,
        docs: &[Document],
    ) -> Result<AggregateOutcome<DocumentSetAggregation>> {
        aggregate::<DocumentSetAggregation>(docs, &self.config.range, self.config.num_threads)
    }

    /// Run the configured mode over `docs` and write the aggregated
    /// table to `sink` as JSON.
    ///
    /// Aggregation completes before the write is attempted, so a sink
    /// failure never discards computed results silently; it surfaces
    /// as the returned error.
    pub fn run_to_writer<W: Write>(
        &self,
        docs: &[Document],
        sink: &mut W,
    ) -> Result<ExtractionReport> {
        match self.config.mode {
            AggregationKind::Count => Self::finish(self.extract_counts(docs)?, docs.len(), sink),
            AggregationKind::DocumentSet => {
                Self::finish(self.extract_document_sets(docs)?, docs.len(), sink)
            }
        }
    }

    /// Run the configured mode over `docs` and write the aggregated
    /// table to a new file at `path`.
    pub fn run_to_file(&self, docs: &[Document], path: impl AsRef<Path>) -> Result<ExtractionReport> {
        let file = std::fs::File::create(path)?;
        let mut sink = std::io::BufWriter::new(file);
        self.run_to_writer(docs, &mut sink)
    }

    fn finish<M: Aggregation, W: Write>(
        outcome: AggregateOutcome<M>,
        documents: usize,
        sink: &mut W,
    ) -> Result<ExtractionReport> {
        let report = ExtractionReport {
            documents,
            distinct_ngrams: outcome.table.len(),
            failures: outcome.failures,
        };
        json::write_json::<M, W>(outcome.table, sink)?;
        info!(
            documents = report.documents,
            ngrams = report.distinct_ngrams,
            failed = report.failures.len(),
            "extraction complete"
        );
        Ok(report)
    }
}
