//! Core types shared across the pipeline.
//!
//! Input records, the n-gram length range, the aggregation mode
//! selector, and the explicit configuration surface for a run.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

/// One unit of input text with a stable identifier.
///
/// Documents are read-only inside the pipeline and are not retained in
/// the output; only their ids appear there (in document-set mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, unique per document.
    pub id: String,
    /// Raw document text.
    pub text: String,
}

impl Document {
    /// Create a document from an id and its raw text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Inclusive n-gram length range `[n_low, n_high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramRange {
    /// Shortest n-gram length, at least 1.
    pub n_low: usize,
    /// Longest n-gram length, at least `n_low`.
    pub n_high: usize,
}

impl NgramRange {
    /// Create a validated range.
    pub fn new(n_low: usize, n_high: usize) -> Result<Self> {
        let range = Self { n_low, n_high };
        range.validate()?;
        Ok(range)
    }

    /// Check the range invariant `1 <= n_low <= n_high`.
    pub fn validate(&self) -> Result<()> {
        if self.n_low < 1 || self.n_low > self.n_high {
            return Err(ExtractError::InvalidRange {
                n_low: self.n_low,
                n_high: self.n_high,
            });
        }
        Ok(())
    }

    /// Iterate the lengths covered by this range.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.n_low..=self.n_high
    }
}

impl Default for NgramRange {
    fn default() -> Self {
        Self { n_low: 2, n_high: 5 }
    }
}

/// The rule for combining per-document n-gram contributions into a
/// corpus-wide statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationKind {
    /// Sum occurrence counts across all documents.
    Count,
    /// Collect the set of distinct documents containing each n-gram.
    DocumentSet,
}

impl AggregationKind {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::DocumentSet => "document_set",
        }
    }
}

impl Default for AggregationKind {
    fn default() -> Self {
        Self::Count
    }
}

/// Serialized document-set statistic for one n-gram.
///
/// `count` always equals `documents.len()`; the vector is sorted and
/// contains no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSetEntry {
    /// Number of distinct documents containing the n-gram.
    pub count: usize,
    /// Ids of those documents, sorted.
    pub documents: Vec<String>,
}

/// Explicit configuration surface for an extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// N-gram length range, default `[2, 5]`.
    #[serde(default)]
    pub range: NgramRange,

    /// Aggregation mode, default `count`.
    #[serde(default)]
    pub mode: AggregationKind,

    /// Worker count for document processing. `None` uses the available
    /// hardware concurrency.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

impl ExtractorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the n-gram length range.
    pub fn with_range(mut self, n_low: usize, n_high: usize) -> Self {
        self.range = NgramRange { n_low, n_high };
        self
    }

    /// Set the aggregation mode.
    pub fn with_mode(mut self, mode: AggregationKind) -> Self {
        self.mode = mode;
        self
    }

    /// Bound the worker count.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        self.range.validate()
    }
}
