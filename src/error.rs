//! Error types for corpus n-gram extraction.
//!
//! Fatal errors abort a run ([`ExtractError`]); per-document failures
//! are isolated and surfaced alongside the aggregated table
//! ([`DocumentFailure`]).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Top-level error type for extraction runs.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The configured n-gram range is unusable. Raised before any
    /// document is processed.
    #[error("invalid n-gram range [{n_low}, {n_high}]: requires 1 <= n_low <= n_high")]
    InvalidRange { n_low: usize, n_high: usize },

    /// The bounded worker pool could not be constructed.
    #[error("worker pool construction failed: {0}")]
    WorkerPool(String),

    /// Writing the aggregated table to the output sink failed.
    #[error("output sink error: {0}")]
    Sink(#[from] std::io::Error),

    /// Serializing the aggregated table failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// The pipeline stage in which a per-document failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Sentence segmentation of the document text.
    Segment,
    /// Tokenization and n-gram folding over the segmented sentences.
    Extract,
}

impl Stage {
    /// Returns the user-facing stage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Extract => "extract",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure isolated to a single document.
///
/// Per-document processing is independent, so one bad document never
/// aborts the run; its contribution is treated as empty and the
/// failure is reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    /// Identifier of the document that failed.
    pub id: String,
    /// Stage in which the failure occurred.
    pub stage: Stage,
    /// Failure description.
    pub message: String,
}

impl DocumentFailure {
    /// Create a failure record for the given document and stage.
    pub fn new(id: impl Into<String>, stage: Stage, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "document {} failed during {}: {}",
            self.id, self.stage, self.message
        )
    }
}
