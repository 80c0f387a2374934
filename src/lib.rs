//! Parallel corpus-to-n-gram extraction.
//!
//! Segments each document of a corpus into cleaned, lowercased
//! sentences, tokenizes on whitespace, generates contiguous word
//! n-grams over a configurable length range, and aggregates n-gram
//! statistics corpus-wide into one JSON table. Two aggregation modes
//! are supported: occurrence counts, and the set of distinct
//! documents containing each n-gram.
//!
//! Documents are processed in parallel; per-document results are
//! merged by a single writer, so the final table is identical for any
//! worker count. A document whose processing fails is skipped and
//! reported; it never aborts the run.
//!
//! # Quick start
//!
//! ```
//! use corpus_ngrams::{Document, ExtractorConfig, NgramExtractor};
//!
//! let docs = vec![
//!     Document::new("d1", "The cat sat. The cat ran."),
//!     Document::new("d2", "The cat sat."),
//! ];
//!
//! let extractor = NgramExtractor::new(ExtractorConfig::new().with_range(2, 2)).unwrap();
//! let outcome = extractor.extract_counts(&docs).unwrap();
//! assert_eq!(outcome.table.get("the cat"), Some(&3));
//! assert_eq!(outcome.table.get("cat sat"), Some(&2));
//! ```
//!
//! Writing the aggregated table to a sink:
//!
//! ```
//! use corpus_ngrams::{AggregationKind, Document, ExtractorConfig, NgramExtractor};
//!
//! let docs = vec![Document::new("d1", "The cat sat.")];
//! let config = ExtractorConfig::new()
//!     .with_range(2, 2)
//!     .with_mode(AggregationKind::DocumentSet);
//!
//! let extractor = NgramExtractor::new(config).unwrap();
//! let mut sink = Vec::new();
//! let report = extractor.run_to_writer(&docs, &mut sink).unwrap();
//! assert_eq!(report.documents, 1);
//! assert!(report.failures.is_empty());
//! ```

pub mod error;
pub mod ngram;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod types;

pub use error::{DocumentFailure, ExtractError, Result, Stage};
pub use pipeline::aggregator::AggregateOutcome;
pub use pipeline::mode::{Aggregation, CountAggregation, DocumentSetAggregation};
pub use pipeline::{ExtractionReport, NgramExtractor};
pub use types::{AggregationKind, Document, DocumentSetEntry, ExtractorConfig, NgramRange};
