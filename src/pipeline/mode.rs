//! Aggregation mode strategies.
//!
//! The two corpus statistics (occurrence counts and distinct-document
//! sets) share the whole extraction pipeline; only the fold rules
//! differ. Each mode is a zero-sized strategy type implementing
//! [`Aggregation`], statically dispatched through the generic
//! aggregation path.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::types::DocumentSetEntry;

/// Fold rules for one aggregation mode.
///
/// `record` folds one n-gram occurrence into a document-local map,
/// `combine` folds a completed per-document map into the corpus table,
/// and `finish` converts a table entry into its serialized shape.
///
/// # Contract
///
/// `combine` must be associative and commutative over documents, so
/// the final table does not depend on worker scheduling or the degree
/// of parallelism. It must neither drop nor invent keys: the table's
/// key set after combining is the union of the per-document key sets.
pub trait Aggregation {
    /// Per-document contribution for one n-gram.
    type Local: Send + fmt::Debug;
    /// Corpus-wide table entry for one n-gram.
    type Entry: Send + fmt::Debug;
    /// JSON-facing value for one n-gram.
    type Output: Serialize;

    /// Fold one n-gram occurrence into the document-local map.
    fn record(local: &mut FxHashMap<String, Self::Local>, ngram: String);

    /// Fold a completed per-document map into the corpus table.
    fn combine(
        table: &mut FxHashMap<String, Self::Entry>,
        doc_id: &str,
        local: FxHashMap<String, Self::Local>,
    );

    /// Convert a table entry into its serialized shape.
    fn finish(entry: Self::Entry) -> Self::Output;
}

/// Occurrence counting: per-document counts sum across the corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountAggregation;

impl Aggregation for CountAggregation {
    type Local = u64;
    type Entry = u64;
    type Output = u64;

    fn record(local: &mut FxHashMap<String, u64>, ngram: String) {
        *local.entry(ngram).or_insert(0) += 1;
    }

    fn combine(table: &mut FxHashMap<String, u64>, _doc_id: &str, local: FxHashMap<String, u64>) {
        for (ngram, count) in local {
            *table.entry(ngram).or_insert(0) += count;
        }
    }

    fn finish(entry: u64) -> u64 {
        entry
    }
}

/// Document presence: each n-gram maps to the set of distinct
/// documents containing it. The serialized count is the set's size,
/// so `count == documents.len()` holds even when one document id
/// appears more than once in the corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSetAggregation;

impl Aggregation for DocumentSetAggregation {
    type Local = ();
    type Entry = FxHashSet<String>;
    type Output = DocumentSetEntry;

    fn record(local: &mut FxHashMap<String, ()>, ngram: String) {
        local.entry(ngram).or_insert(());
    }

    fn combine(
        table: &mut FxHashMap<String, FxHashSet<String>>,
        doc_id: &str,
        local: FxHashMap<String, ()>,
    ) {
        for (ngram, ()) in local {
            table.entry(ngram).or_default().insert(doc_id.to_string());
        }
    }

    fn finish(entry: FxHashSet<String>) -> DocumentSetEntry {
        let mut documents: Vec<String> = entry.into_iter().collect();
        documents.sort_unstable();
        DocumentSetEntry {
            count: documents.len(),
            documents,
        }
    }
}
