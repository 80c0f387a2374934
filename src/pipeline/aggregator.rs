//! Corpus aggregation
//!
//! Fans per-document processing out across a rayon worker pool and
//! merges the per-document maps into one corpus table. Workers share
//! no mutable state; the merge is performed by a single writer after
//! the parallel phase, so combination can never race.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{DocumentFailure, ExtractError, Result};
use crate::pipeline::mode::Aggregation;
use crate::pipeline::processor::try_process_document;
use crate::types::{Document, NgramRange};

/// Aggregated corpus table plus the per-document failures that were
/// isolated during the run.
#[derive(Debug)]
pub struct AggregateOutcome<M: Aggregation> {
    /// n-gram -> combined statistic across the whole corpus.
    pub table: FxHashMap<String, M::Entry>,
    /// Documents whose processing failed; each contributed nothing.
    pub failures: Vec<DocumentFailure>,
}

/// Process every document in parallel and combine the results.
///
/// One independent task is dispatched per document. The combination
/// rules are associative and commutative, and the merge folds
/// per-document maps in corpus order, so the result is identical for
/// any worker count, including sequential execution.
///
/// `num_threads` bounds the worker pool; `None` uses the available
/// hardware concurrency.
pub fn aggregate<M: Aggregation>(
    docs: &[Document],
    range: &NgramRange,
    num_threads: Option<usize>,
) -> Result<AggregateOutcome<M>> {
    range.validate()?;
    match num_threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ExtractError::WorkerPool(e.to_string()))?;
            Ok(pool.install(|| aggregate_in_pool::<M>(docs, range)))
        }
        None => Ok(aggregate_in_pool::<M>(docs, range)),
    }
}

fn aggregate_in_pool<M: Aggregation>(docs: &[Document], range: &NgramRange) -> AggregateOutcome<M> {
    // Map phase: one task per document, no shared state.
    let partials: Vec<std::result::Result<FxHashMap<String, M::Local>, DocumentFailure>> = docs
        .par_iter()
        .map(|doc| try_process_document::<M>(doc, range))
        .collect();

    // Reduce phase: a single writer folds the per-document maps, in
    // corpus order.
    let mut table: FxHashMap<String, M::Entry> = FxHashMap::default();
    let mut failures = Vec::new();
    for (doc, partial) in docs.iter().zip(partials) {
        match partial {
            Ok(local) => M::combine(&mut table, &doc.id, local),
            Err(failure) => {
                warn!(
                    document = %failure.id,
                    stage = %failure.stage,
                    "skipping document: {}", failure.message
                );
                failures.push(failure);
            }
        }
    }

    debug!(
        documents = docs.len(),
        ngrams = table.len(),
        failed = failures.len(),
        "aggregation complete"
    );
    AggregateOutcome { table, failures }
}
