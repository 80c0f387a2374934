//! Per-document processing
//!
//! Composes segmentation, tokenization, and n-gram generation for one
//! document, folding every n-gram into a document-local statistic map.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rustc_hash::FxHashMap;

use crate::error::{DocumentFailure, Stage};
use crate::ngram::generator::for_each_ngram;
use crate::nlp::{segmenter, tokenizer};
use crate::pipeline::mode::Aggregation;
use crate::types::{Document, NgramRange};

/// Produce the document-local statistic map for one document.
///
/// Pure function of its inputs. A document with empty text or no
/// extractable sentences yields an empty map.
pub fn process_document<M: Aggregation>(
    doc: &Document,
    range: &NgramRange,
) -> FxHashMap<String, M::Local> {
    fold_sentences::<M>(&segmenter::segment(&doc.text), range)
}

/// Like [`process_document`], but converts a panic in either stage
/// into a [`DocumentFailure`] naming the document and the failing
/// stage.
pub fn try_process_document<M: Aggregation>(
    doc: &Document,
    range: &NgramRange,
) -> Result<FxHashMap<String, M::Local>, DocumentFailure> {
    let sentences = catch_unwind(AssertUnwindSafe(|| segmenter::segment(&doc.text)))
        .map_err(|payload| DocumentFailure::new(&doc.id, Stage::Segment, panic_message(payload)))?;

    catch_unwind(AssertUnwindSafe(|| fold_sentences::<M>(&sentences, range)))
        .map_err(|payload| DocumentFailure::new(&doc.id, Stage::Extract, panic_message(payload)))
}

fn fold_sentences<M: Aggregation>(
    sentences: &[String],
    range: &NgramRange,
) -> FxHashMap<String, M::Local> {
    let mut local = FxHashMap::default();
    for sentence in sentences {
        let tokens = tokenizer::tokenize(sentence);
        for_each_ngram(&tokens, range, |ngram| M::record(&mut local, ngram));
    }
    local
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
