//! JSON serialization of the aggregated table.
//!
//! The table is emitted as one pretty-printed UTF-8 JSON object keyed
//! by n-gram. Keys and document-id arrays are sorted, so the same
//! table always produces byte-identical output.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::pipeline::mode::Aggregation;

/// Convert the aggregated table into its serialized form, keyed in
/// sorted order.
pub fn to_sorted<M: Aggregation>(table: FxHashMap<String, M::Entry>) -> BTreeMap<String, M::Output> {
    table
        .into_iter()
        .map(|(ngram, entry)| (ngram, M::finish(entry)))
        .collect()
}

/// Serialize the aggregated table to `sink` as pretty-printed JSON.
pub fn write_json<M: Aggregation, W: Write>(
    table: FxHashMap<String, M::Entry>,
    sink: &mut W,
) -> Result<()> {
    let sorted = to_sorted::<M>(table);
    serde_json::to_writer_pretty(&mut *sink, &sorted)?;
    sink.flush()?;
    Ok(())
}

/// Serialize the aggregated table to a new file at `path`.
pub fn write_json_file<M: Aggregation, P: AsRef<Path>>(
    table: FxHashMap<String, M::Entry>,
    path: P,
) -> Result<()> {
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    write_json::<M, _>(table, &mut sink)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::pipeline::mode::{CountAggregation, DocumentSetAggregation};

    fn count_table() -> FxHashMap<String, u64> {
        let mut table = FxHashMap::default();
        table.insert("the cat".to_string(), 3);
        table.insert("cat sat".to_string(), 2);
        table.insert("cat ran".to_string(), 1);
        table
    }

    #[test]
    fn test_to_sorted_orders_keys() {
        let sorted = to_sorted::<CountAggregation>(count_table());
        let keys: Vec<&str> = sorted.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["cat ran", "cat sat", "the cat"]);
    }

    #[test]
    fn test_count_values_serialize_as_integers() {
        let mut sink = Vec::new();
        write_json::<CountAggregation, _>(count_table(), &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("\"the cat\": 3"));
        assert!(text.contains("\"cat ran\": 1"));
    }

    #[test]
    fn test_document_set_values_serialize_as_objects() {
        let mut table: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        let mut ids = FxHashSet::default();
        ids.insert("d2".to_string());
        ids.insert("d1".to_string());
        table.insert("cat sat".to_string(), ids);

        let mut sink = Vec::new();
        write_json::<DocumentSetAggregation, _>(table, &mut sink).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&sink).unwrap();
        assert_eq!(value["cat sat"]["count"], 2);
        assert_eq!(
            value["cat sat"]["documents"],
            serde_json::json!(["d1", "d2"])
        );
    }

    #[test]
    fn test_same_table_writes_identical_bytes() {
        let mut first = Vec::new();
        write_json::<CountAggregation, _>(count_table(), &mut first).unwrap();
        let mut second = Vec::new();
        write_json::<CountAggregation, _>(count_table(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_writes_empty_object() {
        let mut sink = Vec::new();
        write_json::<CountAggregation, _>(FxHashMap::default(), &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "{}");
    }

    #[test]
    fn test_write_json_file_round_trips() {
        let path = std::env::temp_dir().join("corpus_ngrams_write_json_file_test.json");
        write_json_file::<CountAggregation, _>(count_table(), &path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: std::collections::BTreeMap<String, u64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["cat sat"], 2);
        std::fs::remove_file(&path).unwrap();
    }
}
