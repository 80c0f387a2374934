//! Output serialization
//!
//! Converts the aggregated table into a deterministic JSON-compatible
//! structure and writes it to a sink.

pub mod json;
