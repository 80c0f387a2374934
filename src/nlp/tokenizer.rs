//! Whitespace tokenization
//!
//! Splits a cleaned sentence into word tokens.

/// Split a sentence into word tokens on runs of whitespace.
///
/// An empty token sequence is valid; no n-gram can be formed from it.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}
