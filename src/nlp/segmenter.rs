//! Sentence segmentation
//!
//! Splits raw document text into cleaned, lowercased sentences. A
//! sentence ends at a `.` or `?` directly followed by one whitespace
//! character, unless the boundary looks like an abbreviation ("U.S.")
//! or an initial ("Mr."). The heuristic is approximate; false splits
//! and non-splits outside these rules are accepted behavior.

use once_cell::sync::Lazy;
use regex::Regex;

// Candidate boundary: a `.` or `?` directly followed by a single
// whitespace character. The abbreviation/initial exclusions need
// lookbehind, which this engine lacks, so they are checked separately
// against the characters preceding each candidate.
static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.?]\s").expect("boundary pattern must compile"));

/// Split `text` into cleaned, lowercased sentences.
///
/// Each raw sentence is stripped of every character that is not an
/// ASCII letter, digit, or space; sentences that become empty are
/// discarded and the survivors are lowercased. Deterministic: the same
/// text always yields the same sentence sequence.
pub fn segment(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .map(clean)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_lowercase())
        .collect()
}

/// Split `text` at sentence boundaries without cleaning.
///
/// The boundary character stays with the left sentence; the single
/// whitespace character that follows it is consumed. The trailing
/// remainder is always returned, even when empty.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for m in BOUNDARY.find_iter(text) {
        // The boundary char is ASCII, so the whitespace starts one
        // byte after the match start.
        let boundary_end = m.start() + 1;
        if boundary_excluded(&text[..boundary_end]) {
            continue;
        }
        sentences.push(&text[last_end..boundary_end]);
        last_end = m.end();
    }
    sentences.push(&text[last_end..]);
    sentences
}

/// Whether the candidate boundary ending `prefix` is suppressed.
///
/// Two fixed-width exclusion windows, checked over the characters that
/// precede the boundary position:
/// - abbreviation-like ("U.S."): word, `.`, word, then the boundary
///   character;
/// - initials ("Mr."): ASCII uppercase, ASCII lowercase, then a `.`
///   boundary character.
///
/// A prefix shorter than a window never matches that window.
fn boundary_excluded(prefix: &str) -> bool {
    let mut rev = prefix.chars().rev();
    let c1 = match rev.next() {
        Some(c) => c,
        None => return false,
    };
    let c2 = rev.next();
    let c3 = rev.next();
    let c4 = rev.next();

    if let (Some(c2), Some(c3), Some(c4)) = (c2, c3, c4) {
        if is_word(c4) && c3 == '.' && is_word(c2) {
            return true;
        }
    }
    if let (Some(c2), Some(c3)) = (c2, c3) {
        if c3.is_ascii_uppercase() && c2.is_ascii_lowercase() && c1 == '.' {
            return true;
        }
    }
    false
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip every character that is not an ASCII letter, digit, or space.
fn clean(sentence: &str) -> String {
    sentence
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_period_before_space() {
        assert_eq!(
            split_sentences("The cat sat. The cat ran."),
            vec!["The cat sat.", "The cat ran."]
        );
    }

    #[test]
    fn test_splits_on_question_mark() {
        assert_eq!(
            split_sentences("He said no? Yes."),
            vec!["He said no?", "Yes."]
        );
    }

    #[test]
    fn test_abbreviation_is_not_split() {
        assert_eq!(
            split_sentences("It was the U.S. Army."),
            vec!["It was the U.S. Army."]
        );
        assert_eq!(split_sentences("e.g. example"), vec!["e.g. example"]);
    }

    #[test]
    fn test_initials_are_not_split() {
        assert_eq!(split_sentences("Mr. Smith"), vec!["Mr. Smith"]);
    }

    #[test]
    fn test_all_caps_before_period_still_splits() {
        assert_eq!(split_sentences("MR. Smith"), vec!["MR.", "Smith"]);
    }

    #[test]
    fn test_short_prefix_splits() {
        // Too few preceding characters for either exclusion window.
        assert_eq!(split_sentences("a. b"), vec!["a.", "b"]);
    }

    #[test]
    fn test_no_split_without_whitespace() {
        assert_eq!(split_sentences("question?next"), vec!["question?next"]);
    }

    #[test]
    fn test_tab_is_a_boundary_whitespace() {
        assert_eq!(split_sentences("tab.\tnext"), vec!["tab.", "next"]);
    }

    #[test]
    fn test_only_one_whitespace_is_consumed() {
        assert_eq!(split_sentences("end.  two"), vec!["end.", " two"]);
    }

    #[test]
    fn test_trailing_remainder_is_kept() {
        assert_eq!(split_sentences("No trailing. "), vec!["No trailing.", ""]);
    }

    #[test]
    fn test_segment_cleans_and_lowercases() {
        assert_eq!(
            segment("The cat sat. The cat ran."),
            vec!["the cat sat", "the cat ran"]
        );
    }

    #[test]
    fn test_segment_strips_non_ascii_and_punctuation() {
        assert_eq!(segment("Hello, W\u{f6}rld! 42: ok"), vec!["hello wrld 42 ok"]);
    }

    #[test]
    fn test_segment_drops_sentences_that_clean_to_empty() {
        assert_eq!(segment("?!?..."), Vec::<String>::new());
        assert_eq!(segment(""), Vec::<String>::new());
    }

    #[test]
    fn test_segment_keeps_digits() {
        assert_eq!(segment("Version 3 shipped."), vec!["version 3 shipped"]);
    }

    #[test]
    fn test_segment_is_idempotent_over_reruns() {
        let text = "Mr. Smith met the U.S. Army. It went well? Mostly.";
        assert_eq!(segment(text), segment(text));
    }

    #[test]
    fn test_digit_abbreviation_window_applies() {
        // Word chars include digits: "v1.2." matches the
        // abbreviation-like window and does not split.
        assert_eq!(split_sentences("v1.2. next"), vec!["v1.2. next"]);
    }

    #[test]
    fn test_multiline_text() {
        assert_eq!(
            split_sentences("First line.\nSecond line."),
            vec!["First line.", "Second line."]
        );
    }
}
