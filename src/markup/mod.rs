//! Marker injection and removal.
//!
//! An annotation wraps one word occurrence in two sentinel-delimited markup
//! runs: the opening run carries the error-styled span, the trailing run
//! carries the closing tag plus the suggestion span. The word itself sits
//! between the runs, so stripping every `⁅…⁆` run restores the document
//! exactly.

use crate::CheckOutcome;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Sentinel opening an injected markup run. U+2045 does not occur in prose.
pub const MARK_OPEN: char = '\u{2045}';
/// Sentinel closing an injected markup run.
pub const MARK_CLOSE: char = '\u{2046}';

const ERROR_STYLE: &str = "color:#c62828;text-decoration:underline wavy";
const HINT_STYLE: &str = "color:#2e7d32;font-size:smaller";

lazy_static! {
    // Non-greedy so adjacent runs never merge; (?s) because suggestions
    // could in principle carry a newline.
    static ref MARKED_RUN: Regex = Regex::new("(?s)\u{2045}.*?\u{2046}").unwrap();
}

/// Wrap the first whole-word occurrence of each misspelled word.
///
/// One pass over the whole content per word, in the outcome's first-seen
/// order. Words with no locatable occurrence (already annotated, or edited
/// away since classification) are skipped silently.
pub fn annotate(content: &str, outcome: &CheckOutcome) -> String {
    let mut doc = content.to_string();
    for word in &outcome.misspelled {
        doc = annotate_word(&doc, word, outcome.suggestion_for(word));
    }
    doc
}

/// Remove every sentinel-delimited run, restoring pre-annotation content.
pub fn strip(content: &str) -> String {
    MARKED_RUN.replace_all(content, "").into_owned()
}

fn annotate_word(content: &str, word: &str, suggestion: &str) -> String {
    // Whole-word, case-sensitive match. The boundary characters exclude
    // alphanumerics, hyphen, and apostrophe, which also keeps the pattern
    // from landing inside a tag name or attribute word. The match consumes
    // both boundaries, so they are captured and re-emitted.
    //
    // The class is ASCII while the tokenizer keeps Unicode alphanumerics,
    // so an accented letter counts as a boundary here: a word adjoining one
    // can be wrapped mid-token. Stripping still restores the document.
    let pattern = format!("([^A-Za-z0-9'-])({})([^A-Za-z0-9'-])", regex::escape(word));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };

    // Regex::replace rewrites only the first occurrence, which is the
    // annotation contract for each word.
    re.replace(content, |caps: &Captures| {
        format!(
            "{b1}{MARK_OPEN}<span style=\"{ERROR_STYLE}\">{MARK_CLOSE}{w}\
             {MARK_OPEN}</span><span style=\"{HINT_STYLE}\">{s}</span>{MARK_CLOSE}{b2}",
            b1 = &caps[1],
            w = &caps[2],
            s = suggestion,
            b2 = &caps[3],
        )
    })
    .into_owned()
}
