pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod editor;
pub mod markup;
pub mod parser;
pub mod settings;

use std::collections::HashMap;

pub use checker::SpellChecker;
pub use config::Config;

/// Suggestion policy for a single spell-check pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Skip suggestion generation entirely.
    #[default]
    Fast,
    /// Compute the top suggestion once per distinct misspelled word.
    Slow,
}

/// Result of one classification pass over a document.
#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    /// Distinct misspelled words, in first-seen order.
    pub misspelled: Vec<String>,
    /// Top suggestion per misspelled word. Empty in fast mode.
    pub suggestions: HashMap<String, String>,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.misspelled.is_empty()
    }

    /// Suggestion to display for a word; empty string when none was computed.
    pub fn suggestion_for(&self, word: &str) -> &str {
        self.suggestions.get(word).map(String::as_str).unwrap_or("")
    }
}
