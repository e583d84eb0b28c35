pub mod compound;
pub mod dictionary;
pub mod suggestions;

use crate::editor::Editor;
use crate::{markup, parser, CheckMode, CheckOutcome, Config};
use anyhow::Result;
use dictionary::Dictionary;
use std::collections::HashSet;

/// Classifies document tokens and drives annotation through the editor.
pub struct SpellChecker {
    dictionary: Dictionary,
    max_suggestions: usize,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = Dictionary::load_from_path(&config.dictionary_path()?)?;
        Ok(Self {
            dictionary,
            max_suggestions: config.max_suggestions,
        })
    }

    /// Build a checker over an existing dictionary, bypassing configuration.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            max_suggestions: 5,
        }
    }

    /// Add user words as always-valid entries for this checker's lifetime.
    pub fn augment<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary.augment(words);
    }

    /// One classification pass: build the deduplicated misspelled set, and
    /// in slow mode compute the top suggestion once per distinct word.
    pub fn classify(&self, tokens: &[String], mode: CheckMode) -> CheckOutcome {
        let mut outcome = CheckOutcome::default();
        let mut seen = HashSet::new();

        for token in tokens {
            if self.dictionary.check_word(token) {
                continue;
            }
            if compound::valid_by_composition(token, |part| self.dictionary.check_word(part)) {
                continue;
            }
            if seen.insert(token.clone()) {
                if mode == CheckMode::Slow {
                    let top = suggestions::generate(token, &self.dictionary, self.max_suggestions)
                        .into_iter()
                        .next()
                        .unwrap_or_default();
                    outcome.suggestions.insert(token.clone(), top);
                }
                outcome.misspelled.push(token.clone());
            }
        }

        outcome
    }

    /// Full spell-check run: tokenize the current content, classify, inject
    /// markers, and commit the annotated document back in one set.
    pub fn check_document(&self, editor: &mut dyn Editor, mode: CheckMode) -> CheckOutcome {
        let content = editor.content();
        let tokens = parser::tokenize(&content);
        let outcome = self.classify(&tokens, mode);

        if !outcome.is_clean() {
            editor.set_content(&markup::annotate(&content, &outcome));
        }

        outcome
    }

    /// Remove every annotation marker from the document and commit.
    pub fn clear_annotations(&self, editor: &mut dyn Editor) {
        let stripped = markup::strip(&editor.content());
        editor.set_content(&stripped);
    }

    /// Ranked suggestions for a single word.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(word, &self.dictionary, self.max_suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::HtmlBuffer;

    fn checker(words: &[&str]) -> SpellChecker {
        SpellChecker::with_dictionary(Dictionary::from_words(words).unwrap())
    }

    #[test]
    fn test_classify_deduplicates() {
        let checker = checker(&["is"]);
        let tokens: Vec<String> = "wrng is wrng wrng wrng wrng"
            .split_whitespace()
            .map(String::from)
            .collect();

        let outcome = checker.classify(&tokens, CheckMode::Fast);
        assert_eq!(outcome.misspelled, vec!["wrng"]);
    }

    #[test]
    fn test_fast_mode_never_populates_suggestions() {
        let checker = checker(&["fine"]);
        let outcome = checker.classify(&["fyne".to_string()], CheckMode::Fast);
        assert_eq!(outcome.misspelled, vec!["fyne"]);
        assert!(outcome.suggestions.is_empty());
        assert_eq!(outcome.suggestion_for("fyne"), "");
    }

    #[test]
    fn test_slow_mode_populates_one_suggestion_per_distinct_word() {
        let checker = checker(&["fine"]);
        let tokens = vec!["fyne".to_string(), "fyne".to_string()];
        let outcome = checker.classify(&tokens, CheckMode::Slow);
        assert_eq!(outcome.misspelled, vec!["fyne"]);
        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestion_for("fyne"), "fine");
    }

    #[test]
    fn test_compound_fallback_accepts_composed_words() {
        let checker = checker(&["well", "known"]);
        let tokens = vec!["well-known".to_string()];
        assert!(checker.classify(&tokens, CheckMode::Fast).is_clean());
    }

    #[test]
    fn test_compound_fallback_rejects_partial_matches() {
        let checker = checker(&["well"]);
        let outcome = checker.classify(&["well-knwn".to_string()], CheckMode::Fast);
        assert_eq!(outcome.misspelled, vec!["well-knwn"]);
    }

    #[test]
    fn test_augmented_word_never_misspelled() {
        let mut checker = checker(&["is"]);
        checker.augment(["Ayaka"]);
        let outcome = checker.classify(&["Ayaka".to_string()], CheckMode::Fast);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_check_document_end_to_end() {
        let checker = checker(&["is"]);
        let mut editor = HtmlBuffer::new("<p>Ths is fyne.</p>");

        let outcome = checker.check_document(&mut editor, CheckMode::Fast);
        assert_eq!(outcome.misspelled, vec!["Ths", "fyne"]);

        let annotated = editor.content();
        assert_ne!(annotated, "<p>Ths is fyne.</p>");
        assert_eq!(annotated.matches(markup::MARK_OPEN).count(), 4);

        checker.clear_annotations(&mut editor);
        assert_eq!(editor.content(), "<p>Ths is fyne.</p>");
    }

    #[test]
    fn test_empty_document_is_a_noop() {
        let checker = checker(&["is"]);
        let mut editor = HtmlBuffer::new("<br/>");

        let outcome = checker.check_document(&mut editor, CheckMode::Slow);
        assert!(outcome.is_clean());
        assert_eq!(editor.content(), "<br/>");
    }
}
