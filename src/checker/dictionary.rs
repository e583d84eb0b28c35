use anyhow::{Context, Result};
use fst::{Automaton, IntoStreamer, Set, SetBuilder, Streamer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

/// Base dictionary plus the per-invocation augmentation table.
///
/// The base set answers fuzzy lookups (prefix streams for suggestions);
/// augmented words are exact-match overrides only and never feed into
/// suggestion generation.
pub struct Dictionary {
    set: Set<Vec<u8>>,
    augmented: HashSet<String>,
}

impl Dictionary {
    /// Load the compiled dictionary from its resource location.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let reader = BufReader::new(file);
        let set = Set::new(reader.bytes().collect::<Result<Vec<_>, _>>()?)
            .context("Failed to parse dictionary")?;

        Ok(Self {
            set,
            augmented: HashSet::new(),
        })
    }

    /// Build an in-memory dictionary from a word list. Used by tests and by
    /// the resource manager before writing the compiled set to disk.
    pub fn from_words(words: &[&str]) -> Result<Self> {
        let mut sorted: Vec<&str> = words.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut builder = SetBuilder::memory();
        for word in sorted {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }
        let bytes = builder.into_inner().context("Failed to finalize dictionary")?;

        Ok(Self {
            set: Set::new(bytes).context("Failed to reopen built dictionary")?,
            augmented: HashSet::new(),
        })
    }

    /// Add user words as always-valid entries. Exact matches only; lives for
    /// this adapter instance. Persistence is a separate settings save.
    pub fn augment<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.augmented.extend(words.into_iter().map(Into::into));
    }

    /// Whether a word is acceptable: augmented entries win, then the base
    /// set as-is, then its lowercase form (compiled sets store lowercase).
    pub fn check_word(&self, word: &str) -> bool {
        if self.augmented.contains(word) {
            return true;
        }
        self.in_base_set(word)
    }

    /// Base-set membership, ignoring augmentation. Suggestion candidates
    /// come from here so user words are never proposed as corrections.
    pub fn in_base_set(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes()) || self.set.contains(word.to_lowercase().as_bytes())
    }

    /// Base-set words sharing a prefix, for suggestion candidates.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    /// Every base-set word. Expensive; the suggestion engine only reaches
    /// for it on very short inputs.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut stream = self.set.stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                words.push(word);
            }
        }

        words
    }

    /// Compile a word list into an fst set on disk.
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted_words = words.to_vec();
        sorted_words.sort();
        sorted_words.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer).context("Failed to create FST builder")?;

        for word in sorted_words {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");

        let words = vec!["hello".to_string(), "world".to_string()];
        Dictionary::build_from_words(&words, &dict_path).unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert!(dict.check_word("hello"));
        assert!(dict.check_word("world"));
        assert!(!dict.check_word("notfound"));
    }

    #[test]
    fn test_lowercase_fallback() {
        let dict = Dictionary::from_words(&["hello"]).unwrap();
        assert!(dict.check_word("Hello"));
        assert!(dict.check_word("HELLO"));
    }

    #[test]
    fn test_augmented_words_are_exact_match_only() {
        let mut dict = Dictionary::from_words(&["is"]).unwrap();
        assert!(!dict.check_word("Ayaka"));

        dict.augment(["Ayaka"]);
        assert!(dict.check_word("Ayaka"));
        // No case folding and no fuzzy matching for augmented entries.
        assert!(!dict.check_word("ayaka"));
        assert!(!dict.check_word("Ayakaa"));
    }

    #[test]
    fn test_augmentation_does_not_leak_into_base_set() {
        let mut dict = Dictionary::from_words(&["alpha", "alert"]).unwrap();
        dict.augment(["alchemy"]);
        assert!(!dict.words_with_prefix("al").contains(&"alchemy".to_string()));
    }
}
