use crate::checker::dictionary::Dictionary;

/// Generate ranked spelling suggestions, cheapest strategy first.
pub fn generate(word: &str, dictionary: &Dictionary, max_suggestions: usize) -> Vec<String> {
    let word = word.to_lowercase();
    let mut suggestions = Vec::new();

    // 1. Prefix neighborhood, ranked by edit distance.
    if word.chars().count() >= 3 {
        let mut candidates = dictionary.words_with_prefix(char_prefix(&word, 3));
        candidates.sort_by_key(|w| edit_distance(&word, w));
        for candidate in candidates {
            if edit_distance(&word, &candidate) <= 2 {
                push_unique(&mut suggestions, candidate);
            }
            if suggestions.len() >= max_suggestions {
                return suggestions;
            }
        }
    }

    // 2. Single-edit transformations checked against the base set.
    for transform in generate_transformations(&word) {
        if dictionary.in_base_set(&transform) {
            push_unique(&mut suggestions, transform);
            if suggestions.len() >= max_suggestions {
                return suggestions;
            }
        }
    }

    // 3. Wider prefix net for words the 3-char prefix missed.
    if word.chars().count() >= 2 {
        let mut candidates = dictionary.words_with_prefix(char_prefix(&word, 2));
        candidates.sort_by_key(|w| edit_distance(&word, w));
        for candidate in candidates {
            if edit_distance(&word, &candidate) <= 3 {
                push_unique(&mut suggestions, candidate);
            }
            if suggestions.len() >= max_suggestions {
                return suggestions;
            }
        }
    }

    // 4. Last resort for very short words: limited full scan. Rarely hit,
    // since most misspellings are longer than three characters.
    if word.chars().count() <= 3 {
        let mut candidates: Vec<_> = dictionary
            .all_words()
            .into_iter()
            .filter(|w| (w.len() as i32 - word.len() as i32).abs() <= 1)
            .take(100)
            .filter_map(|w| {
                let dist = edit_distance(&word, &w);
                (dist <= 2).then_some((dist, w))
            })
            .collect();
        candidates.sort_by_key(|(dist, _)| *dist);

        for (_, candidate) in candidates {
            push_unique(&mut suggestions, candidate);
            if suggestions.len() >= max_suggestions {
                break;
            }
        }
    }

    suggestions.truncate(max_suggestions);
    suggestions
}

fn char_prefix(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}

fn push_unique(suggestions: &mut Vec<String>, candidate: String) {
    if !suggestions.contains(&candidate) {
        suggestions.push(candidate);
    }
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Single-edit variants: deletions, adjacent transpositions, and the typo
/// substitutions worth trying before a wider search.
fn generate_transformations(word: &str) -> Vec<String> {
    let mut transformations = Vec::new();
    let chars: Vec<char> = word.chars().collect();

    for i in 0..chars.len() {
        let mut new_word = chars.clone();
        new_word.remove(i);
        transformations.push(new_word.iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        transformations.push(new_word.iter().collect());
    }

    let common_replacements = [
        ('a', 'e'),
        ('e', 'i'),
        ('i', 'o'),
        ('o', 'u'),
        ('b', 'v'),
        ('c', 'k'),
        ('f', 'v'),
        ('g', 'j'),
        ('m', 'n'),
        ('s', 'z'),
        ('t', 'd'),
        ('y', 'i'),
    ];

    for (i, &ch) in chars.iter().enumerate() {
        for &(from, to) in &common_replacements {
            if ch == from {
                let mut new_word = chars.clone();
                new_word[i] = to;
                transformations.push(new_word.iter().collect());
            }
        }
    }

    transformations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_transformations() {
        let transforms = generate_transformations("hello");
        assert!(transforms.contains(&"hllo".to_string())); // deletion
        assert!(transforms.contains(&"ehllo".to_string())); // transposition
    }

    #[test]
    fn test_generate_finds_close_word() {
        let dict = Dictionary::from_words(&["fine", "find", "pine"]).unwrap();
        let suggestions = generate("fyne", &dict, 3);
        assert!(suggestions.contains(&"fine".to_string()));
    }

    #[test]
    fn test_generate_respects_limit() {
        let dict = Dictionary::from_words(&["cat", "car", "can", "cap", "cab"]).unwrap();
        assert!(generate("caq", &dict, 2).len() <= 2);
    }
}
