use super::TextScanner;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A visible text node is a maximal run strictly between a '>' and the
    // next '<'. Anything inside a tag is never scanned.
    static ref TEXT_NODE: Regex = Regex::new(r">([^<>]*)<").unwrap();
}

/// Regex-based scanner over serialized HTML.
pub struct HtmlScanner;

impl TextScanner for HtmlScanner {
    fn text_spans<'a>(&self, content: &'a str) -> Vec<&'a str> {
        TEXT_NODE
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl HtmlScanner {
    /// Extract and normalize every candidate word in document order.
    /// Duplicates are retained; deduplication belongs to the classifier.
    pub fn tokenize(&self, content: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for span in self.text_spans(content) {
            let span = decode_entities(span);
            for raw in span.split_whitespace() {
                let word = normalize_token(raw);
                if !word.is_empty() {
                    tokens.push(word);
                }
            }
        }
        tokens
    }
}

/// The entities the editor emits into prose. Non-breaking spaces become real
/// spaces so the surrounding words split; smart quotes are dropped outright.
fn decode_entities(span: &str) -> String {
    span.replace("&nbsp;", " ")
        .replace("&rdquo;", "")
        .replace("&ldquo;", "")
}

fn normalize_token(raw: &str) -> String {
    let mut word: String = raw
        .chars()
        .filter(|&c| c != '\n' && c != '\r')
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '\'')
        .collect();
    word = word
        .trim_matches(|c| c == '-' || c == '\'')
        .to_string();
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_spans_skip_tags() {
        let spans = HtmlScanner.text_spans("<p>one</p><p>two</p>");
        assert_eq!(spans, vec!["one", "two"]);
    }

    #[test]
    fn test_no_text_nodes_yields_nothing() {
        assert!(HtmlScanner.tokenize("<br/><img src=\"x.png\"/>").is_empty());
        assert!(HtmlScanner.tokenize("").is_empty());
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let tokens = HtmlScanner.tokenize("<p>Wait, really?! (yes.)</p>");
        assert_eq!(tokens, vec!["Wait", "really", "yes"]);
    }

    #[test]
    fn test_hyphen_and_apostrophe_survive_inside_words() {
        let tokens = HtmlScanner.tokenize("<p>well-known isn't -edge- 'quoted'</p>");
        assert_eq!(tokens, vec!["well-known", "isn't", "edge", "quoted"]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let tokens = HtmlScanner.tokenize("<p>one&nbsp;two &ldquo;three&rdquo;</p>");
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tokens_that_normalize_to_nothing_are_dropped() {
        let tokens = HtmlScanner.tokenize("<p>--- ... '' a</p>");
        assert_eq!(tokens, vec!["a"]);
    }

    #[test]
    fn test_duplicates_are_retained() {
        let tokens = HtmlScanner.tokenize("<p>echo echo echo</p>");
        assert_eq!(tokens, vec!["echo", "echo", "echo"]);
    }
}
