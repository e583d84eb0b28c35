pub mod html;

pub use html::HtmlScanner;

/// Extracts the visible text runs of a serialized document, in order.
///
/// The default implementation scans with regular expressions. The trait is
/// the seam for swapping in an HTML-aware parser if the "never split a tag"
/// guarantee ever needs hardening.
pub trait TextScanner {
    fn text_spans<'a>(&self, content: &'a str) -> Vec<&'a str>;
}

/// Tokenize serialized HTML into normalized candidate words.
pub fn tokenize(content: &str) -> Vec<String> {
    HtmlScanner.tokenize(content)
}
