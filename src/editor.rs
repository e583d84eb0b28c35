use std::ops::Range;

/// The capabilities the host editor exposes to the checker.
///
/// The real editor lives outside this crate; operations read the whole
/// serialized content, transform it, and write the whole thing back. No
/// incremental patching.
pub trait Editor {
    fn content(&self) -> String;
    fn set_content(&mut self, html: &str);
    fn selection_content(&self) -> String;
    fn set_selection_content(&mut self, html: &str);
}

/// In-memory editor over an owned HTML string, used by the CLI and tests.
pub struct HtmlBuffer {
    html: String,
    selection: Option<Range<usize>>,
}

impl HtmlBuffer {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            selection: None,
        }
    }

    /// Select a byte range of the content. Out-of-bounds or non-boundary
    /// ranges clear the selection instead.
    pub fn select(&mut self, range: Range<usize>) {
        let valid = range.start <= range.end
            && self.html.is_char_boundary(range.start)
            && self.html.is_char_boundary(range.end.min(self.html.len()))
            && range.end <= self.html.len();
        self.selection = valid.then_some(range);
    }

    pub fn into_content(self) -> String {
        self.html
    }
}

impl Editor for HtmlBuffer {
    fn content(&self) -> String {
        self.html.clone()
    }

    fn set_content(&mut self, html: &str) {
        self.html = html.to_string();
        self.selection = None;
    }

    fn selection_content(&self) -> String {
        match &self.selection {
            Some(range) => self.html[range.clone()].to_string(),
            None => String::new(),
        }
    }

    fn set_selection_content(&mut self, html: &str) {
        if let Some(range) = self.selection.take() {
            self.html.replace_range(range.clone(), html);
            self.selection = Some(range.start..range.start + html.len());
        }
    }
}
