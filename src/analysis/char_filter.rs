//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before the tokenizer sees it. They are
//! attached through [`ComponentsFactory::init_reader`], which wraps the caller's
//! source in a [`CharFilterReader`].
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! [`ComponentsFactory::init_reader`]: crate::analysis::analyzer::ComponentsFactory::init_reader

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use crate::analysis::reader::TextSource;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A reader that drains its source on first read and serves the text produced
/// by a chain of char filters.
pub struct CharFilterReader<'a> {
    source: Option<TextSource<'a>>,
    filters: Vec<Arc<dyn CharFilter>>,
    filtered: Cursor<Vec<u8>>,
}

impl<'a> CharFilterReader<'a> {
    /// Wrap `source`, applying `filters` in order.
    pub fn new(source: TextSource<'a>, filters: Vec<Arc<dyn CharFilter>>) -> Self {
        CharFilterReader {
            source: Some(source),
            filters,
            filtered: Cursor::new(Vec::new()),
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        let Some(mut source) = self.source.take() else {
            return Ok(());
        };

        let mut text = String::new();
        source.read_to_string(&mut text)?;
        for filter in &self.filters {
            text = filter.filter(&text);
        }
        self.filtered = Cursor::new(text.into_bytes());
        Ok(())
    }
}

impl Read for CharFilterReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill()?;
        self.filtered.read(buf)
    }
}

pub mod pattern_replace;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;

    #[test]
    fn test_char_filter_reader_chain() {
        let filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(PatternReplaceCharFilter::new(r"-", "").unwrap()),
            Arc::new(PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap()),
        ];
        let mut reader = CharFilterReader::new(Box::new("tel 123-456".as_bytes()), filters);

        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "tel NUM");
    }

    #[test]
    fn test_char_filter_reader_without_filters() {
        let mut reader = CharFilterReader::new(Box::new("as is".as_bytes()), Vec::new());

        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "as is");
    }
}
