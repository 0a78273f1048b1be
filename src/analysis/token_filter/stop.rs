//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. Includes a default stop word
//! list for English, with support for custom word lists.
//!
//! Removed stop words leave a gap: their position increments are added to
//! the next emitted token.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::components::TokenStreamComponents;
//! use sarissa_analysis::analysis::token::TokenStream;
//! use sarissa_analysis::analysis::token_filter::stop::StopFilter;
//! use sarissa_analysis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let mut components = TokenStreamComponents::new(Box::new(WhitespaceTokenizer::new()))
//!     .add_filter(Box::new(StopFilter::new())); // default English stop words
//! components.set_reader(Box::new("the quick brown".as_bytes())).unwrap();
//!
//! let mut stream = components.token_stream();
//! let quick = stream.next_token().unwrap().unwrap();
//! assert_eq!(quick.text, "quick");
//! assert_eq!(quick.position_increment, 2);
//! assert_eq!(stream.next_token().unwrap().unwrap().text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Stop words are common words (like "the", "is", "at") that typically don't
/// contribute to search relevance. This filter can either remove stop words
/// entirely or mark them as stopped while keeping them in the stream.
///
/// The default list holds 33 common English words (articles, prepositions,
/// conjunctions).
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
    /// Increments of removed tokens not yet folded into an emitted token
    skipped_positions: usize,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter::from_shared(Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()))
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter::from_shared(Arc::new(stop_words))
    }

    /// Create a stop filter sharing an existing word set.
    ///
    /// Pipelines are built once per thread and field, so factories hand the
    /// same set to every filter instance.
    pub fn from_shared(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter {
            stop_words,
            remove_stopped: true,
            skipped_positions: 0,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarissa_analysis::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// assert!(filter.is_stop_word("bar"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn next_token(&mut self, upstream: &mut dyn TokenStream) -> Result<Option<Token>> {
        while let Some(token) = upstream.next_token()? {
            if token.is_stopped() || !self.is_stop_word(&token.text) {
                let increment = token.position_increment + self.skipped_positions;
                self.skipped_positions = 0;
                return Ok(Some(token.with_position_increment(increment)));
            }

            if !self.remove_stopped {
                return Ok(Some(token.stop()));
            }

            self.skipped_positions += token.position_increment;
        }

        Ok(None)
    }

    fn reset(&mut self) {
        self.skipped_positions = 0;
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::testing::run_filter;

    #[test]
    fn test_stop_filter() {
        let mut filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("or", 4),
            Token::new("test", 5),
        ];

        let result = run_filter(&mut filter, tokens);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[1].position_increment, 2);
        assert_eq!(result[2].text, "test");
        assert_eq!(result[2].position_increment, 3);
    }

    #[test]
    fn test_stop_filter_preserve_stopped() {
        let mut filter = StopFilter::from_words(vec!["the", "and"]).remove_stopped(false);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
        ];

        let result = run_filter(&mut filter, tokens);

        assert_eq!(result.len(), 3);
        assert!(!result[0].is_stopped());
        assert_eq!(result[1].text, "the");
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
        assert_eq!(result[2].position_increment, 1);
    }

    #[test]
    fn test_reset_drops_pending_gap() {
        let mut filter = StopFilter::from_words(vec!["the"]);
        assert!(run_filter(&mut filter, vec![Token::new("the", 0)]).is_empty());

        filter.reset();
        let result = run_filter(&mut filter, vec![Token::new("fox", 0)]);
        assert_eq!(result[0].position_increment, 1);
    }

    #[test]
    fn test_default_word_list() {
        assert!(StopFilter::new().is_stop_word("the"));
        assert!(!StopFilter::new().is_stop_word("hello"));
        assert_eq!(StopFilter::new().len(), 33);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
