//! Pipeline components: the entry stage and the chain leading to the terminal stage.
//!
//! A [`TokenStreamComponents`] value is what the reuse layer caches. Its stages
//! are fixed once built; reuse only re-targets the entry stage at new input
//! through [`TokenStreamComponents::set_reader`].
//!
//! ```text
//! TextSource ─> Tokenizer (entry) ─> Filter 1 ─> ... ─> Filter N (terminal)
//! ```

use std::fmt;

use crate::analysis::reader::{ReusableStringReader, TextSource};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A built analysis pipeline.
///
/// With no filters the terminal stage is the tokenizer itself.
pub struct TokenStreamComponents {
    source: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn TokenFilter>>,
    reusable_string_reader: Option<ReusableStringReader>,
}

impl TokenStreamComponents {
    /// Create a one-stage pipeline.
    pub fn new(source: Box<dyn Tokenizer>) -> Self {
        Self::with_filters(source, Vec::new())
    }

    /// Create a pipeline from a tokenizer and its filters, in pull order.
    pub fn with_filters(source: Box<dyn Tokenizer>, filters: Vec<Box<dyn TokenFilter>>) -> Self {
        TokenStreamComponents {
            source,
            filters,
            reusable_string_reader: None,
        }
    }

    /// Append a filter; it becomes the new terminal stage.
    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Re-target the entry stage at `reader` and reset every filter.
    ///
    /// An error from the tokenizer leaves the pipeline in an unspecified state.
    pub fn set_reader(&mut self, reader: TextSource<'_>) -> Result<()> {
        self.source.set_reader(reader)?;
        for filter in &mut self.filters {
            filter.reset();
        }
        Ok(())
    }

    /// The terminal stage of the pipeline.
    pub fn token_stream(&mut self) -> TermStream<'_> {
        TermStream {
            source: self.source.as_mut(),
            filters: self.filters.as_mut_slice(),
        }
    }

    /// The entry stage.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.source.as_ref()
    }

    /// The entry stage, mutably.
    pub fn tokenizer_mut(&mut self) -> &mut dyn Tokenizer {
        self.source.as_mut()
    }

    /// Names of the filters between entry and terminal stage.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub(crate) fn take_reusable_string_reader(&mut self) -> Option<ReusableStringReader> {
        self.reusable_string_reader.take()
    }

    pub(crate) fn set_reusable_string_reader(&mut self, reader: ReusableStringReader) {
        self.reusable_string_reader = Some(reader);
    }

    pub(crate) fn reusable_string_reader(&self) -> Option<&ReusableStringReader> {
        self.reusable_string_reader.as_ref()
    }
}

impl fmt::Debug for TokenStreamComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStreamComponents")
            .field("tokenizer", &self.source.name())
            .field("filters", &self.filter_names())
            .field(
                "reusable_string_reader",
                &self.reusable_string_reader.is_some(),
            )
            .finish()
    }
}

/// View over the terminal stage of a [`TokenStreamComponents`].
///
/// Each call pulls through the filter chain from the last filter backwards to
/// the tokenizer.
pub struct TermStream<'a> {
    source: &'a mut (dyn Tokenizer + 'static),
    filters: &'a mut [Box<dyn TokenFilter>],
}

impl TokenStream for TermStream<'_> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        match self.filters.split_last_mut() {
            None => self.source.next_token(),
            Some((terminal, upstream)) => {
                let mut upstream = TermStream {
                    source: &mut *self.source,
                    filters: upstream,
                };
                terminal.next_token(&mut upstream)
            }
        }
    }
}

impl Iterator for TermStream<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
