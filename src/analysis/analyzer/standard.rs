//! Standard analysis that provides good defaults for most use cases.
//!
//! This analysis uses a regex tokenizer (following Unicode word boundaries),
//! lowercase normalization, and English stop word filtering. It's suitable for
//! general text analysis in English and other languages that use spaces to
//! separate words.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (Unicode word boundaries)
//! 2. LowercaseFilter
//! 3. StopFilter (33 common English stop words)
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_analysis::analysis::analyzer::{Analyzer, StandardAnalysis};
//!
//! let analyzer = Analyzer::new(Arc::new(StandardAnalysis::new().unwrap()));
//! let tokens = analyzer.analyze("body", "Hello the world and test").unwrap();
//!
//! // "the" and "and" are filtered out as stop words
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::ComponentsFactory;
use crate::analysis::analyzer::pipeline::PipelineAnalysis;
use crate::analysis::components::TokenStreamComponents;
use crate::analysis::reader::TextSource;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::{DEFAULT_ENGLISH_STOP_WORDS_SET, StopFilter};
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// A standard analysis that provides good defaults for most use cases.
///
/// This analysis uses a regex tokenizer with lowercase and stop word filtering.
#[derive(Clone, Debug)]
pub struct StandardAnalysis {
    inner: PipelineAnalysis,
}

impl StandardAnalysis {
    /// Create a new standard analysis with default settings.
    pub fn new() -> Result<Self> {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new standard analysis with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Result<Self> {
        let tokenizer = RegexTokenizer::new()?;
        let stop_words = Arc::new(stop_words);
        let inner = PipelineAnalysis::new(move || tokenizer.clone())
            .add_filter(LowercaseFilter::new)
            .add_filter(move || StopFilter::from_shared(Arc::clone(&stop_words)))
            .with_name("standard");

        Ok(StandardAnalysis { inner })
    }

    /// Create a new standard analysis without stop word filtering.
    pub fn without_stop_words() -> Result<Self> {
        let tokenizer = RegexTokenizer::new()?;
        let inner = PipelineAnalysis::new(move || tokenizer.clone())
            .add_filter(LowercaseFilter::new)
            .with_name("standard_no_stop");

        Ok(StandardAnalysis { inner })
    }

    /// Get the inner pipeline.
    pub fn inner(&self) -> &PipelineAnalysis {
        &self.inner
    }

    /// Unwrap into the inner pipeline, e.g. to append more stages.
    pub fn into_inner(self) -> PipelineAnalysis {
        self.inner
    }
}

impl Default for StandardAnalysis {
    fn default() -> Self {
        Self::new().expect("Standard analysis should be creatable with default settings")
    }
}

impl ComponentsFactory for StandardAnalysis {
    fn create_components(
        &self,
        field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<TokenStreamComponents> {
        self.inner.create_components(field_name, reader)
    }

    fn init_reader<'a>(&self, field_name: &str, reader: TextSource<'a>) -> TextSource<'a> {
        self.inner.init_reader(field_name, reader)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
