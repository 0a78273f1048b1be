//! Pipeline analysis that combines tokenizers and filters.
//!
//! This is the main building block for custom analysis. Because every thread
//! gets its own pipeline instance, stages are registered as constructors and
//! instantiated each time [`create_components`] runs.
//!
//! # Architecture
//!
//! The pipeline applies processing in this order:
//! 1. Char Filters: Normalize raw text (through [`init_reader`])
//! 2. Tokenizer: Splits text into tokens
//! 3. Token Filters: Applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_analysis::analysis::analyzer::{Analyzer, PipelineAnalysis};
//! use sarissa_analysis::analysis::token_filter::lowercase::LowercaseFilter;
//! use sarissa_analysis::analysis::token_filter::stop::StopFilter;
//! use sarissa_analysis::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let pipeline = PipelineAnalysis::new(move || tokenizer.clone())
//!     .add_filter(LowercaseFilter::new)
//!     .add_filter(|| StopFilter::from_words(vec!["the", "and"]))
//!     .with_name("my_custom_analyzer");
//!
//! let analyzer = Analyzer::new(Arc::new(pipeline));
//! let tokens = analyzer.analyze("body", "Hello THE world AND test").unwrap();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```
//!
//! [`create_components`]: crate::analysis::analyzer::ComponentsFactory::create_components
//! [`init_reader`]: crate::analysis::analyzer::ComponentsFactory::init_reader

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::ComponentsFactory;
use crate::analysis::char_filter::{CharFilter, CharFilterReader};
use crate::analysis::components::TokenStreamComponents;
use crate::analysis::reader::TextSource;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

type TokenizerBuilder = Arc<dyn Fn() -> Box<dyn Tokenizer> + Send + Sync>;
type FilterBuilder = Arc<dyn Fn() -> Box<dyn TokenFilter> + Send + Sync>;

/// A configurable factory that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalysis {
    tokenizer: TokenizerBuilder,
    tokenizer_name: &'static str,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<FilterBuilder>,
    name: String,
}

impl PipelineAnalysis {
    /// Create a new pipeline whose entry stage is built by `tokenizer`.
    pub fn new<T, F>(tokenizer: F) -> Self
    where
        T: Tokenizer + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let tokenizer_name = tokenizer().name();
        PipelineAnalysis {
            tokenizer: Arc::new(move || Box::new(tokenizer()) as Box<dyn Tokenizer>),
            tokenizer_name,
            char_filters: Vec::new(),
            filters: Vec::new(),
            name: format!("pipeline_{tokenizer_name}"),
        }
    }

    /// Add a char filter applied to the raw input.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline; it becomes the terminal stage.
    pub fn add_filter<T, F>(mut self, filter: F) -> Self
    where
        T: TokenFilter + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.filters
            .push(Arc::new(move || Box::new(filter()) as Box<dyn TokenFilter>));
        self
    }

    /// Set a custom name for this pipeline.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured pipeline name.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Name of the tokenizer at the head of the pipeline.
    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer_name
    }

    /// Get the char filters used by this pipeline.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Number of token filters in the pipeline.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }
}

impl ComponentsFactory for PipelineAnalysis {
    fn create_components(
        &self,
        _field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<TokenStreamComponents> {
        let mut tokenizer = (self.tokenizer)();
        tokenizer.set_reader(reader)?;

        let filters = self.filters.iter().map(|build| build()).collect();
        Ok(TokenStreamComponents::with_filters(tokenizer, filters))
    }

    fn init_reader<'a>(&self, _field_name: &str, reader: TextSource<'a>) -> TextSource<'a> {
        if self.char_filters.is_empty() {
            reader
        } else {
            Box::new(CharFilterReader::new(reader, self.char_filters.clone()))
        }
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalysis")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer_name)
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field("filters", &self.filters.len())
            .finish()
    }
}
