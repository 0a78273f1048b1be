//! Simple analysis that performs tokenization without filtering.
//!
//! This analysis applies only tokenization without any token filtering.
//! It's useful when you want complete control over the tokenization process
//! or when you need to preserve all tokens without any modifications.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_analysis::analysis::analyzer::{Analyzer, SimpleAnalysis};
//! use sarissa_analysis::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let analyzer = Analyzer::new(Arc::new(SimpleAnalysis::new(move || tokenizer.clone())));
//!
//! let tokens = analyzer.analyze("body", "Hello World").unwrap();
//!
//! // No filtering applied - original case preserved
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "World");
//! ```

use crate::analysis::analyzer::analyzer::ComponentsFactory;
use crate::analysis::analyzer::pipeline::PipelineAnalysis;
use crate::analysis::components::TokenStreamComponents;
use crate::analysis::reader::TextSource;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// A simple analysis that just tokenizes without any filtering.
#[derive(Clone, Debug)]
pub struct SimpleAnalysis {
    inner: PipelineAnalysis,
}

impl SimpleAnalysis {
    /// Create a new simple analysis with the given tokenizer constructor.
    pub fn new<T, F>(tokenizer: F) -> Self
    where
        T: Tokenizer + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        SimpleAnalysis {
            inner: PipelineAnalysis::new(tokenizer).with_name("simple"),
        }
    }

    /// Get the inner pipeline.
    pub fn inner(&self) -> &PipelineAnalysis {
        &self.inner
    }

    /// Unwrap into the inner pipeline, e.g. to append filters.
    pub fn into_inner(self) -> PipelineAnalysis {
        self.inner
    }

    /// Name of the tokenizer used by this analysis.
    pub fn tokenizer_name(&self) -> &'static str {
        self.inner.tokenizer_name()
    }
}

impl Default for SimpleAnalysis {
    fn default() -> Self {
        Self::new(WhitespaceTokenizer::new)
    }
}

impl ComponentsFactory for SimpleAnalysis {
    fn create_components(
        &self,
        field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<TokenStreamComponents> {
        self.inner.create_components(field_name, reader)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::Token;
    use crate::analysis::tokenizer::regex::RegexTokenizer;

    #[test]
    fn test_simple_analysis() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let analyzer = Analyzer::new(Arc::new(SimpleAnalysis::new(move || tokenizer.clone())));

        let tokens: Vec<Token> = analyzer.analyze("f", "Hello World").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "World");
    }

    #[test]
    fn test_default_splits_on_whitespace() {
        let analysis = SimpleAnalysis::default();
        assert_eq!(analysis.tokenizer_name(), "whitespace");

        let analyzer = Analyzer::new(Arc::new(analysis));
        let tokens = analyzer.analyze("f", "user-1 The").unwrap();
        assert_eq!(tokens[0].text, "user-1");
        assert_eq!(tokens[1].text, "The");
    }
}
