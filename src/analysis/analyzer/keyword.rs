//! Keyword analysis that treats the entire input as a single token.
//!
//! This analysis uses the WholeTokenizer to treat the entire input text as a
//! single token without any splitting or filtering. It's ideal for fields that
//! should be matched exactly as provided.
//!
//! # Use Cases
//!
//! - ID fields (user IDs, product codes, etc.)
//! - Tag fields where exact matching is required
//! - Email addresses or URLs that should be treated atomically
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_analysis::analysis::analyzer::{Analyzer, KeywordAnalysis};
//!
//! let analyzer = Analyzer::new(Arc::new(KeywordAnalysis::new()));
//! let tokens = analyzer.analyze("id", "user-123-abc").unwrap();
//!
//! // Entire input is a single token
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "user-123-abc");
//! ```

use crate::analysis::analyzer::analyzer::ComponentsFactory;
use crate::analysis::analyzer::pipeline::PipelineAnalysis;
use crate::analysis::components::TokenStreamComponents;
use crate::analysis::reader::TextSource;
use crate::analysis::tokenizer::whole::WholeTokenizer;
use crate::error::Result;

/// An analysis that emits the whole input as one token.
#[derive(Clone, Debug)]
pub struct KeywordAnalysis {
    inner: PipelineAnalysis,
}

impl KeywordAnalysis {
    /// Create a new keyword analysis.
    pub fn new() -> Self {
        KeywordAnalysis {
            inner: PipelineAnalysis::new(WholeTokenizer::new).with_name("keyword"),
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
}

impl Default for KeywordAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentsFactory for KeywordAnalysis {
    fn create_components(
        &self,
        field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<TokenStreamComponents> {
        self.inner.create_components(field_name, reader)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
