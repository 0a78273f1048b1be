//! Serializable analyzer configuration.
//!
//! An [`AnalyzerConfig`] selects a builtin pipeline and a reuse strategy and
//! builds a ready-to-share [`Analyzer`] from them.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::from_json_str(
//!     r#"{
//!         "reuse_strategy": "per_field",
//!         "pipeline": "standard",
//!         "max_token_count": 2,
//!         "field_pipelines": { "id": "keyword" }
//!     }"#,
//! )
//! .unwrap();
//!
//! let analyzer = config.build().unwrap();
//! let terms: Vec<_> = analyzer
//!     .analyze("body", "The quick brown fox")
//!     .unwrap()
//!     .into_iter()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(terms, vec!["quick", "brown"]);
//! assert_eq!(analyzer.analyze("id", "SKU-1").unwrap()[0].text, "SKU-1");
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::analyzer::{
    Analyzer, ComponentsFactory, KeywordAnalysis, PerFieldAnalysis, PipelineAnalysis,
    SimpleAnalysis, StandardAnalysis,
};
use crate::analysis::reuse::ReuseStrategyKind;
use crate::analysis::token_filter::limit::LimitFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{Result, SarissaError};

/// Builtin pipelines selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    /// Regex words, lowercased, English stop words removed.
    #[default]
    Standard,
    /// Whitespace split, no filters.
    Simple,
    /// Whole input as one token.
    Keyword,
    /// Unicode word boundaries, lowercased.
    UnicodeWord,
}

/// Configuration for building an [`Analyzer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Which cached pipeline may serve a field.
    pub reuse_strategy: ReuseStrategyKind,

    /// Pipeline for fields without an entry in `field_pipelines`.
    pub pipeline: PipelineKind,

    /// Replacement stop word list for standard pipelines.
    /// If None, uses the default English list.
    pub stop_words: Option<Vec<String>>,

    /// Maximum number of tokens emitted per input.
    pub max_token_count: Option<usize>,

    /// Field-specific pipelines. Requires the per-field reuse strategy.
    pub field_pipelines: BTreeMap<String, PipelineKind>,
}

impl AnalyzerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize this configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the options can be combined.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_count == Some(0) {
            return Err(SarissaError::invalid_config(
                "max_token_count must be greater than zero",
            ));
        }
        if !self.field_pipelines.is_empty() && self.reuse_strategy == ReuseStrategyKind::Global {
            return Err(SarissaError::invalid_config(
                "field_pipelines requires the per_field reuse strategy",
            ));
        }
        Ok(())
    }

    /// Build an analyzer from this configuration.
    pub fn build(&self) -> Result<Analyzer> {
        self.validate()?;

        let default = self.pipeline(self.pipeline)?;
        let factory: Arc<dyn ComponentsFactory> = if self.field_pipelines.is_empty() {
            Arc::new(default)
        } else {
            let mut per_field = PerFieldAnalysis::new(Arc::new(default));
            for (field, kind) in &self.field_pipelines {
                per_field.add_analysis(field.clone(), Arc::new(self.pipeline(*kind)?));
            }
            Arc::new(per_field)
        };

        debug!(
            pipeline = ?self.pipeline,
            fields = self.field_pipelines.len(),
            strategy = ?self.reuse_strategy,
            "building analyzer from configuration"
        );
        Ok(Analyzer::with_reuse_strategy(
            factory,
            self.reuse_strategy.strategy(),
        ))
    }

    fn pipeline(&self, kind: PipelineKind) -> Result<PipelineAnalysis> {
        let pipeline = match kind {
            PipelineKind::Standard => match &self.stop_words {
                Some(words) => {
                    let words: HashSet<String> = words.iter().cloned().collect();
                    StandardAnalysis::with_stop_words(words)?.into_inner()
                }
                None => StandardAnalysis::new()?.into_inner(),
            },
            PipelineKind::Simple => SimpleAnalysis::default().into_inner(),
            PipelineKind::Keyword => KeywordAnalysis::new().into_inner(),
            PipelineKind::UnicodeWord => PipelineAnalysis::new(UnicodeWordTokenizer::new)
                .add_filter(LowercaseFilter::new)
                .with_name("unicode_word"),
        };

        Ok(match self.max_token_count {
            Some(limit) => pipeline.add_filter(move || LimitFilter::new(limit)),
            None => pipeline,
        })
    }
}
