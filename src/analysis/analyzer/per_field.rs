//! Per-field analysis (Lucene-compatible).

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::analyzer::{Analyzer, ComponentsFactory};
use crate::analysis::components::TokenStreamComponents;
use crate::analysis::reader::TextSource;
use crate::analysis::reuse::PER_FIELD_REUSE_STRATEGY;
use crate::error::Result;

/// A per-field analysis that delegates to a different factory per field.
///
/// This is similar to Lucene's PerFieldAnalyzerWrapper. Fields not explicitly
/// configured use the default factory. Because the pipeline depends on the
/// field name, analyzers built from it must use the per-field reuse strategy;
/// [`into_analyzer`](Self::into_analyzer) does that.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use sarissa_analysis::analysis::analyzer::{
///     ComponentsFactory, KeywordAnalysis, PerFieldAnalysis, StandardAnalysis,
/// };
///
/// // Reuse factory instances across fields
/// let keyword: Arc<dyn ComponentsFactory> = Arc::new(KeywordAnalysis::new());
/// let mut analysis = PerFieldAnalysis::new(Arc::new(StandardAnalysis::new().unwrap()));
/// analysis.add_analysis("id", Arc::clone(&keyword));
/// analysis.add_analysis("category", Arc::clone(&keyword));
///
/// let analyzer = analysis.into_analyzer();
/// assert_eq!(analyzer.analyze("id", "A-1").unwrap()[0].text, "A-1");
/// assert_eq!(analyzer.analyze("title", "A-1").unwrap()[0].text, "a");
/// ```
#[derive(Clone)]
pub struct PerFieldAnalysis {
    /// Default factory for fields not in the map.
    default: Arc<dyn ComponentsFactory>,

    /// Map of field names to their specific factories.
    fields: AHashMap<String, Arc<dyn ComponentsFactory>>,
}

impl PerFieldAnalysis {
    /// Create a new per-field analysis with a default factory.
    pub fn new(default: Arc<dyn ComponentsFactory>) -> Self {
        Self {
            default,
            fields: AHashMap::new(),
        }
    }

    /// Add a field-specific factory.
    pub fn add_analysis(&mut self, field: impl Into<String>, factory: Arc<dyn ComponentsFactory>) {
        self.fields.insert(field.into(), factory);
    }

    /// Get the factory for a specific field.
    pub fn get_factory(&self, field: &str) -> &Arc<dyn ComponentsFactory> {
        self.fields.get(field).unwrap_or(&self.default)
    }

    /// Get the default factory.
    pub fn default_factory(&self) -> &Arc<dyn ComponentsFactory> {
        &self.default
    }

    /// Build an analyzer caching one pipeline per field.
    pub fn into_analyzer(self) -> Analyzer {
        Analyzer::with_reuse_strategy(Arc::new(self), &PER_FIELD_REUSE_STRATEGY)
    }
}

impl ComponentsFactory for PerFieldAnalysis {
    fn create_components(
        &self,
        field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<TokenStreamComponents> {
        self.get_factory(field_name)
            .create_components(field_name, reader)
    }

    fn init_reader<'a>(&self, field_name: &str, reader: TextSource<'a>) -> TextSource<'a> {
        self.get_factory(field_name).init_reader(field_name, reader)
    }

    fn position_increment_gap(&self, field_name: &str) -> u32 {
        self.get_factory(field_name).position_increment_gap(field_name)
    }

    fn offset_gap(&self, field_name: &str) -> u32 {
        self.get_factory(field_name).offset_gap(field_name)
    }

    fn name(&self) -> &'static str {
        "per_field"
    }
}

impl fmt::Debug for PerFieldAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self
            .fields
            .iter()
            .map(|(field, factory)| (field.as_str(), factory.name()))
            .collect();
        fields.sort_unstable();
        f.debug_struct("PerFieldAnalysis")
            .field("default", &self.default.name())
            .field("fields", &fields)
            .finish()
    }
}
