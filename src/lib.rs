//! # Sarissa Analysis
//!
//! Reusable text analysis pipelines for a full-text search library.
//!
//! ## Features
//!
//! - Tokenizer + token filter pipelines built per field by a [`ComponentsFactory`]
//! - Pipelines cached per thread and reused across calls
//! - Pluggable reuse strategies (global or per field)
//! - Explicit analyzer shutdown that invalidates every cached pipeline
//!
//! [`ComponentsFactory`]: analysis::analyzer::ComponentsFactory

pub mod analysis;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{
        AnalyzedTokenStream, Analyzer, ComponentsFactory, KeywordAnalysis, PerFieldAnalysis,
        PipelineAnalysis, SimpleAnalysis, StandardAnalysis,
    };
    pub use crate::analysis::components::TokenStreamComponents;
    pub use crate::analysis::config::{AnalyzerConfig, PipelineKind};
    pub use crate::analysis::reader::{ReusableStringReader, TextSource};
    pub use crate::analysis::reuse::{
        GLOBAL_REUSE_STRATEGY, PER_FIELD_REUSE_STRATEGY, ReuseStrategy, ReuseStrategyKind,
    };
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::TokenFilter;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{Result, SarissaError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
