//! Analyzers: pipeline factories plus the per-thread reuse machinery.

pub mod analyzer;
pub mod keyword;
pub mod per_field;
pub mod pipeline;
pub mod simple;
pub mod standard;

pub use analyzer::{AnalyzedTokenStream, Analyzer, ComponentsFactory};
pub use keyword::KeywordAnalysis;
pub use per_field::PerFieldAnalysis;
pub use pipeline::PipelineAnalysis;
pub use simple::SimpleAnalysis;
pub use standard::StandardAnalysis;
