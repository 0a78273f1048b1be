//! Text analysis module for Sarissa.
//!
//! This module turns raw field text into a stream of indexable terms and keeps
//! the (expensive) pipelines that do so cached per thread between calls.
//!
//! ```text
//! Analyzer::token_stream(field, input)
//!     │
//!     ├── ReuseStrategy::reusable_components ── hit ──> components.set_reader(input)
//!     │                                   └─── miss ─> ComponentsFactory::create_components
//!     │                                                 ReuseStrategy::set_reusable_components
//!     └── AnalyzedTokenStream (terminal stage)
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod components;
pub mod config;
pub mod reader;
pub mod reuse;
pub mod slot;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use components::TokenStreamComponents;
pub use token::*;
