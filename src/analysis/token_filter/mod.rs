//! Token filter implementations for token transformation.
//!
//! A filter is a pipeline stage that pulls tokens from the stage before it.
//! Filters may keep per-input state (counters, pending position increments);
//! [`TokenFilter::reset`] is called whenever the pipeline is bound to new input.

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait TokenFilter: Send {
    /// Produce the next token, pulling from `upstream` as needed.
    fn next_token(&mut self, upstream: &mut dyn TokenStream) -> Result<Option<Token>>;

    /// Clear per-input state before the pipeline reads a new input.
    fn reset(&mut self) {}

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod limit;
pub mod lowercase;
pub mod stop;

// Re-export all filters for convenient access
pub use limit::LimitFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
