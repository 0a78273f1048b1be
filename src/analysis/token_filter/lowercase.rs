//! Lowercase filter implementation.
//!
//! Converts token text to lowercase for case-insensitive search.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::components::TokenStreamComponents;
//! use sarissa_analysis::analysis::token::TokenStream;
//! use sarissa_analysis::analysis::token_filter::lowercase::LowercaseFilter;
//! use sarissa_analysis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let mut components = TokenStreamComponents::new(Box::new(WhitespaceTokenizer::new()))
//!     .add_filter(Box::new(LowercaseFilter::new()));
//! components.set_reader(Box::new("Hello WORLD".as_bytes())).unwrap();
//!
//! let mut stream = components.token_stream();
//! assert_eq!(stream.next_token().unwrap().unwrap().text, "hello");
//! assert_eq!(stream.next_token().unwrap().unwrap().text, "world");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (ASCII fast path, Unicode otherwise)
/// - Skips tokens marked as stopped
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn next_token(&mut self, upstream: &mut dyn TokenStream) -> Result<Option<Token>> {
        Ok(upstream.next_token()?.map(|mut token| {
            if !token.is_stopped() {
                if token.text.is_ascii() {
                    token.text.make_ascii_lowercase();
                } else {
                    token.text = token.text.to_lowercase();
                }
            }
            token
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
