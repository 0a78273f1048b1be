//! Whole-input tokenizer implementation.

use super::{Tokenizer, TokenizerInput};
use crate::analysis::reader::TextSource;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that emits the entire input as a single token.
///
/// Empty input produces no token. Useful for IDs and other keyword fields.
#[derive(Debug, Default)]
pub struct WholeTokenizer {
    input: TokenizerInput,
}

impl WholeTokenizer {
    /// Create a new whole tokenizer.
    pub fn new() -> Self {
        WholeTokenizer::default()
    }
}

impl TokenStream for WholeTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token())
    }
}

impl Tokenizer for WholeTokenizer {
    fn set_reader(&mut self, reader: TextSource<'_>) -> Result<()> {
        self.input.bind(reader, |text, tokens| {
            if !text.is_empty() {
                tokens.push_back(Token::with_offsets(text, 0, 0, text.len()));
            }
        })
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}
