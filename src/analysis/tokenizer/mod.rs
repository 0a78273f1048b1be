//! Tokenizer implementations for text analysis.
//!
//! A tokenizer is the entry stage of a pipeline: it is bound to a fresh
//! [`TextSource`] with [`Tokenizer::set_reader`] and then pulled token by token.
//! Binding drains the source into an internal buffer that is reused across
//! inputs.

use std::collections::VecDeque;
use std::io::Read;

use crate::analysis::reader::TextSource;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SarissaError};

/// Trait for tokenizers, the entry stage of an analysis pipeline.
pub trait Tokenizer: TokenStream + Send {
    /// Re-target this tokenizer at a new input, discarding any unread tokens.
    ///
    /// Fails with [`SarissaError::InputBinding`] when the input cannot be read.
    fn set_reader(&mut self, reader: TextSource<'_>) -> Result<()>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Reusable input buffer shared by the builtin tokenizers.
#[derive(Debug, Default)]
pub struct TokenizerInput {
    text: String,
    tokens: VecDeque<Token>,
}

impl TokenizerInput {
    /// Create an empty input buffer.
    pub fn new() -> Self {
        TokenizerInput::default()
    }

    /// Drain `reader` into the buffer and split it with `split`.
    pub fn bind<F>(&mut self, mut reader: TextSource<'_>, split: F) -> Result<()>
    where
        F: FnOnce(&str, &mut VecDeque<Token>),
    {
        self.text.clear();
        self.tokens.clear();

        if let Err(e) = reader.read_to_string(&mut self.text) {
            self.text.clear();
            return Err(SarissaError::input_binding(format!(
                "Failed to read tokenizer input: {e}"
            )));
        }

        split(&self.text, &mut self.tokens);
        Ok(())
    }

    /// Pop the next pending token.
    pub fn next_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// The text of the current input.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;
pub mod whole;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;
