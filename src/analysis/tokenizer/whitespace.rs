//! Whitespace tokenizer implementation.

use std::collections::VecDeque;

use super::{Tokenizer, TokenizerInput};

use crate::analysis::reader::TextSource;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Debug, Default)]
pub struct WhitespaceTokenizer {
    input: TokenizerInput,
}

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer::default()
    }

    fn split(text: &str, tokens: &mut VecDeque<Token>) {
        let mut start = None;
        let mut position = 0;

        for (offset, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            match (c.is_whitespace(), start) {
                (false, None) => start = Some(offset),
                (true, Some(word_start)) => {
                    let word = &text[word_start..offset];
                    tokens.push_back(
                        Token::with_offsets(word, position, word_start, offset)
                            .with_token_type(TokenType::detect(word)),
                    );
                    position += 1;
                    start = None;
                }
                _ => {}
            }
        }
    }
}

impl TokenStream for WhitespaceTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token())
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn set_reader(&mut self, reader: TextSource<'_>) -> Result<()> {
        self.input.bind(reader, Self::split)
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
