//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and drops
//! punctuation and whitespace segments.

use std::collections::VecDeque;

use unicode_segmentation::UnicodeSegmentation;

use super::{Tokenizer, TokenizerInput};
use crate::analysis::reader::TextSource;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// # Examples
///
/// ```
/// use sarissa_analysis::analysis::token::TokenStream;
/// use sarissa_analysis::analysis::tokenizer::Tokenizer;
/// use sarissa_analysis::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let mut tokenizer = UnicodeWordTokenizer::new();
/// tokenizer.set_reader(Box::new("café, résumé!".as_bytes())).unwrap();
///
/// assert_eq!(tokenizer.next_token().unwrap().unwrap().text, "café");
/// assert_eq!(tokenizer.next_token().unwrap().unwrap().text, "résumé");
/// assert!(tokenizer.next_token().unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct UnicodeWordTokenizer {
    input: TokenizerInput,
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer::default()
    }

    fn split(text: &str, tokens: &mut VecDeque<Token>) {
        tokens.extend(
            text.unicode_word_indices()
                .enumerate()
                .map(|(position, (start, word))| {
                    Token::with_offsets(word, position, start, start + word.len())
                        .with_token_type(TokenType::detect(word))
                }),
        );
    }
}

impl TokenStream for UnicodeWordTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token())
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn set_reader(&mut self, reader: TextSource<'_>) -> Result<()> {
        self.input.bind(reader, Self::split)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let mut tokenizer = UnicodeWordTokenizer::new();
        tokenizer
            .set_reader(Box::new("Hello, world! 2024".as_bytes()))
            .unwrap();
        let tokens: Vec<Token> =
            std::iter::from_fn(|| tokenizer.next_token().unwrap()).collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[2].text, "2024");
        assert_eq!(tokens[2].token_type, Some(TokenType::Num));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
