//! Regex-based tokenizer implementation.

use std::collections::VecDeque;
use std::sync::Arc;

use regex::Regex;

use super::{Tokenizer, TokenizerInput};
use crate::analysis::reader::TextSource;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SarissaError};

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// This is the default tokenizer of the standard pipeline.
#[derive(Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
    input: TokenizerInput,
}

/// Clones share the compiled pattern but start unbound.
impl Clone for RegexTokenizer {
    fn clone(&self) -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&self.pattern),
            gaps: self.gaps,
            input: TokenizerInput::new(),
        }
    }
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Self::build(pattern, false)
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Self::build(pattern, true)
    }

    fn build(pattern: &str, gaps: bool) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SarissaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps,
            input: TokenizerInput::new(),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    fn split_matches(pattern: &Regex, text: &str, tokens: &mut VecDeque<Token>) {
        tokens.extend(
            pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                }),
        );
    }

    fn split_gaps(pattern: &Regex, text: &str, tokens: &mut VecDeque<Token>) {
        let mut last_end = 0;
        let mut position = 0;

        for mat in pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push_back(Token::with_offsets(
                    &text[last_end..mat.start()],
                    position,
                    last_end,
                    mat.start(),
                ));
                position += 1;
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push_back(Token::with_offsets(
                &text[last_end..],
                position,
                last_end,
                text.len(),
            ));
        }
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl TokenStream for RegexTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token())
    }
}

impl Tokenizer for RegexTokenizer {
    fn set_reader(&mut self, reader: TextSource<'_>) -> Result<()> {
        let pattern = &self.pattern;
        if self.gaps {
            self.input
                .bind(reader, |text, tokens| Self::split_gaps(pattern, text, tokens))
        } else {
            self.input
                .bind(reader, |text, tokens| Self::split_matches(pattern, text, tokens))
        }
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(tokenizer: &mut RegexTokenizer, text: &str) -> Vec<Token> {
        tokenizer.set_reader(Box::new(text.as_bytes())).unwrap();
        std::iter::from_fn(|| tokenizer.next_token().unwrap()).collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let mut tokenizer = RegexTokenizer::new().unwrap();
        let tokens = tokenize(&mut tokenizer, "hello world");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_regex_tokenizer_with_gaps() {
        let mut tokenizer = RegexTokenizer::with_gaps(r"\s+").unwrap();
        let tokens = tokenize(&mut tokenizer, "hello world");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_clone_is_unbound() {
        let mut tokenizer = RegexTokenizer::new().unwrap();
        tokenizer.set_reader(Box::new("bound text".as_bytes())).unwrap();

        let mut copy = tokenizer.clone();
        assert!(copy.next_token().unwrap().is_none());
        assert_eq!(copy.pattern(), r"\w+");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("[").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
