//! Limit filter implementation.

use super::TokenFilter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that limits the number of tokens emitted per input.
#[derive(Clone, Debug)]
pub struct LimitFilter {
    limit: usize,
    emitted: usize,
}

impl LimitFilter {
    /// Create a new limit filter with the given limit.
    pub fn new(limit: usize) -> Self {
        LimitFilter { limit, emitted: 0 }
    }

    /// Get the limit.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl TokenFilter for LimitFilter {
    fn next_token(&mut self, upstream: &mut dyn TokenStream) -> Result<Option<Token>> {
        if self.emitted >= self.limit {
            return Ok(None);
        }

        let token = upstream.next_token()?;
        if token.is_some() {
            self.emitted += 1;
        }
        Ok(token)
    }

    fn reset(&mut self) {
        self.emitted = 0;
    }

    fn name(&self) -> &'static str {
        "limit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::testing::run_filter;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("hello", 0),
            Token::new("world", 1),
            Token::new("test", 2),
            Token::new("limit", 3),
        ]
    }

    #[test]
    fn test_limit_filter() {
        let mut filter = LimitFilter::new(2);
        let result = run_filter(&mut filter, tokens());

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
    }

    #[test]
    fn test_reset_restores_budget() {
        let mut filter = LimitFilter::new(1);
        assert_eq!(run_filter(&mut filter, tokens()).len(), 1);
        assert!(run_filter(&mut filter, tokens()).is_empty());

        filter.reset();
        assert_eq!(run_filter(&mut filter, tokens()).len(), 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LimitFilter::new(10).name(), "limit");
    }
}
