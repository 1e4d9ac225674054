//! Tokenizers that split raw text into tokens.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SitebotError};

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Default term pattern: runs of two or more word characters.
pub const DEFAULT_TERM_PATTERN: &str = r"\b\w\w+\b";

/// A regex-based tokenizer that emits every match of its pattern.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer with [`DEFAULT_TERM_PATTERN`].
    ///
    /// Single-character words are dropped, so "a" or "i" never become terms.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(DEFAULT_TERM_PATTERN)
            .map_err(|e| SitebotError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer_drops_single_chars() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("I want a 3 month internship")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["want", "month", "internship"]);
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 6);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
