//! Token types flowing through the analysis pipeline.

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a tokenizer.
///
/// # Examples
///
/// ```
/// use sitebot::analysis::token::Token;
///
/// let token = Token::with_offsets("python", 1, 6, 12);
/// assert_eq!(token.text, "python");
/// assert_eq!(token.end_offset, 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the stream (0-based).
    pub position: usize,

    /// Byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// Byte offset where this token ends in the original text.
    pub end_offset: usize,
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}
