//! Text analysis for the statistical matcher.
//!
//! The TF-IDF vector space needs a deterministic way of turning pattern
//! and query text into terms. Analysis is a tokenizer followed by a chain
//! of token filters, assembled by an analyzer.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
