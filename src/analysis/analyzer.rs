//! Analyzers combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Terms
//! ```
//!
//! # Examples
//!
//! ```
//! use sitebot::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms = analyzer.terms("What is the Python course?").unwrap();
//! assert_eq!(terms, vec!["python", "course"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the surviving token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

/// A configurable analyzer made of a tokenizer and filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: &'static str,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
            name: "pipeline",
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("name", &self.name)
            .finish()
    }
}

/// The analyzer used by the TF-IDF vector space.
///
/// Term regex, lowercase and, unless disabled, English stop word removal.
#[derive(Debug, Clone)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a standard analyzer with stop word filtering.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer { inner })
    }

    /// Create a standard analyzer that keeps stop words.
    pub fn without_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard_no_stop");

        Ok(StandardAnalyzer { inner })
    }

    /// Build the analyzer described by a serialized [`AnalyzerKind`].
    pub fn for_kind(kind: AnalyzerKind) -> Result<Self> {
        match kind {
            AnalyzerKind::EnglishStopWords => Self::new(),
            AnalyzerKind::KeepStopWords => Self::without_stop_words(),
        }
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Which flavour of [`StandardAnalyzer`] a vector space was built with.
///
/// Persisted alongside the vocabulary so that a reloaded vector space
/// analyzes queries exactly like it analyzed its training patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyzerKind {
    /// Lowercase terms with English stop words removed.
    EnglishStopWords,
    /// Lowercase terms, stop words kept.
    KeepStopWords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let terms = analyzer.terms("Do you provide Paid Internship?").unwrap();
        assert_eq!(terms, vec!["provide", "paid", "internship"]);
        assert_eq!(analyzer.name(), "standard");
    }

    #[test]
    fn test_standard_analyzer_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words().unwrap();
        let terms = analyzer.terms("What is Brainovision").unwrap();
        assert_eq!(terms, vec!["what", "is", "brainovision"]);
    }

    #[test]
    fn test_for_kind() {
        let analyzer = StandardAnalyzer::for_kind(AnalyzerKind::KeepStopWords).unwrap();
        assert_eq!(analyzer.name(), "standard_no_stop");
    }
}
