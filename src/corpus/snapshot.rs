//! Trained corpus snapshots.
//!
//! A [`CorpusSnapshot`] bundles everything the statistical matcher reads:
//! the ordered patterns with their tags, the tag to response-set mapping,
//! the fitted vector space and one vector per pattern. Snapshots are built
//! in full and never mutated afterwards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalyzerKind;
use crate::corpus::tfidf::{TfIdfVectorizer, VectorSpace};
use crate::error::{Result, SitebotError};

/// A training pattern and the tag whose responses it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Lowercase pattern text.
    pub pattern: String,
    /// Tag of the response set.
    pub tag: String,
}

impl CorpusEntry {
    /// Create an entry, lowercasing the pattern.
    pub fn new<P: AsRef<str>, T: Into<String>>(pattern: P, tag: T) -> Self {
        CorpusEntry {
            pattern: pattern.as_ref().to_lowercase(),
            tag: tag.into(),
        }
    }
}

/// How a snapshot's vector space is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerOptions {
    /// Analyzer flavour.
    pub analyzer: AnalyzerKind,
    /// Cap on the vocabulary size.
    pub max_features: Option<usize>,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        VectorizerOptions {
            analyzer: AnalyzerKind::EnglishStopWords,
            max_features: Some(crate::config::DEFAULT_MAX_FEATURES),
        }
    }
}

/// An immutable trained corpus with its vector index.
#[derive(Debug)]
pub struct CorpusSnapshot {
    entries: Vec<CorpusEntry>,
    responses: BTreeMap<String, Vec<String>>,
    vectorizer: TfIdfVectorizer,
    matrix: Vec<Vec<f64>>,
    trained_at: DateTime<Utc>,
}

impl CorpusSnapshot {
    /// Fit a vector space on the entries and build the snapshot.
    pub fn build(
        entries: Vec<CorpusEntry>,
        responses: BTreeMap<String, Vec<String>>,
        options: VectorizerOptions,
    ) -> Result<Self> {
        validate_responses(&entries, &responses)?;

        let mut vectorizer = TfIdfVectorizer::new(options.analyzer, options.max_features)?;
        let matrix = if entries.is_empty() {
            Vec::new()
        } else {
            let patterns: Vec<String> = entries.iter().map(|e| e.pattern.clone()).collect();
            vectorizer.fit_transform(&patterns)?
        };

        Ok(CorpusSnapshot {
            entries,
            responses,
            vectorizer,
            matrix,
            trained_at: Utc::now(),
        })
    }

    /// Reassemble a snapshot from previously built parts.
    pub fn from_parts(
        entries: Vec<CorpusEntry>,
        responses: BTreeMap<String, Vec<String>>,
        space: VectorSpace,
        matrix: Vec<Vec<f64>>,
        trained_at: DateTime<Utc>,
    ) -> Result<Self> {
        validate_responses(&entries, &responses)?;

        if matrix.len() != entries.len() {
            return Err(SitebotError::corpus(format!(
                "{} patterns but {} vectors",
                entries.len(),
                matrix.len()
            )));
        }
        let dimension = space.terms.len();
        if let Some(row) = matrix.iter().position(|row| row.len() != dimension) {
            return Err(SitebotError::corpus(format!(
                "vector {row} does not have {dimension} dimensions"
            )));
        }

        Ok(CorpusSnapshot {
            entries,
            responses,
            vectorizer: TfIdfVectorizer::from_space(space)?,
            matrix,
            trained_at,
        })
    }

    /// Ordered corpus entries.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Response sets by tag.
    pub fn responses(&self) -> &BTreeMap<String, Vec<String>> {
        &self.responses
    }

    /// Responses of one tag.
    pub fn responses_for(&self, tag: &str) -> Option<&[String]> {
        self.responses.get(tag).map(Vec::as_slice)
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// One unit-length vector per entry.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// When the snapshot was trained.
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.responses.len()
    }
}

fn validate_responses(
    entries: &[CorpusEntry],
    responses: &BTreeMap<String, Vec<String>>,
) -> Result<()> {
    if let Some((tag, _)) = responses.iter().find(|(_, set)| set.is_empty()) {
        return Err(SitebotError::corpus(format!("tag '{tag}' has no responses")));
    }
    if let Some(entry) = entries.iter().find(|e| !responses.contains_key(&e.tag)) {
        return Err(SitebotError::corpus(format!(
            "pattern '{}' refers to unknown tag '{}'",
            entry.pattern, entry.tag
        )));
    }
    Ok(())
}
