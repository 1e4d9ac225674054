//! Nearest-pattern lookup over a trained corpus.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use sitebot::corpus::{CorpusEntry, CorpusSnapshot, StatisticalMatcher, VectorizerOptions};
//!
//! let mut responses = BTreeMap::new();
//! responses.insert("thanks".to_string(), vec!["You're welcome!".to_string()]);
//! let snapshot = CorpusSnapshot::build(
//!     vec![CorpusEntry::new("thanks a lot", "thanks")],
//!     responses,
//!     VectorizerOptions::default(),
//! )
//! .unwrap();
//!
//! let matcher = StatisticalMatcher::primary();
//! let outcome = matcher.find(&snapshot, "thanks").unwrap().unwrap();
//! assert_eq!(outcome.tag, "thanks");
//! ```

use log::debug;
use rand::seq::IndexedRandom;

use crate::corpus::snapshot::CorpusSnapshot;
use crate::corpus::tfidf::cosine_similarity;
use crate::error::{Result, SitebotError};

/// Acceptance threshold of the main pipeline.
pub const PRIMARY_MATCH_THRESHOLD: f64 = 0.15;

/// Acceptance threshold of the simplified pipeline.
pub const SIMPLE_MATCH_THRESHOLD: f64 = 0.30;

/// The best corpus match for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Index of the matched entry.
    pub index: usize,
    /// Tag of the matched entry.
    pub tag: String,
    /// Cosine similarity, strictly above the matcher's threshold.
    pub score: f64,
    /// The tag's response set, never empty.
    pub responses: Vec<String>,
}

impl MatchOutcome {
    /// Pick one response uniformly at random.
    pub fn pick_response(&self) -> Option<&str> {
        self.responses
            .choose(&mut rand::rng())
            .map(String::as_str)
    }
}

/// Cosine-similarity matcher with a fixed acceptance threshold.
#[derive(Debug, Clone, Copy)]
pub struct StatisticalMatcher {
    threshold: f64,
}

impl StatisticalMatcher {
    /// Create a matcher accepting scores strictly above `threshold`.
    pub fn new(threshold: f64) -> Self {
        StatisticalMatcher { threshold }
    }

    /// Matcher with [`PRIMARY_MATCH_THRESHOLD`].
    pub fn primary() -> Self {
        Self::new(PRIMARY_MATCH_THRESHOLD)
    }

    /// Matcher with [`SIMPLE_MATCH_THRESHOLD`].
    pub fn simple() -> Self {
        Self::new(SIMPLE_MATCH_THRESHOLD)
    }

    /// The acceptance threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the entry most similar to `text`.
    ///
    /// Returns `Ok(None)` for an empty corpus or when the best score does not
    /// exceed the threshold. The first entry wins among equal scores.
    pub fn find(&self, snapshot: &CorpusSnapshot, text: &str) -> Result<Option<MatchOutcome>> {
        if snapshot.is_empty() {
            return Ok(None);
        }

        let query = snapshot.vectorizer().transform(text)?;
        let mut best: Option<(usize, f64)> = None;
        for (index, row) in snapshot.matrix().iter().enumerate() {
            if row.len() != query.len() {
                return Err(SitebotError::corpus(format!(
                    "vector {index} has {} dimensions, query has {}",
                    row.len(),
                    query.len()
                )));
            }
            let score = cosine_similarity(&query, row);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let Some((index, score)) = best else {
            return Ok(None);
        };
        debug!("Corpus match score: {score:.3}");
        if score <= self.threshold {
            return Ok(None);
        }

        let tag = snapshot.entries()[index].tag.clone();
        let responses = snapshot
            .responses_for(&tag)
            .map(<[String]>::to_vec)
            .ok_or_else(|| SitebotError::corpus(format!("no responses for tag '{tag}'")))?;
        debug!("Matched tag: {tag}");

        Ok(Some(MatchOutcome {
            index,
            tag,
            score,
            responses,
        }))
    }
}

impl Default for StatisticalMatcher {
    fn default() -> Self {
        Self::primary()
    }
}
