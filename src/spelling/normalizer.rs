//! Word-by-word spelling normalization against the domain vocabulary.
//!
//! Each whitespace-separated token is compared with every spelling of every
//! [`DomainTerm`](crate::spelling::vocabulary::DomainTerm). A close enough
//! match is replaced by the canonical term; a token that only loosely
//! resembles the vocabulary gets a second chance through edit distance.
//!
//! # Examples
//!
//! ```
//! use sitebot::spelling::normalizer::LexicalNormalizer;
//!
//! let normalizer = LexicalNormalizer::new();
//! assert_eq!(normalizer.normalize("I want to do intenship"), "i want to do internship");
//! assert_eq!(normalizer.normalize("internship schedule"), "internship schedule");
//! ```

use std::sync::Arc;

use log::debug;

use crate::spelling::similarity::{SequenceRatio, StringSimilarity};
use crate::spelling::vocabulary::Vocabulary;

/// Tokens whose cleaned form is shorter than this pass through untouched.
pub const MIN_TOKEN_LEN: usize = 3;

/// A spelling must be strictly more similar than this to be accepted.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Below this best similarity the edit-distance pass is consulted.
pub const CONFIDENT_SIMILARITY: f64 = 0.8;

/// Largest edit distance accepted by the secondary pass.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Shortest cleaned token the secondary pass may rewrite.
pub const MIN_EDIT_TOKEN_LEN: usize = 4;

/// Corrects likely misspellings of domain terms.
#[derive(Debug, Clone)]
pub struct LexicalNormalizer {
    vocabulary: Arc<Vocabulary>,
    similarity: Arc<dyn StringSimilarity>,
}

impl LexicalNormalizer {
    /// Create a normalizer over the built-in vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(Arc::new(Vocabulary::builtin()), Arc::new(SequenceRatio))
    }

    /// Create a normalizer with a custom vocabulary and similarity measure.
    pub fn with_vocabulary(
        vocabulary: Arc<Vocabulary>,
        similarity: Arc<dyn StringSimilarity>,
    ) -> Self {
        LexicalNormalizer {
            vocabulary,
            similarity,
        }
    }

    /// The vocabulary used for correction.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Normalize a text: lowercase it, correct each token and rejoin the
    /// tokens with single spaces.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let corrected: Vec<String> = lowered
            .split_whitespace()
            .map(|token| self.correct_token(token))
            .collect();
        let normalized = corrected.join(" ");

        debug!("Spelling correction: '{text}' -> '{normalized}'");
        normalized
    }

    /// Correct a single lowercase token.
    pub fn correct_token(&self, token: &str) -> String {
        let cleaned = clean_token(token);
        let cleaned_len = cleaned.chars().count();
        if cleaned_len < MIN_TOKEN_LEN {
            return token.to_string();
        }

        let mut best_match: Option<&str> = None;
        let mut highest = 0.0;
        for term in &*self.vocabulary {
            for spelling in term.spellings() {
                let score = self.similarity.similarity(&cleaned, spelling);
                if score > highest && score > SIMILARITY_THRESHOLD {
                    highest = score;
                    best_match = Some(term.canonical.as_str());
                }
            }
        }

        if highest < CONFIDENT_SIMILARITY && cleaned_len >= MIN_EDIT_TOKEN_LEN {
            if let Some(canonical) = self.vocabulary.canonical_terms().find(|canonical| {
                self.similarity.edit_distance(&cleaned, canonical) <= MAX_EDIT_DISTANCE
            }) {
                best_match = Some(canonical);
            }
        }

        match best_match {
            Some(canonical) => canonical.to_string(),
            None => cleaned,
        }
    }
}

impl Default for LexicalNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove every character that is neither alphanumeric nor an underscore.
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::vocabulary::DomainTerm;

    #[test]
    fn test_correct_terms_are_unchanged() {
        let normalizer = LexicalNormalizer::new();
        assert_eq!(
            normalizer.normalize("internship schedule"),
            "internship schedule"
        );
        assert_eq!(normalizer.normalize("python course"), "python course");
        assert_eq!(normalizer.normalize("data science"), "data science");
    }

    #[test]
    fn test_every_variant_maps_to_its_term() {
        let normalizer = LexicalNormalizer::new();
        for term in normalizer.vocabulary().iter() {
            for variant in &term.variants {
                let normalized = normalizer.normalize(&format!("{variant} details"));
                assert!(
                    normalized.split(' ').any(|t| t == term.canonical),
                    "'{variant}' normalized to '{normalized}'"
                );
            }
        }
    }

    #[test]
    fn test_short_tokens_pass_through() {
        let normalizer = LexicalNormalizer::new();
        // "ai" and "ml" are shorter than three characters once cleaned.
        assert_eq!(normalizer.normalize("AI ml?"), "ai ml?");
    }

    #[test]
    fn test_punctuation_is_stripped_from_long_tokens() {
        let normalizer = LexicalNormalizer::new();
        assert_eq!(normalizer.normalize("courses?"), "course");
        assert_eq!(normalizer.normalize("hello, world!"), "hello world");
    }

    #[test]
    fn test_whitespace_collapses() {
        let normalizer = LexicalNormalizer::new();
        assert_eq!(normalizer.normalize("  java \t  jva\n"), "java java");
        assert_eq!(normalizer.normalize("   "), "");
    }

    #[test]
    fn test_edit_distance_pass() {
        let vocabulary = Vocabulary::new(vec![DomainTerm::new("java", &[])]);
        let normalizer =
            LexicalNormalizer::with_vocabulary(Arc::new(vocabulary), Arc::new(SequenceRatio));

        // Ratio 0.5, two substitutions away.
        assert_eq!(normalizer.correct_token("jxvx"), "java");
        // Ratio 0.75 is accepted but not confident, distance confirms it.
        assert_eq!(normalizer.correct_token("jaba"), "java");
        // Three characters are too short for the edit-distance pass.
        assert_eq!(normalizer.correct_token("jvx"), "jvx");
        assert_eq!(normalizer.correct_token("zzqx"), "zzqx");
    }

    #[test]
    fn test_first_term_wins_ties() {
        let vocabulary = Vocabulary::new(vec![
            DomainTerm::new("abcx", &[]),
            DomainTerm::new("abcy", &[]),
        ]);
        let normalizer =
            LexicalNormalizer::with_vocabulary(Arc::new(vocabulary), Arc::new(SequenceRatio));

        // "abcz" is equally similar to both terms.
        assert_eq!(normalizer.correct_token("abcz"), "abcx");
    }
}
