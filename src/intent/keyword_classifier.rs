//! Keyword-based intent classifier.

use std::sync::Arc;

use log::debug;

use crate::spelling::similarity::{SequenceRatio, StringSimilarity};

use super::classifier::{ClassificationResult, IntentClassifier};
use super::groups::IntentGroup;

/// Score added when a keyword phrase occurs in the text.
pub const EXACT_MATCH_SCORE: u32 = 2;

/// Score added per text word that resembles a word of a keyword.
pub const FUZZY_MATCH_SCORE: u32 = 1;

/// A keyword word must be strictly more similar than this to count.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Text words of this many characters or fewer are never fuzzy matched.
pub const FUZZY_MIN_WORD_LEN: usize = 3;

/// Keyword-based intent classifier.
///
/// Every group accumulates [`EXACT_MATCH_SCORE`] for each of its phrases
/// found in the text. A phrase that is not found can still earn
/// [`FUZZY_MATCH_SCORE`] once per text word that resembles one of its words.
/// The group with the strictly highest score wins; on ties the earlier
/// group wins.
pub struct KeywordIntentClassifier {
    groups: Vec<IntentGroup>,
    similarity: Arc<dyn StringSimilarity>,
}

impl std::fmt::Debug for KeywordIntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordIntentClassifier")
            .field("groups", &self.groups.len())
            .field("similarity", &self.similarity.name())
            .finish()
    }
}

impl KeywordIntentClassifier {
    /// Create a classifier over the built-in groups.
    pub fn new() -> Self {
        Self::with_groups(IntentGroup::builtin(), Arc::new(SequenceRatio))
    }

    /// Create a classifier with custom groups and similarity measure.
    pub fn with_groups(groups: Vec<IntentGroup>, similarity: Arc<dyn StringSimilarity>) -> Self {
        KeywordIntentClassifier { groups, similarity }
    }

    /// The keyword groups in tie-break order.
    pub fn groups(&self) -> &[IntentGroup] {
        &self.groups
    }

    /// Score a single group against the text.
    pub fn score_group(&self, group: &IntentGroup, text: &str) -> u32 {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut score = 0;

        for keyword in &group.keywords {
            if contains_phrase(text, keyword) {
                score += EXACT_MATCH_SCORE;
                continue;
            }

            for word in &words {
                if word.chars().count() <= FUZZY_MIN_WORD_LEN {
                    continue;
                }
                let resembles = keyword.split_whitespace().any(|kw| {
                    self.similarity.similarity(word, kw) > FUZZY_SIMILARITY_THRESHOLD
                });
                if resembles {
                    score += FUZZY_MATCH_SCORE;
                }
            }
        }

        score
    }
}

impl Default for KeywordIntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, text: &str) -> Option<ClassificationResult> {
        let text = text.to_lowercase();
        let mut best: Option<ClassificationResult> = None;

        for group in &self.groups {
            let score = self.score_group(group, &text);
            if score > best.map_or(0, |b| b.score) {
                best = Some(ClassificationResult {
                    intent: group.intent,
                    score,
                });
            }
        }

        if let Some(result) = &best {
            debug!(
                "Detected intent: {} (score: {})",
                result.intent, result.score
            );
        }
        best
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Check whether `phrase` occurs in `text` starting and ending on word
/// boundaries.
///
/// ```
/// use sitebot::intent::contains_phrase;
///
/// assert!(contains_phrase("is there a big data course", "big data"));
/// assert!(!contains_phrase("brainovision", "ai"));
/// ```
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    text.match_indices(phrase).any(|(start, matched)| {
        let end = start + matched.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::TopicIntent;

    #[test]
    fn test_exact_phrase_scores_two() {
        let classifier = KeywordIntentClassifier::new();
        let result = classifier.classify("i want to do internship").unwrap();
        assert_eq!(result.intent, TopicIntent::Internship);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_company_name_is_about() {
        let classifier = KeywordIntentClassifier::new();
        let result = classifier.classify("wht is brainovision").unwrap();
        assert_eq!(result.intent, TopicIntent::About);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_fuzzy_word_scores_one() {
        let classifier = KeywordIntentClassifier::new();
        // Not a whole-word match for "syllabus", but close enough.
        let result = classifier.classify("syllabuss").unwrap();
        assert_eq!(result.intent, TopicIntent::Courses);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_ties_go_to_earlier_group() {
        let classifier = KeywordIntentClassifier::new();
        let result = classifier.classify("python java").unwrap();
        assert_eq!(result.intent, TopicIntent::Python);
    }

    #[test]
    fn test_empty_and_noise() {
        let classifier = KeywordIntentClassifier::new();
        assert!(classifier.classify("").is_none());
        assert!(classifier.classify("   ").is_none());
        assert!(classifier.classify("zzqx flumox ping").is_none());
    }

    #[test]
    fn test_deterministic() {
        let classifier = KeywordIntentClassifier::new();
        let text = "how do i contact you about the java program";
        let first = classifier.classify(text);
        for _ in 0..10 {
            assert_eq!(classifier.classify(text), first);
        }
    }

    #[test]
    fn test_contains_phrase_boundaries() {
        assert!(contains_phrase("ai", "ai"));
        assert!(contains_phrase("what about ai?", "ai"));
        assert!(contains_phrase("on-job training please", "on-job training"));
        assert!(!contains_phrase("training", "ai"));
        assert!(!contains_phrase("email", "ai"));
        assert!(!contains_phrase("courses", "course"));
        assert!(!contains_phrase("anything", ""));
    }
}
