//! Intent classifier trait definition.

use serde::{Deserialize, Serialize};

use super::label::TopicIntent;

/// The winning intent and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The resolved topic.
    pub intent: TopicIntent,
    /// Accumulated keyword score, always positive.
    pub score: u32,
}

/// Intent classifier trait.
///
/// Implementations map already-normalized lowercase text to a topic, or to
/// `None` when nothing in the text points at any topic.
pub trait IntentClassifier: Send + Sync {
    /// Classify the given text.
    fn classify(&self, text: &str) -> Option<ClassificationResult>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
