//! Context-aware fallback answers.

use std::sync::Arc;

use log::debug;
use rand::seq::IndexedRandom;

use crate::answer::templates;
use crate::answer::topic::TopicAnswerer;
use crate::config::BotConfig;
use crate::intent::IntentClassifier;
use crate::spelling::normalizer::LexicalNormalizer;

/// Produces the last-resort answer of the pipeline.
///
/// The original text is normalized and classified again; a recognized
/// program gets a pointer to the course page, any other recognized topic its
/// topic answer, and everything else a random generic phrase.
pub struct FallbackSelector {
    config: Arc<BotConfig>,
    normalizer: Arc<LexicalNormalizer>,
    classifier: Arc<dyn IntentClassifier>,
    answerer: Arc<TopicAnswerer>,
    generic: Vec<String>,
}

impl std::fmt::Debug for FallbackSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackSelector")
            .field("classifier", &self.classifier.name())
            .field("generic", &self.generic.len())
            .finish()
    }
}

impl FallbackSelector {
    /// Create a new fallback selector.
    pub fn new(
        config: Arc<BotConfig>,
        normalizer: Arc<LexicalNormalizer>,
        classifier: Arc<dyn IntentClassifier>,
        answerer: Arc<TopicAnswerer>,
    ) -> Self {
        let generic = templates::generic_fallbacks(&config);
        FallbackSelector {
            config,
            normalizer,
            classifier,
            answerer,
            generic,
        }
    }

    /// The generic phrases a fallback may pick from.
    pub fn generic_phrases(&self) -> &[String] {
        &self.generic
    }

    /// Produce a fallback answer for the original user text.
    pub fn fallback(&self, original_text: &str) -> String {
        let normalized = self.normalizer.normalize(original_text);
        let intent = self
            .classifier
            .classify(&normalized)
            .map(|result| result.intent);

        match intent {
            Some(intent) if intent.is_program() => {
                templates::course_information(&self.config, intent)
            }
            Some(intent) => self.answerer.answer(intent),
            None => {
                debug!("No intent for fallback, using a generic phrase");
                self.random_generic()
            }
        }
    }

    fn random_generic(&self) -> String {
        self.generic
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| templates::apology(&self.config))
    }
}
