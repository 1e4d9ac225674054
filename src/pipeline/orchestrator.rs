//! The main request pipeline.
//!
//! ```text
//! message → trim/lowercase ─ empty ──────────────────────────→ welcome
//!                 │
//!                 ▼
//!            normalize → classify ─ intent ──────────────────→ topic answer
//!                 │
//!                 ▼ none
//!            corpus match (active snapshot) ─ above threshold → random response
//!                 │
//!                 ▼ none / error
//!            fallback selector ──────────────────────────────→ fallback
//! ```

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::answer::fallback::FallbackSelector;
use crate::answer::templates;
use crate::answer::topic::TopicAnswerer;
use crate::config::BotConfig;
use crate::corpus::matcher::{MatchOutcome, StatisticalMatcher};
use crate::corpus::store::SnapshotStore;
use crate::fetch::fetcher::PageFetcher;
use crate::intent::{ClassificationResult, IntentClassifier, KeywordIntentClassifier, TopicIntent};
use crate::spelling::normalizer::LexicalNormalizer;

/// Which step produced an answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerSource {
    /// Empty input.
    Welcome,
    /// A topic handler.
    Topic {
        /// The resolved intent.
        intent: TopicIntent,
    },
    /// The statistical matcher.
    Corpus {
        /// Matched tag.
        tag: String,
        /// Cosine similarity of the match.
        score: f64,
    },
    /// The fallback selector.
    Fallback,
}

/// An answer together with how it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReply {
    /// The answer text.
    pub text: String,
    /// Which step answered.
    pub source: AnswerSource,
    /// The normalized input.
    pub normalized: String,
    /// Classification of the normalized input.
    pub classification: Option<ClassificationResult>,
}

/// Sequences normalization, classification, topic answers, corpus matching
/// and fallback for one request.
pub struct ChatPipeline {
    config: Arc<BotConfig>,
    normalizer: Arc<LexicalNormalizer>,
    classifier: Arc<dyn IntentClassifier>,
    answerer: Arc<TopicAnswerer>,
    matcher: StatisticalMatcher,
    fallback: FallbackSelector,
    store: Arc<SnapshotStore>,
}

impl std::fmt::Debug for ChatPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatPipeline")
            .field("classifier", &self.classifier.name())
            .field("matcher", &self.matcher)
            .field("snapshot_loaded", &self.store.is_loaded())
            .finish()
    }
}

impl ChatPipeline {
    /// Create a pipeline reading corpus snapshots from `store`.
    pub fn new(
        config: Arc<BotConfig>,
        fetcher: Arc<dyn PageFetcher>,
        store: Arc<SnapshotStore>,
    ) -> Self {
        let normalizer = Arc::new(LexicalNormalizer::new());
        let classifier: Arc<dyn IntentClassifier> = Arc::new(KeywordIntentClassifier::new());
        let answerer = Arc::new(TopicAnswerer::new(config.clone(), fetcher));
        let fallback = FallbackSelector::new(
            config.clone(),
            normalizer.clone(),
            classifier.clone(),
            answerer.clone(),
        );

        ChatPipeline {
            matcher: StatisticalMatcher::new(config.primary_match_threshold),
            config,
            normalizer,
            classifier,
            answerer,
            fallback,
            store,
        }
    }

    /// The fallback selector, e.g. to inspect its generic phrases.
    pub fn fallback(&self) -> &FallbackSelector {
        &self.fallback
    }

    /// Answer a message.
    pub fn respond(&self, message: &str) -> String {
        self.respond_traced(message).text
    }

    /// Answer a message and report which step answered.
    pub fn respond_traced(&self, message: &str) -> PipelineReply {
        let text = message.trim().to_lowercase();
        if text.is_empty() {
            return PipelineReply {
                text: templates::welcome(&self.config),
                source: AnswerSource::Welcome,
                normalized: String::new(),
                classification: None,
            };
        }
        debug!("Original input: '{text}'");

        let normalized = self.normalizer.normalize(&text);
        let classification = self.classifier.classify(&normalized);

        if let Some(result) = classification {
            return PipelineReply {
                text: self.answerer.answer(result.intent),
                source: AnswerSource::Topic {
                    intent: result.intent,
                },
                normalized,
                classification,
            };
        }

        if let Some(outcome) = self.match_corpus(&normalized) {
            if let Some(response) = outcome.pick_response() {
                return PipelineReply {
                    text: response.to_string(),
                    source: AnswerSource::Corpus {
                        tag: outcome.tag.clone(),
                        score: outcome.score,
                    },
                    normalized,
                    classification,
                };
            }
        }

        PipelineReply {
            text: self.fallback.fallback(&text),
            source: AnswerSource::Fallback,
            normalized,
            classification,
        }
    }

    fn match_corpus(&self, normalized: &str) -> Option<MatchOutcome> {
        // One snapshot per request, even if a retrain swaps it meanwhile.
        let snapshot = self.store.current()?;
        match self.matcher.find(&snapshot, normalized) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Corpus match failed: {e}");
                None
            }
        }
    }
}
