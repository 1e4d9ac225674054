//! The request/response boundary shared by the HTTP server and the CLI.
//!
//! [`ChatService`] owns the active snapshot store, both pipelines and the
//! trainer. It never lets an error or a panic escape: chat failures turn
//! into the apology envelope and training failures into an error
//! [`TrainReply`] while the previous snapshot stays active.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::answer::templates;
use crate::config::BotConfig;
use crate::corpus::persistence::load_snapshot;
use crate::corpus::store::SnapshotStore;
use crate::error::{Result, SitebotError};
use crate::fetch::fetcher::PageFetcher;
use crate::pipeline::orchestrator::{ChatPipeline, PipelineReply};
use crate::pipeline::simple::SimplePipeline;
use crate::training::trainer::Trainer;

/// Message shown after a successful retrain.
pub const TRAIN_SUCCESS_MESSAGE: &str =
    "Smart chatbot trained successfully! Now understands spelling mistakes.";

/// Outcome marker of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    /// The request was handled.
    Success,
    /// The request failed; the text is safe to show.
    Error,
}

/// Inbound chat message. A missing message is treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's text.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// A request carrying `message`.
    pub fn new<S: Into<String>>(message: S) -> Self {
        ChatRequest {
            message: Some(message.into()),
        }
    }
}

/// Outbound chat envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Outcome marker.
    pub status: ReplyStatus,
    /// Text to display.
    pub response: String,
}

/// Outbound retrain envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReply {
    /// Outcome marker.
    pub status: ReplyStatus,
    /// Human readable summary.
    pub message: String,
    /// Number of intents in the new corpus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents_count: Option<usize>,
}

/// Which engine answers chat requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Spelling correction, topic answers, trained corpus and fallback.
    #[default]
    Smart,
    /// Keyword rules and the built-in knowledge base.
    Simple,
}

/// Summary of the service state.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    /// Organization the service answers for.
    pub organization: String,
    /// Whether a trained corpus is active.
    pub snapshot_loaded: bool,
    /// Patterns in the active corpus.
    pub patterns: usize,
    /// Distinct tags in the active corpus.
    pub tags: usize,
    /// Size of the active vector space.
    pub vocabulary_size: usize,
    /// When the active corpus was built.
    pub trained_at: Option<DateTime<Utc>>,
    /// Patterns in the simple engine's knowledge base.
    pub simple_patterns: usize,
}

/// Entry point for chat and retrain requests.
pub struct ChatService {
    config: Arc<BotConfig>,
    store: Arc<SnapshotStore>,
    pipeline: ChatPipeline,
    simple: SimplePipeline,
    trainer: Trainer,
    retrain_lock: Mutex<()>,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("organization", &self.config.organization_name)
            .field("pipeline", &self.pipeline)
            .field("simple", &self.simple)
            .field("trainer", &self.trainer)
            .finish()
    }
}

impl ChatService {
    /// Create a service and load the persisted snapshot, if any.
    ///
    /// A missing snapshot leaves the store empty. So does a corrupt one,
    /// after logging why it was rejected.
    pub fn new(config: BotConfig, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let store = SnapshotStore::new();
        match load_snapshot(&config.snapshot_path) {
            Ok(Some(snapshot)) => {
                info!(
                    "Loaded corpus snapshot with {} patterns from {}",
                    snapshot.len(),
                    config.snapshot_path.display()
                );
                store.replace(snapshot);
            }
            Ok(None) => {
                warn!("Model not found. Please train the chatbot first.");
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable snapshot {}: {e}",
                    config.snapshot_path.display()
                );
            }
        }

        Self::with_store(config, fetcher, Arc::new(store))
    }

    /// Create a service around an existing store without touching disk.
    pub fn with_store(
        config: BotConfig,
        fetcher: Arc<dyn PageFetcher>,
        store: Arc<SnapshotStore>,
    ) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);

        Ok(ChatService {
            pipeline: ChatPipeline::new(config.clone(), fetcher.clone(), store.clone()),
            simple: SimplePipeline::new(config.clone())?,
            trainer: Trainer::new(config.clone(), fetcher),
            retrain_lock: Mutex::new(()),
            config,
            store,
        })
    }

    /// Shared configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The active snapshot store.
    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// The main pipeline.
    pub fn pipeline(&self) -> &ChatPipeline {
        &self.pipeline
    }

    /// The simplified pipeline.
    pub fn simple(&self) -> &SimplePipeline {
        &self.simple
    }

    /// Answer a chat request with the main engine.
    pub fn handle_chat(&self, request: ChatRequest) -> ChatReply {
        self.handle_chat_with(request, Engine::Smart)
    }

    /// Answer a chat request with the chosen engine.
    pub fn handle_chat_with(&self, request: ChatRequest, engine: Engine) -> ChatReply {
        let message = request.message.unwrap_or_default();

        let outcome = catch_unwind(AssertUnwindSafe(|| match engine {
            Engine::Smart => Ok(self.pipeline.respond(&message)),
            Engine::Simple => self.simple.respond(&message),
        }));

        match outcome {
            Ok(Ok(response)) => ChatReply {
                status: ReplyStatus::Success,
                response,
            },
            Ok(Err(e)) => {
                error!("Chat request failed: {e}");
                self.apology()
            }
            Err(panic) => {
                error!("Chat request panicked: {}", panic_message(&*panic));
                self.apology()
            }
        }
    }

    /// Answer with the main engine and report which step answered.
    pub fn explain(&self, message: &str) -> Result<PipelineReply> {
        catch_unwind(AssertUnwindSafe(|| self.pipeline.respond_traced(message)))
            .map_err(|panic| SitebotError::internal(panic_message(&*panic)))
    }

    /// Rebuild the corpus from the website and swap it in.
    ///
    /// Concurrent calls are serialized. On failure the previous snapshot
    /// stays active.
    pub fn retrain(&self) -> TrainReply {
        let _guard = self.retrain_lock.lock();

        let outcome = catch_unwind(AssertUnwindSafe(|| self.trainer.train()))
            .unwrap_or_else(|panic| Err(SitebotError::internal(panic_message(&*panic))));

        match outcome {
            Ok(outcome) => {
                let intents_count = outcome.intents_count;
                self.store.replace(outcome.snapshot);
                info!(
                    "Activated new corpus: {} intents, {} patterns",
                    intents_count, outcome.patterns_count
                );
                TrainReply {
                    status: ReplyStatus::Success,
                    message: TRAIN_SUCCESS_MESSAGE.to_string(),
                    intents_count: Some(intents_count),
                }
            }
            Err(e) => {
                error!("Training failed, keeping the previous corpus: {e}");
                TrainReply {
                    status: ReplyStatus::Error,
                    message: e.to_string(),
                    intents_count: None,
                }
            }
        }
    }

    /// Describe the current state of the service.
    pub fn stats(&self) -> ServiceStats {
        let snapshot = self.store.current();
        ServiceStats {
            organization: self.config.organization_name.clone(),
            snapshot_loaded: snapshot.is_some(),
            patterns: snapshot.as_ref().map_or(0, |s| s.len()),
            tags: snapshot.as_ref().map_or(0, |s| s.tag_count()),
            vocabulary_size: snapshot
                .as_ref()
                .map_or(0, |s| s.vectorizer().vocabulary_size()),
            trained_at: snapshot.as_ref().map(|s| s.trained_at()),
            simple_patterns: self.simple.knowledge().pattern_count(),
        }
    }

    fn apology(&self) -> ChatReply {
        ChatReply {
            status: ReplyStatus::Error,
            response: templates::apology(&self.config),
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
