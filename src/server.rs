//! HTTP adapter for [`ChatService`].
//!
//! Routes:
//!
//! - `POST /api/chat` with `{"message": "..."}` returns a [`ChatReply`].
//! - `GET|POST /train` rebuilds the corpus and returns a [`TrainReply`].
//! - `GET /health` reports whether a corpus is loaded.
//!
//! Logical failures are reported inside the JSON envelope; the HTTP status
//! stays 200.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde::Serialize;

use crate::answer::templates;
use crate::error::Result;
use crate::pipeline::service::{ChatReply, ChatRequest, ChatService, ReplyStatus, TrainReply};

/// Health report.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReply {
    /// Always "ok" while the process is serving.
    pub status: &'static str,
    /// Whether a trained corpus is active.
    pub snapshot_loaded: bool,
    /// Crate version.
    pub version: &'static str,
}

/// Build the router for a shared service.
pub fn router(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/train", get(train).post(train))
        .route("/health", get(health))
        .with_state(service)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(service: Arc<ChatService>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn chat(State(service): State<Arc<ChatService>>, body: Bytes) -> Json<ChatReply> {
    // Unparseable bodies count as a missing message.
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();

    let worker = service.clone();
    match tokio::task::spawn_blocking(move || worker.handle_chat(request)).await {
        Ok(reply) => Json(reply),
        Err(e) => {
            error!("Chat worker failed: {e}");
            Json(ChatReply {
                status: ReplyStatus::Error,
                response: templates::apology(service.config()),
            })
        }
    }
}

async fn train(State(service): State<Arc<ChatService>>) -> Json<TrainReply> {
    match tokio::task::spawn_blocking(move || service.retrain()).await {
        Ok(reply) => Json(reply),
        Err(e) => {
            error!("Training worker failed: {e}");
            Json(TrainReply {
                status: ReplyStatus::Error,
                message: e.to_string(),
                intents_count: None,
            })
        }
    }
}

async fn health(State(service): State<Arc<ChatService>>) -> Json<HealthReply> {
    Json(HealthReply {
        status: "ok",
        snapshot_loaded: service.store().is_loaded(),
        version: crate::VERSION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotConfig;
    use crate::fetch::fetcher::StaticPageFetcher;

    fn service(dir: &tempfile::TempDir) -> Arc<ChatService> {
        let config = BotConfig {
            snapshot_path: dir.path().join("snapshot.bin"),
            training_data_path: None,
            ..Default::default()
        };
        Arc::new(ChatService::new(config, Arc::new(StaticPageFetcher::new())).unwrap())
    }

    #[tokio::test]
    async fn test_chat_handler_tolerates_bad_body() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let Json(reply) = chat(State(service.clone()), Bytes::from_static(b"not json")).await;
        assert_eq!(reply.status, ReplyStatus::Success);
        assert_eq!(reply.response, templates::welcome(service.config()));
    }

    #[tokio::test]
    async fn test_chat_handler_answers() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let body = Bytes::from_static(br#"{"message": "tell me about intership stipend"}"#);
        let Json(reply) = chat(State(service), body).await;
        assert_eq!(reply.status, ReplyStatus::Success);
        assert!(reply.response.contains("Internship"));
    }

    #[tokio::test]
    async fn test_train_then_health() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let Json(before) = health(State(service.clone())).await;
        assert!(!before.snapshot_loaded);

        let Json(reply) = train(State(service.clone())).await;
        assert_eq!(reply.status, ReplyStatus::Success);

        let Json(after) = health(State(service)).await;
        assert!(after.snapshot_loaded);
    }
}
