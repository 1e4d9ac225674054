//! # sitebot
//!
//! A spelling-tolerant, rule-and-retrieval question answering assistant for
//! one organization's website.
//!
//! ## Features
//!
//! - Spelling normalization against a domain vocabulary
//! - Keyword and fuzzy intent classification
//! - Topic answers with live page content and static fallbacks
//! - TF-IDF retrieval over a corpus trained from the website
//! - Atomic corpus retraining behind a shared snapshot store
//! - HTTP server and CLI front ends

pub mod analysis;
pub mod answer;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fetch;
pub mod intent;
pub mod pipeline;
pub mod server;
pub mod spelling;
pub mod training;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
