//! Corpus training from website content.

pub mod data;
pub mod patterns;
pub mod trainer;

pub use data::{IntentDefinition, TrainingData};
pub use trainer::{Trainer, TrainingOutcome};
