//! Retraining: fetch the site, derive the corpus, build and persist the index.

use std::sync::Arc;

use log::info;

use crate::config::BotConfig;
use crate::corpus::persistence::save_snapshot;
use crate::corpus::snapshot::{CorpusSnapshot, VectorizerOptions};
use crate::error::Result;
use crate::fetch::fetcher::PageFetcher;
use crate::fetch::page::fetch_site;
use crate::training::data::TrainingData;

/// Result of a successful training run.
#[derive(Debug)]
pub struct TrainingOutcome {
    /// Number of intents in the training set.
    pub intents_count: usize,
    /// Number of patterns indexed.
    pub patterns_count: usize,
    /// Number of site pages that returned content.
    pub pages_available: usize,
    /// The freshly built snapshot, already persisted.
    pub snapshot: CorpusSnapshot,
}

/// Builds new corpus snapshots from the live website.
pub struct Trainer {
    config: Arc<BotConfig>,
    fetcher: Arc<dyn PageFetcher>,
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("snapshot_path", &self.config.snapshot_path)
            .field("fetcher", &self.fetcher.name())
            .finish()
    }
}

impl Trainer {
    /// Create a new trainer.
    pub fn new(config: Arc<BotConfig>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Trainer { config, fetcher }
    }

    /// Vectorizer settings used for trained corpora.
    pub fn vectorizer_options(&self) -> VectorizerOptions {
        VectorizerOptions {
            max_features: Some(self.config.max_features),
            ..Default::default()
        }
    }

    /// Run a full training pass.
    ///
    /// Nothing is written unless the snapshot builds successfully.
    pub fn train(&self) -> Result<TrainingOutcome> {
        info!("Scraping {} ...", self.config.base_url);
        let site = fetch_site(self.fetcher.as_ref(), &self.config);
        info!("Website scraping completed");

        let data = TrainingData::generate(&site, &self.config);
        let snapshot = data.build_snapshot(self.vectorizer_options())?;

        if let Some(path) = &self.config.training_data_path {
            data.save_json(path)?;
        }
        save_snapshot(&self.config.snapshot_path, &snapshot)?;

        info!(
            "Generated {} intents with {} patterns",
            data.intent_count(),
            data.pattern_count()
        );
        Ok(TrainingOutcome {
            intents_count: data.intent_count(),
            patterns_count: snapshot.len(),
            pages_available: site.available_pages(),
            snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::persistence::load_snapshot;
    use crate::fetch::fetcher::StaticPageFetcher;

    #[test]
    fn test_offline_training_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Arc::new(BotConfig {
            snapshot_path: dir.path().join("snapshot.bin"),
            training_data_path: Some(dir.path().join("training.json")),
            ..Default::default()
        });
        let trainer = Trainer::new(config.clone(), Arc::new(StaticPageFetcher::new()));

        let outcome = trainer.train().unwrap();
        assert_eq!(outcome.intents_count, 12);
        assert_eq!(outcome.pages_available, 0);
        assert!(outcome.snapshot.vectorizer().vocabulary_size() <= config.max_features);

        let reloaded = load_snapshot(&config.snapshot_path).unwrap().unwrap();
        assert_eq!(reloaded.len(), outcome.patterns_count);
        assert!(dir.path().join("training.json").exists());
    }
}
