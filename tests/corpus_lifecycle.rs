//! Training, persistence and snapshot swapping.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sitebot::config::BotConfig;
use sitebot::corpus::{
    CorpusEntry, CorpusSnapshot, SnapshotStore, StatisticalMatcher, VectorizerOptions,
    load_snapshot,
};
use sitebot::fetch::StaticPageFetcher;
use sitebot::pipeline::{ChatService, ReplyStatus};
use sitebot::error::Result;
use sitebot::training::TrainingData;
use tempfile::TempDir;

fn config(dir: &TempDir) -> BotConfig {
    BotConfig {
        snapshot_path: dir.path().join("snapshot.bin"),
        training_data_path: Some(dir.path().join("training.json")),
        ..Default::default()
    }
}

fn snapshot(tags: &[&str], patterns_per_tag: usize) -> CorpusSnapshot {
    let mut entries = Vec::new();
    let mut responses = BTreeMap::new();
    for tag in tags {
        for i in 0..patterns_per_tag {
            entries.push(CorpusEntry::new(format!("{tag} question number{i}"), *tag));
        }
        responses.insert(tag.to_string(), vec![format!("{tag} answer")]);
    }
    CorpusSnapshot::build(entries, responses, VectorizerOptions::default()).unwrap()
}

#[test]
fn test_trained_snapshot_survives_restart() -> Result<()> {
    let dir = TempDir::new()?;

    let first = ChatService::new(config(&dir), Arc::new(StaticPageFetcher::new()))?;
    assert!(!first.stats().snapshot_loaded);
    assert_eq!(first.retrain().status, ReplyStatus::Success);
    let trained = first.stats();

    let second = ChatService::new(config(&dir), Arc::new(StaticPageFetcher::new()))?;
    let reloaded = second.stats();
    assert!(reloaded.snapshot_loaded);
    assert_eq!(reloaded.patterns, trained.patterns);
    assert_eq!(reloaded.tags, trained.tags);
    assert_eq!(reloaded.vocabulary_size, trained.vocabulary_size);
    assert_eq!(reloaded.trained_at, trained.trained_at);

    let data = TrainingData::load_json(dir.path().join("training.json"))?;
    assert_eq!(data.intent_count(), 12);
    assert_eq!(data.pattern_count(), trained.patterns);
    Ok(())
}

#[test]
fn test_corrupt_snapshot_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("snapshot.bin"), b"definitely not a snapshot")?;

    assert!(load_snapshot(dir.path().join("snapshot.bin")).is_err());

    let service = ChatService::new(config(&dir), Arc::new(StaticPageFetcher::new()))?;
    assert!(!service.store().is_loaded());
    Ok(())
}

#[test]
fn test_empty_corpus_never_matches() -> Result<()> {
    let empty = CorpusSnapshot::build(Vec::new(), BTreeMap::new(), VectorizerOptions::default())?;
    assert!(empty.is_empty());

    let matcher = StatisticalMatcher::primary();
    for text in ["", "internship", "anything at all"] {
        assert!(matcher.find(&empty, text)?.is_none());
    }
    Ok(())
}

#[test]
fn test_readers_see_consistent_snapshots_during_swaps() {
    let old = snapshot(&["alpha", "beta"], 3);
    let new = snapshot(&["gamma", "delta", "epsilon"], 5);
    let sizes = [old.len(), new.len()];

    let store = SnapshotStore::with_snapshot(old);
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let Some(current) = store.current() else {
                        continue;
                    };
                    assert!(sizes.contains(&current.len()));
                    assert_eq!(current.matrix().len(), current.entries().len());
                    for entry in current.entries() {
                        assert!(current.responses_for(&entry.tag).is_some());
                    }
                }
            });
        }

        for round in 0..50 {
            let next = if round % 2 == 0 {
                snapshot(&["gamma", "delta", "epsilon"], 5)
            } else {
                snapshot(&["alpha", "beta"], 3)
            };
            store.replace(next);
        }
        done.store(true, Ordering::Relaxed);
    });

    assert!(store.is_loaded());
}

#[test]
fn test_held_snapshot_outlives_replacement() {
    let store = SnapshotStore::with_snapshot(snapshot(&["alpha"], 2));
    let held = store.current().unwrap();

    store.replace(snapshot(&["beta"], 4));

    assert_eq!(held.len(), 2);
    assert!(held.responses_for("alpha").is_some());
    assert_eq!(store.current().unwrap().len(), 4);
}
