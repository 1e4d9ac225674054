//! Trained corpus and statistical matching.
//!
//! The corpus is an ordered list of (pattern, tag) entries plus a response
//! set per tag, indexed with TF-IDF vectors. It is trained offline, loaded
//! as an immutable [`CorpusSnapshot`] and published through a
//! [`SnapshotStore`] so that retraining can swap it atomically.

pub mod matcher;
pub mod persistence;
pub mod snapshot;
pub mod store;
pub mod tfidf;

// Re-export commonly used types
pub use matcher::{MatchOutcome, PRIMARY_MATCH_THRESHOLD, SIMPLE_MATCH_THRESHOLD, StatisticalMatcher};
pub use persistence::{load_snapshot, save_snapshot};
pub use snapshot::{CorpusEntry, CorpusSnapshot, VectorizerOptions};
pub use store::SnapshotStore;
pub use tfidf::{TfIdfVectorizer, VectorSpace, cosine_similarity};
