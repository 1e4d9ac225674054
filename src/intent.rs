//! Topic intent classification.
//!
//! # Architecture
//!
//! - [`TopicIntent`]: the closed set of topics the assistant answers directly
//! - [`IntentGroup`]: keyword phrases attached to one topic
//! - [`IntentClassifier`]: common interface for classifiers
//! - [`KeywordIntentClassifier`]: exact phrase plus fuzzy word scoring
//!
//! # Example
//!
//! ```
//! use sitebot::intent::{IntentClassifier, KeywordIntentClassifier, TopicIntent};
//!
//! let classifier = KeywordIntentClassifier::new();
//! let result = classifier.classify("i want to do internship").unwrap();
//! assert_eq!(result.intent, TopicIntent::Internship);
//! assert!(classifier.classify("   ").is_none());
//! ```

mod classifier;
mod groups;
mod keyword_classifier;
mod label;

// Public exports
pub use classifier::{ClassificationResult, IntentClassifier};
pub use groups::IntentGroup;
pub use keyword_classifier::{KeywordIntentClassifier, contains_phrase};
pub use label::TopicIntent;
