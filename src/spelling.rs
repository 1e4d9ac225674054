//! Spelling tolerance for user questions.
//!
//! Users misspell the handful of domain words the assistant cares about
//! ("intenship", "pyton", "brainovison"). This module provides the string
//! similarity measures, the correction vocabulary and the normalizer that
//! maps misspelled tokens back to their canonical terms before intent
//! classification.

pub mod levenshtein;
pub mod normalizer;
pub mod similarity;
pub mod vocabulary;

// Re-export commonly used types
pub use levenshtein::*;
pub use normalizer::*;
pub use similarity::*;
pub use vocabulary::*;
