//! Answer production: topic answers, canned texts and fallbacks.

pub mod fallback;
pub mod templates;
pub mod topic;

pub use fallback::FallbackSelector;
pub use topic::{TopicAnswerer, course_headings};
