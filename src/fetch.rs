//! Website page fetching.
//!
//! Page content reaches the assistant as a flat ordered list of text
//! fragments (titles, headings, paragraphs, list items). Fetching never
//! fails from the caller's point of view: any network or parsing problem
//! yields an empty list, which every consumer treats as "page unavailable".

pub mod fetcher;
pub mod http;
pub mod page;

// Re-export commonly used types
pub use fetcher::{PageFetcher, StaticPageFetcher};
pub use http::{HttpPageFetcher, extract_fragments};
pub use page::{PageId, SiteContent, fetch_site};
