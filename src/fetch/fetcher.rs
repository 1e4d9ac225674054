//! The page fetcher contract.

use std::collections::HashMap;

/// Fetches a page and returns its text fragments in document order.
///
/// Implementations must absorb every failure and return an empty list
/// instead.
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url`.
    fn fetch_page(&self, url: &str) -> Vec<String>;

    /// Get the name of this fetcher (for debugging).
    fn name(&self) -> &'static str;
}

/// A fetcher serving fixed fragments per URL.
///
/// Unknown URLs yield no fragments, so an empty instance behaves like a
/// site that is permanently unreachable.
#[derive(Debug, Clone, Default)]
pub struct StaticPageFetcher {
    pages: HashMap<String, Vec<String>>,
}

impl StaticPageFetcher {
    /// Create a fetcher with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn with_page<U, I, S>(mut self, url: U, fragments: I) -> Self
    where
        U: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(url, fragments);
        self
    }

    /// Add or replace a page.
    pub fn insert<U, I, S>(&mut self, url: U, fragments: I)
    where
        U: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages
            .insert(url.into(), fragments.into_iter().map(Into::into).collect());
    }
}

impl PageFetcher for StaticPageFetcher {
    fn fetch_page(&self, url: &str) -> Vec<String> {
        self.pages.get(url).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_fetcher() {
        let fetcher = StaticPageFetcher::new()
            .with_page("https://example.org/courses", ["Heading: Python Full Stack"]);

        assert_eq!(
            fetcher.fetch_page("https://example.org/courses"),
            vec!["Heading: Python Full Stack".to_string()]
        );
        assert!(fetcher.fetch_page("https://example.org/about").is_empty());
    }
}
