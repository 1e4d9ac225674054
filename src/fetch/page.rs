//! The organization's website pages.

use std::collections::BTreeMap;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BotConfig;
use crate::fetch::fetcher::PageFetcher;

/// A page of the organization's website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    /// The landing page.
    Home,
    /// The course catalog.
    Courses,
    /// The internship page.
    Internship,
    /// The about page.
    About,
    /// The contact page.
    Contact,
}

impl PageId {
    /// Every page, in scraping order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Courses,
        PageId::Internship,
        PageId::About,
        PageId::Contact,
    ];

    /// Path of the page below the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            PageId::Home => "",
            PageId::Courses => "courses",
            PageId::Internship => "internship",
            PageId::About => "about",
            PageId::Contact => "contact",
        }
    }

    /// Absolute URL of the page.
    pub fn url(&self, config: &BotConfig) -> String {
        config.page_url(self.path())
    }
}

/// Fragments fetched for every page of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pages: BTreeMap<PageId, Vec<String>>,
}

impl SiteContent {
    /// Create empty site content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragments of a page.
    pub fn insert(&mut self, page: PageId, fragments: Vec<String>) {
        self.pages.insert(page, fragments);
    }

    /// Fragments of a page, empty if it was not fetched.
    pub fn page(&self, page: PageId) -> &[String] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fragments of several pages, concatenated in the given order.
    pub fn combined(&self, pages: &[PageId]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|page| self.page(*page).iter().cloned())
            .collect()
    }

    /// Number of pages that returned at least one fragment.
    pub fn available_pages(&self) -> usize {
        self.pages.values().filter(|f| !f.is_empty()).count()
    }
}

/// Fetch every page of the site in parallel.
pub fn fetch_site(fetcher: &dyn PageFetcher, config: &BotConfig) -> SiteContent {
    let fetched: Vec<(PageId, Vec<String>)> = PageId::ALL
        .par_iter()
        .map(|page| (*page, fetcher.fetch_page(&page.url(config))))
        .collect();

    let mut content = SiteContent::new();
    for (page, fragments) in fetched {
        info!("Fetched {} fragments from {:?} page", fragments.len(), page);
        content.insert(page, fragments);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fetcher::StaticPageFetcher;

    #[test]
    fn test_page_urls() {
        let config = BotConfig::default();
        assert_eq!(PageId::Home.url(&config), "https://www.brainovision.in");
        assert_eq!(
            PageId::Internship.url(&config),
            "https://www.brainovision.in/internship"
        );
    }

    #[test]
    fn test_fetch_site() {
        let config = BotConfig::default();
        let fetcher = StaticPageFetcher::new()
            .with_page(PageId::About.url(&config), ["We train engineers."])
            .with_page(PageId::Home.url(&config), ["Page Title: Home"]);

        let content = fetch_site(&fetcher, &config);
        assert_eq!(content.available_pages(), 2);
        assert!(content.page(PageId::Courses).is_empty());
        assert_eq!(
            content.combined(&[PageId::About, PageId::Home]),
            vec!["We train engineers.".to_string(), "Page Title: Home".to_string()]
        );
    }
}
