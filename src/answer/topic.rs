//! Direct answers for resolved topic intents.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use log::{debug, warn};

use crate::answer::templates;
use crate::config::BotConfig;
use crate::fetch::fetcher::PageFetcher;
use crate::fetch::page::PageId;
use crate::intent::TopicIntent;

/// Only the first this many headings of the course page are considered.
const MAX_HEADINGS_SCANNED: usize = 8;
/// At most this many courses are listed.
const MAX_COURSES_LISTED: usize = 6;

/// Maps every topic intent to its answer.
///
/// Internship and course answers consult the live website first and fall
/// back to static text when the page yields nothing usable.
pub struct TopicAnswerer {
    config: Arc<BotConfig>,
    fetcher: Arc<dyn PageFetcher>,
}

impl std::fmt::Debug for TopicAnswerer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopicAnswerer")
            .field("base_url", &self.config.base_url)
            .field("fetcher", &self.fetcher.name())
            .finish()
    }
}

impl TopicAnswerer {
    /// Create a new answerer.
    pub fn new(config: Arc<BotConfig>, fetcher: Arc<dyn PageFetcher>) -> Self {
        TopicAnswerer { config, fetcher }
    }

    /// Answer a topic.
    pub fn answer(&self, intent: TopicIntent) -> String {
        let config = &self.config;
        match intent {
            TopicIntent::Internship => self.internship(),
            TopicIntent::Courses => self.courses(),
            TopicIntent::Python
            | TopicIntent::Java
            | TopicIntent::AiMl
            | TopicIntent::DataScience => templates::program(config, intent)
                .unwrap_or_else(|| templates::course_information(config, intent)),
            TopicIntent::Contact => templates::contact(config),
            TopicIntent::About => templates::about(config),
        }
    }

    fn internship(&self) -> String {
        let fragments = self.fetch(PageId::Internship);
        let mentions_internship = fragments
            .iter()
            .any(|fragment| fragment.to_lowercase().contains("internship"));

        if mentions_internship {
            templates::internship_from_website(&self.config)
        } else {
            templates::internship_static(&self.config)
        }
    }

    fn courses(&self) -> String {
        let fragments = self.fetch(PageId::Courses);
        let courses = course_headings(&fragments);

        if courses.is_empty() {
            templates::courses_static(&self.config)
        } else {
            templates::courses_from_website(&self.config, &courses)
        }
    }

    fn fetch(&self, page: PageId) -> Vec<String> {
        let url = page.url(&self.config);
        let fragments = catch_unwind(AssertUnwindSafe(|| self.fetcher.fetch_page(&url)))
            .unwrap_or_else(|_| {
                warn!("Fetcher {} panicked on {url}", self.fetcher.name());
                Vec::new()
            });
        if fragments.is_empty() {
            debug!("No live content from {url}, using static answer");
        }
        fragments
    }
}

/// Course names taken from the heading fragments of the course page.
pub fn course_headings(fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .filter_map(|fragment| fragment.strip_prefix("Heading: "))
        .take(MAX_HEADINGS_SCANNED)
        .map(str::trim)
        .filter(|heading| {
            let len = heading.chars().count();
            len > 3 && len < 100
        })
        .take(MAX_COURSES_LISTED)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fetcher::StaticPageFetcher;

    fn answerer(fetcher: StaticPageFetcher) -> TopicAnswerer {
        TopicAnswerer::new(Arc::new(BotConfig::default()), Arc::new(fetcher))
    }

    #[test]
    fn test_every_intent_has_an_answer() {
        let answerer = answerer(StaticPageFetcher::new());
        for intent in TopicIntent::ALL {
            assert!(!answerer.answer(intent).is_empty());
        }
    }

    #[test]
    fn test_internship_falls_back_when_offline() {
        let answer = answerer(StaticPageFetcher::new()).answer(TopicIntent::Internship);
        assert!(answer.contains("3-Month Paid Internship"));
        assert!(answer.contains("stipend"));
    }

    #[test]
    fn test_internship_uses_live_page() {
        let config = BotConfig::default();
        let fetcher = StaticPageFetcher::new().with_page(
            PageId::Internship.url(&config),
            ["Heading: Internship Opportunities"],
        );
        let answer = answerer(fetcher).answer(TopicIntent::Internship);
        assert!(answer.contains("Based on our website"));
    }

    #[test]
    fn test_courses_from_headings() {
        let config = BotConfig::default();
        let fetcher = StaticPageFetcher::new().with_page(
            PageId::Courses.url(&config),
            [
                "Page Title: Courses",
                "Heading: Python Full Stack",
                "A paragraph about our courses and programs.",
                "Heading: Java Full Stack",
            ],
        );
        let answer = answerer(fetcher).answer(TopicIntent::Courses);
        assert!(answer.contains("• Python Full Stack\n• Java Full Stack"));
    }

    #[test]
    fn test_courses_static_without_headings() {
        let answer = answerer(StaticPageFetcher::new()).answer(TopicIntent::Courses);
        assert!(answer.contains("Our Course Catalog"));
    }

    #[test]
    fn test_course_headings_limits() {
        let fragments: Vec<String> = (0..10)
            .map(|i| format!("Heading: Course number {i}"))
            .chain(std::iter::once(format!("Heading: {}", "x".repeat(120))))
            .collect();
        let headings = course_headings(&fragments);
        assert_eq!(headings.len(), 6);
        assert_eq!(headings[0], "Course number 0");

        let too_long = vec![format!("Heading: {}", "x".repeat(120))];
        assert!(course_headings(&too_long).is_empty());
    }

    #[derive(Debug)]
    struct PanickingFetcher;

    impl PageFetcher for PanickingFetcher {
        fn fetch_page(&self, _url: &str) -> Vec<String> {
            panic!("connection pool poisoned")
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    #[test]
    fn test_panicking_fetcher_uses_static_answers() {
        let answerer = TopicAnswerer::new(Arc::new(BotConfig::default()), Arc::new(PanickingFetcher));

        let internship = answerer.answer(TopicIntent::Internship);
        assert!(internship.contains("3-Month Paid Internship"));
        assert!(internship.contains("stipend"));

        let courses = answerer.answer(TopicIntent::Courses);
        assert!(courses.contains("Our Course Catalog"));
    }
}
