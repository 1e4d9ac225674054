//! HTTP page fetching and HTML text extraction.

use ::scraper::{ElementRef, Html, Selector};
use log::{debug, warn};
use reqwest::blocking::Client;

use crate::config::BotConfig;
use crate::error::{Result, SitebotError};
use crate::fetch::fetcher::PageFetcher;

/// Headings must be longer than this to be kept.
const MIN_HEADING_LEN: usize = 3;
/// Paragraphs must be longer than this to be kept.
const MIN_PARAGRAPH_LEN: usize = 20;
/// List items must be longer than this to be kept.
const MIN_LIST_ITEM_LEN: usize = 10;

/// Fetches pages over HTTP with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Create a fetcher using the configured timeout and user agent.
    pub fn new(config: &BotConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SitebotError::fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpPageFetcher { client })
    }

    fn try_fetch(&self, url: &str) -> Result<Vec<String>> {
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| SitebotError::fetch(e.to_string()))?;

        Ok(extract_fragments(&body))
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch_page(&self, url: &str) -> Vec<String> {
        match self.try_fetch(url) {
            Ok(fragments) => {
                debug!("Fetched {} fragments from {url}", fragments.len());
                fragments
            }
            Err(e) => {
                warn!("Error fetching {url}: {e}");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Extract the meaningful text fragments of an HTML document.
///
/// Emits, in this order: `Page Title: ...`, `Heading: ...` for every h1-h4,
/// paragraph text, and `• ...` for every list item. Script and style
/// content is ignored, and short fragments are dropped.
///
/// ```
/// use sitebot::fetch::extract_fragments;
///
/// let html = "<title>Courses</title><h2>Python Full Stack</h2><ul><li>Django and Flask</li></ul>";
/// assert_eq!(
///     extract_fragments(html),
///     vec!["Page Title: Courses", "Heading: Python Full Stack", "• Django and Flask"]
/// );
/// ```
pub fn extract_fragments(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut fragments = Vec::new();

    if let Some(title) = select_all(&document, "title").into_iter().next() {
        fragments.push(format!("Page Title: {}", visible_text(title)));
    }

    for heading in select_all(&document, "h1, h2, h3, h4") {
        let text = visible_text(heading);
        if text.chars().count() > MIN_HEADING_LEN {
            fragments.push(format!("Heading: {text}"));
        }
    }

    for paragraph in select_all(&document, "p") {
        let text = visible_text(paragraph);
        if text.chars().count() > MIN_PARAGRAPH_LEN {
            fragments.push(text);
        }
    }

    if let Some(item_selector) = parse_selector("li") {
        for list in select_all(&document, "ul, ol") {
            for item in list.select(&item_selector) {
                let text = visible_text(item);
                if text.chars().count() > MIN_LIST_ITEM_LEN {
                    fragments.push(format!("• {text}"));
                }
            }
        }
    }

    fragments
}

fn parse_selector(selector: &str) -> Option<Selector> {
    Selector::parse(selector).ok()
}

fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(selector) {
        Some(selector) => document.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Trimmed text of an element, skipping script and style descendants.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        let Some(chunk) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| matches!(e.name(), "script" | "style"))
        });
        if !hidden {
            text.push_str(chunk);
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::{Duration, Instant};

    use super::*;

    fn quick_fetcher() -> HttpPageFetcher {
        let config = BotConfig {
            fetch_timeout_secs: 1,
            ..Default::default()
        };
        HttpPageFetcher::new(&config).unwrap()
    }

    #[test]
    fn test_length_filters() {
        let html = r#"
            <html><head><title> Brainovision </title><style>p { color: red; }</style></head>
            <body>
              <h1>Home</h1>
              <h3>Internship Program</h3>
              <p>Short text.</p>
              <p>We offer a three month internship with stipend.</p>
              <ol><li>Tiny</li><li>Placement assistance</li></ol>
            </body></html>"#;

        assert_eq!(
            extract_fragments(html),
            vec![
                "Page Title: Brainovision",
                "Heading: Home",
                "Heading: Internship Program",
                "We offer a three month internship with stipend.",
                "• Placement assistance",
            ]
        );
    }

    #[test]
    fn test_short_course_headings_down_to_h4() {
        let html = "<h4>Java</h4><h4>AI</h4><h5>Python Full Stack</h5>";
        assert_eq!(extract_fragments(html), vec!["Heading: Java"]);
    }

    #[test]
    fn test_script_content_is_ignored() {
        let html = "<p>Visible paragraph text here.<script>var hidden = 'secret';</script></p>";
        assert_eq!(extract_fragments(html), vec!["Visible paragraph text here."]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_fragments("").is_empty());
    }

    #[test]
    fn test_unreachable_host_yields_no_fragments() {
        assert!(quick_fetcher().fetch_page("http://127.0.0.1:9/nothing").is_empty());
    }

    #[test]
    fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(5));
                drop(stream);
            }
        });

        let started = Instant::now();
        let fragments = quick_fetcher().fetch_page(&format!("http://{addr}/internship"));
        assert!(fragments.is_empty());
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn test_error_status_yields_no_fragments() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let body = "<html><h1>Page Not Found</h1>\
                            <p>The internship page you requested does not exist.</p></html>";
                let response = format!(
                    "HTTP/1.1 404 Not Found\r\nContent-Type: text/html\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        let fragments = quick_fetcher().fetch_page(&format!("http://{addr}/internship"));
        assert!(fragments.is_empty());
    }
}
