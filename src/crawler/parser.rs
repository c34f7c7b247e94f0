//! HTML parser for extracting page text and anchor targets
//!
//! This module handles parsing HTML content to extract:
//! - Visible text, used for tokenization and fingerprints
//! - Raw `href` values of `<a>` tags, resolved later against the request URL

use crate::url::resolve_href;
use crate::UrlError;
use scraper::{Html, Selector};
use url::Url;

/// Elements whose text never reaches the reader
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Text nodes joined by single spaces
    pub text: String,

    /// `href` attribute of every anchor, in document order
    pub hrefs: Vec<String>,
}

impl ParsedPage {
    /// Lowercased text with whitespace runs collapsed to single spaces
    ///
    /// This is the form used for hashing, shingling, and tokens, so mirrors
    /// that differ only in indentation or markup hash identically.
    pub fn normalized_text(&self) -> String {
        self.text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Parses HTML content and extracts text and anchors
///
/// # Example
///
/// ```
/// use crawl_sieve::crawler::parse_html;
///
/// let html = r#"<html><body><p>Hello</p><a href="/next">Next</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.text, "Hello Next");
/// assert_eq!(parsed.hrefs, vec!["/next"]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        text: extract_text(&document),
        hrefs: extract_hrefs(&document),
    }
}

/// Collects visible text, skipping script and style bodies
fn extract_text(document: &Html) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| SKIPPED_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let text = text.trim();
        if !text.is_empty() {
            pieces.push(text);
        }
    }

    pieces.join(" ")
}

/// Collects the raw `href` of every anchor
fn extract_hrefs(document: &Html) -> Vec<String> {
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

/// Resolves anchor targets against the request URL
///
/// Fragments are stripped and nothing is filtered. Hrefs that cannot be
/// resolved are returned separately so the caller can report them while
/// keeping the rest of the page.
///
/// # Returns
///
/// A tuple of (absolute URLs, errors for the hrefs that were skipped)
pub fn resolve_links(request_url: &Url, hrefs: &[String]) -> (Vec<String>, Vec<UrlError>) {
    let mut links = Vec::with_capacity(hrefs.len());
    let mut malformed = Vec::new();

    for href in hrefs {
        match resolve_href(request_url, href) {
            Ok(link) => links.push(link),
            Err(e) => {
                tracing::warn!("Skipping anchor on {}: {}", request_url, e);
                malformed.push(e);
            }
        }
    }

    (links, malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_url() -> Url {
        Url::parse("https://www.ics.uci.edu/about/index.php").unwrap()
    }

    #[test]
    fn test_extract_text() {
        let html = r#"<html><head><title>About</title></head>
            <body><h1>ICS</h1><p>Research  and <b>teaching</b></p></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.text, "About ICS Research  and teaching");
    }

    #[test]
    fn test_adjacent_elements_do_not_merge_words() {
        let parsed = parse_html("<p>alpha</p><p>beta</p>");
        assert_eq!(parsed.text, "alpha beta");
    }

    #[test]
    fn test_script_and_style_skipped() {
        let html = r#"<html><head><style>body { color: red }</style>
            <script>var tracking = 1;</script></head>
            <body>visible<noscript>enable js</noscript></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.text, "visible");
    }

    #[test]
    fn test_normalized_text_is_lowercase() {
        let parsed = parse_html("<p>Machine LEARNING</p>");
        assert_eq!(parsed.normalized_text(), "machine learning");
    }

    #[test]
    fn test_normalized_text_collapses_whitespace() {
        let flat = parse_html("<p>alpha beta gamma</p>");
        let indented = parse_html("<div>\n  <p>\n    Alpha\n    beta   gamma\n  </p>\n</div>");
        assert_eq!(indented.normalized_text(), "alpha beta gamma");
        assert_eq!(indented.normalized_text(), flat.normalized_text());
    }

    #[test]
    fn test_extract_hrefs_in_order() {
        let html = r##"<body>
            <a href="/one">1</a>
            <a name="anchor-without-href">x</a>
            <a href="two#frag">2</a>
            <a href="mailto:a@b.edu">mail</a>
            <a href="">self</a>
        </body>"##;
        let parsed = parse_html(html);
        assert_eq!(parsed.hrefs, vec!["/one", "two#frag", "mailto:a@b.edu", ""]);
    }

    #[test]
    fn test_resolve_links_against_request_url() {
        let hrefs = vec![
            "/one".to_string(),
            "two#frag".to_string(),
            "https://vision.ics.uci.edu/#top".to_string(),
        ];
        let (links, malformed) = resolve_links(&request_url(), &hrefs);
        assert_eq!(
            links,
            vec![
                "https://www.ics.uci.edu/one",
                "https://www.ics.uci.edu/about/two",
                "https://vision.ics.uci.edu/",
            ]
        );
        assert!(malformed.is_empty());
    }

    #[test]
    fn test_special_schemes_pass_through_unfiltered() {
        let hrefs = vec!["mailto:a@b.edu".to_string(), "javascript:void(0)".to_string()];
        let (links, _) = resolve_links(&request_url(), &hrefs);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], "mailto:a@b.edu");
    }

    #[test]
    fn test_malformed_href_skipped_rest_kept() {
        let hrefs = vec![
            "/before".to_string(),
            "http://".to_string(),
            "/after".to_string(),
        ];
        let (links, malformed) = resolve_links(&request_url(), &hrefs);
        assert_eq!(
            links,
            vec!["https://www.ics.uci.edu/before", "https://www.ics.uci.edu/after"]
        );
        assert_eq!(malformed.len(), 1);
    }
}
