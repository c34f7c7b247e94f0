//! Integration tests for the decision engine
//!
//! These tests drive the engine the way a host crawler would: one response
//! at a time, reading the report file between calls.

use crawl_sieve::config::{parse_config, Config};
use crawl_sieve::{PageOutcome, PageResponse, Sieve};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Creates a default-scope configuration writing its report into `dir`
fn create_test_config(dir: &TempDir) -> Config {
    let report_path = dir.path().join("report.txt");
    let mut config = Config::default();
    config.output.report_path = Some(report_path.display().to_string());
    config
}

/// An HTML page of `count` distinct words sharing a prefix
fn page_with_words(prefix: &str, count: usize, links: &[&str]) -> String {
    let words = (0..count)
        .map(|i| format!("{}{}", prefix, i))
        .collect::<Vec<_>>()
        .join(" ");
    let anchors = links
        .iter()
        .map(|href| format!(r#"<a href="{}">more</a>"#, href))
        .collect::<String>();
    format!(
        "<html><head><title>Page</title></head><body><p>{}</p>{}</body></html>",
        words, anchors
    )
}

fn read_report(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("report.txt")).expect("report should exist")
}

#[test]
fn test_end_to_end_crawl_sequence() {
    let dir = tempdir().unwrap();
    let mut sieve = Sieve::new(create_test_config(&dir));

    // Page A: 300 unique tokens, accepted
    let url_a = "https://www.ics.uci.edu/research/overview";
    let html_a = page_with_words("topic", 300, &["/people", "https://www.google.com/"]);
    let response_a = PageResponse::ok(url_a, html_a.clone());
    let report_a = sieve.process_page(url_a, Some(&response_a)).unwrap();

    assert_eq!(report_a.outcome, PageOutcome::Accepted);
    assert_eq!(report_a.links, vec!["https://www.ics.uci.edu/people"]);
    assert!(read_report(&dir).starts_with("unique urls: 1\n"));

    // Page B: byte-identical text under a different URL. The discovery
    // counter grows; the crawled-page counter does not.
    let url_b = "https://www.ics.uci.edu/community/news/mirror";
    let response_b = PageResponse::ok(url_b, html_a);
    let report_b = sieve.process_page(url_b, Some(&response_b)).unwrap();

    assert_eq!(report_b.outcome, PageOutcome::ExactDuplicate);
    assert!(report_b.links.is_empty());
    let text = read_report(&dir);
    assert!(text.starts_with("unique urls: 2\n"));
    assert!(text.contains("crawled pages: 1\n"));

    // Page C: nearly the same URL string as B, rejected before its content is read
    let url_c = "https://www.ics.uci.edu/community/news/mirrors";
    let response_c = PageResponse::ok(url_c, page_with_words("fresh", 300, &["/x"]));
    let report_c = sieve.process_page(url_c, Some(&response_c)).unwrap();

    assert_eq!(report_c.outcome, PageOutcome::UrlTrap);
    assert!(report_c.links.is_empty());
    assert_eq!(sieve.crawled_pages(), 1);

    // Page D: a strict subdomain of the root
    let url_d = "https://vision.ics.uci.edu/projects/segmentation";
    let response_d = PageResponse::ok(url_d, page_with_words("vision", 250, &[]));
    let report_d = sieve.process_page(url_d, Some(&response_d)).unwrap();

    assert_eq!(report_d.outcome, PageOutcome::Accepted);
    let report = sieve.report();
    assert_eq!(
        sieve
            .stats()
            .subdomain_counts()
            .get("https://vision.ics.uci.edu"),
        Some(&1)
    );
    assert_eq!(report.unique_urls, 4);
    assert_eq!(report.crawled_pages, 2);

    let text = read_report(&dir);
    assert!(text.contains("https://vision.ics.uci.edu, 1\n"));
    assert!(text.contains("https://www.ics.uci.edu, 1\n"));
    assert!(text.contains(&format!("longest page: {} (303 words)", url_a)));
}

#[test]
fn test_report_lists_top_words_and_sorted_subdomains() {
    let dir = tempdir().unwrap();
    let mut sieve = Sieve::new(create_test_config(&dir));

    let pages = [
        ("https://www.stat.uci.edu/seminars", "stat"),
        ("https://wics.ics.uci.edu/events-archive", "wics"),
        ("https://archive.ics.uci.edu/datasets", "ml"),
    ];
    for (url, prefix) in pages {
        let html = format!(
            "<p>graph graph graph theory theory the the the the</p>{}",
            page_with_words(prefix, 200, &[])
        );
        let outcome = sieve
            .process_page(url, Some(&PageResponse::ok(url, html)))
            .unwrap()
            .outcome;
        assert_eq!(outcome, PageOutcome::Accepted, "{} should be accepted", url);
    }

    let report = sieve.report();
    assert_eq!(report.top_words[0], ("graph".to_string(), 9));
    assert_eq!(report.top_words[1], ("theory".to_string(), 6));
    assert_eq!(report.top_words.len(), 50);
    assert!(report.top_words.iter().all(|(word, _)| word != "the"));

    let hosts: Vec<_> = report.subdomains.iter().map(|(h, _)| h.as_str()).collect();
    assert_eq!(
        hosts,
        vec!["https://archive.ics.uci.edu", "https://wics.ics.uci.edu"]
    );
}

#[test]
fn test_rejected_pages_return_no_links() {
    let dir = tempdir().unwrap();
    let mut sieve = Sieve::new(create_test_config(&dir));

    let url = "https://www.ics.uci.edu/missing";
    let not_found = PageResponse::new(url, 404, page_with_words("gone", 300, &["/a"]));
    assert!(sieve.process(url, Some(&not_found)).unwrap().is_empty());

    let url = "https://www.ics.uci.edu/tiny";
    let thin = PageResponse::ok(url, page_with_words("thin", 10, &["/b"]));
    assert!(sieve.process(url, Some(&thin)).unwrap().is_empty());

    assert!(sieve.process("https://www.ics.uci.edu/none", None).unwrap().is_empty());
    assert_eq!(sieve.crawled_pages(), 0);
}

#[test]
fn test_report_write_failure_is_surfaced() {
    let dir = tempdir().unwrap();
    let mut config = create_test_config(&dir);
    config.output.report_path = Some(
        dir.path()
            .join("no-such-dir")
            .join("report.txt")
            .display()
            .to_string(),
    );
    let mut sieve = Sieve::new(config);

    let url = "https://www.ics.uci.edu/about";
    let response = PageResponse::ok(url, page_with_words("about", 200, &[]));
    assert!(sieve.process(url, Some(&response)).is_err());
}

#[test]
fn test_configured_scope_from_toml() {
    let dir = tempdir().unwrap();
    let report_path = dir.path().join("custom.txt");
    let toml = format!(
        r#"
[scope]
allowed-domains = ["example.edu"]
root-domain = "example.edu"
trap-query-keys = ["sort"]

[content]
min-tokens = 20

[output]
report-path = "{}"
top-words = 5
"#,
        report_path.display()
    );
    let config = parse_config(&toml).unwrap();
    let mut sieve = Sieve::new(config);

    let url = "https://news.example.edu/index";
    let html = page_with_words(
        "story",
        30,
        &["/latest", "/list?sort=asc", "https://www.ics.uci.edu/"],
    );
    let links = sieve
        .process(url, Some(&PageResponse::ok(url, html)))
        .unwrap();

    assert_eq!(links, vec!["https://news.example.edu/latest"]);
    let text = fs::read_to_string(Path::new(&report_path)).unwrap();
    assert!(text.contains("top 5 words:"));
    assert!(text.contains("https://news.example.edu, 1"));
}
