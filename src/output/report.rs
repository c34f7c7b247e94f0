use crate::output::{OutputError, OutputResult};
use crate::state::{CrawlStats, LongestPage};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Snapshot of the aggregation state at report time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    /// Distinct resolved URLs handed in by the host
    pub unique_urls: usize,

    /// Pages that passed every gate
    pub crawled_pages: usize,

    pub longest_page: Option<LongestPage>,

    /// Most frequent non-stop-word tokens, highest first
    pub top_words: Vec<(String, u64)>,

    /// Accepted pages per subdomain, sorted by `scheme://host`
    pub subdomains: Vec<(String, u64)>,
}

impl CrawlReport {
    /// Builds a report from the counters
    ///
    /// # Arguments
    ///
    /// * `stats` - The aggregation state
    /// * `crawled_pages` - Number of content fingerprints recorded
    /// * `top_words` - How many words to list
    pub fn from_stats(stats: &CrawlStats, crawled_pages: usize, top_words: usize) -> Self {
        Self {
            unique_urls: stats.unique_urls(),
            crawled_pages,
            longest_page: stats.longest_page().cloned(),
            top_words: stats.top_words(top_words),
            subdomains: stats
                .subdomain_counts()
                .iter()
                .map(|(host, count)| (host.clone(), *count))
                .collect(),
        }
    }
}

/// Formats a report as plain text
///
/// The first line is always `unique urls: N`; downstream tooling reads it.
pub fn format_report(report: &CrawlReport) -> OutputResult<String> {
    let mut out = String::new();

    writeln!(out, "unique urls: {}", report.unique_urls)?;
    writeln!(out, "crawled pages: {}", report.crawled_pages)?;

    match &report.longest_page {
        Some(page) => writeln!(
            out,
            "longest page: {} ({} words)",
            page.url, page.word_count
        )?,
        None => writeln!(out, "longest page: none")?,
    }

    writeln!(out)?;
    writeln!(out, "top {} words:", report.top_words.len())?;
    for (word, count) in &report.top_words {
        writeln!(out, "{}, {}", word, count)?;
    }

    writeln!(out)?;
    writeln!(out, "subdomains: {}", report.subdomains.len())?;
    for (host, count) in &report.subdomains {
        writeln!(out, "{}, {}", host, count)?;
    }

    Ok(out)
}

/// Writes a report, replacing any previous file at `path`
pub fn write_report(report: &CrawlReport, path: &Path) -> OutputResult<()> {
    let text = format_report(report)?;
    fs::write(path, text).map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })
}
