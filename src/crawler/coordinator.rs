//! Crawl-Sieve engine - per-page decision logic
//!
//! The host crawler calls [`Sieve::process`] once per fetched page. Each call
//! walks the page through a fixed sequence of gates and stops at the first
//! rejection:
//!
//! `response present → not yet discovered → status 200 → not a URL trap →
//! content gates (exact duplicate, quality, near duplicate) → accepted`
//!
//! Only accepted pages update the content counters and have their links
//! extracted. Calls are expected one at a time; a host that
//! processes pages concurrently should wrap the engine in a single lock.

use crate::config::{Config, GateOrder};
use crate::crawler::parser::{parse_html, resolve_links};
use crate::crawler::response::PageResponse;
use crate::crawler::tokenizer::{QualityGate, StopWords};
use crate::dedup::{ContentHash, ContentHashSet, NearDuplicateIndex, ShingleSet};
use crate::output::{write_report, CrawlReport};
use crate::state::{CrawlStats, PageOutcome};
use crate::traps::{SimilarityTrapDetector, TrapHeuristic};
use crate::url::{extract_domain, is_strict_subdomain, origin_key, ScopeValidator};
use crate::{SieveError, UrlError};
use std::path::Path;
use url::Url;

/// Result of processing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub outcome: PageOutcome,

    /// In-scope links to enqueue; empty unless the page was accepted
    pub links: Vec<String>,

    /// Anchors skipped because they could not be resolved or had no host
    pub malformed_links: Vec<UrlError>,
}

impl PageReport {
    fn rejected(outcome: PageOutcome) -> Self {
        Self {
            outcome,
            links: Vec::new(),
            malformed_links: Vec::new(),
        }
    }
}

/// Page content that survived the content gates
struct AcceptedContent {
    hash: ContentHash,
    tokens: Vec<String>,
    shingles: ShingleSet,
}

/// The duplicate, trap, and scope decision engine
#[derive(Debug)]
pub struct Sieve {
    config: Config,
    scope: ScopeValidator,
    quality_gate: QualityGate,
    stop_words: StopWords,
    exact: ContentHashSet,
    near: NearDuplicateIndex,
    traps: Box<dyn TrapHeuristic>,
    stats: CrawlStats,
}

impl Sieve {
    /// Creates an engine with empty state
    ///
    /// The configuration is assumed to be validated already (see
    /// [`crate::config::load_config`]).
    pub fn new(config: Config) -> Self {
        let scope = ScopeValidator::new(&config.scope);
        let quality_gate = QualityGate::new(config.content.min_tokens);
        let stop_words = StopWords::from_config(config.content.stop_words.as_deref());
        let near = NearDuplicateIndex::new(
            config.dedup.near_duplicate_threshold,
            config.dedup.shingle_size,
            config.dedup.max_fingerprints,
        );
        let traps = Box::new(SimilarityTrapDetector::from_config(&config.traps));

        Self {
            config,
            scope,
            quality_gate,
            stop_words,
            exact: ContentHashSet::new(),
            near,
            traps,
            stats: CrawlStats::new(),
        }
    }

    /// Replaces the URL-trap heuristic
    pub fn with_trap_heuristic(mut self, heuristic: Box<dyn TrapHeuristic>) -> Self {
        self.traps = heuristic;
        self
    }

    /// Processes one page and returns the in-scope links to enqueue
    ///
    /// A rejected page yields an empty list. Errors are reserved for a
    /// malformed request URL and for a report that could not be written.
    ///
    /// # Arguments
    ///
    /// * `requested_url` - The URL the host asked for; relative links resolve against it
    /// * `response` - The fetch result, or `None` if the host got nothing back
    pub fn process(
        &mut self,
        requested_url: &str,
        response: Option<&PageResponse>,
    ) -> Result<Vec<String>, SieveError> {
        self.process_page(requested_url, response)
            .map(|report| report.links)
    }

    /// Processes one page and returns the full decision
    ///
    /// The report is rewritten after every page that came with a response,
    /// so it always reflects the cumulative state.
    pub fn process_page(
        &mut self,
        requested_url: &str,
        response: Option<&PageResponse>,
    ) -> Result<PageReport, SieveError> {
        let Some(response) = response else {
            tracing::debug!("No response for {}", requested_url);
            return Ok(PageReport::rejected(PageOutcome::NoResponse));
        };

        let report = self.decide(requested_url, response)?;
        self.write_report()?;
        Ok(report)
    }

    /// Walks a page through the gates, updating state on acceptance
    fn decide(
        &mut self,
        requested_url: &str,
        response: &PageResponse,
    ) -> Result<PageReport, SieveError> {
        // Parsed up front so a malformed request leaves every counter untouched
        let base = Url::parse(requested_url)?;
        let resolved_url = response.url.as_str();

        if !self.stats.discover(resolved_url) {
            tracing::debug!("Already discovered {}", resolved_url);
            return Ok(PageReport::rejected(PageOutcome::AlreadyDiscovered));
        }

        if !response.is_success() {
            tracing::debug!("Status {} for {}", response.status, resolved_url);
            return Ok(PageReport::rejected(PageOutcome::NonSuccessStatus));
        }

        if self.traps.looks_like_trap(resolved_url) {
            tracing::debug!("URL trap: {}", resolved_url);
            return Ok(PageReport::rejected(PageOutcome::UrlTrap));
        }
        self.traps.record(resolved_url);

        let parsed = parse_html(&response.body());
        let text = parsed.normalized_text();

        let content = match self.check_content(&text) {
            Ok(content) => content,
            Err(outcome) => {
                tracing::debug!("Rejected {} as {}", resolved_url, outcome);
                return Ok(PageReport::rejected(outcome));
            }
        };

        self.accept(resolved_url, content);

        let (candidates, mut malformed_links) = resolve_links(&base, &parsed.hrefs);
        let links = self.filter_links(candidates, &mut malformed_links);

        tracing::info!(
            "Accepted {} ({} links in scope, {} crawled so far)",
            resolved_url,
            links.len(),
            self.exact.len()
        );

        Ok(PageReport {
            outcome: PageOutcome::Accepted,
            links,
            malformed_links,
        })
    }

    /// Runs the exact-duplicate, quality, and near-duplicate gates
    ///
    /// Nothing is recorded here; fingerprints are only stored once the page
    /// is accepted.
    fn check_content(&self, text: &str) -> Result<AcceptedContent, PageOutcome> {
        let hash = ContentHashSet::fingerprint(text);

        let tokens = match self.config.dedup.gate_order {
            GateOrder::DuplicatesFirst => {
                self.check_exact(&hash)?;
                self.check_quality(text)?
            }
            GateOrder::QualityFirst => {
                let tokens = self.check_quality(text)?;
                self.check_exact(&hash)?;
                tokens
            }
        };

        let shingles = self.near.fingerprint(text);
        if let Some(similarity) = self.near.find_match(&shingles) {
            tracing::debug!("Near duplicate with similarity {:.3}", similarity);
            return Err(PageOutcome::NearDuplicate);
        }

        Ok(AcceptedContent {
            hash,
            tokens,
            shingles,
        })
    }

    fn check_exact(&self, hash: &ContentHash) -> Result<(), PageOutcome> {
        if self.exact.contains(hash) {
            return Err(PageOutcome::ExactDuplicate);
        }
        Ok(())
    }

    fn check_quality(&self, text: &str) -> Result<Vec<String>, PageOutcome> {
        self.quality_gate
            .tokenize(text)
            .ok_or(PageOutcome::LowQuality)
    }

    /// Records an accepted page in every counter
    fn accept(&mut self, resolved_url: &str, content: AcceptedContent) {
        self.exact.insert(content.hash);
        self.near.insert(content.shingles);

        let subdomain = self.subdomain_key(resolved_url);
        self.stats.record_page(
            resolved_url,
            &content.tokens,
            &self.stop_words,
            subdomain.as_deref(),
        );
    }

    /// `scheme://host` when the host is a strict subdomain of the root domain
    fn subdomain_key(&self, resolved_url: &str) -> Option<String> {
        let url = match Url::parse(resolved_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot parse resolved URL {}: {}", resolved_url, e);
                return None;
            }
        };

        let host = extract_domain(&url)?;
        let root = self.config.scope.root_domain.to_lowercase();
        if is_strict_subdomain(&root, &host) {
            origin_key(&url)
        } else {
            None
        }
    }

    /// Keeps only in-scope candidates; hostless URLs are reported and skipped
    fn filter_links(&self, candidates: Vec<String>, malformed: &mut Vec<UrlError>) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|link| match self.scope.is_valid(link) {
                Ok(valid) => valid,
                Err(e) => {
                    tracing::warn!("Skipping link: {}", e);
                    malformed.push(e);
                    false
                }
            })
            .collect()
    }

    /// Snapshot of the current counters
    pub fn report(&self) -> CrawlReport {
        CrawlReport::from_stats(&self.stats, self.exact.len(), self.config.output.top_words)
    }

    /// Writes the report to the configured path, if any
    pub fn write_report(&self) -> Result<(), SieveError> {
        if let Some(path) = &self.config.output.report_path {
            write_report(&self.report(), Path::new(path))?;
        }
        Ok(())
    }

    /// Checks a URL against the configured scope
    pub fn is_valid(&self, url: &str) -> Result<bool, UrlError> {
        self.scope.is_valid(url)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    /// Number of distinct contents accepted so far
    pub fn crawled_pages(&self) -> usize {
        self.exact.len()
    }

    pub fn near_duplicate_index(&self) -> &NearDuplicateIndex {
        &self.near
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
