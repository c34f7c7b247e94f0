//! Aggregation state mutated on every accepted page
//!
//! Counters only ever grow; nothing is rolled back if a later step fails.

use crate::crawler::StopWords;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The page with the most words seen so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPage {
    pub url: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, Copy)]
struct TokenCount {
    count: u64,
    first_seen: u64,
}

/// Process-wide crawl counters
#[derive(Debug, Default)]
pub struct CrawlStats {
    /// Every resolved URL handed in by the host, accepted or not
    discovered: HashSet<String>,

    /// Non-stop-word token counts with their first-seen order
    token_frequency: HashMap<String, TokenCount>,
    next_token_order: u64,

    longest_page: Option<LongestPage>,

    /// Accepted pages per `scheme://host`, strict subdomains of the root only
    subdomain_counts: BTreeMap<String, u64>,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resolved URL, returning false if it was already known
    pub fn discover(&mut self, url: &str) -> bool {
        if self.discovered.contains(url) {
            return false;
        }
        self.discovered.insert(url.to_string())
    }

    pub fn is_discovered(&self, url: &str) -> bool {
        self.discovered.contains(url)
    }

    /// Folds an accepted page into the counters
    ///
    /// # Arguments
    ///
    /// * `url` - Resolved URL of the page
    /// * `tokens` - All tokens of the page, stop words included
    /// * `stop_words` - Tokens excluded from the frequency table
    /// * `subdomain` - `scheme://host` when the host is a strict subdomain of the root
    pub fn record_page(
        &mut self,
        url: &str,
        tokens: &[String],
        stop_words: &StopWords,
        subdomain: Option<&str>,
    ) {
        for token in tokens.iter().filter(|t| !stop_words.contains(t.as_str())) {
            match self.token_frequency.get_mut(token.as_str()) {
                Some(entry) => entry.count += 1,
                None => {
                    self.token_frequency.insert(
                        token.clone(),
                        TokenCount {
                            count: 1,
                            first_seen: self.next_token_order,
                        },
                    );
                    self.next_token_order += 1;
                }
            }
        }

        let word_count = tokens.len();
        let is_longest = self
            .longest_page
            .as_ref()
            .map_or(true, |longest| word_count > longest.word_count);
        if is_longest {
            self.longest_page = Some(LongestPage {
                url: url.to_string(),
                word_count,
            });
        }

        if let Some(key) = subdomain {
            *self.subdomain_counts.entry(key.to_string()).or_insert(0) += 1;
        }
    }

    pub fn unique_urls(&self) -> usize {
        self.discovered.len()
    }

    pub fn longest_page(&self) -> Option<&LongestPage> {
        self.longest_page.as_ref()
    }

    pub fn token_count(&self, token: &str) -> u64 {
        self.token_frequency.get(token).map_or(0, |t| t.count)
    }

    /// The `n` most frequent tokens; ties go to the token seen first
    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        let mut words: Vec<(&String, &TokenCount)> = self.token_frequency.iter().collect();
        words.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        words
            .into_iter()
            .take(n)
            .map(|(word, entry)| (word.clone(), entry.count))
            .collect()
    }

    /// Subdomain counts in lexicographic order of `scheme://host`
    pub fn subdomain_counts(&self) -> &BTreeMap<String, u64> {
        &self.subdomain_counts
    }
}
