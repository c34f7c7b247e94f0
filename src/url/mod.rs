//! URL handling module for Crawl-Sieve
//!
//! This module provides the scope validator, domain extraction, label-aligned
//! suffix matching, and href resolution.

mod domain;
mod matcher;
mod normalize;

use crate::config::ScopeConfig;
use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{extract_domain, origin_key};
pub use matcher::{is_strict_subdomain, matches_domain_suffix};
pub use normalize::{defragment, resolve_href};

/// Decides whether a URL is in scope for the crawl
///
/// All configured lists are lowercased once at construction so each check is
/// a plain comparison.
#[derive(Debug, Clone)]
pub struct ScopeValidator {
    allowed_domains: Vec<String>,
    blocked_suffixes: Vec<String>,
    trap_path_substrings: Vec<String>,
    trap_query_keys: Vec<String>,
}

impl ScopeValidator {
    /// Creates a validator from the scope section of the configuration
    pub fn new(config: &ScopeConfig) -> Self {
        let lower = |items: &[String]| -> Vec<String> {
            items.iter().map(|s| s.to_lowercase()).collect()
        };

        Self {
            allowed_domains: lower(&config.allowed_domains),
            blocked_suffixes: config
                .blocked_extensions
                .iter()
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .collect(),
            trap_path_substrings: lower(&config.trap_path_substrings),
            trap_query_keys: lower(&config.trap_query_keys),
        }
    }

    /// Checks a URL against the scope rules
    ///
    /// Rules are applied in order and short-circuit:
    /// 1. The URL must parse
    /// 2. The scheme must be `http` or `https`
    /// 3. The host must fall under an allowed domain
    /// 4. The path must not end with a blocked file extension
    /// 5. The URL must not carry a known trap signature
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The URL is in scope
    /// * `Ok(false)` - The URL is malformed or out of scope
    /// * `Err(UrlError::MissingDomain)` - An http(s) URL was built without a host
    pub fn is_valid(&self, url: &str) -> UrlResult<bool> {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(url::ParseError::EmptyHost) => {
                return Err(UrlError::MissingDomain(url.to_string()));
            }
            Err(_) => return Ok(false),
        };

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Ok(false);
        }

        let host =
            extract_domain(&parsed).ok_or_else(|| UrlError::MissingDomain(url.to_string()))?;

        if !self.is_allowed_host(&host) {
            return Ok(false);
        }

        let path = parsed.path().to_lowercase();
        if self.has_blocked_extension(&path) {
            return Ok(false);
        }

        Ok(!self.has_trap_signature(&parsed, &path))
    }

    /// Returns true if the host falls under one of the allowed domains
    pub fn is_allowed_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.allowed_domains
            .iter()
            .any(|domain| matches_domain_suffix(domain, &host))
    }

    fn has_blocked_extension(&self, path: &str) -> bool {
        self.blocked_suffixes
            .iter()
            .any(|suffix| path.ends_with(suffix.as_str()))
    }

    fn has_trap_signature(&self, url: &Url, path: &str) -> bool {
        if self
            .trap_path_substrings
            .iter()
            .any(|needle| path.contains(needle.as_str()))
        {
            return true;
        }

        url.query_pairs().any(|(key, _)| {
            let key = key.to_lowercase();
            self.trap_query_keys.iter().any(|trap| *trap == key)
        })
    }
}

impl Default for ScopeValidator {
    fn default() -> Self {
        Self::new(&ScopeConfig::default())
    }
}

/// Checks a URL against the default crawl scope
///
/// # Examples
///
/// ```
/// use crawl_sieve::url::is_valid;
///
/// assert_eq!(is_valid("https://www.ics.uci.edu/about"), Ok(true));
/// assert_eq!(is_valid("ftp://www.ics.uci.edu/about"), Ok(false));
/// assert_eq!(is_valid("https://www.ics.uci.edu/paper.PDF"), Ok(false));
/// ```
pub fn is_valid(url: &str) -> UrlResult<bool> {
    ScopeValidator::default().is_valid(url)
}
