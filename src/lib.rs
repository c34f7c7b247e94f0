//! Crawl-Sieve: the decision core of a focused web crawler
//!
//! Given a fetched page, this crate decides whether the page is worth
//! indexing, which outbound links stay in scope, and which pages are exact
//! duplicates, near-duplicates, or part of a URL-space trap. The host crawler
//! owns fetching and scheduling; it hands each response to [`Sieve::process`]
//! and enqueues the links that come back.

pub mod config;
pub mod crawler;
pub mod dedup;
pub mod output;
pub mod state;
pub mod traps;
pub mod url;

use thiserror::Error;

/// Main error type for Crawl-Sieve operations
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Failed to write report: {0}")]
    Report(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Missing host in URL: {0}")]
    MissingDomain(String),

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Crawl-Sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{PageReport, PageResponse, Sieve};
pub use state::{CrawlStats, PageOutcome};
pub use crate::url::{is_valid, ScopeValidator};
