//! Output module for the crawl report
//!
//! The report is a single plain-text file rewritten in full after every page
//! that came with a response, so it always reflects the cumulative state at
//! that point.

mod report;

pub use report::{format_report, write_report, CrawlReport};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
