//! State module for tracking crawl decisions
//!
//! # Components
//!
//! - `PageOutcome`: The terminal decision for one page handed in by the host
//! - `CrawlStats`: Cumulative counters read when the report is written

mod page_outcome;
mod stats;

// Re-export main types
pub use page_outcome::PageOutcome;
pub use stats::{CrawlStats, LongestPage};
