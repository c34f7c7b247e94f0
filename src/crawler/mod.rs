//! Crawler module for per-page processing
//!
//! This module contains the page-level logic, including:
//! - The response type handed in by the host
//! - HTML parsing for text and anchors
//! - Tokenization and the quality gate
//! - The decision engine that sequences every check

mod coordinator;
mod parser;
mod response;
mod tokenizer;

pub use coordinator::{PageReport, Sieve};
pub use parser::{parse_html, resolve_links, ParsedPage};
pub use response::PageResponse;
pub use tokenizer::{tokenize, QualityGate, StopWords};
