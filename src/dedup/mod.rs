//! Content deduplication
//!
//! Implements two levels of content deduplication:
//! - Exact: SHA-256 fingerprints of the normalized page text
//! - Near: Jaccard similarity of word-shingle sets against every kept page

mod exact;
mod near;

pub use exact::{ContentHash, ContentHashSet};
pub use near::{jaccard, shingles, NearDuplicateIndex, ShingleSet};
