use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// SHA-256 digest of normalized page text
pub type ContentHash = [u8; 32];

/// Set of content hashes for pages that were fully processed
///
/// A hash present here means that exact text was accepted and had its links
/// extracted exactly once.
#[derive(Debug, Default)]
pub struct ContentHashSet {
    hashes: HashSet<ContentHash>,
}

impl ContentHashSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes normalized (lowercased) page text
    pub fn fingerprint(text: &str) -> ContentHash {
        Sha256::digest(text.as_bytes()).into()
    }

    pub fn contains(&self, hash: &ContentHash) -> bool {
        self.hashes.contains(hash)
    }

    /// Records a hash, returning false if it was already present
    pub fn insert(&mut self, hash: ContentHash) -> bool {
        self.hashes.insert(hash)
    }

    /// Checks text against the set and records it when new
    ///
    /// Returns true if the text was seen before.
    pub fn is_exact_duplicate(&mut self, text: &str) -> bool {
        !self.insert(Self::fingerprint(text))
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_then_duplicate() {
        let mut set = ContentHashSet::new();
        assert!(!set.is_exact_duplicate("research in machine learning"));
        assert!(set.is_exact_duplicate("research in machine learning"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_different_text_not_duplicate() {
        let mut set = ContentHashSet::new();
        assert!(!set.is_exact_duplicate("page one"));
        assert!(!set.is_exact_duplicate("page two"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_contains_does_not_record() {
        let set = ContentHashSet::new();
        let hash = ContentHashSet::fingerprint("text");
        assert!(!set.contains(&hash));
        assert!(set.is_empty());
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = ContentHashSet::fingerprint("same text");
        let b = ContentHashSet::fingerprint("same text");
        assert_eq!(a, b);
        assert_eq!(
            hex::encode(ContentHashSet::fingerprint("")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
