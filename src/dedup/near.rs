use std::collections::hash_map::DefaultHasher;
use std::collections::{HashSet, VecDeque};
use std::hash::{Hash, Hasher};

/// Set of hashed word shingles for one page
pub type ShingleSet = HashSet<u64>;

/// Builds the set of contiguous `size`-word shingles from text
///
/// Words are whitespace-delimited. Text with fewer words than `size` has no
/// shingles and yields an empty set.
pub fn shingles(text: &str, size: usize) -> ShingleSet {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.windows(size.max(1)).map(hash_words).collect()
}

fn hash_words(words: &[&str]) -> u64 {
    let mut hasher = DefaultHasher::new();
    words.hash(&mut hasher);
    hasher.finish()
}

/// Jaccard similarity |A ∩ B| / |A ∪ B|; two empty sets score 0
pub fn jaccard(a: &ShingleSet, b: &ShingleSet) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|s| large.contains(*s)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Shingle fingerprints of accepted pages, scanned linearly for near duplicates
///
/// With a capacity set, the oldest fingerprint is evicted once the index is full.
#[derive(Debug)]
pub struct NearDuplicateIndex {
    fingerprints: VecDeque<ShingleSet>,
    threshold: f64,
    shingle_size: usize,
    capacity: Option<usize>,
}

impl NearDuplicateIndex {
    pub fn new(threshold: f64, shingle_size: usize, capacity: Option<usize>) -> Self {
        Self {
            fingerprints: VecDeque::new(),
            threshold,
            shingle_size,
            capacity,
        }
    }

    /// Builds the fingerprint for text using the index's shingle size
    pub fn fingerprint(&self, text: &str) -> ShingleSet {
        shingles(text, self.shingle_size)
    }

    /// Returns the first similarity at or above the threshold, if any
    pub fn find_match(&self, fingerprint: &ShingleSet) -> Option<f64> {
        self.fingerprints
            .iter()
            .map(|kept| jaccard(fingerprint, kept))
            .find(|similarity| *similarity >= self.threshold)
    }

    /// Appends a fingerprint, evicting the oldest when at capacity
    pub fn insert(&mut self, fingerprint: ShingleSet) {
        if let Some(capacity) = self.capacity {
            while self.fingerprints.len() >= capacity {
                self.fingerprints.pop_front();
            }
        }
        self.fingerprints.push_back(fingerprint);
    }

    /// Checks text against the index and appends it when not a near duplicate
    pub fn is_near_duplicate(&mut self, text: &str) -> bool {
        let fingerprint = self.fingerprint(text);
        if self.find_match(&fingerprint).is_some() {
            return true;
        }
        self.insert(fingerprint);
        false
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}
