//! URL-trap detection
//!
//! Catches parametrized or paginated URL sequences (calendar permutations,
//! shifting page ids) before their content is parsed. The default heuristic
//! compares each URL as a literal string against a short window of recently
//! admitted URLs.

mod similarity;
mod window;

pub use similarity::sequence_ratio;
pub use window::RecentUrlWindow;

use crate::config::TrapConfig;

/// A pluggable test for URLs that belong to an unbounded trap space
pub trait TrapHeuristic: std::fmt::Debug {
    /// Returns true if the URL should be rejected before its content is read
    fn looks_like_trap(&self, url: &str) -> bool;

    /// Records a URL that passed the check
    fn record(&mut self, url: &str);
}

/// Flags URLs that are nearly identical strings to a recently admitted URL
#[derive(Debug, Clone)]
pub struct SimilarityTrapDetector {
    window: RecentUrlWindow,
    threshold: f64,
}

impl SimilarityTrapDetector {
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window: RecentUrlWindow::new(window_size),
            threshold,
        }
    }

    pub fn from_config(config: &TrapConfig) -> Self {
        Self::new(config.window_size, config.url_similarity_threshold)
    }

    /// Returns the first window entry at or above the threshold and its ratio
    pub fn closest_match(&self, url: &str) -> Option<(&str, f64)> {
        self.window
            .iter()
            .map(|seen| (seen, sequence_ratio(url, seen)))
            .find(|(_, ratio)| *ratio >= self.threshold)
    }

    pub fn window(&self) -> &RecentUrlWindow {
        &self.window
    }
}

impl TrapHeuristic for SimilarityTrapDetector {
    fn looks_like_trap(&self, url: &str) -> bool {
        match self.closest_match(url) {
            Some((seen, ratio)) => {
                tracing::debug!("{} is {:.3} similar to recent URL {}", url, ratio, seen);
                true
            }
            None => false,
        }
    }

    fn record(&mut self, url: &str) {
        self.window.push(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_never_trap() {
        let detector = SimilarityTrapDetector::new(10, 0.95);
        assert!(!detector.looks_like_trap("https://www.ics.uci.edu/"));
    }

    #[test]
    fn test_parameter_sequence_is_trap() {
        let mut detector = SimilarityTrapDetector::new(10, 0.95);
        detector.record("https://www.ics.uci.edu/community/events/list?page=41");
        assert!(detector.looks_like_trap("https://www.ics.uci.edu/community/events/list?page=42"));
    }

    #[test]
    fn test_distinct_url_not_trap() {
        let mut detector = SimilarityTrapDetector::new(10, 0.95);
        detector.record("https://www.ics.uci.edu/research/overview");
        assert!(!detector.looks_like_trap("https://vision.ics.uci.edu/projects/segmentation"));
    }

    #[test]
    fn test_evicted_url_no_longer_matches() {
        let mut detector = SimilarityTrapDetector::new(2, 0.95);
        let first = "https://www.ics.uci.edu/community/events/list?page=41";
        detector.record(first);
        detector.record("https://www.cs.uci.edu/faculty");
        detector.record("https://www.stat.uci.edu/seminars");

        assert_eq!(detector.window().len(), 2);
        assert!(!detector.looks_like_trap("https://www.ics.uci.edu/community/events/list?page=42"));
    }

    #[test]
    fn test_closest_match_reports_ratio() {
        let mut detector = SimilarityTrapDetector::new(10, 0.5);
        detector.record("abcd");
        let (seen, ratio) = detector.closest_match("bcde").unwrap();
        assert_eq!(seen, "abcd");
        assert_eq!(ratio, 0.75);
    }

    #[test]
    fn test_from_config() {
        let detector = SimilarityTrapDetector::from_config(&TrapConfig::default());
        assert_eq!(detector.window().capacity(), 10);
    }
}
