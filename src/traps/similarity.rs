//! Character-level sequence similarity
//!
//! Ratcliff/Obershelp matching: find the longest common block, recurse on the
//! unmatched text to its left and right, and score `2 * matched / total`.
//! Ties between equally long blocks go to the earliest position in `a`, then in `b`.

use std::collections::HashMap;

/// Similarity ratio in [0, 1] between two strings
///
/// Two empty strings are identical and score 1.
///
/// # Examples
///
/// ```
/// use crawl_sieve::traps::sequence_ratio;
///
/// assert_eq!(sequence_ratio("abcd", "bcde"), 0.75);
/// assert_eq!(sequence_ratio("same", "same"), 1.0);
/// ```
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = Matcher::new(&a, &b).matching_characters();
    2.0 * matched as f64 / total as f64
}

struct Matcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each character in `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> Matcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Total size of all matching blocks
    fn matching_characters(&self) -> usize {
        let mut matched = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }

    /// Longest block with `a[i..i+k] == b[j..j+k]` inside the given ranges
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // Length of the match ending at (i - 1, j), keyed by j
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        debug_assert_eq!(
            self.a[best_i..best_i + best_size],
            self.b[best_j..best_j + best_size]
        );
        (best_i, best_j, best_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let url = "https://www.ics.uci.edu/";
        assert_eq!(sequence_ratio(url, url), 1.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
        assert_eq!(sequence_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_overlapping_blocks() {
        assert_eq!(sequence_ratio("abcd", "bcde"), 0.75);
        // "ab" then "d" after the gap: 3 matched of 8
        assert_eq!(sequence_ratio("abcd", "abxd"), 0.75);
    }

    #[test]
    fn test_symmetric_for_simple_inputs() {
        let a = "https://www.ics.uci.edu/events?day=1";
        let b = "https://www.ics.uci.edu/events?day=2";
        assert_eq!(sequence_ratio(a, b), sequence_ratio(b, a));
    }

    #[test]
    fn test_single_char_shift_in_long_url() {
        let a = "https://www.ics.uci.edu/community/events/2024/05/12";
        let b = "https://www.ics.uci.edu/community/events/2024/05/13";
        let ratio = sequence_ratio(a, b);
        assert!(ratio >= 0.95, "ratio was {}", ratio);
    }

    #[test]
    fn test_unrelated_paths_same_host() {
        let a = "https://www.ics.uci.edu/research/overview";
        let b = "https://www.ics.uci.edu/community/news/mirror";
        assert!(sequence_ratio(a, b) < 0.95);
    }

    #[test]
    fn test_non_ascii_characters() {
        assert_eq!(sequence_ratio("café", "café"), 1.0);
        assert_eq!(sequence_ratio("é", "e"), 0.0);
    }
}
