//! Tokenization and the content quality gate

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximal ASCII alphanumeric runs bounded by word boundaries
///
/// Runs glued to other word characters (`foo_bar`, `café`) are not tokens.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z0-9]+\b").expect("token pattern is valid"));

/// Extracts tokens from already-normalized text
///
/// # Examples
///
/// ```
/// use crawl_sieve::crawler::tokenize;
///
/// assert_eq!(tokenize("hello, world 42!"), vec!["hello", "world", "42"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Rejects pages whose token count is below a fixed minimum
#[derive(Debug, Clone, Copy)]
pub struct QualityGate {
    min_tokens: usize,
}

impl QualityGate {
    pub fn new(min_tokens: usize) -> Self {
        Self { min_tokens }
    }

    pub fn passes(&self, tokens: &[String]) -> bool {
        tokens.len() >= self.min_tokens
    }

    /// Tokenizes text, returning `None` for low-quality pages
    pub fn tokenize(&self, text: &str) -> Option<Vec<String>> {
        let tokens = tokenize(text);
        if self.passes(&tokens) {
            Some(tokens)
        } else {
            None
        }
    }

    pub fn min_tokens(&self) -> usize {
        self.min_tokens
    }
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::new(160)
    }
}

/// Tokens left out of the word-frequency table
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Uses the configured list when present, the built-in English list otherwise
    pub fn from_config(words: Option<&[String]>) -> Self {
        match words {
            Some(words) => Self::new(words),
            None => Self::default(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter())
    }
}

/// Common English function words, plus the fragments left when the tokenizer
/// splits contractions at the apostrophe ("don't" becomes "don" and "t")
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn", "d", "did", "didn", "do", "does", "doesn",
    "doing", "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "let",
    "ll", "m", "me", "more", "most", "mustn", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some", "such", "t",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was",
    "wasn", "we", "were", "weren", "what", "when", "where", "which", "while", "who", "whom",
    "why", "with", "won", "would", "wouldn", "you", "your", "yours", "yourself", "yourselves",
];
