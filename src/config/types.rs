use serde::Deserialize;

/// Main configuration structure for Crawl-Sieve
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub dedup: DedupConfig,
    #[serde(default)]
    pub traps: TrapConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which URLs are in scope for the crawl
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScopeConfig {
    /// Domain suffixes a host must fall under (label-aligned, case-insensitive)
    pub allowed_domains: Vec<String>,

    /// Root domain whose strict subdomains are counted in the report
    pub root_domain: String,

    /// File extensions (without the dot) that are never fetched
    pub blocked_extensions: Vec<String>,

    /// Path substrings that mark known trap areas (calendars, wiki revisions)
    pub trap_path_substrings: Vec<String>,

    /// Query parameter names that generate combinatorial URL variants
    pub trap_query_keys: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            allowed_domains: to_strings(&[
                "ics.uci.edu",
                "cs.uci.edu",
                "informatics.uci.edu",
                "stat.uci.edu",
            ]),
            root_domain: "ics.uci.edu".to_string(),
            blocked_extensions: to_strings(DEFAULT_BLOCKED_EXTENSIONS),
            trap_path_substrings: to_strings(&[
                "calendar",
                "/events/",
                "doku.php",
                "/timeline",
                "/-/commit",
                "/-/blob/",
                "/-/tree/",
            ]),
            trap_query_keys: to_strings(&[
                "action",
                "do",
                "rev",
                "rev2",
                "difftype",
                "idx",
                "share",
                "ical",
                "outlook-ical",
                "tribe-bar-date",
                "eventdisplay",
            ]),
        }
    }
}

/// Content quality settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ContentConfig {
    /// Pages with fewer tokens than this are rejected as low quality
    pub min_tokens: usize,

    /// Replaces the built-in English stop-word list when set
    pub stop_words: Option<Vec<String>>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            min_tokens: 160,
            stop_words: None,
        }
    }
}

/// Order in which the content gates run after the URL-trap check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateOrder {
    /// exact duplicate, then quality gate, then near duplicate
    #[default]
    DuplicatesFirst,
    /// quality gate, then exact duplicate, then near duplicate
    QualityFirst,
}

/// Duplicate detection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DedupConfig {
    /// Jaccard similarity at or above which a page is a near duplicate
    pub near_duplicate_threshold: f64,

    /// Number of words per shingle
    pub shingle_size: usize,

    /// Capacity bound for the near-duplicate index (unbounded when unset)
    pub max_fingerprints: Option<usize>,

    pub gate_order: GateOrder,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            near_duplicate_threshold: 0.9,
            shingle_size: 3,
            max_fingerprints: None,
            gate_order: GateOrder::default(),
        }
    }
}

/// URL-trap detection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TrapConfig {
    /// Sequence-similarity ratio at or above which a URL is a trap
    pub url_similarity_threshold: f64,

    /// Number of recent URLs compared against
    pub window_size: usize,
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            url_similarity_threshold: 0.95,
            window_size: 10,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Path of the plain-text report; no file is written when unset
    pub report_path: Option<String>,

    /// Number of most frequent words listed in the report
    pub top_words: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: Some("report.txt".to_string()),
            top_words: 50,
        }
    }
}

const DEFAULT_BLOCKED_EXTENSIONS: &[&str] = &[
    "css", "js", "bmp", "gif", "jpg", "jpeg", "ico", "png", "tif", "tiff", "mid", "mp2", "mp3",
    "mp4", "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv", "pdf", "ps", "eps",
    "tex", "ppt", "pptx", "doc", "docx", "xls", "xlsx", "names", "data", "dat", "exe", "bz2",
    "tar", "msi", "bin", "7z", "psd", "dmg", "iso", "epub", "dll", "cnf", "tgz", "sha1", "thmx",
    "mso", "arff", "rtf", "jar", "csv", "rm", "smil", "wmv", "swf", "wma", "zip", "rar", "gz",
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
