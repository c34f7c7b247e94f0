//! Page outcome definitions for the per-page decision sequence

use std::fmt;

/// Terminal decision for a single page
///
/// Every invocation of the engine ends in exactly one of these. Only
/// `Accepted` pages have their links extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    // ===== Early Exits =====
    /// The host had no response for the request
    NoResponse,

    /// The resolved URL was already observed earlier in the crawl
    AlreadyDiscovered,

    /// The response status was not 200
    NonSuccessStatus,

    // ===== Gate Rejections =====
    /// The URL is nearly identical to a recently admitted URL
    UrlTrap,

    /// The normalized text matches an accepted page exactly
    ExactDuplicate,

    /// The page has too few tokens to be worth indexing
    LowQuality,

    /// The text is too similar to an accepted page
    NearDuplicate,

    // ===== Success =====
    /// The page passed every gate
    Accepted,
}

impl PageOutcome {
    /// Returns true if the page passed every gate
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns true for the non-error exits taken before content is examined
    pub fn is_early_exit(&self) -> bool {
        matches!(
            self,
            Self::NoResponse | Self::AlreadyDiscovered | Self::NonSuccessStatus
        )
    }

    /// Returns true if the page was rejected as a copy of earlier content
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::ExactDuplicate | Self::NearDuplicate)
    }

    /// Short stable label used in log lines and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoResponse => "no_response",
            Self::AlreadyDiscovered => "already_discovered",
            Self::NonSuccessStatus => "non_success_status",
            Self::UrlTrap => "url_trap",
            Self::ExactDuplicate => "exact_duplicate",
            Self::LowQuality => "low_quality",
            Self::NearDuplicate => "near_duplicate",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
