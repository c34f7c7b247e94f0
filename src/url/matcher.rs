/// Checks if a host falls under a domain suffix
///
/// The match is label-aligned: `"ics.uci.edu"` matches:
/// - `"ics.uci.edu"` (the bare domain)
/// - `"www.ics.uci.edu"` (single subdomain)
/// - `"a.b.ics.uci.edu"` (nested subdomains)
///
/// but not `"physics.uci.edu"`, which merely ends with the same characters.
/// Both arguments are expected to be lowercase already.
///
/// # Examples
///
/// ```
/// use crawl_sieve::url::matches_domain_suffix;
///
/// assert!(matches_domain_suffix("ics.uci.edu", "ics.uci.edu"));
/// assert!(matches_domain_suffix("ics.uci.edu", "vision.ics.uci.edu"));
/// assert!(!matches_domain_suffix("ics.uci.edu", "physics.uci.edu"));
/// ```
pub fn matches_domain_suffix(suffix: &str, host: &str) -> bool {
    if suffix.is_empty() || host.is_empty() {
        return false;
    }
    match host.strip_suffix(suffix) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

/// Checks if a host is a strict subdomain of `root` (never `root` itself)
pub fn is_strict_subdomain(root: &str, host: &str) -> bool {
    host != root && matches_domain_suffix(root, host)
}
