use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_sieve::url::extract_domain;
///
/// let url = Url::parse("https://WWW.ICS.UCI.EDU/about").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.ics.uci.edu".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the `scheme://host` key used to group pages by subdomain
///
/// Ports, paths, queries, and fragments are dropped.
pub fn origin_key(url: &Url) -> Option<String> {
    extract_domain(url).map(|host| format!("{}://{}", url.scheme(), host))
}
