use crate::UrlError;
use url::Url;

/// Removes the fragment (everything from the first `#`) from a URL string
///
/// # Examples
///
/// ```
/// use crawl_sieve::url::defragment;
///
/// assert_eq!(defragment("/people#faculty"), "/people");
/// assert_eq!(defragment("#top"), "");
/// assert_eq!(defragment("/people"), "/people");
/// ```
pub fn defragment(href: &str) -> &str {
    match href.find('#') {
        Some(idx) => &href[..idx],
        None => href,
    }
}

/// Resolves an href against a base URL after stripping its fragment
///
/// The href is not filtered here: `mailto:` and `javascript:` references
/// resolve to themselves and are left for the scope validator to reject.
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL without a fragment
/// * `Err(UrlError)` - The href could not be joined onto the base
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_sieve::url::resolve_href;
///
/// let base = Url::parse("https://www.ics.uci.edu/about/").unwrap();
/// assert_eq!(
///     resolve_href(&base, "people.html#staff").unwrap(),
///     "https://www.ics.uci.edu/about/people.html"
/// );
/// ```
pub fn resolve_href(base: &Url, href: &str) -> Result<String, UrlError> {
    let href = defragment(href.trim());

    let mut absolute = base
        .join(href)
        .map_err(|e| UrlError::Malformed(format!("cannot resolve '{}': {}", href, e)))?;

    // An empty href resolves to the base, which may itself carry a fragment
    absolute.set_fragment(None);

    Ok(absolute.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.ics.uci.edu/community/news/index.php").unwrap()
    }

    #[test]
    fn test_defragment() {
        assert_eq!(defragment("https://a.edu/x#y#z"), "https://a.edu/x");
        assert_eq!(defragment(""), "");
    }

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(
            resolve_href(&base(), "https://vision.ics.uci.edu/").unwrap(),
            "https://vision.ics.uci.edu/"
        );
    }

    #[test]
    fn test_resolve_root_relative() {
        assert_eq!(
            resolve_href(&base(), "/about").unwrap(),
            "https://www.ics.uci.edu/about"
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        assert_eq!(
            resolve_href(&base(), "view_news.php?id=3").unwrap(),
            "https://www.ics.uci.edu/community/news/view_news.php?id=3"
        );
    }

    #[test]
    fn test_resolve_strips_fragment() {
        assert_eq!(
            resolve_href(&base(), "/about#contact").unwrap(),
            "https://www.ics.uci.edu/about"
        );
    }

    #[test]
    fn test_resolve_fragment_only_and_empty() {
        let base = Url::parse("https://www.ics.uci.edu/page#here").unwrap();
        assert_eq!(
            resolve_href(&base, "#section").unwrap(),
            "https://www.ics.uci.edu/page"
        );
        assert_eq!(resolve_href(&base, "").unwrap(), "https://www.ics.uci.edu/page");
    }

    #[test]
    fn test_special_schemes_pass_through() {
        assert_eq!(
            resolve_href(&base(), "mailto:someone@ics.uci.edu").unwrap(),
            "mailto:someone@ics.uci.edu"
        );
        assert!(resolve_href(&base(), "javascript:void(0)")
            .unwrap()
            .starts_with("javascript:"));
    }

    #[test]
    fn test_unresolvable_href() {
        let result = resolve_href(&base(), "http://");
        assert!(matches!(result, Err(UrlError::Malformed(_))));
    }
}
