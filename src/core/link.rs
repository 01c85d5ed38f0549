//! Link classification and fragment splitting.

/// URL schemes that make a redirect target external.
const EXTERNAL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Split a path into `(path, fragment)` at the first `#`.
///
/// The fragment keeps its leading `#`, so concatenating both parts always
/// gives back the input.
///
/// # Examples
/// ```
/// use tola_redirects::core::split_fragment;
/// assert_eq!(split_fragment("guide/setup.md#install"), ("guide/setup.md", "#install"));
/// assert_eq!(split_fragment("guide/setup.md"), ("guide/setup.md", ""));
/// ```
#[inline]
pub fn split_fragment(path: &str) -> (&str, &str) {
    match path.find('#') {
        Some(pos) => path.split_at(pos),
        None => (path, ""),
    }
}

/// Check if a redirect target is an absolute `http://` or `https://` URL.
///
/// The scheme is matched case-insensitively. Anything else (including
/// `mailto:` and protocol-relative `//host` links) is treated as a page path.
///
/// # Examples
/// ```
/// use tola_redirects::core::is_external_url;
/// assert!(is_external_url("https://example.org/old.md"));
/// assert!(is_external_url("HTTP://example.org"));
/// assert!(!is_external_url("new.md#hash"));
/// ```
#[inline]
pub fn is_external_url(link: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| {
        link.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fragment() {
        assert_eq!(split_fragment("old.md#hash"), ("old.md", "#hash"));
        assert_eq!(split_fragment("old.md"), ("old.md", ""));
        assert_eq!(split_fragment("#hash"), ("", "#hash"));
        assert_eq!(split_fragment("old.md#"), ("old.md", "#"));
    }

    #[test]
    fn test_split_fragment_first_hash_wins() {
        assert_eq!(split_fragment("a.md#b#c"), ("a.md", "#b#c"));
    }

    #[test]
    fn test_split_fragment_roundtrip() {
        let inputs = [
            "",
            "#",
            "index.md",
            "foo/bar/new.md#section-2",
            "100%.md#50%",
            "dir.with.dots/page.md#",
            "ünïcode/päge.md#änchor",
        ];
        for input in inputs {
            let (path, fragment) = split_fragment(input);
            assert!(fragment.is_empty() || fragment.starts_with('#'));
            assert!(!path.contains('#'));
            assert_eq!(format!("{path}{fragment}"), input);
        }
    }

    #[test]
    fn test_is_external_url() {
        assert!(is_external_url("http://example.org"));
        assert!(is_external_url("https://example.org/old.md"));
        assert!(is_external_url("HtTpS://example.org"));
        assert!(!is_external_url("https:/example.org"));
        assert!(!is_external_url("ftp://example.org"));
        assert!(!is_external_url("mailto:someone@example.org"));
        assert!(!is_external_url("//example.org"));
        assert!(!is_external_url("http.md"));
        assert!(!is_external_url(""));
    }

    #[test]
    fn test_is_external_url_multibyte_prefix() {
        // must not panic on a non-boundary slice
        assert!(!is_external_url("ä://x"));
        assert!(!is_external_url("httä"));
    }
}
