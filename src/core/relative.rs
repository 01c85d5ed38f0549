//! Relative link computation between rendered pages.

use super::layout::{UrlLayout, dirname, encode_path, output_path_of};
use super::link::{is_external_url, split_fragment};

/// Compute the link that takes a browser from `old_source`'s rendered page
/// to `new_url`.
///
/// `new_url` is the target page's link reference (as produced by
/// [`url_of`](super::url_of)), optionally followed by a `#fragment`.
///
/// # Examples
/// ```
/// use tola_redirects::core::{UrlLayout, relative_link};
/// assert_eq!(relative_link("old.md", "new/#hash", UrlLayout::Directory), "../new/#hash");
/// assert_eq!(relative_link("foo/fizz/old.md", "foo/bar/new.html", UrlLayout::File), "../bar/new.html");
/// ```
pub fn relative_link(old_source: &str, new_url: &str, layout: UrlLayout) -> String {
    relative_link_from_output(&output_path_of(old_source, layout), new_url, layout)
}

/// Like [`relative_link`], but from an already known output file such as a
/// page with a custom destination.
///
/// # Examples
/// ```
/// use tola_redirects::core::{UrlLayout, relative_link_from_output};
/// let link = relative_link_from_output("fake/destination/index.html", "new/", UrlLayout::Directory);
/// assert_eq!(link, "../../new/");
/// ```
pub fn relative_link_from_output(old_output: &str, new_url: &str, layout: UrlLayout) -> String {
    let old_output = encode_path(old_output);
    let (new_path, fragment) = split_fragment(new_url);

    let mut link = relpath(new_path, dirname(&old_output));
    if layout.is_directory() {
        link.push('/');
    }
    link.push_str(fragment);
    link
}

/// POSIX relative path from directory `start` to `path`.
///
/// Both sides are normalized first (`.` and empty segments dropped, `..`
/// collapsed). The result never has a trailing slash and is `.` when both
/// point at the same directory.
///
/// # Examples
/// ```
/// use tola_redirects::core::relpath;
/// assert_eq!(relpath("foo/bar/new", "foo/fizz/old"), "../../bar/new");
/// assert_eq!(relpath("foo/", "foo"), ".");
/// assert_eq!(relpath("new.html", ""), "new.html");
/// ```
pub fn relpath(path: &str, start: &str) -> String {
    let target = normalize(path);
    let base = normalize(start);

    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = std::iter::repeat_n("..", base.len() - common).collect();
    parts.extend_from_slice(&target[common..]);

    if parts.is_empty() {
        ".".to_owned()
    } else {
        parts.join("/")
    }
}

/// Resolve `reference` the way a browser would when it is followed from the
/// page at `base`.
///
/// Returns a root-anchored path (`/foo/bar/`) with the reference's fragment
/// attached. External URLs are returned unchanged.
///
/// # Examples
/// ```
/// use tola_redirects::core::resolve_against;
/// assert_eq!(resolve_against("foo/fizz/old/index.html", "../../bar/new/"), "/foo/bar/new/");
/// assert_eq!(resolve_against("old.html", "new.html#hash"), "/new.html#hash");
/// assert_eq!(resolve_against("old/index.html", "../"), "/");
/// ```
pub fn resolve_against(base: &str, reference: &str) -> String {
    let (reference, fragment) = split_fragment(reference);
    if is_external_url(reference) {
        return format!("{reference}{fragment}");
    }

    let mut segments: Vec<&str> = if reference.starts_with('/') {
        Vec::new()
    } else {
        let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
        if !base.ends_with('/') {
            segments.pop();
        }
        segments
    };

    // Empty reference means "this document"
    if reference.is_empty() {
        let mut resolved = format!("/{}", base.trim_start_matches('/'));
        resolved.push_str(fragment);
        return resolved;
    }

    let mut trailing_slash = false;
    let mut parts = reference.split('/').peekable();
    while let Some(part) = parts.next() {
        let is_last = parts.peek().is_none();
        match part {
            "" | "." => trailing_slash = is_last || trailing_slash,
            ".." => {
                segments.pop();
                trailing_slash = is_last || trailing_slash;
            }
            _ => {
                segments.push(part);
                trailing_slash = false;
            }
        }
    }

    let mut resolved = format!("/{}", segments.join("/"));
    if trailing_slash && !segments.is_empty() {
        resolved.push('/');
    }
    resolved.push_str(fragment);
    resolved
}

/// Normalize a relative slash path into segments.
fn normalize(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            _ => segments.push(part),
        }
    }
    segments
}
