//! Source path -> rendered output path mapping.
//!
//! Two URL layouts are supported:
//!
//! ```text
//! source              directory-style           file-style
//! ------------------  ------------------------  -----------------
//! index.md            index.html                index.html
//! README.md           index.html                index.html
//! guide.md            guide/index.html          guide.html
//! foo/README.md       foo/index.html            foo/index.html
//! foo/bar.md          foo/bar/index.html        foo/bar.html
//! ```
//!
//! Output paths are on-disk paths and are never percent-encoded. Link
//! references produced by [`url_from_dest`] are.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched inside a URL path segment.
///
/// Everything except ASCII alphanumerics and `-._~` is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// URL layout of the rendered site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UrlLayout {
    /// `name.md` -> `name/index.html`, linked as `name/`.
    #[default]
    Directory,
    /// `name.md` -> `name.html`, linked as `name.html`.
    File,
}

impl UrlLayout {
    /// Layout from the `use_directory_urls` flag.
    #[inline]
    pub const fn from_directory_urls(directory_urls: bool) -> Self {
        if directory_urls {
            Self::Directory
        } else {
            Self::File
        }
    }

    #[inline]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for UrlLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("directory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Compute the rendered output path for a source document.
///
/// `index` and `readme` stems (any case) collapse to `index`.
///
/// # Examples
/// ```
/// use tola_redirects::core::{UrlLayout, output_path_of};
/// assert_eq!(output_path_of("foo/fizz/old.md", UrlLayout::Directory), "foo/fizz/old/index.html");
/// assert_eq!(output_path_of("foo/fizz/old.md", UrlLayout::File), "foo/fizz/old.html");
/// assert_eq!(output_path_of("README.md", UrlLayout::File), "index.html");
/// ```
pub fn output_path_of(source: &str, layout: UrlLayout) -> String {
    let (parent, name) = split_parent(source);
    let (stem, _ext) = split_extension(name);
    let stem = canonical_stem(stem);

    let file = match layout {
        UrlLayout::File => format!("{stem}.html"),
        UrlLayout::Directory if stem == "index" => "index.html".to_owned(),
        UrlLayout::Directory => format!("{stem}/index.html"),
    };

    join(parent, &file)
}

/// Compute the percent-encoded link reference for a source document.
#[inline]
pub fn url_of(source: &str, layout: UrlLayout) -> String {
    url_from_dest(&output_path_of(source, layout), layout)
}

/// Convert an output path into the link reference browsers see.
///
/// In directory-style layout a trailing `index.html` becomes `/`, and the
/// site root becomes `./`.
///
/// # Examples
/// ```
/// use tola_redirects::core::{UrlLayout, url_from_dest};
/// assert_eq!(url_from_dest("new/index.html", UrlLayout::Directory), "new/");
/// assert_eq!(url_from_dest("index.html", UrlLayout::Directory), "./");
/// assert_eq!(url_from_dest("100%.html", UrlLayout::File), "100%25.html");
/// ```
pub fn url_from_dest(dest: &str, layout: UrlLayout) -> String {
    let encoded = encode_path(dest);
    if layout.is_directory() {
        if encoded == "index.html" {
            return "./".to_owned();
        }
        if let Some(dir) = encoded.strip_suffix("/index.html") {
            return format!("{dir}/");
        }
    }
    encoded
}

/// Percent-encode each `/`-separated segment of a path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory part of a slash path (`""` for top-level files).
#[inline]
pub(super) fn dirname(path: &str) -> &str {
    split_parent(path).0
}

#[inline]
fn split_parent(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

/// Split `name` into `(stem, ext)`; leading dots never start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if name[..pos].bytes().any(|b| b != b'.') => name.split_at(pos),
        _ => (name, ""),
    }
}

#[inline]
fn canonical_stem(stem: &str) -> &str {
    if stem.eq_ignore_ascii_case("index") || stem.eq_ignore_ascii_case("readme") {
        "index"
    } else {
        stem
    }
}

#[inline]
fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_owned()
    } else {
        format!("{parent}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIR: UrlLayout = UrlLayout::Directory;
    const FILE: UrlLayout = UrlLayout::File;

    #[test]
    fn test_output_path_file_layout() {
        assert_eq!(output_path_of("old.md", FILE), "old.html");
        assert_eq!(output_path_of("README.md", FILE), "index.html");
        assert_eq!(output_path_of("100%.md", FILE), "100%.html");
        assert_eq!(output_path_of("foo/fizz/old.md", FILE), "foo/fizz/old.html");
        assert_eq!(output_path_of("foo/fizz/index.md", FILE), "foo/fizz/index.html");
    }

    #[test]
    fn test_output_path_directory_layout() {
        assert_eq!(output_path_of("old.md", DIR), "old/index.html");
        assert_eq!(output_path_of("README.md", DIR), "index.html");
        assert_eq!(output_path_of("100%.md", DIR), "100%/index.html");
        assert_eq!(output_path_of("foo/fizz/old.md", DIR), "foo/fizz/old/index.html");
        assert_eq!(output_path_of("foo/fizz/index.md", DIR), "foo/fizz/index.html");
    }

    #[test]
    fn test_output_path_index_case_insensitive() {
        assert_eq!(output_path_of("docs/Readme.md", DIR), "docs/index.html");
        assert_eq!(output_path_of("docs/INDEX.markdown", DIR), "docs/index.html");
        assert_eq!(output_path_of("docs/readme.md", FILE), "docs/index.html");
    }

    #[test]
    fn test_output_path_only_last_extension_replaced() {
        assert_eq!(output_path_of("v1.2/notes.md", DIR), "v1.2/notes/index.html");
        assert_eq!(output_path_of("a.b.md", FILE), "a.b.html");
        assert_eq!(output_path_of(".hidden.md", FILE), ".hidden.html");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("old.md"), ("old", ".md"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".md"), (".md", ""));
        assert_eq!(split_extension("..md"), ("..md", ""));
    }

    #[test]
    fn test_url_from_dest() {
        assert_eq!(url_from_dest("index.html", DIR), "./");
        assert_eq!(url_from_dest("new/index.html", DIR), "new/");
        assert_eq!(url_from_dest("fake/destination/index.html", DIR), "fake/destination/");
        assert_eq!(url_from_dest("index.html", FILE), "index.html");
        assert_eq!(url_from_dest("new/index.html", FILE), "new/index.html");
    }

    #[test]
    fn test_url_of_encodes_but_output_path_does_not() {
        assert_eq!(output_path_of("100%.md", DIR), "100%/index.html");
        assert_eq!(url_of("100%.md", DIR), "100%25/");
        assert_eq!(url_of("100%.md", FILE), "100%25.html");
        assert_eq!(url_of("my page.md", FILE), "my%20page.html");
    }

    #[test]
    fn test_encode_path_keeps_slashes_and_unreserved() {
        assert_eq!(encode_path("a-b/c_d/e.f~g"), "a-b/c_d/e.f~g");
        assert_eq!(encode_path("über/ä.html"), "%C3%BCber/%C3%A4.html");
        assert_eq!(encode_path("a?b/c#d"), "a%3Fb/c%23d");
    }

    #[test]
    fn test_layout_from_flag() {
        assert_eq!(UrlLayout::from_directory_urls(true), DIR);
        assert_eq!(UrlLayout::from_directory_urls(false), FILE);
        assert_eq!(UrlLayout::default(), DIR);
        assert_eq!(DIR.to_string(), "directory");
    }
}
