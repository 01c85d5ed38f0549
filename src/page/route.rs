//! Page route - source to output path mapping.

use crate::core::{UrlLayout, output_path_of, url_from_dest};

/// A documentation page known to the site.
///
/// # Example
///
/// ```text
/// Source: foo/bar.md    (directory-style layout)
///
/// DocPage {
///     src_path:  foo/bar.md
///     dest_path: foo/bar/index.html
///     url:       foo/bar/
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    /// Source path relative to the docs directory, `/`-separated.
    pub src_path: String,
    /// Rendered file relative to the site directory (not percent-encoded).
    pub dest_path: String,
    /// Percent-encoded link reference relative to the site root.
    pub url: String,
}

impl DocPage {
    /// Page rendered at the standard location for `layout`.
    pub fn new(src_path: impl Into<String>, layout: UrlLayout) -> Self {
        let src_path = normalize_separators(src_path.into());
        let dest_path = output_path_of(&src_path, layout);
        Self::with_dest(src_path, dest_path, layout)
    }

    /// Page rendered at an explicit location.
    ///
    /// Host generators may place pages elsewhere (custom permalinks); the
    /// link reference is derived from `dest_path` in that case.
    pub fn with_dest(
        src_path: impl Into<String>,
        dest_path: impl Into<String>,
        layout: UrlLayout,
    ) -> Self {
        let dest_path = normalize_separators(dest_path.into());
        let url = url_from_dest(&dest_path, layout);
        Self {
            src_path: normalize_separators(src_path.into()),
            dest_path,
            url,
        }
    }
}

#[inline]
fn normalize_separators(path: String) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path
    }
}
