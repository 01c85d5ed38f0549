//! Redirect targets and their resolution against the known pages.

use std::fmt;

use crate::core::{
    UrlLayout, is_external_url, output_path_of, relative_link_from_output, split_fragment,
};
use crate::page::{DocPage, KnownPages};

/// Where a redirect points, as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Absolute `http(s)://` URL, used verbatim.
    External(String),
    /// Source document path plus optional `#fragment`.
    Internal { page: String, fragment: String },
}

impl RedirectTarget {
    /// Classify a raw target string.
    pub fn parse(raw: &str) -> Self {
        if is_external_url(raw) {
            return Self::External(raw.to_owned());
        }
        let (page, fragment) = split_fragment(raw);
        Self::Internal {
            page: page.to_owned(),
            fragment: fragment.to_owned(),
        }
    }

    /// Resolve against the known pages.
    ///
    /// Returns `None` for internal targets that name no known page.
    pub fn resolve<'a>(&'a self, known: &'a KnownPages) -> Option<ResolvedTarget<'a>> {
        match self {
            Self::External(url) => Some(ResolvedTarget::External(url)),
            Self::Internal { page, fragment } => known
                .get(page)
                .map(|page| ResolvedTarget::Internal { page, fragment }),
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External(url) => f.write_str(url),
            Self::Internal { page, fragment } => write!(f, "{page}{fragment}"),
        }
    }
}

/// A target that exists: an external URL or a known page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTarget<'a> {
    External(&'a str),
    Internal {
        page: &'a DocPage,
        fragment: &'a str,
    },
}

impl ResolvedTarget<'_> {
    /// Site-relative reference of the target (`page.url + fragment`).
    pub fn reference(&self) -> String {
        match self {
            Self::External(url) => (*url).to_owned(),
            Self::Internal { page, fragment } => format!("{}{fragment}", page.url),
        }
    }

    /// Link to follow from the rendered page of `old_source`.
    ///
    /// External targets are terminal and returned unchanged.
    pub fn link_from(&self, old_source: &str, layout: UrlLayout) -> String {
        self.link_from_output(&output_path_of(old_source, layout), layout)
    }

    /// Link to follow from the rendered file at `old_output`.
    pub fn link_from_output(&self, old_output: &str, layout: UrlLayout) -> String {
        match self {
            Self::External(url) => (*url).to_owned(),
            Self::Internal { .. } => relative_link_from_output(old_output, &self.reference(), layout),
        }
    }
}

/// Classify and resolve a raw target string in one step.
///
/// # Examples
/// ```
/// use tola_redirects::core::UrlLayout;
/// use tola_redirects::page::KnownPages;
/// use tola_redirects::redirect::resolve_target;
///
/// let known = KnownPages::from_sources(["new.md"], UrlLayout::Directory);
/// assert_eq!(resolve_target("new.md#hash", &known).as_deref(), Some("new/#hash"));
/// assert_eq!(resolve_target("missing.md", &known), None);
/// ```
pub fn resolve_target(raw: &str, known: &KnownPages) -> Option<String> {
    RedirectTarget::parse(raw)
        .resolve(known)
        .map(|resolved| resolved.reference())
}
