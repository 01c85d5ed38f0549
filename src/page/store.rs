//! Known pages snapshot.
//!
//! Built once per pass after the whole docs tree has been walked, then only
//! read. Emission may share it across worker threads without locking.

use rustc_hash::FxHashMap;

use super::DocPage;
use crate::core::UrlLayout;

/// Read-only lookup of documentation pages by source path.
#[derive(Debug, Clone, Default)]
pub struct KnownPages {
    pages: FxHashMap<String, DocPage>,
}

impl KnownPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from source paths rendered at their standard locations.
    pub fn from_sources<I, S>(sources: I, layout: UrlLayout) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        sources
            .into_iter()
            .map(|src| DocPage::new(src, layout))
            .collect()
    }

    /// Insert a page, replacing any page with the same source path.
    pub fn insert(&mut self, page: DocPage) {
        self.pages.insert(page.src_path.clone(), page);
    }

    #[inline]
    pub fn get(&self, src_path: &str) -> Option<&DocPage> {
        self.pages.get(src_path)
    }

    #[inline]
    pub fn contains(&self, src_path: &str) -> bool {
        self.pages.contains_key(src_path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate pages in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &DocPage> {
        self.pages.values()
    }
}

impl FromIterator<DocPage> for KnownPages {
    fn from_iter<T: IntoIterator<Item = DocPage>>(iter: T) -> Self {
        let mut known = Self::new();
        for page in iter {
            known.insert(page);
        }
        known
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sources() {
        let known = KnownPages::from_sources(["index.md", "foo/new.md"], UrlLayout::Directory);
        assert_eq!(known.len(), 2);
        assert!(known.contains("foo/new.md"));
        assert_eq!(known.get("foo/new.md").map(|p| p.url.as_str()), Some("foo/new/"));
        assert!(!known.contains("foo/new"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let known = KnownPages::from_sources(["Guide.md"], UrlLayout::File);
        assert!(known.contains("Guide.md"));
        assert!(!known.contains("guide.md"));
        assert!(!known.contains("./Guide.md"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut known = KnownPages::new();
        known.insert(DocPage::new("the/fake.md", UrlLayout::Directory));
        known.insert(DocPage::with_dest(
            "the/fake.md",
            "fake/destination/index.html",
            UrlLayout::Directory,
        ));
        assert_eq!(known.len(), 1);
        assert_eq!(
            known.get("the/fake.md").map(|p| p.dest_path.as_str()),
            Some("fake/destination/index.html")
        );
    }
}
