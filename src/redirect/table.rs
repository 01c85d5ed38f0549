//! Redirect table: raw `old -> new` mappings normalized per old page.
//!
//! ```text
//! raw                                table
//! ---------------------------------  ---------------------------------------
//! "old.md#a"  = "new.md#intro"        old.md: overall = new.md#intro   (defaulted)
//! "old.md#b"  = "other.md"                    hashes  = [#a -> new.md#intro,
//! "gone.md"   = "https://x.org/"                         #b -> other.md]
//!                                     gone.md: overall = https://x.org/
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use super::RedirectTarget;
use crate::core::split_fragment;
use crate::page::is_markdown_file;

// ============================================================================
// Raw mappings
// ============================================================================

/// Declared `old -> new` mappings in declaration order.
///
/// Deserializes from a TOML/JSON table whose values are strings; the
/// document order of the keys is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRedirects(Vec<(String, String)>);

impl RawRedirects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, old: impl Into<String>, new: impl Into<String>) {
        self.0.push((old.into(), new.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRedirects {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for RawRedirects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawRedirects;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of `\"old.md\" = \"new.md\"` string pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((old, new)) = map.next_entry::<String, String>()? {
                    pairs.push((old, new));
                }
                Ok(RawRedirects(pairs))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawRedirects::default())
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

// ============================================================================
// Table
// ============================================================================

/// Redirects declared for one old page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEntry {
    /// Where the page itself goes.
    pub overall: RedirectTarget,
    /// `(old_fragment, target)` in declaration order.
    pub hash_redirects: Vec<(String, RedirectTarget)>,
}

/// Redirect entries keyed by fragment-less old page path.
///
/// Iteration follows the order in which each old page first appeared.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    entries: Vec<(String, RedirectEntry)>,
    index: FxHashMap<String, usize>,
}

impl RedirectTable {
    pub fn get(&self, old: &str) -> Option<&RedirectEntry> {
        self.index.get(old).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RedirectEntry)> {
        self.entries.iter().map(|(old, entry)| (old.as_str(), entry))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
struct PendingEntry {
    overall: Option<RedirectTarget>,
    hash_redirects: Vec<(String, RedirectTarget)>,
}

/// Normalize raw mappings into a [`RedirectTable`].
///
/// A fragment-less key sets the page's overall target (a later one wins).
/// A `#fragment` key adds a hash redirect. Pages that only have hash
/// redirects take the first declared one as their overall target.
pub fn build_table(raw: &RawRedirects) -> RedirectTable {
    let mut order: Vec<String> = Vec::new();
    let mut pending: FxHashMap<String, PendingEntry> = FxHashMap::default();

    for (old, new) in raw.iter() {
        let (old_page, old_fragment) = split_fragment(old);
        let entry = pending.entry(old_page.to_owned()).or_insert_with(|| {
            order.push(old_page.to_owned());
            PendingEntry::default()
        });

        let target = RedirectTarget::parse(new);
        if old_fragment.is_empty() {
            entry.overall = Some(target);
        } else {
            entry.hash_redirects.push((old_fragment.to_owned(), target));
        }
    }

    let mut table = RedirectTable::default();
    for old_page in order {
        let Some(PendingEntry {
            overall,
            hash_redirects,
        }) = pending.remove(&old_page)
        else {
            continue;
        };
        let Some(overall) = overall.or_else(|| hash_redirects.first().map(|(_, t)| t.clone()))
        else {
            continue;
        };

        table.index.insert(old_page.clone(), table.entries.len());
        table.entries.push((
            old_page,
            RedirectEntry {
                overall,
                hash_redirects,
            },
        ));
    }
    table
}

/// Old keys whose page part is not a markdown source document.
///
/// These are still processed; callers report them as warnings.
pub fn invalid_sources(raw: &RawRedirects) -> Vec<&str> {
    raw.iter()
        .map(|(old, _)| split_fragment(old).0)
        .filter(|page| !is_markdown_file(page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRedirects {
        pairs.iter().copied().collect()
    }

    fn internal(page: &str, fragment: &str) -> RedirectTarget {
        RedirectTarget::Internal {
            page: page.to_owned(),
            fragment: fragment.to_owned(),
        }
    }

    #[test]
    fn test_simple_overall() {
        let table = build_table(&raw(&[("old.md", "new.md")]));
        assert_eq!(table.len(), 1);
        let entry = table.get("old.md").unwrap();
        assert_eq!(entry.overall, internal("new.md", ""));
        assert!(entry.hash_redirects.is_empty());
    }

    #[test]
    fn test_hash_only_defaults_to_first_fragment() {
        let table = build_table(&raw(&[
            ("old.md#b", "b.md#bee"),
            ("old.md#a", "a.md"),
        ]));
        let entry = table.get("old.md").unwrap();
        assert_eq!(entry.overall, internal("b.md", "#bee"));
        assert_eq!(
            entry.hash_redirects,
            vec![
                ("#b".to_owned(), internal("b.md", "#bee")),
                ("#a".to_owned(), internal("a.md", "")),
            ]
        );
    }

    #[test]
    fn test_explicit_overall_wins_over_default_regardless_of_order() {
        let table = build_table(&raw(&[
            ("old.md#a", "a.md"),
            ("old.md", "new.md"),
            ("old.md#b", "b.md"),
        ]));
        let entry = table.get("old.md").unwrap();
        assert_eq!(entry.overall, internal("new.md", ""));
        assert_eq!(entry.hash_redirects.len(), 2);
        assert_eq!(entry.hash_redirects[0].0, "#a");
        assert_eq!(entry.hash_redirects[1].0, "#b");
    }

    #[test]
    fn test_later_overall_replaces_earlier() {
        let mut pairs = RawRedirects::new();
        pairs.push("old.md", "first.md");
        pairs.push("old.md", "second.md");
        let table = build_table(&pairs);
        assert_eq!(table.get("old.md").unwrap().overall, internal("second.md", ""));
    }

    #[test]
    fn test_entries_keep_first_appearance_order() {
        let table = build_table(&raw(&[
            ("z.md", "a.md"),
            ("a.md#x", "z.md"),
            ("m.md", "https://example.org"),
            ("z.md#y", "m.md"),
        ]));
        let keys: Vec<_> = table.iter().map(|(old, _)| old).collect();
        assert_eq!(keys, ["z.md", "a.md", "m.md"]);
        assert_eq!(
            table.get("m.md").unwrap().overall,
            RedirectTarget::External("https://example.org".to_owned())
        );
    }

    #[test]
    fn test_empty_table() {
        let table = build_table(&RawRedirects::new());
        assert!(table.is_empty());
        assert!(table.get("old.md").is_none());
    }

    #[test]
    fn test_invalid_sources() {
        let pairs = raw(&[
            ("old.md", "new.md"),
            ("old.html", "new.md"),
            ("page#frag", "new.md"),
            ("guide.markdown#x", "new.md"),
        ]);
        assert_eq!(invalid_sources(&pairs), ["old.html", "page"]);
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        #[derive(serde::Deserialize)]
        struct Doc {
            redirects: RawRedirects,
        }

        let doc: Doc = toml::from_str(
            r##"
            [redirects]
            "zeta.md" = "a.md"
            "alpha.md#b" = "b.md#c"
            "mid.md" = "https://example.org/"
            "##,
        )
        .unwrap();

        let pairs: Vec<_> = doc.redirects.iter().collect();
        assert_eq!(
            pairs,
            [
                ("zeta.md", "a.md"),
                ("alpha.md#b", "b.md#c"),
                ("mid.md", "https://example.org/"),
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_non_string_target() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Doc {
            redirects: RawRedirects,
        }

        let result: Result<Doc, _> = toml::from_str("[redirects]\n\"old.md\" = 3\n");
        assert!(result.is_err());
    }
}
