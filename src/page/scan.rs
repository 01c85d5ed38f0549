//! Docs directory scanning.

use std::path::{Component, Path};

use anyhow::{Result, bail};
use jwalk::WalkDir;

use super::{KnownPages, is_markdown_file};
use crate::core::UrlLayout;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Walk `docs_dir` and collect every markdown document as a known page.
///
/// Pages are assumed to be rendered at the standard location for `layout`.
/// Hidden files and directories are skipped.
pub fn scan_docs(docs_dir: &Path, layout: UrlLayout) -> Result<KnownPages> {
    if !docs_dir.is_dir() {
        bail!("docs directory `{}` does not exist", docs_dir.display());
    }

    let sources = WalkDir::new(docs_dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter_map(|e| relative_slash_path(&e.path(), docs_dir))
        .filter(|src| is_markdown_file(src));

    Ok(KnownPages::from_sources(sources, layout))
}

/// `docs/foo/bar.md` relative to `docs` -> `foo/bar.md`
fn relative_slash_path(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}
