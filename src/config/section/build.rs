//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! docs = "docs"               # Markdown sources (relative to config file)
//! site = "site"               # Rendered site (relative to config file)
//! directory_urls = true       # page.md -> page/index.html
//! strict = false              # Fail the build if any warning was logged
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::UrlLayout;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Markdown source directory.
    pub docs: PathBuf,

    /// Rendered site directory (redirect pages are written here).
    pub site: PathBuf,

    /// Directory-style URLs (`page/`) instead of file-style (`page.html`).
    pub directory_urls: bool,

    /// Treat warnings as a build failure.
    pub strict: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            docs: "docs".into(),
            site: "site".into(),
            directory_urls: true,
            strict: false,
        }
    }
}

impl BuildSectionConfig {
    pub const fn layout(&self) -> UrlLayout {
        UrlLayout::from_directory_urls(self.directory_urls)
    }

    /// Validate build configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.docs.as_os_str().is_empty() {
            diag.error(FieldPath::new("build.docs"), "must not be empty");
        }
        if self.site.as_os_str().is_empty() {
            diag.error(FieldPath::new("build.site"), "must not be empty");
        }
        if !self.docs.as_os_str().is_empty() && self.docs == self.site {
            diag.error_with_hint(
                FieldPath::new("build.site"),
                "site directory is the same as the docs directory",
                "redirect pages would be written next to the markdown sources",
            );
        }
    }
}
