//! `[redirects]` section validation.
//!
//! ```toml
//! [redirects]
//! "old.md" = "new.md"
//! "old.md#intro" = "new.md#overview"
//! "gone.md" = "https://example.org/"
//! ```
//!
//! Keys and values are parsed as-is. Hard errors here are limited to entries
//! that cannot mean anything: key or target without a page part. Keys that
//! are not markdown files are reported later as warnings.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{is_external_url, split_fragment};
use crate::redirect::RawRedirects;

const FIELD: FieldPath = FieldPath::new("redirects");

pub fn validate_redirects(redirects: &RawRedirects, diag: &mut ConfigDiagnostics) {
    for (old, new) in redirects.iter() {
        if old.is_empty() {
            diag.error(FIELD, format!("empty key (redirecting to '{new}')"));
        } else if split_fragment(old).0.is_empty() {
            diag.error_with_hint(
                FIELD,
                format!("key '{old}' has no page"),
                format!("write it as \"page.md{old}\""),
            );
        }

        if new.is_empty() {
            diag.error(FIELD, format!("empty target for '{old}'"));
        } else if !is_external_url(new) && split_fragment(new).0.is_empty() {
            diag.error_with_hint(
                FIELD,
                format!("target '{new}' for '{old}' has no page"),
                "fragment-only targets are not supported, name the page",
            );
        }
    }
}
