//! Redirect pipeline.
//!
//! ```text
//! RawRedirects ──build_table──► RedirectTable ──plan──► Plan ──emit──► site/
//!                                     ▲
//!                        KnownPages ──┘
//! ```
//!
//! - `table` - raw map -> per-page entries (overall + fragment targets)
//! - `target` - target parsing and resolution against known pages
//! - `emit` - planning and writing
//! - `render` - standalone page and injected block payloads
//! - `inject` - splicing a block into an already rendered page

mod emit;
mod inject;
mod render;
mod table;
mod target;

pub use emit::{EmitError, EmitReport, Emission, HashRule, Plan, RedirectWarning, emit, plan};
pub use inject::{BLOCK_END, BLOCK_START, splice, strip_block};
pub use render::{render_inject, render_redirect};
pub use table::{RawRedirects, RedirectEntry, RedirectTable, build_table, invalid_sources};
pub use target::{RedirectTarget, ResolvedTarget, resolve_target};

use crate::core::UrlLayout;
use crate::page::KnownPages;

/// Build the table from `raw` and plan it, reporting malformed old keys first.
///
/// Malformed keys only warn; their entries are still planned.
pub fn plan_redirects(raw: &RawRedirects, known: &KnownPages, layout: UrlLayout) -> Plan {
    let mut warnings: Vec<RedirectWarning> = invalid_sources(raw)
        .into_iter()
        .map(|old| RedirectWarning::InvalidSource {
            old: old.to_owned(),
        })
        .collect();

    let mut plan = plan(&build_table(raw), known, layout);
    warnings.append(&mut plan.warnings);
    plan.warnings = warnings;
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_redirects_reports_invalid_sources_first() {
        let layout = UrlLayout::Directory;
        let known = KnownPages::from_sources(["new.md"], layout);
        let raw: RawRedirects = [("old.txt", "new.md"), ("gone.md", "missing.md")]
            .into_iter()
            .collect();

        let plan = plan_redirects(&raw, &known, layout);

        assert_eq!(plan.emissions.len(), 1);
        assert_eq!(plan.emissions[0].old(), "old.txt");
        assert_eq!(
            plan.warnings,
            [
                RedirectWarning::InvalidSource {
                    old: "old.txt".to_owned()
                },
                RedirectWarning::UnresolvedTarget {
                    old: "gone.md".to_owned(),
                    target: "missing.md".to_owned(),
                },
            ]
        );
    }
}
