//! Redirect emission.
//!
//! [`plan`] maps table × known pages to emissions and warnings without I/O.
//! [`emit`] performs the filesystem writes for a finished plan.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::inject::splice;
use super::render::{render_inject, render_redirect};
use super::table::RedirectTable;
use super::target::RedirectTarget;
use crate::core::{UrlLayout, output_path_of};
use crate::debug;
use crate::page::KnownPages;

// ============================================================================
// Plan
// ============================================================================

/// A resolved fragment redirect: `fragment` on the old page goes to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRule {
    pub fragment: String,
    pub destination: String,
}

/// One unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// Write a redirect page where the old page used to be rendered.
    Standalone {
        old: String,
        /// Output file relative to the site directory.
        output_path: String,
        destination: String,
        rules: Vec<HashRule>,
    },
    /// The old page still exists: splice its fragment redirects into it.
    Inject {
        old: String,
        /// Rendered page relative to the site directory.
        page_path: String,
        rules: Vec<HashRule>,
    },
}

impl Emission {
    pub fn old(&self) -> &str {
        match self {
            Self::Standalone { old, .. } | Self::Inject { old, .. } => old,
        }
    }

    pub fn rules(&self) -> &[HashRule] {
        match self {
            Self::Standalone { rules, .. } | Self::Inject { rules, .. } => rules,
        }
    }

    /// Target file relative to the site directory.
    pub fn file(&self) -> &str {
        match self {
            Self::Standalone { output_path, .. } => output_path,
            Self::Inject { page_path, .. } => page_path,
        }
    }
}

/// Non-fatal problems found while planning or emitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectWarning {
    /// Old key is not a markdown source path (still processed).
    InvalidSource { old: String },
    /// Overall target is neither external nor a known page; the page is skipped.
    UnresolvedTarget { old: String, target: String },
    /// A fragment target is neither external nor a known page; only that rule is dropped.
    UnresolvedHashTarget {
        old: String,
        fragment: String,
        target: String,
    },
    /// A page marked for injection has no rendered file.
    MissingRenderedPage { old: String, path: PathBuf },
    /// The output file is already a rendered page or written by an earlier entry.
    OutputConflict { old: String, path: String },
}

impl fmt::Display for RedirectWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSource { old } => write!(f, "'{old}' is not a valid markdown file"),
            Self::UnresolvedTarget { old, target } => {
                write!(f, "redirect target '{target}' for '{old}' does not exist")
            }
            Self::UnresolvedHashTarget {
                old,
                fragment,
                target,
            } => write!(
                f,
                "redirect target '{target}' for '{old}{fragment}' does not exist"
            ),
            Self::MissingRenderedPage { old, path } => write!(
                f,
                "rendered page '{}' for '{old}' not found, fragment redirects skipped",
                path.display()
            ),
            Self::OutputConflict { old, path } => write!(
                f,
                "redirect for '{old}' would overwrite '{path}', skipped"
            ),
        }
    }
}

/// Emissions in table order plus the warnings collected on the way.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub emissions: Vec<Emission>,
    pub warnings: Vec<RedirectWarning>,
}

/// Resolve every table entry against the known pages.
///
/// - old page is itself a known page: [`Emission::Inject`] of its fragment
///   rules (only when some remain); the overall target is not consulted
/// - otherwise: [`Emission::Standalone`]; an unresolved overall target is a
///   warning and no emission for that page
/// - unresolved fragment target: warning, only that rule is dropped
/// - an output file already claimed by a rendered page or an earlier
///   emission: warning, the later emission is dropped
pub fn plan(table: &RedirectTable, known: &KnownPages, layout: UrlLayout) -> Plan {
    let mut plan = Plan::default();
    let mut claimed: FxHashSet<String> = known.iter().map(|page| page.dest_path.clone()).collect();
    let mut injected: FxHashSet<String> = FxHashSet::default();

    for (old, entry) in table.iter() {
        let emission = match known.get(old) {
            Some(page) => {
                let rules = resolve_rules(old, &entry.hash_redirects, &page.dest_path, known, layout, &mut plan.warnings);
                if rules.is_empty() {
                    debug!("plan"; "'{}' still exists and has no fragment redirects, skipped", old);
                    continue;
                }
                if !injected.insert(page.dest_path.clone()) {
                    plan.warnings.push(RedirectWarning::OutputConflict {
                        old: old.to_owned(),
                        path: page.dest_path.clone(),
                    });
                    continue;
                }
                Emission::Inject {
                    old: old.to_owned(),
                    page_path: page.dest_path.clone(),
                    rules,
                }
            }
            None => {
                let Some(overall) = entry.overall.resolve(known) else {
                    plan.warnings.push(RedirectWarning::UnresolvedTarget {
                        old: old.to_owned(),
                        target: entry.overall.to_string(),
                    });
                    continue;
                };
                let output_path = output_path_of(old, layout);
                let rules = resolve_rules(old, &entry.hash_redirects, &output_path, known, layout, &mut plan.warnings);
                if !claimed.insert(output_path.clone()) {
                    plan.warnings.push(RedirectWarning::OutputConflict {
                        old: old.to_owned(),
                        path: output_path,
                    });
                    continue;
                }
                Emission::Standalone {
                    old: old.to_owned(),
                    destination: overall.link_from_output(&output_path, layout),
                    output_path,
                    rules,
                }
            }
        };
        plan.emissions.push(emission);
    }

    plan
}

/// Resolve fragment rules as seen from the rendered file `base_output`.
fn resolve_rules(
    old: &str,
    hash_redirects: &[(String, RedirectTarget)],
    base_output: &str,
    known: &KnownPages,
    layout: UrlLayout,
    warnings: &mut Vec<RedirectWarning>,
) -> Vec<HashRule> {
    let mut rules = Vec::with_capacity(hash_redirects.len());
    for (fragment, target) in hash_redirects {
        match target.resolve(known) {
            Some(resolved) => rules.push(HashRule {
                fragment: fragment.clone(),
                destination: resolved.link_from_output(base_output, layout),
            }),
            None => warnings.push(RedirectWarning::UnresolvedHashTarget {
                old: old.to_owned(),
                fragment: fragment.clone(),
                target: target.to_string(),
            }),
        }
    }
    rules
}

// ============================================================================
// Emit
// ============================================================================

/// Filesystem failures while emitting. These abort the build.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),
}

/// What happened to each emission, grouped by outcome.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Redirect pages written.
    pub written: Vec<PathBuf>,
    /// Existing pages that received fragment redirects.
    pub injected: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
    pub warnings: Vec<RedirectWarning>,
}

impl EmitReport {
    /// Number of files touched on disk.
    pub fn changed(&self) -> usize {
        self.written.len() + self.injected.len()
    }
}

enum Outcome {
    Written(PathBuf),
    Injected(PathBuf),
    Unchanged(PathBuf),
    Skipped(RedirectWarning),
}

/// Write every emission below `site_dir`.
///
/// Emissions are independent (each touches its own file) and run in
/// parallel. The report keeps plan order. The first filesystem error wins.
pub fn emit(emissions: &[Emission], site_dir: &Path) -> Result<EmitReport, EmitError> {
    let outcomes: Vec<Result<Outcome, EmitError>> = emissions
        .par_iter()
        .map(|emission| emit_one(emission, site_dir))
        .collect();

    let mut report = EmitReport::default();
    for outcome in outcomes {
        match outcome? {
            Outcome::Written(path) => report.written.push(path),
            Outcome::Injected(path) => report.injected.push(path),
            Outcome::Unchanged(path) => report.unchanged.push(path),
            Outcome::Skipped(warning) => report.warnings.push(warning),
        }
    }
    Ok(report)
}

fn emit_one(emission: &Emission, site_dir: &Path) -> Result<Outcome, EmitError> {
    let path = site_dir.join(emission.file());

    match emission {
        Emission::Standalone {
            destination, rules, ..
        } => {
            let html = render_redirect(destination, rules);
            if write_if_changed(&path, html.as_bytes())? {
                Ok(Outcome::Written(path))
            } else {
                Ok(Outcome::Unchanged(path))
            }
        }
        Emission::Inject { old, rules, .. } => {
            let Some(block) = render_inject(rules) else {
                return Ok(Outcome::Unchanged(path));
            };

            let html = match fs::read_to_string(&path) {
                Ok(html) => html,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return Ok(Outcome::Skipped(RedirectWarning::MissingRenderedPage {
                        old: old.clone(),
                        path,
                    }));
                }
                Err(err) => return Err(EmitError::Read(path, err)),
            };

            let spliced = splice(&html, &block);
            if spliced == html {
                return Ok(Outcome::Unchanged(path));
            }
            fs::write(&path, spliced).map_err(|err| EmitError::Write(path.clone(), err))?;
            Ok(Outcome::Injected(path))
        }
    }
}

/// Write `content` unless the file already holds exactly these bytes.
///
/// Returns whether the file was written.
fn write_if_changed(path: &Path, content: &[u8]) -> Result<bool, EmitError> {
    if fs::read(path).is_ok_and(|existing| existing == content) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| EmitError::CreateDir(parent.to_path_buf(), err))?;
    }
    fs::write(path, content).map_err(|err| EmitError::Write(path.to_path_buf(), err))?;
    Ok(true)
}
