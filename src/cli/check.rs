//! `check` command: print the planned redirects without writing anything.

use anyhow::Result;

use super::common::{check_strict, prepare};
use crate::config::RedirectsConfig;
use crate::core::{encode_path, resolve_against};
use crate::log;
use crate::redirect::Emission;
use crate::utils::plural::plural_count;

pub fn run_check(config: &RedirectsConfig) -> Result<()> {
    let plan = prepare(config)?;

    for emission in &plan.emissions {
        for line in describe(emission) {
            log!("check"; "{}", line);
        }
    }

    log!(
        "check";
        "{} planned, {}",
        plural_count(plan.emissions.len(), "redirect"),
        plural_count(plan.warnings.len(), "warning")
    );

    check_strict(config)
}

/// One line per redirect: `old -> destination => landing`.
///
/// The landing path is the destination resolved from the URL the old page
/// is served at.
fn describe(emission: &Emission) -> Vec<String> {
    let base = encode_path(emission.file());
    let mut lines = Vec::with_capacity(emission.rules().len() + 1);

    if let Emission::Standalone {
        old, destination, ..
    } = emission
    {
        lines.push(format!(
            "{old} -> {destination} => {}",
            resolve_against(&base, destination)
        ));
    }
    for rule in emission.rules() {
        lines.push(format!(
            "{}{} -> {} => {}",
            emission.old(),
            rule.fragment,
            rule.destination,
            resolve_against(&base, &rule.destination)
        ));
    }
    lines
}
