//! Steps shared by `build` and `check`.

use anyhow::{Result, bail};

use crate::config::RedirectsConfig;
use crate::logger::warning_count;
use crate::page::scan_docs;
use crate::redirect::{Plan, RedirectWarning, plan_redirects};
use crate::utils::plural::plural_count;
use crate::{debug, warn};

/// Scan the docs directory and plan every configured redirect.
///
/// Planning warnings are logged here.
pub fn prepare(config: &RedirectsConfig) -> Result<Plan> {
    let layout = config.layout();
    let known = scan_docs(config.docs_dir(), layout)?;
    debug!(
        "scan";
        "{} in {} ({} urls)",
        plural_count(known.len(), "page"),
        config.docs_dir().display(),
        layout
    );

    let plan = plan_redirects(&config.redirects, &known, layout);
    debug!(
        "plan";
        "{} from {}",
        plural_count(plan.emissions.len(), "emission"),
        plural_count(config.redirects.len(), "entry")
    );
    report_warnings("redirects", &plan.warnings);

    Ok(plan)
}

pub fn report_warnings(module: &str, warnings: &[RedirectWarning]) {
    for warning in warnings {
        warn!(module; "{}", warning);
    }
}

/// Fail in strict mode once anything was warned about.
pub fn check_strict(config: &RedirectsConfig) -> Result<()> {
    let count = warning_count();
    if config.build.strict && count > 0 {
        bail!("aborted with {} in strict mode", plural_count(count, "warning"));
    }
    Ok(())
}
