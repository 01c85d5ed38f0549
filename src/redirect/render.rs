//! Redirect payload rendering.
//!
//! Both payloads branch on `window.location.hash` with a first-match
//! `if / else if` chain in declaration order.

use super::HashRule;
use crate::embed::build::{INJECT_HTML, InjectVars, REDIRECT_HTML, RedirectVars};
use crate::utils::html::{escape_attr, js_string};

const INDENT: &str = "        ";

/// Render the standalone redirect page for `destination`.
///
/// With no matching rule the current fragment is appended to `destination`,
/// unless `destination` already carries its own fragment.
///
/// A fragment already in `destination` wins over the one in the address bar.
pub fn render_redirect(destination: &str, rules: &[HashRule]) -> String {
    let mut branches: Vec<(String, String)> = rules
        .iter()
        .map(|rule| {
            (
                format!("anchor === {}", js_string(&rule.fragment)),
                format!("target = {};", js_string(&rule.destination)),
            )
        })
        .collect();

    if !destination.contains('#') {
        branches.push(("anchor".to_owned(), "target += anchor;".to_owned()));
    }

    let canonical_url = escape_attr(destination);
    let target_js = js_string(destination);
    let hash_rules = if_chain(&branches, INDENT);

    REDIRECT_HTML.render(&RedirectVars {
        canonical_url: &canonical_url,
        target_js: &target_js,
        hash_rules: &hash_rules,
    })
}

/// Render the block injected into a page that still exists.
///
/// Returns `None` when there are no rules to inject.
pub fn render_inject(rules: &[HashRule]) -> Option<String> {
    if rules.is_empty() {
        return None;
    }

    let branches: Vec<(String, String)> = rules
        .iter()
        .map(|rule| {
            (
                format!("anchor === {}", js_string(&rule.fragment)),
                format!("location.href = {};", js_string(&rule.destination)),
            )
        })
        .collect();

    let hash_rules = if_chain(&branches, INDENT);
    let block = INJECT_HTML.render(&InjectVars {
        hash_rules: &hash_rules,
    });
    Some(block.trim_end().to_owned())
}

/// `if (a) {\n  x\n} else if (b) {\n  y\n}` with every line indented.
fn if_chain(branches: &[(String, String)], indent: &str) -> String {
    let mut out = String::new();
    for (i, (condition, body)) in branches.iter().enumerate() {
        if i == 0 {
            out.push_str(indent);
            out.push_str("if (");
        } else {
            out.push_str(" else if (");
        }
        out.push_str(condition);
        out.push_str(") {\n");
        out.push_str(indent);
        out.push_str("    ");
        out.push_str(body);
        out.push('\n');
        out.push_str(indent);
        out.push('}');
    }
    out
}
