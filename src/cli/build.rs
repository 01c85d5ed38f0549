//! `build` command: write redirect pages into the rendered site.

use std::path::Path;

use anyhow::{Context, Result};

use super::common::{check_strict, prepare, report_warnings};
use crate::config::RedirectsConfig;
use crate::redirect::emit;
use crate::utils::plural::plural_count;
use crate::{debug, log};

pub fn run_build(config: &RedirectsConfig) -> Result<()> {
    let plan = prepare(config)?;
    let site_dir = config.site_dir();

    if plan.emissions.is_empty() {
        log!("build"; "no redirects to write");
        return check_strict(config);
    }

    let report = emit(&plan.emissions, site_dir)
        .with_context(|| format!("failed to write redirects into {}", site_dir.display()))?;
    report_warnings("build", &report.warnings);

    for path in &report.written {
        debug!("build"; "wrote {}", display_rel(path, site_dir));
    }
    for path in &report.injected {
        debug!("build"; "injected into {}", display_rel(path, site_dir));
    }

    log!(
        "build";
        "{} written, {} injected, {} unchanged",
        plural_count(report.written.len(), "redirect page"),
        report.injected.len(),
        report.unchanged.len()
    );

    check_strict(config)
}

fn display_rel(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::BuildArgs;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &Path, toml: &str) -> RedirectsConfig {
        let mut config = test_parse_config(toml);
        config.apply_build_args(&BuildArgs {
            docs: Some(dir.join("docs")),
            site: Some(dir.join("site")),
            ..Default::default()
        });
        config
    }

    #[test]
    fn test_run_build_writes_site() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs/guide")).unwrap();
        fs::write(dir.path().join("docs/index.md"), "# home").unwrap();
        fs::write(dir.path().join("docs/guide/setup.md"), "# setup").unwrap();

        let config = config_in(
            dir.path(),
            r#"
[redirects]
"install.md" = "guide/setup.md"
"legacy/faq.md" = "https://example.org/faq"
"#,
        );
        run_build(&config).unwrap();

        let html = fs::read_to_string(dir.path().join("site/install/index.html")).unwrap();
        assert!(html.contains(r#"href="../guide/setup/""#));
        assert!(dir.path().join("site/legacy/faq/index.html").is_file());
    }

    #[test]
    fn test_run_build_missing_docs_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path(), "[redirects]\n\"a.md\" = \"b.md\"");
        assert!(run_build(&config).is_err());
    }

    #[test]
    fn test_display_rel() {
        let base = Path::new("/site");
        assert_eq!(display_rel(Path::new("/site/a/index.html"), base), "a/index.html");
        assert_eq!(display_rel(Path::new("/other/x"), base), "/other/x");
    }
}
