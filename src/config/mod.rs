//! Configuration management for `redirects.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [build] and [redirects]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config discovery, path normalization
//! └── mod.rs         # RedirectsConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [build]
//! docs = "docs"
//! site = "site"
//! directory_urls = true
//!
//! [redirects]
//! "old.md" = "new.md"
//! "old.md#intro" = "new.md#overview"
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::BuildSectionConfig;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, normalize_path};

use crate::{
    cli::{BuildArgs, Cli},
    core::UrlLayout,
    redirect::RawRedirects,
    warn,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing redirects.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedirectsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Old page -> new target, in file order
    #[serde(default)]
    pub redirects: RawRedirects,
}

impl RedirectsConfig {
    /// Load configuration for the current command.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory; relative paths resolve against it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config, &cwd)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        config.finalize(cli.command.build_args());
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        for field in &ignored {
            warn!("config"; "unknown field `{}` in {}, ignoring", field, path.display());
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Set root, apply CLI overrides, then make paths absolute.
    fn finalize(&mut self, args: &BuildArgs) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.apply_build_args(args);
        let root = self.root.clone();
        self.normalize_paths(&root);
    }

    /// Markdown source directory (absolute after loading).
    pub fn docs_dir(&self) -> &Path {
        &self.build.docs
    }

    /// Rendered site directory (absolute after loading).
    pub fn site_dir(&self) -> &Path {
        &self.build.site
    }

    pub const fn layout(&self) -> UrlLayout {
        self.build.layout()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    pub fn apply_build_args(&mut self, args: &BuildArgs) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.docs, args.docs.as_ref());
        Self::update_option(&mut self.build.site, args.site.as_ref());
        Self::update_option(&mut self.build.directory_urls, args.directory_urls.as_ref());
        self.build.strict |= args.strict;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize build directories relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.build.docs = normalize_path(&root.join(&self.build.docs));
        self.build.site = normalize_path(&root.join(&self.build.site));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every validation error and return them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        section::validate_redirects(&self.redirects, &mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (catches typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RedirectsConfig {
    let (parsed, ignored) = RedirectsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = RedirectsConfig::from_str("[build\ndocs = \"docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_non_string_target_is_parse_error() {
        let result = RedirectsConfig::from_str("[redirects]\n\"old.md\" = 3");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_redirects_keep_file_order() {
        let config = test_parse_config(
            r#"
[redirects]
"zeta.md" = "a.md"
"alpha.md#x" = "b.md#y"
"mid.md" = "https://example.org/"
"#,
        );
        let keys: Vec<&str> = config.redirects.iter().map(|(old, _)| old).collect();
        assert_eq!(keys, ["zeta.md", "alpha.md#x", "mid.md"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = test_parse_config("");
        assert!(config.redirects.is_empty());
        assert_eq!(config.layout(), UrlLayout::Directory);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\ndocs = \"src\"\nsite_dir = \"out\"\n[extra]\nfield = 1";
        let (config, ignored) = RedirectsConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.build.docs, PathBuf::from("src"));
        assert!(ignored.iter().any(|f| f == "build.site_dir"));
        assert!(ignored.iter().any(|f| f.contains("extra")));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = test_parse_config("[build]\ndirectory_urls = true\nsite = \"public\"");
        config.apply_build_args(&BuildArgs {
            docs: Some("content".into()),
            directory_urls: Some(false),
            strict: true,
            ..Default::default()
        });
        assert_eq!(config.build.docs, PathBuf::from("content"));
        assert_eq!(config.build.site, PathBuf::from("public"));
        assert_eq!(config.layout(), UrlLayout::File);
        assert!(config.build.strict);
    }

    #[test]
    fn test_strict_from_config_survives_cli() {
        let mut config = test_parse_config("[build]\nstrict = true");
        config.apply_build_args(&BuildArgs::default());
        assert!(config.build.strict);
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("redirects.toml");
        fs::write(&path, "[build]\ndocs = \"src\"\n").unwrap();

        let mut config = RedirectsConfig::from_path(&path).unwrap();
        config.config_path = normalize_path(&path);
        config.finalize(&BuildArgs::default());

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.root, root);
        assert_eq!(config.docs_dir(), root.join("src"));
        assert_eq!(config.site_dir(), root.join("site"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = RedirectsConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            r##"
[build]
docs = ""

[redirects]
"#a" = "new.md"
"old.md" = ""
"##,
        );
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
    }
}
