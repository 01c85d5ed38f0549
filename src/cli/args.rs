//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Redirect pages for moved documents in a rendered docs site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "redirects.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write redirect pages into the rendered site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Show planned redirects and where they land, without writing
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

impl Commands {
    pub const fn build_args(&self) -> &BuildArgs {
        match self {
            Self::Build { build_args } | Self::Check { build_args } => build_args,
        }
    }
}

/// Shared arguments for Build and Check commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Markdown source directory (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub docs: Option<PathBuf>,

    /// Rendered site directory (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub site: Option<PathBuf>,

    /// Directory-style URLs (`page/`) instead of file-style (`page.html`)
    #[arg(short = 'u', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub directory_urls: Option<bool>,

    /// Fail if any warning was reported
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
