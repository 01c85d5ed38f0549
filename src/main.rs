use anyhow::Result;
use clap::{ColorChoice, Parser};
use tola_redirects::cli::{self, Cli, Commands};
use tola_redirects::config::RedirectsConfig;
use tola_redirects::logger;

fn main() {
    if let Err(err) = run() {
        logger::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RedirectsConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::run_build(&config),
        Commands::Check { .. } => cli::check::run_check(&config),
    }
}
