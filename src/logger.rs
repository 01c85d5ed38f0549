//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, shown only with `--verbose`
//! - `warn!` macro, which also counts warnings for `--strict`
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "wrote {} redirect pages", count);
//! warn!("redirects"; "'{}' is not a valid markdown file", key);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Warnings logged since startup
static WARNINGS: AtomicUsize = AtomicUsize::new(0);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Number of warnings logged so far.
pub fn warning_count() -> usize {
    WARNINGS.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a warning to stderr and count it
///
/// # Usage
/// ```ignore
/// warn!("module"; "something odd: {}", value);
/// ```
#[macro_export]
macro_rules! warn {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::warning($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Log a warning with a colored module prefix and bump the counter
pub fn warning(module: &str, message: &str) {
    WARNINGS.fetch_add(1, Ordering::SeqCst);
    let prefix = colorize_prefix("warn");
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {} {message}", format!("{module}:").dimmed()).ok();
}

/// Log an error to stderr
pub fn error(message: &str) {
    let prefix = colorize_prefix("error");
    writeln!(stderr().lock(), "{prefix} {message}").ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "build" => prefix.bright_green().bold().to_string(),
        "check" => prefix.bright_blue().bold().to_string(),
        "warn" => prefix.yellow().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("build"), "[build]");
        assert_eq!(colorize_prefix("Redirects"), "[Redirects]");
    }

    #[test]
    fn test_warning_counter() {
        let before = warning_count();
        warning("test", "first");
        warning("test", "second");
        // other tests may warn concurrently
        assert!(warning_count() >= before + 2);
    }
}
