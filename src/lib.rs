//! tola-redirects - redirect pages for moved documents in a rendered docs site.
//!
//! ```text
//! redirects.toml ─► config ─► page::scan_docs ─► redirect::plan ─► redirect::emit ─► site/
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod embed;
pub mod logger;
pub mod page;
pub mod redirect;
pub mod utils;
