//! Configuration section definitions.
//!
//! | Module      | TOML Section   | Purpose                              |
//! |-------------|----------------|--------------------------------------|
//! | `build`     | `[build]`      | Docs/site paths, URL layout, strict  |
//! | `redirects` | `[redirects]`  | Old page -> new target map           |

mod build;
mod redirects;

pub use build::BuildSectionConfig;
pub use redirects::validate_redirects;
