//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `build` - Redirect payloads (redirect.html, inject.html)
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars {
//!     canonical_url: "../new/",
//!     target_js: "\"../new/\"",
//!     hash_rules: "",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use std::borrow::Cow;

    use super::{Template, TemplateVars};

    /// Variables for redirect.html template.
    ///
    /// `canonical_url` must already be attribute-escaped and `target_js`
    /// must be a JS string literal.
    pub struct RedirectVars<'a> {
        pub canonical_url: &'a str,
        pub target_js: &'a str,
        pub hash_rules: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn values(&self) -> Vec<(&'static str, Cow<'_, str>)> {
            vec![
                ("CANONICAL_URL", Cow::Borrowed(self.canonical_url)),
                ("TARGET_JS", Cow::Borrowed(self.target_js)),
                ("HASH_RULES", Cow::Borrowed(self.hash_rules)),
            ]
        }
    }

    /// Standalone redirect page written in place of a moved page.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));

    /// Variables for inject.html template.
    pub struct InjectVars<'a> {
        pub hash_rules: &'a str,
    }

    impl TemplateVars for InjectVars<'_> {
        fn values(&self) -> Vec<(&'static str, Cow<'_, str>)> {
            vec![("HASH_RULES", Cow::Borrowed(self.hash_rules))]
        }
    }

    /// Fragment redirect block spliced into a page that still exists.
    pub const INJECT_HTML: Template<InjectVars<'static>> =
        Template::new(include_str!("build/inject.html"));
}
