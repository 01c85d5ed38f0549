//! Template types for typed variable injection.
//!
//! Placeholders are written `__NAME__`. Rendering is a single pass, so a
//! substituted value is never scanned for further placeholders.

use std::borrow::Cow;
use std::marker::PhantomData;

const DELIMITER: &str = "__";

/// Trait for template variable sets
pub trait TemplateVars {
    /// `(NAME, value)` pairs for the placeholders this set fills.
    fn values(&self) -> Vec<(&'static str, Cow<'_, str>)>;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    /// Render with `vars`. Unknown placeholders are left as-is.
    pub fn render(&self, vars: &V) -> String {
        let values = vars.values();
        let mut out = String::with_capacity(self.content.len() + 256);
        let mut rest = self.content;

        while let Some(start) = rest.find(DELIMITER) {
            let after = &rest[start + DELIMITER.len()..];
            let Some(len) = after.find(DELIMITER) else {
                break;
            };
            let name = &after[..len];

            match values.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => {
                    out.push_str(&rest[..start]);
                    out.push_str(value);
                    rest = &after[len + DELIMITER.len()..];
                }
                None => {
                    out.push_str(&rest[..start + DELIMITER.len()]);
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
