//! HTML and inline-script escaping.
//!
//! - `escape_attr()` - HTML entity escaping for attribute values
//! - `js_string()` - JavaScript string literal safe inside `<script>`
//! - `find_head_end()` - locate the closing `</head>` tag

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```
/// use tola_redirects::utils::html::escape_attr;
/// assert_eq!(escape_attr("a?b=1&c=\"2\""), "a?b=1&amp;c=&quot;2&quot;");
/// assert_eq!(escape_attr("../new/"), "../new/");
/// ```
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(&ESCAPE_CHARS[..]) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Encode `s` as a double-quoted JavaScript string literal.
///
/// `</` is written as `<\/` so the literal can never close the surrounding
/// `<script>` element.
pub fn js_string(s: &str) -> String {
    let quoted = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".into());
    quoted.replace("</", "<\\/")
}

/// Byte offset of the first `</head>` (ASCII case-insensitive).
pub fn find_head_end(html: &str) -> Option<usize> {
    const CLOSE_HEAD: &[u8] = b"</head>";
    html.as_bytes()
        .windows(CLOSE_HEAD.len())
        .position(|window| window.eq_ignore_ascii_case(CLOSE_HEAD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
        assert!(matches!(escape_attr("plain/path/"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("../new/#hash"), "\"../new/#hash\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(js_string("x</script>y"), "\"x<\\/script>y\"");
    }

    #[test]
    fn test_find_head_end() {
        assert_eq!(find_head_end("<head></head>"), Some(6));
        assert_eq!(find_head_end("<HEAD></HEAD><body>"), Some(6));
        assert_eq!(find_head_end("<p>no head</p>"), None);
        assert_eq!(find_head_end("ünï</head>"), Some(5));
    }
}
