//! Splicing fragment redirects into an existing rendered page.

use crate::utils::html::find_head_end;

/// First line of an injected block.
pub const BLOCK_START: &str = "<!-- tola-redirects -->";
/// Last line of an injected block.
pub const BLOCK_END: &str = "<!-- /tola-redirects -->";

/// Insert `block` right before `</head>`, or at the very top when the page
/// has no head.
///
/// A block from an earlier run is removed first, so splicing the same block
/// again yields the same bytes.
pub fn splice(html: &str, block: &str) -> String {
    let html = strip_block(html);
    match find_head_end(&html) {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + block.len() + 1);
            out.push_str(&html[..pos]);
            out.push_str(block);
            out.push('\n');
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{block}\n{html}"),
    }
}

/// Remove a previously injected block (and the newline that followed it).
pub fn strip_block(html: &str) -> String {
    let Some(start) = html.find(BLOCK_START) else {
        return html.to_owned();
    };
    let Some(end) = html[start..].find(BLOCK_END).map(|i| start + i + BLOCK_END.len()) else {
        return html.to_owned();
    };
    let end = if html[end..].starts_with('\n') {
        end + 1
    } else {
        end
    };

    let mut out = String::with_capacity(html.len());
    out.push_str(&html[..start]);
    out.push_str(&html[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(body: &str) -> String {
        format!("{BLOCK_START}\n<script>{body}</script>\n{BLOCK_END}")
    }

    #[test]
    fn test_splice_before_head_end() {
        let html = "<html><head><title>x</title>\n</head><body></body></html>";
        let out = splice(html, &block("a"));
        assert_eq!(
            out,
            format!("<html><head><title>x</title>\n{}\n</head><body></body></html>", block("a"))
        );
    }

    #[test]
    fn test_splice_case_insensitive_head() {
        let out = splice("<HEAD></HEAD>", "B");
        assert_eq!(out, "<HEAD>B\n</HEAD>");
    }

    #[test]
    fn test_splice_without_head_prepends() {
        let out = splice("<p>content</p>", &block("a"));
        assert_eq!(out, format!("{}\n<p>content</p>", block("a")));
    }

    #[test]
    fn test_splice_is_idempotent() {
        let html = "<html><head>\n</head><body>hi</body></html>";
        let once = splice(html, &block("a"));
        let twice = splice(&once, &block("a"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_replaces_stale_block() {
        let html = "<head></head>";
        let old = splice(html, &block("old"));
        let new = splice(&old, &block("new"));
        assert_eq!(new, splice(html, &block("new")));
        assert!(!new.contains("old"));
    }

    #[test]
    fn test_strip_block_without_block() {
        assert_eq!(strip_block("<head></head>"), "<head></head>");
        // unterminated block is left alone
        let broken = format!("{BLOCK_START}<head></head>");
        assert_eq!(strip_block(&broken), broken);
    }
}
