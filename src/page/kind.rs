//! Source document kind detection.

/// Extensions recognized as markdown source documents.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkdn", "mkd"];

/// Check if a slash path names a markdown source document.
///
/// The extension is matched case-insensitively. A bare extension such as
/// `.md` is a hidden file, not a document.
///
/// # Examples
/// ```
/// use tola_redirects::page::is_markdown_file;
/// assert!(is_markdown_file("guide/setup.md"));
/// assert!(is_markdown_file("NOTES.MARKDOWN"));
/// assert!(!is_markdown_file("guide/setup.html"));
/// ```
pub fn is_markdown_file(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty()
            && MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_extensions() {
        for path in ["a.md", "a.markdown", "a.mdown", "a.mkdn", "a.mkd", "A.MD"] {
            assert!(is_markdown_file(path), "{path}");
        }
    }

    #[test]
    fn test_not_markdown() {
        for path in ["a.html", "a", "a.md.bak", ".md", "dir.md/file", ""] {
            assert!(!is_markdown_file(path), "{path}");
        }
    }

    #[test]
    fn test_nested_paths() {
        assert!(is_markdown_file("foo/fizz/old.md"));
        assert!(is_markdown_file("v1.2/notes.md"));
        assert!(!is_markdown_file("foo.md/"));
    }
}
