//! Reference link formatting for rendered doc comments.

/// Render a hyperlink.
///
/// A bare URL is wrapped in angle brackets; with display text it becomes
/// a markdown-style link.
///
/// # Example
///
/// ```
/// use teapot_core::link;
///
/// assert_eq!(link(None, "http://x"), "<http://x>");
/// assert_eq!(link(Some("T"), "http://x"), "[T](http://x)");
/// ```
pub fn link(display: Option<&str>, url: &str) -> String {
    match display {
        None => format!("<{url}>"),
        Some(text) => format!("[{text}]({url})"),
    }
}

/// Render a "see also" reference line wrapping [`link`].
pub fn see_also(display: Option<&str>, url: &str) -> String {
    format!("- seealso: {}", link(display, url))
}
