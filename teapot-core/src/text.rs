//! Line joining and comment-block formatting.

/// Join lines with a newline separator, without a trailing separator.
///
/// # Example
///
/// ```
/// use teapot_core::join_lines;
///
/// assert_eq!(join_lines(["a", "b"]), "a\nb");
/// assert_eq!(join_lines::<[&str; 0], _>([]), "");
/// ```
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format lines as a `///` doc-comment block with an optional line prefix.
///
/// Empty lines become a bare `///` marker so blank spacing inside the
/// rendered comment is preserved, never collapsed.
///
/// # Example
///
/// ```
/// use teapot_core::doc_comment;
///
/// let block = doc_comment(["First", "", "Second"], "    ");
/// assert_eq!(block, "    /// First\n    ///\n    /// Second");
/// ```
pub fn doc_comment<I, S>(lines: I, line_prefix: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = lines
        .into_iter()
        .map(|line| {
            let line = line.as_ref();
            if line.is_empty() {
                format!("{line_prefix}///")
            } else {
                format!("{line_prefix}/// {line}")
            }
        })
        .collect();
    join_lines(lines)
}

/// Format lines as a plain `//` comment block.
///
/// Used for non-documentation text such as the generated file header.
pub fn comment_block<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = lines
        .into_iter()
        .map(|line| {
            let line = line.as_ref();
            if line.is_empty() {
                "//".to_string()
            } else {
                format!("// {line}")
            }
        })
        .collect();
    join_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines_round_trip() {
        let lines = vec!["one", "two", "three"];
        let joined = join_lines(lines.clone());
        let split: Vec<&str> = joined.split('\n').collect();
        assert_eq!(split, lines);
    }

    #[test]
    fn test_join_lines_no_trailing_separator() {
        assert_eq!(join_lines(["a"]), "a");
        assert_eq!(join_lines(["a", "b"]), "a\nb");
    }

    #[test]
    fn test_join_lines_empty_input() {
        let lines: Vec<&str> = Vec::new();
        assert_eq!(join_lines(lines), "");
    }

    #[test]
    fn test_doc_comment_prefixes_every_line() {
        let block = doc_comment(["alpha", "beta"], "  ");
        for line in block.lines() {
            assert!(line.starts_with("  /// "));
        }
    }

    #[test]
    fn test_doc_comment_preserves_blank_lines() {
        let block = doc_comment(["first", "", "second"], "");
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines, vec!["/// first", "///", "/// second"]);
    }

    #[test]
    fn test_doc_comment_line_count_matches_input() {
        let input = vec!["a", "", "", "b", ""];
        let block = doc_comment(input.clone(), "    ");
        assert_eq!(block.split('\n').count(), input.len());
    }

    #[test]
    fn test_comment_block() {
        let block = comment_block(["", "header.rs", ""]);
        assert_eq!(block, "//\n// header.rs\n//");
    }
}
