//! The entity representing one status-code enumeration member.

use crate::error::{Error, Result};

/// One member of the generated enumeration: a numeric code, a
/// human-readable name, and the documentation lines rendered above it.
///
/// Immutable once constructed. Comment lines hold final text; any links
/// or see-also references are pre-rendered by the caller with
/// [`teapot_core::link`] and [`teapot_core::see_also`].
///
/// Codes outside the 1xx-5xx ranges are accepted and rendered as-is;
/// the registry is the authority on what is worth listing, not this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    code: u16,
    name: String,
    comment_lines: Vec<String>,
}

impl Case {
    /// Create a case. Rejects an empty display name.
    pub fn new<I, S>(code: u16, name: impl Into<String>, comment_lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::malformed_case(code));
        }
        Ok(Self {
            code,
            name,
            comment_lines: comment_lines.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a case with no documentation lines.
    pub fn undocumented(code: u16, name: impl Into<String>) -> Result<Self> {
        Self::new(code, name, Vec::<String>::new())
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment_lines(&self) -> &[String] {
        &self.comment_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_case() {
        let case = Case::new(418, "I'm A Teapot", ["Returned by tea pots"]).unwrap();
        assert_eq!(case.code(), 418);
        assert_eq!(case.name(), "I'm A Teapot");
        assert_eq!(case.comment_lines(), ["Returned by tea pots"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Case::undocumented(500, "").unwrap_err();
        assert!(matches!(*err, Error::MalformedCase { code: 500 }));

        let err = Case::undocumented(500, "   ").unwrap_err();
        assert!(matches!(*err, Error::MalformedCase { code: 500 }));
    }

    #[test]
    fn test_out_of_range_code_accepted() {
        // Permissive by design: 599 is not in any RFC but is in real use.
        let case = Case::undocumented(999, "Out Of Range").unwrap();
        assert_eq!(case.code(), 999);
    }
}
