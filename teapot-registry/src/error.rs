use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for registry operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --registry with a path to a registry snapshot"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry snapshot")]
    #[diagnostic(code(teapot::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate status code {code} in registry snapshot")]
    #[diagnostic(
        code(teapot::duplicate_code),
        help("the registry snapshot must list each code exactly once")
    )]
    DuplicateCode { code: u16 },

    #[error("status code {code} has an empty display name")]
    #[diagnostic(
        code(teapot::malformed_case),
        help("every status code needs a non-empty human-readable name")
    )]
    MalformedCase { code: u16 },

    #[error("merged table violates its ordering invariant: {detail}")]
    #[diagnostic(code(teapot::invalid_merge_state))]
    InvalidMergeState { detail: String },
}

impl Error {
    /// Create an I/O error for a snapshot path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a toml error, preserving the source span.
    pub fn parse(source: toml::de::Error, content: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, content.to_string()),
            span,
            source,
        })
    }

    pub fn duplicate_code(code: u16) -> Box<Self> {
        Box::new(Error::DuplicateCode { code })
    }

    pub fn malformed_case(code: u16) -> Box<Self> {
        Box::new(Error::MalformedCase { code })
    }

    pub fn invalid_merge_state(detail: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidMergeState {
            detail: detail.into(),
        })
    }
}
