//! The generated `http_status_code.rs` file.

use std::path::{Path, PathBuf};

use teapot_core::{
    FileRules, GeneratedFile, comment_block, doc_comment, join_lines, link, see_also,
    to_variant_name,
};
use teapot_registry::MergedTable;

use crate::stamp::Stamp;

/// File-level declarations the generated file needs: member names are
/// acronym-heavy and the doc comments carry markdown.
pub const FILE_DIRECTIVES: &str =
    "#![allow(clippy::upper_case_acronyms)]\n#![allow(clippy::doc_markdown)]";

/// Opening lines of the enum declaration, raw storage included.
pub const ENUM_DECLARATION_START: &str =
    "#[repr(u16)]\n#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]\npub enum HttpStatusCode {";

/// Closing line of the enum declaration.
pub const ENUM_DECLARATION_END: &str = "}";

const MEMBER_INDENT: &str = "    ";

/// Render the non-doc comment block at the top of the generated file.
pub fn file_header(stamp: &Stamp) -> String {
    comment_block([
        String::new(),
        "http_status_code.rs".to_string(),
        String::new(),
        format!("Generated by teapot on {}.", stamp.date()),
        format!(
            "Copyright (c) {} The teapot developers. All rights reserved.",
            stamp.year()
        ),
        String::new(),
    ])
}

/// Render the doc comment that sits on the enum declaration.
pub fn enum_header_comment(last_updated: &str) -> String {
    doc_comment(
        [
            format!(
                "HTTP status codes as per the {}.",
                link(
                    Some("IANA HTTP status code registry"),
                    "http://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml"
                )
            ),
            String::new(),
            format!("Last updated: {last_updated}"),
            String::new(),
            see_also(
                Some("Wikipedia page - List of HTTP status codes"),
                "http://en.wikipedia.org/wiki/List_of_HTTP_status_codes",
            ),
            see_also(
                Some("HTTP protocol standard - Status Code Definitions"),
                "https://tools.ietf.org/html/rfc2616#section-10",
            ),
        ],
        "",
    )
}

/// The generated status-code enum source file.
///
/// Rendering is pure given the table, the registry freshness note, and
/// the stamp; the [`MergedTable`] constructor has already enforced the
/// ordering invariant, so an invalid table cannot reach this point.
pub struct StatusCodeRs<'a> {
    table: &'a MergedTable,
    last_updated: String,
    stamp: Stamp,
}

impl<'a> StatusCodeRs<'a> {
    pub fn new(table: &'a MergedTable, last_updated: impl Into<String>, stamp: Stamp) -> Self {
        Self {
            table,
            last_updated: last_updated.into(),
            stamp,
        }
    }

    fn enum_block(&self) -> String {
        let mut parts: Vec<String> = vec![
            enum_header_comment(&self.last_updated),
            ENUM_DECLARATION_START.to_string(),
        ];

        for (i, case) in self.table.iter().enumerate() {
            if i > 0 {
                parts.push(String::new());
            }
            if !case.comment_lines().is_empty() {
                parts.push(doc_comment(case.comment_lines(), MEMBER_INDENT));
            }
            parts.push(format!(
                "{}{} = {},",
                MEMBER_INDENT,
                to_variant_name(case.name()),
                case.code()
            ));
        }

        parts.push(ENUM_DECLARATION_END.to_string());
        join_lines(parts)
    }
}

impl GeneratedFile for StatusCodeRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("http_status_code.rs")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let blocks = [
            file_header(&self.stamp),
            FILE_DIRECTIVES.to_string(),
            self.enum_block(),
        ];
        format!("{}\n", blocks.join("\n\n"))
    }
}
