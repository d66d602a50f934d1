//! Core utilities for the teapot status-code generator.
//!
//! This crate provides the low-level building blocks used by the
//! renderer: line joining, comment formatting, reference links,
//! identifier naming, and generated-file write rules.

mod file;
mod links;
mod naming;
mod text;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
// Reference formatting
pub use links::{link, see_also};
// Identifier naming
pub use naming::to_variant_name;
// Text blocks
pub use text::{comment_block, doc_comment, join_lines};
