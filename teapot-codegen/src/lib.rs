//! Renders the generated HTTP status-code enum source file.

mod stamp;
mod status_code_rs;

pub use stamp::Stamp;
pub use status_code_rs::{
    ENUM_DECLARATION_END, ENUM_DECLARATION_START, FILE_DIRECTIVES, StatusCodeRs,
    enum_header_comment, file_header,
};
pub use teapot_core::GeneratedFile;
