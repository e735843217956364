//! Core utilities and types for the kickstart project generator.
//!
//! This crate provides fundamental types shared by the code generation
//! engine, the feature catalogue and the command line front end.

mod file;
mod utils;
mod version;

// Generated file contents and disk materialisation
pub use file::{FileContent, Overwrite, WriteResult, write_file};
// String utilities
pub use utils::{kotlin_ident, quote, strip_line_breaks, to_camel_case, to_pascal_case};
pub use version::FrameworkVersion;
