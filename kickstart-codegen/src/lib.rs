//! Feature composition and code emission engine for the kickstart project
//! generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Text and project builders (Indenter, ProjectBuilder)
//! - [`generation`] - Output state (imports, build manifest, templates, results)
//! - [`feature`] - Feature model, registry, dependency resolver and render driver

pub mod builder;
pub mod feature;
pub mod generation;

mod error;

pub use error::{Error, Result};
