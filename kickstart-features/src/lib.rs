//! Feature catalogue of the kickstart project generator.
//!
//! # Module Organization
//!
//! - `catalogue` - Base, server and client features and the process-wide registry
//! - `info` - Per-run [`BuildInfo`] context and project settings
//! - `request` - [`GenerationRequest`] and the top-level [`generate`] entry point
//! - [`slots`] - Output paths and slot names shared between features
//! - [`templates`] - Bundled template resources
//! - [`versions`] - Supported framework releases
//!
//! # Example
//!
//! ```
//! use kickstart_features::{GenerationRequest, generate};
//!
//! let request = GenerationRequest {
//!     features: vec!["default-headers".to_string()],
//!     ..Default::default()
//! };
//! let result = generate(&request, None).unwrap();
//!
//! let app = result.text("src/Application.kt").unwrap();
//! assert!(app.contains("install(DefaultHeaders) {"));
//! ```

mod catalogue;
mod error;
mod info;
mod request;
pub mod slots;
pub mod templates;
pub mod versions;

pub use catalogue::{APPLICATION, SWAGGER, registry};
pub use error::{Error, Result};
pub use info::{BuildInfo, BuildSystem, Engine, ProjectInfo};
pub use request::{GenerationRequest, generate};
