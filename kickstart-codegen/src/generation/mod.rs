//! Project-level output state.
//!
//! - [`ImportCollector`] - Per-file import tracking and deduplication
//! - [`BuildManifest`] - Build artifact and repository tracking
//! - [`TemplateBundle`] - Bundled template resources
//! - [`GenerationResult`] - Frozen output of a generation run

mod imports;
mod manifest;
mod result;
mod templates;

pub use imports::ImportCollector;
pub use manifest::BuildManifest;
pub use result::GenerationResult;
pub use templates::TemplateBundle;
