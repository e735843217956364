//! Code generation building blocks.
//!
//! - [`Indenter`] - Scoped, indentation-aware text builder
//! - [`ProjectBuilder`] - Output files, slots, imports and build manifest of a run

mod indenter;
mod project;

pub use indenter::{Indenter, ListingSource};
pub use project::ProjectBuilder;
