//! Core operations.
//!
//! This module contains the business logic for kickstart commands,
//! separated from CLI argument parsing and output rendering.

pub mod catalogue;
pub mod explain;
pub mod generate;

pub use catalogue::{features, versions};
pub use explain::explain;
pub use generate::{Destination, generate};
