//! Feature model, registry, dependency resolver and render driver.
//!
//! A [`Feature`] is an immutable record: identity, prerequisites, build
//! requirements and a render callback that appends to the shared
//! [`ProjectBuilder`]. Features live in a [`FeatureRegistry`] which resolves a
//! selection into a deterministic render order.

mod registry;
mod render;
mod resolve;

use std::fmt;

pub use registry::FeatureRegistry;
pub use render::{Generator, render};

use crate::{Result, builder::ProjectBuilder};

/// Render callback of a feature, given the per-run context.
pub type RenderFn<C> = fn(&C, &mut ProjectBuilder) -> Result<()>;

/// Where a feature is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureGroup {
    Server,
    Client,
    /// Always rendered, never offered for selection.
    Internal,
}

impl FeatureGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureGroup::Server => "server",
            FeatureGroup::Client => "client",
            FeatureGroup::Internal => "internal",
        }
    }
}

impl fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A composable unit of generated functionality.
///
/// Generic over the per-run context `C` handed to the render callback.
pub struct Feature<C> {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub documentation: &'static str,
    pub group: FeatureGroup,
    /// Features that must render before this one
    pub prerequisites: &'static [&'static str],
    /// Dependency coordinates contributed to the build
    pub artifacts: &'static [&'static str],
    /// Package repositories contributed to the build
    pub repos: &'static [&'static str],
    pub render: RenderFn<C>,
}

impl<C> Feature<C> {
    /// Create a server feature with no prerequisites or build requirements.
    pub fn new(id: &'static str, title: &'static str, render: RenderFn<C>) -> Self {
        Self {
            id,
            title,
            description: "",
            documentation: "",
            group: FeatureGroup::Server,
            prerequisites: &[],
            artifacts: &[],
            repos: &[],
            render,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn documentation(mut self, url: &'static str) -> Self {
        self.documentation = url;
        self
    }

    pub fn group(mut self, group: FeatureGroup) -> Self {
        self.group = group;
        self
    }

    pub fn requires(mut self, prerequisites: &'static [&'static str]) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    pub fn artifacts(mut self, artifacts: &'static [&'static str]) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn repos(mut self, repos: &'static [&'static str]) -> Self {
        self.repos = repos;
        self
    }

    pub fn is_internal(&self) -> bool {
        self.group == FeatureGroup::Internal
    }
}

impl<C> Clone for Feature<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Feature<C> {}

impl<C> fmt::Debug for Feature<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature")
            .field("id", &self.id)
            .field("group", &self.group)
            .field("prerequisites", &self.prerequisites)
            .field("artifacts", &self.artifacts)
            .field("repos", &self.repos)
            .finish_non_exhaustive()
    }
}
