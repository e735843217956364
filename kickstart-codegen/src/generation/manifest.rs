//! Build dependency tracking.

use indexmap::IndexSet;

/// Dependency artifacts and package repositories required by a project.
///
/// Both lists are ordered sets: entries are deduplicated by exact string match
/// and keep the order of their first contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildManifest {
    artifacts: IndexSet<String>,
    repositories: IndexSet<String>,
}

impl BuildManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency coordinate. Returns `false` if it was already present.
    pub fn add_artifact(&mut self, artifact: impl Into<String>) -> bool {
        self.artifacts.insert(artifact.into())
    }

    /// Add a repository URL. Returns `false` if it was already present.
    pub fn add_repository(&mut self, repository: impl Into<String>) -> bool {
        self.repositories.insert(repository.into())
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(String::as_str)
    }

    pub fn repositories(&self) -> impl Iterator<Item = &str> {
        self.repositories.iter().map(String::as_str)
    }

    /// Consume the manifest into its artifact and repository lists.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (
            self.artifacts.into_iter().collect(),
            self.repositories.into_iter().collect(),
        )
    }
}
