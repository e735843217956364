use std::collections::BTreeMap;

use kickstart_core::FileContent;

/// Frozen output of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// Relative output path -> final content, sorted by path
    pub files: BTreeMap<String, FileContent>,
    /// Dependency coordinates in first-contributor order
    pub artifacts: Vec<String>,
    /// Extra package repositories in first-contributor order
    pub repositories: Vec<String>,
}

impl GenerationResult {
    pub fn file(&self, path: &str) -> Option<&FileContent> {
        self.files.get(path)
    }

    /// Text content of a file, `None` if absent or binary.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.files.get(path).and_then(FileContent::as_text)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}
