use std::path::Path;

use eyre::Result;

/// Final content of one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Rendered source text
    Text(String),
    /// Raw bytes copied from a bundled resource
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(bytes) => bytes,
        }
    }

    /// The text content, or `None` for binary files.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileContent::Binary(_))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Write the content to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        match overwrite {
            Overwrite::Always => {
                write_file(path, self.as_bytes())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(path, self.as_bytes())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        FileContent::Text(text)
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(bytes: Vec<u8>) -> Self {
        FileContent::Binary(bytes)
    }
}

/// Write bytes to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace whatever is on disk
    Always,
    /// Only create if the file doesn't exist
    #[default]
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("main").join("Application.kt");

        write_file(&path, b"nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("build.gradle");
        fs::write(&path, "original").unwrap();

        let result = FileContent::Text("updated".to_string())
            .write(&path, Overwrite::Always)
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("build.gradle");
        fs::write(&path, "original").unwrap();

        let result = FileContent::Text("should not write".to_string())
            .write(&path, Overwrite::IfMissing)
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_binary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.bin");

        let result = FileContent::Binary(vec![0, 159, 146, 150])
            .write(&path, Overwrite::IfMissing)
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read(&path).unwrap(), vec![0, 159, 146, 150]);
    }

    #[test]
    fn test_accessors() {
        let text = FileContent::from("abc".to_string());
        assert_eq!(text.as_text(), Some("abc"));
        assert!(!text.is_binary());
        assert_eq!(text.len(), 3);

        let binary = FileContent::from(Vec::new());
        assert!(binary.is_binary());
        assert!(binary.is_empty());
        assert_eq!(binary.as_text(), None);
    }
}
