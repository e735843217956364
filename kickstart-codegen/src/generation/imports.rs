//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks import statements per output file and deduplicates them.
///
/// Files keep insertion order; statements within a file are sorted so the
/// rendered import block does not depend on which feature added what first.
///
/// # Example
///
/// ```
/// use kickstart_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("src/Application.kt", "io.ktor.routing.*");
/// imports.add("src/Application.kt", "io.ktor.application.*");
/// imports.add("src/Application.kt", "io.ktor.routing.*");
///
/// let statements: Vec<_> = imports.get("src/Application.kt").unwrap().iter().collect();
/// assert_eq!(statements, ["io.ktor.application.*", "io.ktor.routing.*"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// File path -> set of statements (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import to a file. Returns `false` if it was already present.
    pub fn add(&mut self, file: &str, statement: &str) -> bool {
        self.imports
            .entry(file.to_string())
            .or_default()
            .insert(statement.to_string())
    }

    pub fn get(&self, file: &str) -> Option<&BTreeSet<String>> {
        self.imports.get(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_dedup() {
        let mut imports = ImportCollector::new();
        for _ in 0..5 {
            imports.add("src/Application.kt", "io.ktor.features.*");
        }
        assert!(!imports.add("src/Application.kt", "io.ktor.features.*"));
        assert_eq!(imports.get("src/Application.kt").map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_import_collector_per_file() {
        let mut imports = ImportCollector::new();
        imports.add("src/Application.kt", "io.ktor.routing.*");
        imports.add("src/ApiRoutes.kt", "io.ktor.http.*");

        let application = imports.get("src/Application.kt").unwrap();
        assert!(application.contains("io.ktor.routing.*"));
        assert!(!application.contains("io.ktor.http.*"));
        assert!(imports.get("src/Missing.kt").is_none());
    }
}
