//! Project-wide output state shared by feature renderers.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use kickstart_core::FileContent;
use petgraph::{algo::toposort, graph::DiGraph, graph::NodeIndex};
use serde::Serialize;
use tracing::{debug, warn};

use super::{Indenter, indenter::Expansion};
use crate::{
    Error, Result,
    generation::{BuildManifest, GenerationResult, ImportCollector, TemplateBundle},
};

#[derive(Debug, Clone)]
enum FileBody {
    Text(Indenter),
    Binary(Vec<u8>),
}

/// Mutable aggregate of every output file during one generation run.
///
/// Text files are append-only: the first writer to a path creates the buffer
/// and later writers add to it. Binary files are replaced by the last writer.
/// Named slots hold fragments that several features contribute to and that
/// files expand where they reference them.
///
/// # Example
///
/// ```
/// use kickstart_codegen::builder::ProjectBuilder;
///
/// let mut project = ProjectBuilder::new();
/// project.file("src/Application.kt")?.scope("fun Application.module()", |ind| {
///     ind.slot("install");
/// });
/// project.slot("install").line("install(DefaultHeaders)");
/// project.add_import("src/Application.kt", "io.ktor.features.*");
///
/// let result = project.snapshot()?;
/// assert_eq!(
///     result.text("src/Application.kt"),
///     Some("import io.ktor.features.*\n\nfun Application.module() {\n    install(DefaultHeaders)\n}\n")
/// );
/// # Ok::<(), kickstart_codegen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    files: IndexMap<String, FileBody>,
    slots: IndexMap<String, Indenter>,
    imports: ImportCollector,
    manifest: BuildManifest,
}

impl ProjectBuilder {
    /// Create a builder producing Kotlin-style output.
    pub fn new() -> Self {
        Self {
            files: IndexMap::new(),
            slots: IndexMap::new(),
            imports: ImportCollector::new(),
            manifest: BuildManifest::new(),
        }
    }

    /// Get the text buffer for `path`, creating it on first use.
    pub fn file(&mut self, path: impl Into<String>) -> Result<&mut Indenter> {
        let path = path.into();
        let body = self
            .files
            .entry(path.clone())
            .or_insert_with(|| FileBody::Text(Indenter::new()));
        match body {
            FileBody::Text(indenter) => Ok(indenter),
            FileBody::Binary(_) => Err(Error::FileKindConflict { path }),
        }
    }

    /// Register raw content at `path`, replacing whatever was there.
    pub fn binary_file(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), FileBody::Binary(bytes.into()));
    }

    /// Copy a bundled template verbatim to `path`.
    pub fn template_file(
        &mut self,
        path: impl Into<String>,
        bundle: &TemplateBundle,
        template: &str,
    ) -> Result<()> {
        let bytes = bundle.fetch(template)?.to_vec();
        self.binary_file(path, bytes);
        Ok(())
    }

    /// Render a bundled template with `ctx` and append it to the text buffer
    /// for `path`.
    pub fn rendered_template_file(
        &mut self,
        path: impl Into<String>,
        bundle: &TemplateBundle,
        template: &str,
        ctx: impl Serialize,
    ) -> Result<&mut Indenter> {
        let text = bundle.render(template, ctx)?;
        let file = self.file(path)?;
        file.lines(&text);
        Ok(file)
    }

    /// Get a named slot, creating it on first use.
    pub fn slot(&mut self, name: impl Into<String>) -> &mut Indenter {
        self.slots.entry(name.into()).or_default()
    }

    /// Add an import to a file. Returns `false` if it was already present.
    pub fn add_import(&mut self, file: &str, statement: &str) -> bool {
        self.imports.add(file, statement)
    }

    /// Add a dependency coordinate. Returns `false` if it was already present.
    pub fn add_artifact(&mut self, artifact: impl Into<String>) -> bool {
        self.manifest.add_artifact(artifact)
    }

    /// Add a repository URL. Returns `false` if it was already present.
    pub fn add_repository(&mut self, repository: impl Into<String>) -> bool {
        self.manifest.add_repository(repository)
    }

    /// Render every file and freeze the result.
    pub fn snapshot(self) -> Result<GenerationResult> {
        self.check_slots()?;
        self.warn_unreferenced_slots();

        let mut files = std::collections::BTreeMap::new();
        for (path, body) in &self.files {
            let content = match body {
                FileBody::Binary(bytes) => FileContent::Binary(bytes.clone()),
                FileBody::Text(indenter) => {
                    let expansion = Expansion {
                        slots: &self.slots,
                        imports: self.imports.get(path),
                        manifest: &self.manifest,
                    };
                    FileContent::Text(indenter.render(Some(&expansion)))
                }
            };
            debug!(path = %path, bytes = content.len(), "rendered file");
            files.insert(path.clone(), content);
        }

        let (artifacts, repositories) = self.manifest.into_parts();
        Ok(GenerationResult {
            files,
            artifacts,
            repositories,
        })
    }

    /// Fail if any slot expands into itself, directly or transitively.
    fn check_slots(&self) -> Result<()> {
        let mut graph = DiGraph::<&str, ()>::with_capacity(self.slots.len(), 0);
        for name in self.slots.keys() {
            graph.add_node(name.as_str());
        }
        for (from, slot) in self.slots.values().enumerate() {
            for target in slot.slot_refs() {
                if let Some(to) = self.slots.get_index_of(target) {
                    graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
                }
            }
        }
        toposort(&graph, None).map_err(|cycle| Error::SlotCycle {
            slot: graph[cycle.node_id()].to_string(),
        })?;
        Ok(())
    }

    fn warn_unreferenced_slots(&self) {
        let referenced: BTreeSet<&str> = self
            .files
            .values()
            .filter_map(|body| match body {
                FileBody::Text(indenter) => Some(indenter),
                FileBody::Binary(_) => None,
            })
            .chain(self.slots.values())
            .flat_map(Indenter::slot_refs)
            .collect();
        for (name, slot) in &self.slots {
            if !slot.is_empty() && !referenced.contains(name.as_str()) {
                warn!(slot = %name, "slot has content but is never referenced");
            }
        }
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}
