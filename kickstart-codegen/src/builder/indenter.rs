//! Scoped, indentation-tracking text accumulator.

use std::{
    collections::BTreeSet,
    convert::Infallible,
    ops::{Deref, DerefMut},
};

use indexmap::IndexMap;

use crate::generation::BuildManifest;

/// One level of indentation in Kotlin and Gradle sources.
const INDENT: &str = "    ";

/// Role of a text line in the block structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Plain,
    /// Opens a delimited block (`install(CORS) {`).
    Open,
    /// Closes a delimited block (`}`).
    Close,
}

/// Which part of the build manifest a listing expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Artifacts,
    Repositories,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Text {
        level: usize,
        text: String,
        kind: LineKind,
    },
    Blank,
    Separator,
    Slot {
        level: usize,
        name: String,
    },
    Listing {
        level: usize,
        source: ListingSource,
        pattern: String,
    },
    Imports {
        level: usize,
    },
}

/// Line after deferred markers have been expanded.
#[derive(Debug, Clone)]
enum Flat {
    Text {
        level: usize,
        text: String,
        kind: LineKind,
    },
    Blank,
    Separator,
}

/// Project state consulted when deferred markers are expanded.
pub(crate) struct Expansion<'a> {
    pub slots: &'a IndexMap<String, Indenter>,
    pub imports: Option<&'a BTreeSet<String>>,
    pub manifest: &'a BuildManifest,
}

/// Text builder with nested, balanced indentation.
///
/// Lines are stored with the nesting depth they were appended at and only
/// turned into text by [`Indenter::build`] (or by the owning project when it is
/// snapshotted), so fragments can be merged into other builders at any depth.
///
/// # Example
///
/// ```
/// use kickstart_codegen::builder::Indenter;
///
/// let mut ind = Indenter::new();
/// ind.scope("fun Application.module()", |ind| {
///     ind.scope("install(DefaultHeaders)", |ind| {
///         ind.line("header(\"X-Engine\", \"Ktor\")");
///     });
/// });
///
/// assert_eq!(
///     ind.build(),
///     "fun Application.module() {\n    install(DefaultHeaders) {\n        header(\"X-Engine\", \"Ktor\")\n    }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indenter {
    level: usize,
    lines: Vec<Line>,
}

impl Indenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append one line at the current depth. An empty line is a blank line.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_text(text.into(), LineKind::Plain);
        self
    }

    /// Append every line of a multi-line string at the current depth.
    pub fn lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.line(line);
        }
        self
    }

    /// Append an explicit blank line. Unlike separators, these are always kept.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    /// Append `{header} {`, run `body` one level deeper, then append `}`.
    pub fn scope(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        infallible(self.try_scope(header, |ind| {
            body(ind);
            Ok(())
        }));
        self
    }

    /// Like [`Indenter::scope`] with arbitrary opening and closing lines.
    pub fn delimited(
        &mut self,
        open: impl Into<String>,
        close: impl Into<String>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        infallible(self.try_delimited(open, close, |ind| {
            body(ind);
            Ok(())
        }));
        self
    }

    /// Run `body` one level deeper without delimiters.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        infallible(self.try_indented(|ind| {
            body(ind);
            Ok(())
        }));
        self
    }

    /// Run `body` surrounded by a visual separator.
    ///
    /// Separators render as a single blank line, and only between two content
    /// lines: never at the start of the output, right after an opening line,
    /// right before a closing line or next to another blank line.
    pub fn separator(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        infallible(self.try_separator(|ind| {
            body(ind);
            Ok(())
        }));
        self
    }

    /// Fallible [`Indenter::scope`]. The closing line is appended and the
    /// depth restored before an error from `body` is returned.
    pub fn try_scope<E>(
        &mut self,
        header: impl AsRef<str>,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        let header = header.as_ref();
        let open = if header.is_empty() {
            "{".to_string()
        } else {
            format!("{} {{", header)
        };
        self.try_delimited(open, "}", body)
    }

    /// Fallible [`Indenter::delimited`].
    pub fn try_delimited<E>(
        &mut self,
        open: impl Into<String>,
        close: impl Into<String>,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        self.push_text(open.into(), LineKind::Open);
        let result = {
            let mut nested = Nested::enter(self, Some(close.into()));
            body(&mut *nested)
        };
        result.map(|()| self)
    }

    /// Fallible [`Indenter::indented`].
    pub fn try_indented<E>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        let result = {
            let mut nested = Nested::enter(self, None);
            body(&mut *nested)
        };
        result.map(|()| self)
    }

    /// Fallible [`Indenter::separator`].
    pub fn try_separator<E>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        self.lines.push(Line::Separator);
        let result = body(self);
        self.lines.push(Line::Separator);
        result.map(|()| self)
    }

    /// Mark where the named project slot is expanded.
    pub fn slot(&mut self, name: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Slot {
            level: self.level,
            name: name.into(),
        });
        self
    }

    /// Mark where one line per manifest entry is expanded, `{}` standing for
    /// the entry.
    pub fn listing(&mut self, source: ListingSource, pattern: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Listing {
            level: self.level,
            source,
            pattern: pattern.into(),
        });
        self
    }

    /// Mark where the file's import block goes. Without a marker, imports are
    /// placed at the top of the file.
    pub fn imports(&mut self) -> &mut Self {
        self.lines.push(Line::Imports { level: self.level });
        self
    }

    /// Append the lines of `other`, nested at the current depth.
    pub fn append(&mut self, other: &Indenter) -> &mut Self {
        let base = self.level;
        self.lines.extend(other.lines.iter().map(|line| match line {
            Line::Text { level, text, kind } => Line::Text {
                level: base + level,
                text: text.clone(),
                kind: *kind,
            },
            Line::Slot { level, name } => Line::Slot {
                level: base + level,
                name: name.clone(),
            },
            Line::Listing {
                level,
                source,
                pattern,
            } => Line::Listing {
                level: base + level,
                source: *source,
                pattern: pattern.clone(),
            },
            Line::Imports { level } => Line::Imports { level: base + level },
            Line::Blank => Line::Blank,
            Line::Separator => Line::Separator,
        }));
        self
    }

    /// Render to text. Deferred markers render nothing.
    pub fn build(&self) -> String {
        self.render(None)
    }

    /// Names of the slots referenced by this builder.
    pub(crate) fn slot_refs(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Slot { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    pub(crate) fn has_imports_marker(&self) -> bool {
        self.lines.iter().any(|line| matches!(line, Line::Imports { .. }))
    }

    pub(crate) fn render(&self, expansion: Option<&Expansion<'_>>) -> String {
        let mut flat = Vec::with_capacity(self.lines.len());
        if let Some(expansion) = expansion.filter(|_| !self.has_imports_marker()) {
            push_imports(0, expansion, &mut flat);
        }
        self.flatten_into(0, expansion, &mut flat);
        collapse(&flat)
    }

    fn push_text(&mut self, text: String, kind: LineKind) {
        if text.is_empty() && kind == LineKind::Plain {
            self.lines.push(Line::Blank);
        } else {
            self.lines.push(Line::Text {
                level: self.level,
                text,
                kind,
            });
        }
    }

    // Slot graphs are checked for cycles before expansion.
    fn flatten_into(&self, base: usize, expansion: Option<&Expansion<'_>>, out: &mut Vec<Flat>) {
        for line in &self.lines {
            match line {
                Line::Text { level, text, kind } => out.push(Flat::Text {
                    level: base + level,
                    text: text.clone(),
                    kind: *kind,
                }),
                Line::Blank => out.push(Flat::Blank),
                Line::Separator => out.push(Flat::Separator),
                Line::Slot { level, name } => {
                    if let Some(slot) = expansion.and_then(|e| e.slots.get(name)) {
                        slot.flatten_into(base + level, expansion, out);
                    }
                }
                Line::Listing {
                    level,
                    source,
                    pattern,
                } => {
                    let Some(expansion) = expansion else { continue };
                    let entries: Vec<&str> = match source {
                        ListingSource::Artifacts => expansion.manifest.artifacts().collect(),
                        ListingSource::Repositories => expansion.manifest.repositories().collect(),
                    };
                    out.extend(entries.into_iter().map(|entry| Flat::Text {
                        level: base + level,
                        text: pattern.replace("{}", entry),
                        kind: LineKind::Plain,
                    }));
                }
                Line::Imports { level } => {
                    if let Some(expansion) = expansion {
                        push_imports(base + level, expansion, out);
                    }
                }
            }
        }
    }
}

fn push_imports(level: usize, expansion: &Expansion<'_>, out: &mut Vec<Flat>) {
    let Some(imports) = expansion.imports.filter(|imports| !imports.is_empty()) else {
        return;
    };
    out.extend(imports.iter().map(|statement| Flat::Text {
        level,
        text: format!("import {}", statement),
        kind: LineKind::Plain,
    }));
    out.push(Flat::Separator);
}

#[derive(PartialEq, Eq)]
enum Prev {
    Start,
    Blank,
    Open,
    Content,
}

fn collapse(lines: &[Flat]) -> String {
    let mut out = String::new();
    let mut prev = Prev::Start;
    for (i, line) in lines.iter().enumerate() {
        match line {
            Flat::Text { level, text, kind } => {
                for _ in 0..*level {
                    out.push_str(INDENT);
                }
                out.push_str(text);
                out.push('\n');
                prev = if *kind == LineKind::Open {
                    Prev::Open
                } else {
                    Prev::Content
                };
            }
            Flat::Blank => {
                out.push('\n');
                prev = Prev::Blank;
            }
            Flat::Separator => {
                if prev != Prev::Content {
                    continue;
                }
                let next = lines[i + 1..]
                    .iter()
                    .find(|line| !matches!(line, Flat::Separator));
                if matches!(next, Some(Flat::Text { kind, .. }) if *kind != LineKind::Close) {
                    out.push('\n');
                    prev = Prev::Blank;
                }
            }
        }
    }
    out
}

/// One level deeper for as long as it lives. Dropping it, on return or while
/// unwinding, restores the depth and appends the closing line.
struct Nested<'a> {
    ind: &'a mut Indenter,
    level: usize,
    close: Option<String>,
}

impl<'a> Nested<'a> {
    fn enter(ind: &'a mut Indenter, close: Option<String>) -> Self {
        let level = ind.level;
        ind.level += 1;
        Self { ind, level, close }
    }
}

impl Deref for Nested<'_> {
    type Target = Indenter;

    fn deref(&self) -> &Indenter {
        self.ind
    }
}

impl DerefMut for Nested<'_> {
    fn deref_mut(&mut self) -> &mut Indenter {
        self.ind
    }
}

impl Drop for Nested<'_> {
    fn drop(&mut self) {
        self.ind.level = self.level;
        if let Some(close) = self.close.take() {
            self.ind.push_text(close, LineKind::Close);
        }
    }
}

fn infallible(result: Result<&mut Indenter, Infallible>) {
    match result {
        Ok(_) => {}
        Err(never) => match never {},
    }
}
