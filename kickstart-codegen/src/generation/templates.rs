//! Bundled template resources.

use std::{borrow::Cow, sync::Arc};

use indexmap::IndexMap;
use minijinja::Environment;
use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// Read-only mapping from logical path to template bytes.
///
/// Bundles are cheap to clone and can be shared between concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct TemplateBundle {
    entries: Arc<IndexMap<String, Cow<'static, [u8]>>>,
}

impl TemplateBundle {
    /// Build a bundle from `(path, bytes)` pairs. Later entries win.
    pub fn from_entries<I, P, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, B)>,
        P: Into<String>,
        B: Into<Cow<'static, [u8]>>,
    {
        Self {
            entries: Arc::new(
                entries
                    .into_iter()
                    .map(|(path, bytes)| (path.into(), bytes.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a template. A missing path is a configuration error.
    pub fn fetch(&self, path: &str) -> Result<&[u8]> {
        debug!(template = path, "fetching template");
        self.entries
            .get(path)
            .map(|bytes| bytes.as_ref())
            .ok_or_else(|| Error::TemplateNotFound {
                path: path.to_string(),
            })
    }

    /// Look up a template as text.
    pub fn fetch_text(&self, path: &str) -> Result<&str> {
        std::str::from_utf8(self.fetch(path)?).map_err(|_| Error::TemplateEncoding {
            path: path.to_string(),
        })
    }

    /// Render a template with `minijinja`, substituting values from `ctx`.
    pub fn render(&self, path: &str, ctx: impl Serialize) -> Result<String> {
        let source = self.fetch_text(path)?;
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.render_str(source, ctx)
            .map_err(|source| Error::TemplateRender {
                path: path.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bundle() -> TemplateBundle {
        TemplateBundle::from_entries([
            ("gitignore", Cow::Borrowed(b"/build\n/.gradle\n".as_slice())),
            (
                "application.conf.j2",
                Cow::Borrowed(b"ktor {\n    application {\n        modules = [ {{ module }} ]\n    }\n}\n".as_slice()),
            ),
            ("broken.j2", Cow::Borrowed(b"{{ unclosed".as_slice())),
            ("binary", Cow::Owned(vec![0xff, 0xfe])),
        ])
    }

    #[test]
    fn test_fetch() {
        assert_eq!(bundle().fetch("gitignore").unwrap(), b"/build\n/.gradle\n");
    }

    #[test]
    fn test_fetch_missing() {
        let err = bundle().fetch("missing.txt").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { ref path } if path == "missing.txt"));
    }

    #[test]
    fn test_render_substitutes_and_keeps_trailing_newline() {
        let out = bundle()
            .render(
                "application.conf.j2",
                json!({ "module": "com.example.ApplicationKt.module" }),
            )
            .unwrap();
        assert!(out.contains("modules = [ com.example.ApplicationKt.module ]"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_render_errors() {
        let bundle = bundle();
        assert!(matches!(
            bundle.render("broken.j2", json!({})),
            Err(Error::TemplateRender { .. })
        ));
        assert!(matches!(
            bundle.fetch_text("binary"),
            Err(Error::TemplateEncoding { .. })
        ));
    }
}
