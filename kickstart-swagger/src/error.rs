use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for document loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ParseError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(kickstart::swagger::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse API document")]
    #[diagnostic(code(kickstart::swagger::json))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse API document")]
    #[diagnostic(code(kickstart::swagger::yaml))]
    Yaml {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported API document: {reason}")]
    #[diagnostic(
        code(kickstart::swagger::unsupported),
        help("only Swagger 2.0 and OpenAPI 3.x documents are supported")
    )]
    UnsupportedDocument { reason: String },

    #[error("parameter reference '{reference}' does not resolve")]
    #[diagnostic(
        code(kickstart::swagger::unresolved_reference),
        help("declare it under `parameters` (Swagger 2.0) or `components.parameters` (OpenAPI 3.x)")
    )]
    UnresolvedReference { reference: String },
}

impl ParseError {
    pub(crate) fn json(source: serde_json::Error, content: &str, filename: &str) -> Box<Self> {
        let span = line_column_offset(content, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(ParseError::Json {
            src: NamedSource::new(filename, content.to_string()),
            span,
            source,
        })
    }

    pub(crate) fn yaml(source: serde_yaml::Error, content: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|location| SourceSpan::from(location.index()..location.index()));
        Box::new(ParseError::Yaml {
            src: NamedSource::new(filename, content.to_string()),
            span,
            source,
        })
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Box<Self> {
        Box::new(ParseError::UnsupportedDocument {
            reason: reason.into(),
        })
    }
}

/// Byte offset of a 1-based line and column, `None` for line 0.
fn line_column_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(content.len()))
}
