use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions of a generation run.
///
/// Every variant reflects malformed input to a pure computation, so none of
/// them is retried: the run is aborted and no partial file tree is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("dependency cycle between features: {}", .features.join(", "))]
    #[diagnostic(
        code(kickstart::dependency_cycle),
        help("remove one of the prerequisites so the features form a DAG")
    )]
    DependencyCycle { features: Vec<String> },

    #[error("unknown feature '{id}'")]
    #[diagnostic(
        code(kickstart::unknown_feature),
        help("available features: {available:?}")
    )]
    UnknownFeature { id: String, available: Vec<String> },

    #[error("feature '{id}' is declared more than once")]
    #[diagnostic(code(kickstart::duplicate_feature))]
    DuplicateFeature { id: String },

    #[error("feature '{feature}' requires unknown feature '{prerequisite}'")]
    #[diagnostic(code(kickstart::unknown_prerequisite))]
    UnknownPrerequisite {
        feature: String,
        prerequisite: String,
    },

    #[error("template '{path}' is not in the bundle")]
    #[diagnostic(code(kickstart::template_not_found))]
    TemplateNotFound { path: String },

    #[error("template '{path}' is not valid UTF-8")]
    #[diagnostic(code(kickstart::template_encoding))]
    TemplateEncoding { path: String },

    #[error("failed to render template '{path}'")]
    #[diagnostic(code(kickstart::template_render))]
    TemplateRender {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("unresolved schema reference '{type_name}'")]
    #[diagnostic(
        code(kickstart::schema_reference),
        help("every referenced type must be a primitive or a declared definition")
    )]
    SchemaReference { type_name: String },

    #[error("'{path}' already holds binary content")]
    #[diagnostic(code(kickstart::file_kind_conflict))]
    FileKindConflict { path: String },

    #[error("slot '{slot}' expands into itself")]
    #[diagnostic(code(kickstart::slot_cycle))]
    SlotCycle { slot: String },
}
