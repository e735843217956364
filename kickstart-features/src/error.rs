use miette::Diagnostic;
use thiserror::Error;

/// Result type for catalogue level generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown framework version '{version}'")]
    #[diagnostic(
        code(kickstart::unknown_version),
        help("available versions: {available:?}")
    )]
    UnknownVersion {
        version: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generation(#[from] kickstart_codegen::Error),
}
