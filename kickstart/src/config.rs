//! `kickstart.toml` project configuration.

use std::path::{Path, PathBuf};

use kickstart_features::{BuildSystem, Engine, ProjectInfo};
use kickstart_swagger::DtoStyle;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(kickstart::config::io),
        help("pass an existing file to --config or omit the flag")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse kickstart.toml")]
    #[diagnostic(code(kickstart::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ConfigError::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Contents of a `kickstart.toml` file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub project: ProjectInfo,
    pub ktor: KtorConfig,
    pub features: Vec<String>,
    /// Swagger/OpenAPI document, relative to the configuration file
    pub swagger: Option<PathBuf>,
    pub dto_style: Option<DtoStyle>,
}

/// The `[ktor]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KtorConfig {
    pub version: Option<String>,
    pub engine: Option<Engine>,
    pub build: Option<BuildSystem>,
}

impl Config {
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::parse(e, content, filename))
    }
}

/// A `kickstart.toml` file on disk.
#[derive(Debug)]
pub struct KickstartToml {
    path: PathBuf,
    config: Config,
}

impl KickstartToml {
    /// Open and parse a kickstart.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured API document, resolved against the file's directory.
    pub fn swagger_path(&self) -> Option<PathBuf> {
        let swagger = self.config.swagger.as_ref()?;
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(swagger))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_full_config() {
        let config = Config::from_str_with_filename(
            r#"
features = ["default-headers", "routing"]
swagger = "api/petstore.yaml"
dto-style = "hand-rolled"

[project]
group = "org.acme"
name = "shop"

[ktor]
version = "0.9.5"
engine = "jetty"
build = "gradle-kts"
"#,
            "kickstart.toml",
        )
        .unwrap();

        assert_eq!(config.project.group, "org.acme");
        assert_eq!(config.project.version, "0.0.1");
        assert_eq!(config.ktor.version.as_deref(), Some("0.9.5"));
        assert_eq!(config.ktor.engine, Some(Engine::Jetty));
        assert_eq!(config.ktor.build, Some(BuildSystem::GradleKts));
        assert_eq!(config.features, ["default-headers", "routing"]);
        assert_eq!(config.dto_style, Some(DtoStyle::HandRolled));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str_with_filename("", "kickstart.toml").unwrap();
        assert_eq!(config.project, ProjectInfo::default());
        assert!(config.features.is_empty());
        assert!(config.ktor.engine.is_none());
    }

    #[test]
    fn test_unknown_key_has_span() {
        let src = "[ktor]\nengin = \"cio\"\n";
        let err = Config::from_str_with_filename(src, "kickstart.toml").unwrap_err();
        match *err {
            ConfigError::Parse { span, .. } => {
                let span = span.unwrap();
                assert!(src[span.offset()..span.offset() + span.len()].contains("engin"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_swagger_path_is_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kickstart.toml");
        std::fs::write(&path, "swagger = \"petstore.yaml\"\n").unwrap();

        let file = KickstartToml::open(&path).unwrap();
        assert_eq!(file.swagger_path(), Some(temp.path().join("petstore.yaml")));
        assert!(file.config().features.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = KickstartToml::open("does/not/exist/kickstart.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
    }
}
