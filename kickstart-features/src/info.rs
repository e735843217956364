//! Per-run generation context.

use std::{fmt, str::FromStr};

use kickstart_codegen::generation::TemplateBundle;
use kickstart_core::FrameworkVersion;
use kickstart_swagger::{DtoStyle, SwaggerModel};
use serde::{Deserialize, Serialize};

/// Coordinates of the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInfo {
    /// Maven group, also the Kotlin package of the generated sources
    pub group: String,
    pub name: String,
    pub version: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            group: "com.example".to_string(),
            name: "ktor-sample".to_string(),
            version: "0.0.1".to_string(),
        }
    }
}

/// Server engine the application runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    #[default]
    Netty,
    Jetty,
    Tomcat,
    Cio,
}

impl Engine {
    pub const ALL: [Engine; 4] = [Engine::Netty, Engine::Jetty, Engine::Tomcat, Engine::Cio];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Netty => "netty",
            Engine::Jetty => "jetty",
            Engine::Tomcat => "tomcat",
            Engine::Cio => "cio",
        }
    }

    pub fn artifact(&self) -> String {
        format!("io.ktor:ktor-server-{}:$ktor_version", self.as_str())
    }

    /// Fully qualified entry point class. 0.9 releases start through
    /// `DevelopmentEngine`, later ones through `EngineMain`.
    pub fn main_class(&self, version: &FrameworkVersion) -> String {
        let class = if version.is_at_least(1, 0) {
            "EngineMain"
        } else {
            "DevelopmentEngine"
        };
        format!("io.ktor.server.{}.{}", self.as_str(), class)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| format!("unknown engine '{}', expected one of netty, jetty, tomcat, cio", s))
    }
}

/// Build tool flavour of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildSystem {
    #[default]
    Gradle,
    GradleKts,
}

impl BuildSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSystem::Gradle => "gradle",
            BuildSystem::GradleKts => "gradle-kts",
        }
    }

    /// Id of the catalogue feature writing the build files.
    pub fn feature_id(&self) -> &'static str {
        match self {
            BuildSystem::Gradle => "build-gradle",
            BuildSystem::GradleKts => "build-gradle-kts",
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradle" => Ok(BuildSystem::Gradle),
            "gradle-kts" => Ok(BuildSystem::GradleKts),
            other => Err(format!(
                "unknown build system '{}', expected 'gradle' or 'gradle-kts'",
                other
            )),
        }
    }
}

/// Immutable context handed to every render callback of a run.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: FrameworkVersion,
    pub project: ProjectInfo,
    pub engine: Engine,
    pub build_system: BuildSystem,
    pub dto_style: DtoStyle,
    pub templates: TemplateBundle,
    pub swagger: Option<SwaggerModel>,
}

impl BuildInfo {
    pub fn new(version: FrameworkVersion, templates: TemplateBundle) -> Self {
        Self {
            version,
            project: ProjectInfo::default(),
            engine: Engine::default(),
            build_system: BuildSystem::default(),
            dto_style: DtoStyle::default(),
            templates,
            swagger: None,
        }
    }

    /// Kotlin package of the generated sources.
    pub fn package(&self) -> &str {
        &self.project.group
    }

    /// Package of the coroutine library matching the framework release.
    pub fn coroutines_package(&self) -> &'static str {
        if self.version.is_at_least(1, 0) {
            "kotlinx.coroutines"
        } else {
            "kotlinx.coroutines.experimental"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_main_class() {
        let old = FrameworkVersion::new("0.9.5", "1.2.70");
        let new = FrameworkVersion::new("1.0.0-beta-3", "1.3.0");

        assert_eq!(Engine::Netty.main_class(&old), "io.ktor.server.netty.DevelopmentEngine");
        assert_eq!(Engine::Cio.main_class(&new), "io.ktor.server.cio.EngineMain");
        assert_eq!(Engine::Jetty.artifact(), "io.ktor:ktor-server-jetty:$ktor_version");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("tomcat".parse::<Engine>().unwrap(), Engine::Tomcat);
        assert!("undertow".parse::<Engine>().is_err());
        assert_eq!("gradle-kts".parse::<BuildSystem>().unwrap(), BuildSystem::GradleKts);
        assert_eq!(BuildSystem::GradleKts.feature_id(), "build-gradle-kts");
    }

    #[test]
    fn test_coroutines_package() {
        let templates = TemplateBundle::default();
        let info = BuildInfo::new(FrameworkVersion::new("0.9.5", "1.2.70"), templates.clone());
        assert_eq!(info.coroutines_package(), "kotlinx.coroutines.experimental");
        let info = BuildInfo::new(FrameworkVersion::new("1.0.0-beta-3", "1.3.0"), templates);
        assert_eq!(info.coroutines_package(), "kotlinx.coroutines");
    }
}
