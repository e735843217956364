//! Generation requests against the catalogue.

use kickstart_codegen::{feature::Generator, generation::GenerationResult};
use kickstart_core::FrameworkVersion;
use kickstart_swagger::{DtoStyle, SwaggerModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    BuildInfo, BuildSystem, Engine, Error, ProjectInfo, Result,
    catalogue::{APPLICATION, registry},
    templates, versions,
};

/// What to generate. Every field has a default, so an empty request yields a
/// bare application for the latest framework release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenerationRequest {
    /// Exact release string, `None` for the latest release
    pub framework_version: Option<String>,
    pub project: ProjectInfo,
    pub engine: Engine,
    pub build_system: BuildSystem,
    /// Selected feature ids, prerequisites are added automatically
    pub features: Vec<String>,
    pub dto_style: DtoStyle,
}

impl GenerationRequest {
    /// The requested framework release.
    pub fn version(&self) -> Result<&'static FrameworkVersion> {
        match &self.framework_version {
            None => Ok(versions::latest()),
            Some(version) => versions::find(version).ok_or_else(|| Error::UnknownVersion {
                version: version.clone(),
                available: versions::offered().map(|v| v.version().to_string()).collect(),
            }),
        }
    }

    /// Feature ids to resolve: the base features followed by the selection.
    pub fn selected(&self) -> Vec<&str> {
        let mut selected = vec![self.build_system.feature_id(), APPLICATION];
        selected.extend(self.features.iter().map(String::as_str));
        selected
    }
}

/// Generate a project.
///
/// `swagger` is only consulted when the `swagger` feature is part of the
/// selection. The same request always yields the same result.
pub fn generate(request: &GenerationRequest, swagger: Option<SwaggerModel>) -> Result<GenerationResult> {
    let version = request.version()?;
    let info = BuildInfo {
        version: version.clone(),
        project: request.project.clone(),
        engine: request.engine,
        build_system: request.build_system,
        dto_style: request.dto_style,
        templates: templates::bundled(),
        swagger,
    };

    debug!(
        version = %version,
        features = ?request.features,
        "starting generation"
    );
    Generator::new(registry())
        .generate(&request.selected(), &info)
        .map_err(Error::from)
}
