use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kickstart_core::Overwrite;
use kickstart_features::{BuildSystem, Engine, GenerationRequest, SWAGGER};
use kickstart_swagger::{DtoStyle, SwaggerModel};

use super::UnwrapOrExit;
use crate::{
    config::KickstartToml,
    ops::{self, Destination},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to a kickstart.toml with project settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ktor release to generate for (defaults to the latest)
    #[arg(long, value_name = "VERSION")]
    pub ktor_version: Option<String>,

    /// Feature to include, may be repeated
    #[arg(short = 'f', long = "feature", value_name = "ID")]
    pub features: Vec<String>,

    /// Swagger/OpenAPI document to scaffold DTOs and routes from
    #[arg(long, value_name = "FILE")]
    pub swagger: Option<PathBuf>,

    /// Maven group, also the Kotlin package
    #[arg(long)]
    pub group: Option<String>,

    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Server engine: netty, jetty, tomcat or cio
    #[arg(long)]
    pub engine: Option<Engine>,

    /// Build system: gradle or gradle-kts
    #[arg(long)]
    pub build: Option<BuildSystem>,

    /// DTO emission style: annotated or hand-rolled
    #[arg(long)]
    pub dto_style: Option<DtoStyle>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Write a zip archive instead of a directory
    #[arg(long, value_name = "FILE", conflicts_with = "dry_run")]
    pub zip: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self
            .config
            .as_ref()
            .map(|path| KickstartToml::open(path).unwrap_or_exit());

        let request = self.request(config.as_ref());
        let swagger = self
            .swagger
            .clone()
            .or_else(|| config.as_ref().and_then(KickstartToml::swagger_path))
            .map(|path| SwaggerModel::from_file(path).unwrap_or_exit());

        let result = kickstart_features::generate(&request, swagger).unwrap_or_exit();

        let destination = match (&self.zip, self.dry_run) {
            (_, true) => Destination::Preview,
            (Some(zip), false) => Destination::Archive(zip),
            (None, false) => Destination::Directory(&self.output),
        };
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let report = ops::generate(&request, &result, destination, overwrite)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Merge flags over the configuration file over the defaults. An API
    /// document implies the swagger feature.
    fn request(&self, file: Option<&KickstartToml>) -> GenerationRequest {
        let mut request = GenerationRequest::default();

        if let Some(file) = file {
            let config = file.config();
            request.framework_version = config.ktor.version.clone();
            request.project = config.project.clone();
            request.engine = config.ktor.engine.unwrap_or_default();
            request.build_system = config.ktor.build.unwrap_or_default();
            request.features = config.features.clone();
            request.dto_style = config.dto_style.unwrap_or_default();
        }

        if let Some(version) = &self.ktor_version {
            request.framework_version = Some(version.clone());
        }
        if let Some(group) = &self.group {
            request.project.group = group.clone();
        }
        if let Some(name) = &self.name {
            request.project.name = name.clone();
        }
        if let Some(engine) = self.engine {
            request.engine = engine;
        }
        if let Some(build) = self.build {
            request.build_system = build;
        }
        if let Some(style) = self.dto_style {
            request.dto_style = style;
        }
        for feature in &self.features {
            if !request.features.contains(feature) {
                request.features.push(feature.clone());
            }
        }
        let has_document =
            self.swagger.is_some() || file.is_some_and(|file| file.config().swagger.is_some());
        if has_document && !request.features.iter().any(|f| f == SWAGGER) {
            request.features.push(SWAGGER.to_string());
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::{Cli, Commands};

    fn parse(args: &[&str]) -> GenerateCommand {
        let cli = Cli::try_parse_from(["kickstart", "generate"].iter().chain(args)).unwrap();
        match cli.command {
            Commands::Generate(cmd) => cmd,
            _ => panic!("expected the generate command"),
        }
    }

    #[test]
    fn test_flags_without_config() {
        let cmd = parse(&[
            "-f",
            "routing",
            "--feature",
            "cors",
            "--engine",
            "cio",
            "--build",
            "gradle-kts",
            "--group",
            "org.acme",
        ]);
        let request = cmd.request(None);

        assert_eq!(request.features, ["routing", "cors"]);
        assert_eq!(request.engine, Engine::Cio);
        assert_eq!(request.build_system, BuildSystem::GradleKts);
        assert_eq!(request.project.group, "org.acme");
        assert_eq!(request.project.name, "ktor-sample");
        assert_eq!(request.framework_version, None);
    }

    #[test]
    fn test_flags_override_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kickstart.toml");
        std::fs::write(
            &path,
            "features = [\"routing\"]\n\n[project]\nname = \"shop\"\n\n[ktor]\nversion = \"0.9.5\"\nengine = \"jetty\"\n",
        )
        .unwrap();
        let file = KickstartToml::open(&path).unwrap();

        let cmd = parse(&["--engine", "tomcat", "-f", "routing", "-f", "cors", "--swagger", "api.yaml"]);
        let request = cmd.request(Some(&file));

        assert_eq!(request.framework_version.as_deref(), Some("0.9.5"));
        assert_eq!(request.project.name, "shop");
        assert_eq!(request.engine, Engine::Tomcat);
        assert_eq!(request.features, ["routing", "cors", SWAGGER]);
    }

    #[test]
    fn test_zip_conflicts_with_dry_run() {
        let result = Cli::try_parse_from(["kickstart", "generate", "--zip", "out.zip", "--dry-run"]);
        assert!(result.is_err());
    }
}
