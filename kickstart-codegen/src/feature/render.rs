//! Render driver.

use tracing::{debug, info};

use super::{Feature, FeatureRegistry};
use crate::{Result, builder::ProjectBuilder, generation::GenerationResult};

/// Render features in the given order.
///
/// Each feature first contributes its repositories and artifacts to the build
/// manifest, then its render callback runs exactly once.
pub fn render<C>(ordered: &[&Feature<C>], ctx: &C, builder: &mut ProjectBuilder) -> Result<()> {
    for feature in ordered {
        for repo in feature.repos {
            builder.add_repository(*repo);
        }
        for artifact in feature.artifacts {
            builder.add_artifact(*artifact);
        }
        debug!(feature = feature.id, "rendering feature");
        (feature.render)(ctx, builder)?;
    }
    Ok(())
}

/// Runs `resolve + render + snapshot` against a registry.
pub struct Generator<'r, C> {
    registry: &'r FeatureRegistry<C>,
}

impl<'r, C> Generator<'r, C> {
    pub fn new(registry: &'r FeatureRegistry<C>) -> Self {
        Self { registry }
    }

    pub fn generate<S: AsRef<str>>(&self, selected: &[S], ctx: &C) -> Result<GenerationResult> {
        let ordered = self.registry.resolve(selected)?;
        let mut builder = ProjectBuilder::new();
        render(&ordered, ctx, &mut builder)?;
        let result = builder.snapshot()?;
        info!(
            features = ordered.len(),
            files = result.files.len(),
            artifacts = result.artifacts.len(),
            "generation finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{Error, feature::FeatureGroup};

    struct Ctx {
        log: RefCell<Vec<&'static str>>,
    }

    fn app(ctx: &Ctx, b: &mut ProjectBuilder) -> Result<()> {
        ctx.log.borrow_mut().push("app");
        b.file("App.kt")?.scope("fun Application.module()", |ind| {
            ind.slot("install");
        });
        Ok(())
    }

    fn headers(ctx: &Ctx, b: &mut ProjectBuilder) -> Result<()> {
        ctx.log.borrow_mut().push("headers");
        b.add_import("App.kt", "io.ktor.features.*");
        b.slot("install").line("install(DefaultHeaders)");
        Ok(())
    }

    fn failing(_: &Ctx, _: &mut ProjectBuilder) -> Result<()> {
        Err(Error::TemplateNotFound {
            path: "missing".to_string(),
        })
    }

    fn registry() -> FeatureRegistry<Ctx> {
        FeatureRegistry::new([
            Feature::new("app", "Application", app).group(FeatureGroup::Internal),
            Feature::new("headers", "Default headers", headers)
                .requires(&["app"])
                .artifacts(&["io.ktor:ktor-server-core:$ktor_version"])
                .repos(&["https://kotlin.bintray.com/ktor"]),
            Feature::new("broken", "Broken", failing),
        ])
    }

    #[test]
    fn test_render_order_and_manifest() {
        let registry = registry();
        let ctx = Ctx {
            log: RefCell::new(Vec::new()),
        };
        let result = Generator::new(&registry).generate(&["headers"], &ctx).unwrap();

        assert_eq!(*ctx.log.borrow(), ["app", "headers"]);
        assert_eq!(result.artifacts, ["io.ktor:ktor-server-core:$ktor_version"]);
        assert_eq!(result.repositories, ["https://kotlin.bintray.com/ktor"]);
        assert_eq!(
            result.text("App.kt"),
            Some("import io.ktor.features.*\n\nfun Application.module() {\n    install(DefaultHeaders)\n}\n")
        );
    }

    #[test]
    fn test_render_error_aborts() {
        let registry = registry();
        let ctx = Ctx {
            log: RefCell::new(Vec::new()),
        };
        let err = Generator::new(&registry)
            .generate(&["headers", "broken"], &ctx)
            .unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }
}
