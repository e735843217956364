//! API scaffolding driven by a Swagger/OpenAPI document.

use kickstart_codegen::{Result, builder::ProjectBuilder};
use kickstart_swagger::{DtoStyle, ROUTE_IMPORTS, emit_routes};
use tracing::{debug, warn};

use crate::{
    BuildInfo,
    slots::{API_DTOS_KT, API_ROUTES_KT, ROUTES, SWAGGER_UTILS_KT},
    templates,
};

const UTILS_IMPORT: &str = "io.ktor.swagger.experimental.*";
const SERIALIZATION_ARTIFACT: &str = "org.jetbrains.kotlinx:kotlinx-serialization-runtime:0.9.0";
const KOTLINX_REPO: &str = "https://kotlin.bintray.com/kotlinx";

pub(super) fn render(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    let Some(model) = &info.swagger else {
        warn!("swagger feature selected without an API document, skipping API scaffolding");
        return Ok(());
    };
    model.check_references()?;

    let emitter = info.dto_style.emitter();
    debug!(
        style = emitter.name(),
        definitions = model.definitions.len(),
        operations = model.operations.len(),
        "emitting API scaffolding"
    );
    if info.dto_style == DtoStyle::Annotated {
        b.add_repository(KOTLINX_REPO);
        b.add_artifact(SERIALIZATION_ARTIFACT);
    }

    let utils = info.templates.fetch_text(templates::SWAGGER_UTILS)?;
    b.file(SWAGGER_UTILS_KT)?.lines(utils);

    for statement in emitter.imports().iter().chain([&UTILS_IMPORT]) {
        b.add_import(API_DTOS_KT, statement);
    }
    let dtos = b.file(API_DTOS_KT)?;
    dtos.line(format!("package {}", info.package()));
    dtos.separator(|ind| {
        ind.imports();
    });
    dtos.try_separator(|ind| emitter.emit_data_types(ind, model))?;

    for statement in ROUTE_IMPORTS.iter().chain([&UTILS_IMPORT]) {
        b.add_import(API_ROUTES_KT, statement);
    }
    let routes = b.file(API_ROUTES_KT)?;
    routes.line(format!("package {}", info.package()));
    routes.separator(|ind| {
        ind.imports();
    });
    routes.try_separator(|ind| emit_routes(ind, model))?;

    b.slot(ROUTES).separator(|ind| {
        ind.line("apiRoutes()");
    });
    Ok(())
}
