use kickstart_codegen::{Result, builder::ProjectBuilder};
use serde::Serialize;

use crate::{
    BuildInfo,
    slots::{APPLICATION_KT, DECLARATIONS, MODULE_BODY, MODULE_INSTALL},
    templates,
};

#[derive(Serialize)]
struct ConfContext<'a> {
    package: &'a str,
}

/// Application entry point, HOCON configuration, logging setup and
/// `.gitignore`.
pub(super) fn render(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.add_artifact(info.engine.artifact());
    b.add_import(APPLICATION_KT, "io.ktor.application.*");

    let main_class = info.engine.main_class(&info.version);
    let file = b.file(APPLICATION_KT)?;
    file.line(format!("package {}", info.package()));
    file.separator(|ind| {
        ind.imports();
    });
    file.separator(|ind| {
        ind.line(format!(
            "fun main(args: Array<String>): Unit = {}.main(args)",
            main_class
        ));
    });
    file.separator(|ind| {
        ind.line("@Suppress(\"unused\") // Referenced in application.conf");
        ind.line("@kotlin.jvm.JvmOverloads");
        ind.scope("fun Application.module(testing: Boolean = false)", |ind| {
            ind.slot(MODULE_INSTALL);
            ind.slot(MODULE_BODY);
        });
    });
    file.separator(|ind| {
        ind.slot(DECLARATIONS);
    });

    b.rendered_template_file(
        "resources/application.conf",
        &info.templates,
        templates::APPLICATION_CONF,
        ConfContext {
            package: info.package(),
        },
    )?;
    let logback = info.templates.fetch_text(templates::LOGBACK_XML)?;
    b.file("resources/logback.xml")?.lines(logback);
    b.template_file(".gitignore", &info.templates, templates::GITIGNORE)?;
    Ok(())
}
