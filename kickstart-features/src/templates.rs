//! Template resources compiled into the binary.

use kickstart_codegen::generation::TemplateBundle;

pub const APPLICATION_CONF: &str = "application.conf.j2";
pub const LOGBACK_XML: &str = "logback.xml";
pub const GITIGNORE: &str = "gitignore";
pub const GRADLE_PROPERTIES: &str = "gradle.properties.j2";
pub const SWAGGER_UTILS: &str = "SwaggerUtils.kt";

const BUNDLED: &[(&str, &[u8])] = &[
    (APPLICATION_CONF, include_bytes!("../templates/application.conf.j2")),
    (LOGBACK_XML, include_bytes!("../templates/logback.xml")),
    (GITIGNORE, include_bytes!("../templates/gitignore")),
    (GRADLE_PROPERTIES, include_bytes!("../templates/gradle.properties.j2")),
    (SWAGGER_UTILS, include_bytes!("../templates/SwaggerUtils.kt")),
];

/// Every template the catalogue renders.
pub fn bundled() -> TemplateBundle {
    TemplateBundle::from_entries(BUNDLED.iter().copied())
}
