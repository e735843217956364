//! Gradle build files, Groovy and Kotlin DSL flavours.

use kickstart_codegen::{
    Result,
    builder::{ListingSource, ProjectBuilder},
};
use kickstart_core::quote;
use serde::Serialize;

use crate::{BuildInfo, templates};

const LOGBACK_VERSION: &str = "1.2.1";

#[derive(Serialize)]
struct PropertiesContext<'a> {
    ktor_version: &'a str,
    kotlin_version: &'a str,
    logback_version: &'a str,
}

fn gradle_properties(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.rendered_template_file(
        "gradle.properties",
        &info.templates,
        templates::GRADLE_PROPERTIES,
        PropertiesContext {
            ktor_version: info.version.version(),
            kotlin_version: info.version.kotlin_version(),
            logback_version: LOGBACK_VERSION,
        },
    )?;
    Ok(())
}

pub(super) fn render_gradle(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    let main_class = info.engine.main_class(&info.version);
    let project = &info.project;

    let file = b.file("build.gradle")?;
    file.scope("buildscript", |ind| {
        ind.scope("repositories", |ind| {
            ind.line("jcenter()");
        });
        ind.separator(|ind| {
            ind.scope("dependencies", |ind| {
                ind.line("classpath \"org.jetbrains.kotlin:kotlin-gradle-plugin:$kotlin_version\"");
            });
        });
    });
    file.separator(|ind| {
        ind.line("apply plugin: 'kotlin'");
        ind.line("apply plugin: 'application'");
    });
    file.separator(|ind| {
        ind.line(format!("group '{}'", project.group));
        ind.line(format!("version '{}'", project.version));
        ind.line(format!("mainClassName = \"{}\"", main_class));
    });
    file.separator(|ind| {
        ind.scope("sourceSets", |ind| {
            ind.line("main.kotlin.srcDirs = main.java.srcDirs = ['src']");
            ind.line("test.kotlin.srcDirs = test.java.srcDirs = ['test']");
            ind.line("main.resources.srcDirs = ['resources']");
            ind.line("test.resources.srcDirs = ['testresources']");
        });
    });
    file.separator(|ind| {
        ind.scope("repositories", |ind| {
            ind.line("mavenLocal()");
            ind.line("jcenter()");
            ind.listing(ListingSource::Repositories, "maven { url '{}' }");
        });
    });
    file.separator(|ind| {
        ind.scope("dependencies", |ind| {
            ind.line("compile \"org.jetbrains.kotlin:kotlin-stdlib-jdk8:$kotlin_version\"");
            ind.listing(ListingSource::Artifacts, "compile \"{}\"");
            ind.line("testCompile \"io.ktor:ktor-server-tests:$ktor_version\"");
        });
    });

    b.file("settings.gradle")?
        .line(format!("rootProject.name = '{}'", project.name));
    gradle_properties(info, b)
}

pub(super) fn render_gradle_kts(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    let main_class = info.engine.main_class(&info.version);
    let project = &info.project;

    let file = b.file("build.gradle.kts")?;
    file.line("val ktor_version: String by project");
    file.line("val kotlin_version: String by project");
    file.line("val logback_version: String by project");
    file.separator(|ind| {
        ind.scope("plugins", |ind| {
            ind.line("application");
            ind.line(format!(
                "kotlin(\"jvm\") version {}",
                quote(info.version.kotlin_version())
            ));
        });
    });
    file.separator(|ind| {
        ind.line(format!("group = {}", quote(&project.group)));
        ind.line(format!("version = {}", quote(&project.version)));
    });
    file.separator(|ind| {
        ind.scope("application", |ind| {
            ind.line(format!("mainClassName = {}", quote(&main_class)));
        });
    });
    file.separator(|ind| {
        ind.scope("repositories", |ind| {
            ind.line("mavenLocal()");
            ind.line("jcenter()");
            ind.listing(ListingSource::Repositories, "maven { url = uri(\"{}\") }");
        });
    });
    file.separator(|ind| {
        ind.scope("dependencies", |ind| {
            ind.line("compile(\"org.jetbrains.kotlin:kotlin-stdlib-jdk8:$kotlin_version\")");
            ind.listing(ListingSource::Artifacts, "compile(\"{}\")");
            ind.line("testCompile(\"io.ktor:ktor-server-tests:$ktor_version\")");
        });
    });
    file.separator(|ind| {
        ind.line("kotlin.sourceSets[\"main\"].kotlin.srcDirs(\"src\")");
        ind.line("kotlin.sourceSets[\"test\"].kotlin.srcDirs(\"test\")");
    });
    file.separator(|ind| {
        ind.line("sourceSets[\"main\"].resources.srcDirs(\"resources\")");
        ind.line("sourceSets[\"test\"].resources.srcDirs(\"testresources\")");
    });

    b.file("settings.gradle.kts")?
        .line(format!("rootProject.name = {}", quote(&project.name)));
    gradle_properties(info, b)
}
