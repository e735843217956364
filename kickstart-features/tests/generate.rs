use kickstart_features::{BuildSystem, Engine, Error, GenerationRequest, ProjectInfo, generate};
use kickstart_swagger::{DtoStyle, SwaggerModel};

const PETSTORE: &str = include_str!("../../kickstart-swagger/tests/fixtures/petstore.yaml");

fn request(features: &[&str]) -> GenerationRequest {
    GenerationRequest {
        features: features.iter().map(|f| f.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_bare_application() {
    let result = generate(&GenerationRequest::default(), None).unwrap();

    let paths: Vec<_> = result.paths().collect();
    assert_eq!(
        paths,
        [
            ".gitignore",
            "build.gradle",
            "gradle.properties",
            "resources/application.conf",
            "resources/logback.xml",
            "settings.gradle",
            "src/Application.kt",
        ]
    );
    assert!(result.file(".gitignore").unwrap().is_binary());

    let app = result.text("src/Application.kt").unwrap();
    assert!(app.starts_with("package com.example\n\nimport io.ktor.application.*\n"));
    assert!(app.contains("fun main(args: Array<String>): Unit = io.ktor.server.netty.EngineMain.main(args)"));
    assert!(app.contains("fun Application.module(testing: Boolean = false) {\n}"));

    let conf = result.text("resources/application.conf").unwrap();
    assert!(conf.contains("modules = [ com.example.ApplicationKt.module ]"));

    insta::assert_snapshot!(result.text("gradle.properties").unwrap().trim_end(), @r"
    ktor_version=1.0.0-beta-3
    kotlin.code.style=official
    kotlin_version=1.3.0
    logback_version=1.2.1
    ");
}

#[test]
fn test_default_headers_installed_once() {
    let result = generate(&request(&["default-headers"]), None).unwrap();

    let app = result.text("src/Application.kt").unwrap();
    assert_eq!(app.matches("install(DefaultHeaders) {").count(), 1);
    assert!(app.contains("import io.ktor.features.*"));
    assert_eq!(
        result.artifacts,
        [
            "ch.qos.logback:logback-classic:$logback_version",
            "io.ktor:ktor-server-netty:$ktor_version",
            "io.ktor:ktor-server-core:$ktor_version",
        ]
    );
    assert_eq!(result.repositories, ["https://dl.bintray.com/kotlin/ktor"]);

    let gradle = result.text("build.gradle").unwrap();
    assert!(gradle.contains("    compile \"io.ktor:ktor-server-core:$ktor_version\"\n"));
    assert!(gradle.contains("    maven { url 'https://dl.bintray.com/kotlin/ktor' }\n"));
}

#[test]
fn test_shared_prerequisite_renders_once() {
    let result = generate(&request(&["ktor-client-json-jvm", "ktor-client-auth-basic"]), None).unwrap();

    let app = result.text("src/Application.kt").unwrap();
    assert_eq!(app.matches("val client = HttpClient() {").count(), 1);
    assert!(app.contains("install(BasicAuth) {"));
    assert!(app.contains("install(JsonFeature) {"));
    assert!(app.contains("import kotlinx.coroutines.*"));
    assert!(app.contains("data class JsonSampleClass(val hello: String)"));
    assert_eq!(
        result
            .artifacts
            .iter()
            .filter(|a| a.as_str() == "io.ktor:ktor-client-core:$ktor_version")
            .count(),
        1
    );
}

#[test]
fn test_generation_is_deterministic() {
    let request = request(&["websockets", "cors", "call-logging", "ktor-client-websocket"]);
    let first = generate(&request, None).unwrap();
    let second = generate(&request, None).unwrap();
    assert_eq!(first, second);
    assert!(first.text("src/WsClientApp.kt").is_some());
}

#[test]
fn test_routes_share_routing_block() {
    let result = generate(&request(&["static-content", "html-dsl", "auth-basic"]), None).unwrap();

    let app = result.text("src/Application.kt").unwrap();
    assert_eq!(app.matches("routing {").count(), 1);
    assert!(app.contains("static(\"/static\") {"));
    assert!(app.contains("get(\"/html-dsl\") {"));
    assert!(app.contains("basic(\"myBasicAuth\") {"));
    assert!(result.text("resources/static/index.html").is_some());
    assert!(result.text("test/ApplicationTest.kt").unwrap().contains("class ApplicationTest {"));
}

#[test]
fn test_swagger_scaffolding() {
    let model = SwaggerModel::from_yaml_str(PETSTORE).unwrap();
    let result = generate(&request(&["swagger"]), Some(model)).unwrap();

    let dtos = result.text("src/ApiDtos.kt").unwrap();
    assert!(dtos.starts_with("package com.example\n\n"));
    assert!(dtos.contains("import kotlinx.serialization.*"));
    assert!(dtos.contains("data class Pet("));

    let routes = result.text("src/ApiRoutes.kt").unwrap();
    assert!(routes.contains("import io.ktor.swagger.experimental.*"));
    assert!(routes.contains("fun Routing.apiRoutes() {"));

    assert!(result.text("src/io/ktor/swagger/experimental/SwaggerUtils.kt").is_some());
    assert!(result.text("src/Application.kt").unwrap().contains("    apiRoutes()\n"));
    assert!(
        result
            .artifacts
            .contains(&"org.jetbrains.kotlinx:kotlinx-serialization-runtime:0.9.0".to_string())
    );
    assert!(result.repositories.contains(&"https://kotlin.bintray.com/kotlinx".to_string()));
}

#[test]
fn test_swagger_hand_rolled_needs_no_serialization_runtime() {
    let model = SwaggerModel::from_yaml_str(PETSTORE).unwrap();
    let request = GenerationRequest {
        dto_style: DtoStyle::HandRolled,
        ..request(&["swagger"])
    };
    let result = generate(&request, Some(model)).unwrap();

    assert!(result.text("src/ApiDtos.kt").unwrap().contains("fun toJson(): Map<String, Any?> = mapOf("));
    assert!(!result.artifacts.iter().any(|a| a.contains("kotlinx-serialization")));
}

#[test]
fn test_swagger_without_document() {
    let result = generate(&request(&["swagger"]), None).unwrap();
    assert!(result.text("src/ApiDtos.kt").is_none());
    assert!(result.text("src/ApiRoutes.kt").is_none());
    assert!(!result.text("src/Application.kt").unwrap().contains("apiRoutes()"));
}

#[test]
fn test_older_release_and_kotlin_dsl() {
    let request = GenerationRequest {
        framework_version: Some("0.9.5".to_string()),
        project: ProjectInfo {
            group: "org.acme".to_string(),
            name: "shop".to_string(),
            version: "2.0".to_string(),
        },
        engine: Engine::Jetty,
        build_system: BuildSystem::GradleKts,
        ..request(&["ktor-client-json-jvm"])
    };
    let result = generate(&request, None).unwrap();

    assert!(result.text("build.gradle").is_none());
    let gradle = result.text("build.gradle.kts").unwrap();
    assert!(gradle.contains("kotlin(\"jvm\") version \"1.2.70\""));
    assert!(gradle.contains("mainClassName = \"io.ktor.server.jetty.DevelopmentEngine\""));
    assert!(gradle.contains("compile(\"io.ktor:ktor-server-jetty:$ktor_version\")"));
    assert!(gradle.contains("maven { url = uri(\"https://kotlin.bintray.com/kotlinx\") }"));
    assert_eq!(result.text("settings.gradle.kts").unwrap().trim_end(), "rootProject.name = \"shop\"");

    let app = result.text("src/Application.kt").unwrap();
    assert!(app.starts_with("package org.acme\n"));
    assert!(app.contains("import kotlinx.coroutines.experimental.*"));
}

#[test]
fn test_unknown_feature_and_version() {
    let err = generate(&request(&["graphql"]), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Generation(kickstart_codegen::Error::UnknownFeature { ref id, .. }) if id == "graphql"
    ));

    let request = GenerationRequest {
        framework_version: Some("2.0.0".to_string()),
        ..Default::default()
    };
    let err = generate(&request, None).unwrap_err();
    assert!(matches!(err, Error::UnknownVersion { .. }));
}
