//! The feature catalogue.
//!
//! Base features come first so they render before anything that contributes to
//! the files they declare. The registry is built once and never mutated.

mod application;
mod build;
mod client;
mod server;
mod swagger;

use std::sync::LazyLock;

use kickstart_codegen::feature::{Feature, FeatureGroup, FeatureRegistry};

use crate::BuildInfo;

pub const APPLICATION: &str = "application";
pub const SWAGGER: &str = "swagger";

const KTOR_REPO: &str = "https://dl.bintray.com/kotlin/ktor";
const KOTLINX_REPO: &str = "https://kotlin.bintray.com/kotlinx";
const SERVER_CORE: &str = "io.ktor:ktor-server-core:$ktor_version";
const CLIENT_CORE: &str = "ktor-client-core";

static REGISTRY: LazyLock<FeatureRegistry<BuildInfo>> = LazyLock::new(|| {
    FeatureRegistry::new([
        // Base
        Feature::new("build-gradle", "Gradle", build::render_gradle)
            .description("Gradle build script using the Groovy DSL")
            .documentation("https://ktor.io/quickstart/gradle.html")
            .group(FeatureGroup::Internal),
        Feature::new("build-gradle-kts", "Gradle Kotlin DSL", build::render_gradle_kts)
            .description("Gradle build script using the Kotlin DSL")
            .documentation("https://ktor.io/quickstart/gradle.html")
            .group(FeatureGroup::Internal),
        Feature::new(APPLICATION, "Application", application::render)
            .description("Application entry point, configuration and logging")
            .group(FeatureGroup::Internal)
            .repos(&[KTOR_REPO])
            .artifacts(&["ch.qos.logback:logback-classic:$logback_version"]),
        // Server
        Feature::new("default-headers", "DefaultHeaders", server::default_headers)
            .description("This feature adds a default set of headers to HTTP responses")
            .documentation("https://ktor.io/features/default-headers.html")
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("call-logging", "CallLogging", server::call_logging)
            .description("Logs client requests")
            .documentation("https://ktor.io/features/call-logging.html")
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("compression", "Compression", server::compression)
            .description("Compresses responses using encoding algorithms like gzip or deflate")
            .documentation("https://ktor.io/features/compression.html")
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("cors", "CORS", server::cors)
            .description("Enables Cross-Origin Resource Sharing (CORS)")
            .documentation("https://ktor.io/features/cors.html")
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("status-pages", "Status Pages", server::status_pages)
            .description("Allow to respond to thrown exceptions")
            .documentation("https://ktor.io/features/status-pages.html")
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("routing", "Routing", server::routing)
            .description("Allows to define structured routes and associated handlers")
            .documentation("https://ktor.io/features/routing.html")
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("static-content", "Static Content", server::static_content)
            .description("Serves static files from defined locations")
            .documentation("https://ktor.io/features/static-content.html")
            .requires(&["routing"])
            .repos(&[KTOR_REPO])
            .artifacts(&[SERVER_CORE]),
        Feature::new("websockets", "WebSockets", server::websockets)
            .description("Adds WebSockets support for bidirectional communication with the client")
            .documentation("https://ktor.io/features/websockets.html")
            .requires(&["routing"])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-websockets:$ktor_version"]),
        Feature::new("auth", "Authentication", server::auth)
            .description("Handle Basic and Digest HTTP Auth, Form authentication and OAuth")
            .documentation("https://ktor.io/features/authentication.html")
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-auth:$ktor_version"]),
        Feature::new("auth-basic", "Authentication Basic", server::auth_basic)
            .description("Handle Basic authentication")
            .documentation("https://ktor.io/features/authentication/basic.html")
            .requires(&["auth", "routing"])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-auth:$ktor_version"]),
        Feature::new("auth-jwt", "Authentication JWT", server::auth_jwt)
            .description("Handle JWT authentication")
            .documentation("https://ktor.io/features/authentication/jwt.html")
            .requires(&["auth"])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-auth-jwt:$ktor_version"]),
        Feature::new("content-negotiation-gson", "GSON", server::content_negotiation_gson)
            .description("Handles JSON serialization using GSON library")
            .documentation("https://ktor.io/features/gson.html")
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-gson:$ktor_version"]),
        Feature::new("html-dsl", "HTML DSL", server::html_dsl)
            .description("Generate HTML using Kotlin code like a pure-core template engine")
            .documentation("https://ktor.io/features/templates/html-dsl.html")
            .requires(&["routing"])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-html-builder:$ktor_version"]),
        Feature::new(SWAGGER, "Swagger", swagger::render)
            .description("Generates DTOs and route handlers from a Swagger/OpenAPI document")
            .requires(&["routing", "content-negotiation-gson"])
            .repos(&[KTOR_REPO]),
        // Client
        Feature::new(CLIENT_CORE, "HttpClient Engine", client::core)
            .description("Core of the asynchronous HTTP client")
            .documentation("https://ktor.io/clients/http-client.html")
            .group(FeatureGroup::Client)
            .repos(&[KTOR_REPO])
            .artifacts(&[
                "io.ktor:ktor-client-core:$ktor_version",
                "io.ktor:ktor-client-core-jvm:$ktor_version",
            ]),
        Feature::new("ktor-client-apache", "Apache HttpClient Engine", client::apache)
            .description("Engine for the HTTP client using Apache HttpAsyncClient")
            .documentation("https://ktor.io/clients/http-client/engines.html#apache")
            .group(FeatureGroup::Client)
            .requires(&[CLIENT_CORE])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-client-apache:$ktor_version"]),
        Feature::new("ktor-client-cio", "CIO HttpClient Engine", client::cio)
            .description("Engine for the HTTP client using coroutine based I/O")
            .documentation("https://ktor.io/clients/http-client/engines.html#cio")
            .group(FeatureGroup::Client)
            .requires(&[CLIENT_CORE])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-client-cio:$ktor_version"]),
        Feature::new("ktor-client-auth-basic", "Auth Basic feature HttpClient", client::auth_basic)
            .description("Supports basic authentication for the Http Client")
            .documentation("https://ktor.io/clients/http-client.html#basicauth")
            .group(FeatureGroup::Client)
            .requires(&[CLIENT_CORE])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-client-auth-basic:$ktor_version"]),
        Feature::new("ktor-client-json-jvm", "Json serialization for HttpClient", client::json)
            .description("Serializes request and response bodies as JSON for the Http Client")
            .documentation("https://ktor.io/clients/http-client.html#jsonfeature")
            .group(FeatureGroup::Client)
            .requires(&[CLIENT_CORE])
            .repos(&[KTOR_REPO, KOTLINX_REPO])
            .artifacts(&[
                "io.ktor:ktor-client-json-jvm:$ktor_version",
                "io.ktor:ktor-client-gson:$ktor_version",
            ]),
        Feature::new("ktor-client-websocket", "WebSockets HttpClient support", client::websocket)
            .description("HttpClient feature to establish bidirectional communication using WebSockets")
            .documentation("https://ktor.io/clients/http-client.html#websockets")
            .group(FeatureGroup::Client)
            .requires(&[CLIENT_CORE, "ktor-client-cio", "websockets"])
            .repos(&[KTOR_REPO])
            .artifacts(&["io.ktor:ktor-client-websocket:$ktor_version"]),
    ])
});

/// The process-wide feature registry.
pub fn registry() -> &'static FeatureRegistry<BuildInfo> {
    &REGISTRY
}
