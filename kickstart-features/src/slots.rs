//! Output paths and slot names shared between catalogue features.

/// Application entry point, holding `main` and the module function.
pub const APPLICATION_KT: &str = "src/Application.kt";
pub const WS_CLIENT_APP_KT: &str = "src/WsClientApp.kt";
pub const API_DTOS_KT: &str = "src/ApiDtos.kt";
pub const API_ROUTES_KT: &str = "src/ApiRoutes.kt";
pub const SWAGGER_UTILS_KT: &str = "src/io/ktor/swagger/experimental/SwaggerUtils.kt";
pub const APPLICATION_TEST_KT: &str = "test/ApplicationTest.kt";

/// `install(...)` blocks at the top of the module function.
pub const MODULE_INSTALL: &str = "module-install";
/// Statements after the install blocks (routing, client setup).
pub const MODULE_BODY: &str = "module-body";
/// Handlers inside `routing { }`.
pub const ROUTES: &str = "routes";
/// Top-level declarations after the module function.
pub const DECLARATIONS: &str = "declarations";
/// Providers inside `install(Authentication) { }`.
pub const AUTH_PROVIDERS: &str = "auth-providers";
/// Features installed into the HTTP client.
pub const CLIENT_FEATURES: &str = "client-features";
/// Sample client calls following the client declaration.
pub const CLIENT_USAGE: &str = "client-usage";
