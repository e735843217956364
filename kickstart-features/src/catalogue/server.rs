//! Server side features.

use kickstart_codegen::{
    Result,
    builder::{Indenter, ProjectBuilder},
};

use crate::{
    BuildInfo,
    slots::{APPLICATION_KT, APPLICATION_TEST_KT, AUTH_PROVIDERS, DECLARATIONS, MODULE_BODY, MODULE_INSTALL, ROUTES},
};

/// Append an `install(<feature>) { ... }` block to the module function.
fn install(b: &mut ProjectBuilder, feature: &str, body: impl FnOnce(&mut Indenter)) {
    b.slot(MODULE_INSTALL).separator(|ind| {
        ind.scope(format!("install({})", feature), body);
    });
}

fn imports(b: &mut ProjectBuilder, statements: &[&str]) {
    for statement in statements {
        b.add_import(APPLICATION_KT, statement);
    }
}

pub(super) fn default_headers(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.features.*"]);
    install(b, "DefaultHeaders", |ind| {
        ind.line("header(\"X-Engine\", \"Ktor\") // will send this header with each response");
    });
    Ok(())
}

pub(super) fn call_logging(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.features.*", "io.ktor.request.*", "org.slf4j.event.*"]);
    install(b, "CallLogging", |ind| {
        ind.line("level = Level.INFO");
        ind.line("filter { call -> call.request.path().startsWith(\"/\") }");
    });
    Ok(())
}

pub(super) fn compression(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.features.*"]);
    install(b, "Compression", |ind| {
        ind.scope("gzip", |ind| {
            ind.line("priority = 1.0");
        });
        ind.scope("deflate", |ind| {
            ind.line("priority = 10.0");
            ind.line("minimumSize(1024) // condition");
        });
    });
    Ok(())
}

pub(super) fn cors(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.features.*", "io.ktor.http.*"]);
    install(b, "CORS", |ind| {
        for method in ["Options", "Put", "Delete", "Patch"] {
            ind.line(format!("method(HttpMethod.{})", method));
        }
        ind.line("header(HttpHeaders.Authorization)");
        ind.line("header(\"MyCustomHeader\")");
        ind.line("allowCredentials = true");
        ind.line("anyHost() // @TODO: Don't do this in production if possible. Try to limit it.");
    });
    Ok(())
}

pub(super) fn status_pages(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.features.*", "io.ktor.http.*", "io.ktor.response.*"]);
    install(b, "StatusPages", |ind| {
        ind.scope("exception<AuthenticationException>", |ind| {
            ind.line("cause ->");
            ind.line("call.respond(HttpStatusCode.Unauthorized)");
        });
        ind.scope("exception<AuthorizationException>", |ind| {
            ind.line("cause ->");
            ind.line("call.respond(HttpStatusCode.Forbidden)");
        });
    });
    b.slot(DECLARATIONS).separator(|ind| {
        ind.line("class AuthenticationException : RuntimeException()");
        ind.line("class AuthorizationException : RuntimeException()");
    });
    Ok(())
}

pub(super) fn routing(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(
        b,
        &["io.ktor.http.*", "io.ktor.response.*", "io.ktor.request.*", "io.ktor.routing.*"],
    );
    b.slot(MODULE_BODY).separator(|ind| {
        ind.scope("routing", |ind| {
            ind.scope("get(\"/\")", |ind| {
                ind.line("call.respondText(\"HELLO WORLD!\", contentType = ContentType.Text.Plain)");
            });
            ind.separator(|ind| {
                ind.slot(ROUTES);
            });
        });
    });

    for statement in ["io.ktor.application.*", "io.ktor.http.*", "io.ktor.server.testing.*", "kotlin.test.*"] {
        b.add_import(APPLICATION_TEST_KT, statement);
    }
    let test = b.file(APPLICATION_TEST_KT)?;
    test.line(format!("package {}", info.package()));
    test.separator(|ind| {
        ind.imports();
    });
    test.separator(|ind| {
        ind.scope("class ApplicationTest", |ind| {
            ind.line("@Test");
            ind.scope("fun testRoot()", |ind| {
                ind.scope("withTestApplication({ module(testing = true) })", |ind| {
                    ind.scope("handleRequest(HttpMethod.Get, \"/\").apply", |ind| {
                        ind.line("assertEquals(HttpStatusCode.OK, response.status())");
                        ind.line("assertEquals(\"HELLO WORLD!\", response.content)");
                    });
                });
            });
        });
    });
    Ok(())
}

pub(super) fn static_content(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.http.content.*"]);
    b.slot(ROUTES).separator(|ind| {
        ind.line("// Static feature. Try to access `/static/index.html`");
        ind.scope("static(\"/static\")", |ind| {
            ind.line("resources(\"static\")");
        });
    });
    b.file("resources/static/index.html")?.lines(
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>Static content</title>\n</head>\n<body>\n    <h1>Served from resources/static</h1>\n</body>\n</html>",
    );
    Ok(())
}

pub(super) fn websockets(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(
        b,
        &["io.ktor.http.cio.websocket.*", "io.ktor.websocket.*", "java.time.*"],
    );
    install(b, "io.ktor.websocket.WebSockets", |ind| {
        ind.line("pingPeriod = Duration.ofSeconds(15)");
        ind.line("timeout = Duration.ofSeconds(15)");
        ind.line("maxFrameSize = Long.MAX_VALUE");
        ind.line("masking = false");
    });
    b.slot(ROUTES).separator(|ind| {
        ind.scope("webSocket(\"/myws/echo\")", |ind| {
            ind.line("send(Frame.Text(\"Hi from server\"))");
            ind.scope("while (true)", |ind| {
                ind.line("val frame = incoming.receive()");
                ind.scope("if (frame is Frame.Text)", |ind| {
                    ind.line("send(Frame.Text(\"Client said: \" + frame.readText()))");
                });
            });
        });
    });
    Ok(())
}

pub(super) fn auth(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.auth.*"]);
    install(b, "Authentication", |ind| {
        ind.slot(AUTH_PROVIDERS);
    });
    Ok(())
}

pub(super) fn auth_basic(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.slot(AUTH_PROVIDERS).separator(|ind| {
        ind.scope("basic(\"myBasicAuth\")", |ind| {
            ind.line("realm = \"Ktor Server\"");
            ind.line("validate { if (it.name == \"test\" && it.password == \"password\") UserIdPrincipal(it.name) else null }");
        });
    });
    b.slot(ROUTES).separator(|ind| {
        ind.scope("authenticate(\"myBasicAuth\")", |ind| {
            ind.scope("get(\"/protected/route/basic\")", |ind| {
                ind.line("val principal = call.principal<UserIdPrincipal>()!!");
                ind.line("call.respondText(\"Hello ${principal.name}\")");
            });
        });
    });
    Ok(())
}

pub(super) fn auth_jwt(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(
        b,
        &["com.auth0.jwt.*", "com.auth0.jwt.algorithms.*", "io.ktor.auth.jwt.*"],
    );
    b.slot(AUTH_PROVIDERS).separator(|ind| {
        ind.line("val jwtIssuer = \"ktor.io\"");
        ind.line("val jwtAudience = \"ktor.io\"");
        ind.scope("jwt", |ind| {
            ind.line("realm = \"ktor.io\"");
            ind.line("verifier(JWT.require(Algorithm.HMAC256(\"secret\")).withAudience(jwtAudience).withIssuer(jwtIssuer).build())");
            ind.scope("validate", |ind| {
                ind.line("credential ->");
                ind.line("if (credential.payload.audience.contains(jwtAudience)) JWTPrincipal(credential.payload) else null");
            });
        });
    });
    Ok(())
}

pub(super) fn content_negotiation_gson(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.features.*", "io.ktor.gson.*"]);
    install(b, "ContentNegotiation", |ind| {
        ind.scope("gson", |_| {});
    });
    Ok(())
}

pub(super) fn html_dsl(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    imports(b, &["io.ktor.html.*", "kotlinx.html.*"]);
    b.slot(ROUTES).separator(|ind| {
        ind.scope("get(\"/html-dsl\")", |ind| {
            ind.scope("call.respondHtml", |ind| {
                ind.scope("body", |ind| {
                    ind.scope("h1", |ind| {
                        ind.line("+\"HTML\"");
                    });
                    ind.scope("ul", |ind| {
                        ind.scope("for (n in 1..10)", |ind| {
                            ind.scope("li", |ind| {
                                ind.line("+\"$n\"");
                            });
                        });
                    });
                });
            });
        });
    });
    Ok(())
}
