//! HTTP client features. All of them hang off the shared client declared by
//! `ktor-client-core`.

use kickstart_codegen::{Result, builder::ProjectBuilder};

use crate::{
    BuildInfo,
    slots::{APPLICATION_KT, CLIENT_FEATURES, CLIENT_USAGE, DECLARATIONS, MODULE_BODY, WS_CLIENT_APP_KT},
};

pub(super) fn core(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.add_import(APPLICATION_KT, "io.ktor.client.*");
    b.slot(MODULE_BODY).separator(|ind| {
        ind.scope("val client = HttpClient()", |ind| {
            ind.slot(CLIENT_FEATURES);
        });
        ind.separator(|ind| {
            ind.slot(CLIENT_USAGE);
        });
    });
    Ok(())
}

pub(super) fn apache(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.add_import(APPLICATION_KT, "io.ktor.client.engine.apache.*");
    Ok(())
}

pub(super) fn cio(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.add_import(APPLICATION_KT, "io.ktor.client.engine.cio.*");
    Ok(())
}

pub(super) fn auth_basic(_: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    b.add_import(APPLICATION_KT, "io.ktor.client.features.auth.basic.*");
    b.slot(CLIENT_FEATURES).separator(|ind| {
        ind.scope("install(BasicAuth)", |ind| {
            ind.line("username = \"test\"");
            ind.line("password = \"pass\"");
        });
    });
    Ok(())
}

pub(super) fn json(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    for statement in [
        "io.ktor.client.features.json.*",
        "io.ktor.client.request.*",
        "io.ktor.http.*",
        "java.net.URL",
    ] {
        b.add_import(APPLICATION_KT, statement);
    }
    b.add_import(APPLICATION_KT, &format!("{}.*", info.coroutines_package()));

    b.slot(DECLARATIONS).separator(|ind| {
        ind.line("data class JsonSampleClass(val hello: String)");
    });
    b.slot(CLIENT_FEATURES).separator(|ind| {
        ind.scope("install(JsonFeature)", |ind| {
            ind.line("serializer = GsonSerializer()");
        });
    });
    b.slot(CLIENT_USAGE).separator(|ind| {
        ind.scope("runBlocking", |ind| {
            ind.line("// Sample for making a HTTP Client request");
            ind.line("/*");
            ind.scope("val message = client.post<JsonSampleClass>", |ind| {
                ind.line("url(URL(\"http://127.0.0.1:8080/path/to/endpoint\"))");
                ind.line("contentType(ContentType.Application.Json)");
                ind.line("body = JsonSampleClass(hello = \"world\")");
            });
            ind.line("*/");
        });
    });
    Ok(())
}

/// Standalone client application talking to the server's echo socket.
pub(super) fn websocket(info: &BuildInfo, b: &mut ProjectBuilder) -> Result<()> {
    let coroutines = info.coroutines_package();
    let statements = [
        "io.ktor.client.*".to_string(),
        "io.ktor.client.engine.cio.*".to_string(),
        "io.ktor.client.features.websocket.*".to_string(),
        "io.ktor.client.features.websocket.WebSockets".to_string(),
        "io.ktor.http.*".to_string(),
        "io.ktor.http.cio.websocket.*".to_string(),
        "io.ktor.http.cio.websocket.Frame".to_string(),
        format!("{}.*", coroutines),
        format!("{}.channels.*", coroutines),
    ];
    for statement in &statements {
        b.add_import(WS_CLIENT_APP_KT, statement);
    }

    let file = b.file(WS_CLIENT_APP_KT)?;
    file.line(format!("package {}", info.package()));
    file.separator(|ind| {
        ind.imports();
    });
    file.separator(|ind| {
        ind.scope("object WsClientApp", |ind| {
            ind.line("@JvmStatic");
            ind.scope("fun main(args: Array<String>)", |ind| {
                ind.scope("runBlocking", |ind| {
                    ind.line("val client = HttpClient(CIO).config { install(WebSockets) }");
                    ind.separator(|ind| {
                        ind.scope(
                            "client.ws(method = HttpMethod.Get, host = \"127.0.0.1\", port = 8080, path = \"/myws/echo\")",
                            |ind| {
                                ind.line("send(Frame.Text(\"Hello World\"))");
                                ind.scope(
                                    "for (message in incoming.map { it as? Frame.Text }.filterNotNull())",
                                    |ind| {
                                        ind.line("println(\"Server said: \" + message.readText())");
                                    },
                                );
                            },
                        );
                    });
                });
            });
        });
    });
    Ok(())
}
