//! Request handling scaffolding emitted at the top of each route.

use kickstart_codegen::{Result, builder::Indenter};
use kickstart_core::{kotlin_ident, quote};

use crate::{
    KotlinTypeMapper, Operation, Parameter, ParameterLocation, SwaggerModel, TypeDef, TypeMapper,
    Untyped,
};

const USERNAME_NAMES: &[&str] = &["username", "user", "login", "email", "user_name"];
const PASSWORD_NAMES: &[&str] = &["password", "pass", "pwd"];

/// Emit parameter bindings, body extraction, validation checks, sample error
/// branches and, for login-shaped operations, credential scaffolding.
///
/// Returns the sample response payload, `None` when the operation responds
/// without content.
pub fn emit_operation_guard(
    ind: &mut Indenter,
    op: &Operation,
    model: &SwaggerModel,
) -> Result<Option<Untyped>> {
    let mapper = KotlinTypeMapper;

    let mut bindings = Vec::with_capacity(op.parameters.len() + 1);
    let mut form_received = false;
    for param in &op.parameters {
        if param.location == ParameterLocation::Form && !form_received {
            bindings.push("val form = call.receiveParameters()".to_string());
            form_received = true;
        }
        bindings.push(binding(param, &mapper, model)?);
    }
    if let Some(body) = &op.request_body {
        bindings.push(format!("val body = call.receive<{}>()", mapper.map_type(body, model)?));
    }

    let checks: Vec<String> = op.parameters.iter().filter_map(check).collect();

    let errors: Vec<String> = op
        .error_responses
        .iter()
        .map(|error| {
            format!(
                "if (false) httpException({}, {})",
                status_code(error.status, &error.description),
                quote(&error.description)
            )
        })
        .collect();

    model.resolve_all(&op.response_type)?;
    let mut payload = match op.response_type {
        TypeDef::Void => None,
        ref ty => Some(Untyped::default_for(ty, model)),
    };
    let login = payload.as_ref().and_then(|_| login_credentials(op, model));

    ind.separator(|ind| {
        for line in &bindings {
            ind.line(line);
        }
    });
    ind.separator(|ind| {
        for line in &checks {
            ind.line(line);
        }
    });
    ind.separator(|ind| {
        for line in &errors {
            ind.line(line);
        }
    });

    if let (Some((username, password)), Some(payload)) = (login, payload.as_mut()) {
        ind.separator(|ind| {
            ind.line("// @TODO: Your username/password validation here");
            if let Some(password) = &password {
                ind.line(format!(
                    "if ({} != {}) httpException(HttpStatusCode.Unauthorized, {})",
                    username,
                    password,
                    quote(&format!("{} != {}", username, password))
                ));
            }
            ind.line(format!("val token = myjwt.sign({})", username));
        });
        if let Some(path) = token_path(payload) {
            payload.set_path(&path, Untyped::Identifier("token".to_string()));
        }
    }

    Ok(payload)
}

fn binding(param: &Parameter, mapper: &KotlinTypeMapper, model: &SwaggerModel) -> Result<String> {
    let ident = kotlin_ident(&param.name);
    let name = quote(&param.name);
    let ty = mapper.map_type(&param.ty, model)?;
    let optional = if param.required { "" } else { "OrNull" };
    Ok(match param.location {
        ParameterLocation::Path => format!("val {} = call.getPath<{}>({})", ident, ty, name),
        ParameterLocation::Query if matches!(param.ty, TypeDef::Array(_)) => {
            format!("val {} = call.getQueryList({})", ident, name)
        }
        ParameterLocation::Query => {
            format!("val {} = call.getQuery{}<{}>({})", ident, optional, ty, name)
        }
        ParameterLocation::Header => {
            format!("val {} = call.getHeader{}<{}>({})", ident, optional, ty, name)
        }
        ParameterLocation::Cookie => {
            format!("val {} = call.getCookie{}<{}>({})", ident, optional, ty, name)
        }
        ParameterLocation::Form => {
            format!("val {} = form.getTyped{}<{}>({})", ident, optional, ty, name)
        }
    })
}

fn check(param: &Parameter) -> Option<String> {
    let rule = param.rule.as_ref()?;
    let ident = kotlin_ident(&param.name);
    let condition = rule.to_kotlin(&ident, &param.ty);
    let condition = if param.required {
        condition
    } else {
        format!("{} == null || ({})", ident, condition)
    };
    Some(format!(
        "checkRequest({}) {{ {} }}",
        condition,
        quote(&format!("Invalid {}", param.name))
    ))
}

fn status_code(status: u16, description: &str) -> String {
    let name = match status {
        400 => "BadRequest",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "NotFound",
        405 => "MethodNotAllowed",
        409 => "Conflict",
        410 => "Gone",
        415 => "UnsupportedMediaType",
        422 => "UnprocessableEntity",
        429 => "TooManyRequests",
        500 => "InternalServerError",
        501 => "NotImplemented",
        503 => "ServiceUnavailable",
        _ => return format!("HttpStatusCode({}, {})", status, quote(description)),
    };
    format!("HttpStatusCode.{}", name)
}

/// Kotlin expressions holding the username and, when present, the password of
/// a login-shaped operation, looked up among parameters first and body
/// properties second.
fn login_credentials(op: &Operation, model: &SwaggerModel) -> Option<(String, Option<String>)> {
    let find = |names: &[&str]| -> Option<String> {
        let param = op
            .parameters
            .iter()
            .find(|p| names.contains(&p.name.to_lowercase().as_str()))
            .map(|p| kotlin_ident(&p.name));
        param.or_else(|| {
            let TypeDef::Named(body) = op.request_body.as_ref()? else {
                return None;
            };
            model
                .definition(body)?
                .properties
                .values()
                .find(|p| names.contains(&p.name.to_lowercase().as_str()))
                .map(|p| format!("body.{}", kotlin_ident(&p.name)))
        })
    };
    Some((find(USERNAME_NAMES)?, find(PASSWORD_NAMES)))
}

/// Where the issued token goes in the response payload.
fn token_path(payload: &Untyped) -> Option<Vec<String>> {
    payload.find_token_path().or_else(|| match payload {
        Untyped::Object(_) => Some(vec!["token".to_string()]),
        Untyped::Str(_) => Some(Vec::new()),
        _ => None,
    })
}
