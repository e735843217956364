//! Route emission for every operation of a model.

use kickstart_codegen::{Result, builder::Indenter};
use kickstart_core::quote;

use crate::{Operation, SwaggerModel, doc::operation_doc, guard::emit_operation_guard};

/// Imports required by the emitted routing function.
pub const ROUTE_IMPORTS: &[&str] = &[
    "io.ktor.application.*",
    "io.ktor.http.*",
    "io.ktor.request.*",
    "io.ktor.response.*",
    "io.ktor.routing.*",
];

/// Emit `fun Routing.apiRoutes()` with one handler per operation, in
/// declaration order.
pub fn emit_routes(ind: &mut Indenter, model: &SwaggerModel) -> Result<()> {
    ind.try_scope("fun Routing.apiRoutes()", |ind| -> Result<()> {
        for op in &model.operations {
            ind.try_separator(|ind| emit_route(ind, op, model))?;
        }
        Ok(())
    })?;
    Ok(())
}

fn emit_route(ind: &mut Indenter, op: &Operation, model: &SwaggerModel) -> Result<()> {
    operation_doc(
        ind,
        op.summary.as_deref(),
        op.description.as_deref(),
        op.parameters
            .iter()
            .map(|p| (p.name.as_str(), p.description.as_deref())),
        op.response_description.as_deref(),
    );
    let header = format!("{}({})", op.method.as_str(), quote(&op.path));
    ind.try_scope(header, |ind| -> Result<()> {
        let payload = emit_operation_guard(ind, op, model)?;
        ind.separator(|ind| match &payload {
            Some(payload) => {
                ind.line(format!("call.respond({})", payload.to_kotlin()));
            }
            None => {
                ind.line("call.respond(HttpStatusCode.OK)");
            }
        });
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use kickstart_codegen::Error;

    use super::*;
    use crate::{HttpMethod, Parameter, ParameterLocation, Primitive, TypeDef};

    #[test]
    fn test_routes() {
        let mut get = Operation::new(HttpMethod::Get, "/pet/{petId}", "getPetById")
            .with_parameter(Parameter::new(
                "petId",
                ParameterLocation::Path,
                TypeDef::Primitive(Primitive::Long),
            ))
            .with_response(TypeDef::Primitive(Primitive::Int));
        get.summary = Some("Find pet by ID".to_string());
        get.response_description = Some("successful operation".to_string());
        let model = SwaggerModel::new()
            .with_operation(get)
            .with_operation(Operation::new(HttpMethod::Delete, "/store/order", "clearOrders"));

        let mut ind = Indenter::new();
        emit_routes(&mut ind, &model).unwrap();
        insta::assert_snapshot!(ind.build().trim_end(), @r#"
        fun Routing.apiRoutes() {
            /**
             * Find pet by ID
             *
             * @param petId
             * @return successful operation
             */
            get("/pet/{petId}") {
                val petId = call.getPath<Long>("petId")

                call.respond(0)
            }

            delete("/store/order") {
                call.respond(HttpStatusCode.OK)
            }
        }
        "#);
    }

    #[test]
    fn test_unresolved_response_leaves_balanced_output() {
        let model = SwaggerModel::new().with_operation(
            Operation::new(HttpMethod::Get, "/pets", "listPets")
                .with_response(TypeDef::array(TypeDef::named("Pet"))),
        );
        let mut ind = Indenter::new();
        let err = emit_routes(&mut ind, &model).unwrap_err();

        assert!(matches!(err, Error::SchemaReference { ref type_name } if type_name == "Pet"));
        assert_eq!(ind.level(), 0);
        assert!(ind.build().ends_with("    }\n}\n"));
    }
}
