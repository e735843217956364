//! Swagger/OpenAPI driven code emission for the kickstart project generator.
//!
//! # Module Organization
//!
//! - `model` - Structural API model (definitions, operations, validation rules)
//! - `parse` - Swagger 2.0 and OpenAPI 3.x document loading (JSON and YAML)
//! - `types` - Mapping of schema types to Kotlin types
//! - `dto` - Data class emission strategies
//! - `guard` - Per-operation request handling scaffolding
//! - `routes` - Routing function emission
//! - `untyped` - Sample response payload tree
//!
//! # Example
//!
//! ```
//! use kickstart_codegen::builder::Indenter;
//! use kickstart_swagger::{DtoEmitter, DtoStyle, SwaggerModel};
//!
//! let model = SwaggerModel::from_yaml_str(
//!     r#"
//! swagger: "2.0"
//! info: { title: Users, version: "1" }
//! paths: {}
//! definitions:
//!   User:
//!     type: object
//!     required: [id]
//!     properties:
//!       id: { type: string }
//! "#,
//! )
//! .unwrap();
//!
//! let mut ind = Indenter::new();
//! DtoStyle::Annotated.emitter().emit_data_types(&mut ind, &model).unwrap();
//! assert!(ind.build().contains("data class User(\n    val id: String\n) {"));
//! ```

mod doc;
mod dto;
mod error;
mod guard;
mod model;
mod parse;
mod routes;
mod types;
mod untyped;

pub use doc::{drop_double_empty, kdoc, operation_doc};
pub use dto::{AnnotatedDtos, DtoEmitter, DtoStyle, HandRolledDtos};
pub use error::{ParseError, Result};
pub use guard::emit_operation_guard;
pub use model::{
    ApiInfo, Definition, ErrorResponse, HttpMethod, Operation, Parameter, ParameterLocation,
    Primitive, Property, Rule, SwaggerModel, TypeDef,
};
pub use routes::{ROUTE_IMPORTS, emit_routes};
pub use types::{KotlinTypeMapper, PlaceholderTypeMapper, TypeMapper};
pub use untyped::Untyped;
