//! Loading Swagger 2.0 and OpenAPI 3.x documents into a [`SwaggerModel`].

use std::path::Path;

use indexmap::IndexMap;
use kickstart_core::{to_camel_case, to_pascal_case};
use serde::Deserialize;
use tracing::debug;

use crate::{
    ApiInfo, Definition, ErrorResponse, HttpMethod, Operation, Parameter, ParameterLocation,
    ParseError, Primitive, Property, Result, Rule, SwaggerModel, TypeDef,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    swagger: Option<String>,
    openapi: Option<String>,
    #[serde(default)]
    info: RawInfo,
    #[serde(default)]
    paths: IndexMap<String, RawPathItem>,
    #[serde(default)]
    definitions: IndexMap<String, RawSchema>,
    #[serde(default)]
    parameters: IndexMap<String, RawParameter>,
    #[serde(default)]
    components: RawComponents,
}

#[derive(Debug, Default, Deserialize)]
struct RawInfo {
    #[serde(default)]
    title: String,
    #[serde(default)]
    version: String,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawComponents {
    #[serde(default)]
    schemas: IndexMap<String, RawSchema>,
    #[serde(default)]
    parameters: IndexMap<String, RawParameter>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPathItem {
    #[serde(default)]
    parameters: Vec<RawParameter>,
    get: Option<RawOperation>,
    put: Option<RawOperation>,
    post: Option<RawOperation>,
    delete: Option<RawOperation>,
    options: Option<RawOperation>,
    head: Option<RawOperation>,
    patch: Option<RawOperation>,
}

impl RawPathItem {
    fn operations(&self) -> impl Iterator<Item = (HttpMethod, &RawOperation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Options, &self.options),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Patch, &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    operation_id: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
    request_body: Option<RawRequestBody>,
    #[serde(default)]
    responses: IndexMap<String, RawResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawParameter {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(rename = "in", default)]
    location: String,
    #[serde(default)]
    required: bool,
    description: Option<String>,
    schema: Option<RawSchema>,
    /// Swagger 2 declares non-body parameter types inline.
    #[serde(flatten)]
    inline: RawSchema,
}

#[derive(Debug, Default, Deserialize)]
struct RawRequestBody {
    #[serde(default)]
    content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    description: String,
    schema: Option<RawSchema>,
    #[serde(default)]
    content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMediaType {
    schema: Option<RawSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    /// A type name, or a list of them (`["string", "null"]`)
    #[serde(rename = "type")]
    ty: Option<serde_json::Value>,
    format: Option<String>,
    items: Option<Box<RawSchema>>,
    #[serde(default)]
    properties: IndexMap<String, RawSchema>,
    #[serde(default)]
    required: Vec<String>,
    additional_properties: Option<RawAdditional>,
    description: Option<String>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    exclusive_minimum: Option<serde_json::Value>,
    exclusive_maximum: Option<serde_json::Value>,
    pattern: Option<String>,
    min_items: Option<u64>,
    max_items: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAdditional {
    Allowed(bool),
    Schema(Box<RawSchema>),
}

impl RawSchema {
    fn type_name(&self) -> Option<&str> {
        match self.ty.as_ref()? {
            serde_json::Value::String(name) => Some(name),
            serde_json::Value::Array(names) => names
                .iter()
                .filter_map(serde_json::Value::as_str)
                .find(|name| *name != "null"),
            _ => None,
        }
    }

    /// An object with declared properties, emitted as a class of its own.
    fn is_object(&self) -> bool {
        self.reference.is_none()
            && matches!(self.type_name(), Some("object") | None)
            && !self.properties.is_empty()
    }

    fn rule(&self) -> Option<Rule> {
        // 3.1 uses numeric exclusive bounds
        let (minimum, exclusive_minimum) = bound(self.minimum, self.exclusive_minimum.as_ref());
        let (maximum, exclusive_maximum) = bound(self.maximum, self.exclusive_maximum.as_ref());
        Rule {
            min_length: self.min_length,
            max_length: self.max_length,
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
            pattern: self.pattern.clone(),
            min_items: self.min_items,
            max_items: self.max_items,
        }
        .non_empty()
    }
}

fn bound(value: Option<f64>, exclusive: Option<&serde_json::Value>) -> (Option<f64>, bool) {
    match exclusive {
        Some(serde_json::Value::Bool(flag)) => (value, *flag),
        Some(other) => match other.as_f64() {
            Some(limit) => (Some(limit), true),
            None => (value, false),
        },
        None => (value, false),
    }
}

impl SwaggerModel {
    /// Load a document, picking the syntax from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ParseError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let filename = path.display().to_string();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str_with_filename(&content, &filename),
            _ => Self::from_yaml_str_with_filename(&content, &filename),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_str_with_filename(content, "swagger.json")
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_yaml_str_with_filename(content, "swagger.yaml")
    }

    /// Parse JSON with a custom filename for error reporting
    pub fn from_json_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content)
            .map_err(|e| ParseError::json(e, content, filename))?;
        Self::from_raw(raw)
    }

    /// Parse YAML with a custom filename for error reporting
    pub fn from_yaml_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawDocument = serde_yaml::from_str(content)
            .map_err(|e| ParseError::yaml(e, content, filename))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let openapi3 = match (&raw.swagger, &raw.openapi) {
            (Some(version), _) if version.starts_with("2.") => false,
            (_, Some(version)) if version.starts_with("3.") => true,
            (Some(version), _) | (_, Some(version)) => {
                return Err(ParseError::unsupported(format!("version '{}'", version)));
            }
            (None, None) => {
                return Err(ParseError::unsupported(
                    "missing 'swagger' or 'openapi' version field",
                ));
            }
        };

        let (schemas, shared_parameters) = if openapi3 {
            (&raw.components.schemas, &raw.components.parameters)
        } else {
            (&raw.definitions, &raw.parameters)
        };

        let mut converter = Converter::new(schemas);
        // Declared names win over synthesized ones
        for (name, _) in schemas.iter().filter(|(_, schema)| schema.is_object()) {
            converter
                .definitions
                .insert(name.clone(), Definition::new(name.clone()));
        }
        for (name, schema) in schemas.iter().filter(|(_, schema)| schema.is_object()) {
            converter.define(name, schema, false);
        }

        let mut operations = Vec::new();
        for (path, item) in &raw.paths {
            for (method, op) in item.operations() {
                operations.push(converter.operation(path, method, op, item, shared_parameters)?);
            }
        }

        debug!(
            definitions = converter.definitions.len(),
            operations = operations.len(),
            "loaded API document"
        );
        Ok(SwaggerModel {
            info: ApiInfo {
                title: raw.info.title,
                version: raw.info.version,
                description: raw.info.description,
            },
            definitions: converter.definitions,
            operations,
        })
    }
}

struct Converter<'a> {
    /// Schemas declared under `definitions` / `components.schemas`
    schemas: &'a IndexMap<String, RawSchema>,
    definitions: IndexMap<String, Definition>,
    /// Resolved types of declared non-object schemas
    aliases: IndexMap<String, TypeDef>,
    resolving: Vec<String>,
}

impl<'a> Converter<'a> {
    fn new(schemas: &'a IndexMap<String, RawSchema>) -> Self {
        Self {
            schemas,
            definitions: IndexMap::new(),
            aliases: IndexMap::new(),
            resolving: Vec::new(),
        }
    }

    /// Register an object schema as a definition.
    fn define(&mut self, name: &str, schema: &RawSchema, synthetic: bool) -> String {
        let name = if synthetic {
            let name = self.unique_name(name);
            // Reserve the name before nested schemas are synthesized
            self.definitions
                .insert(name.clone(), Definition::new(name.clone()));
            name
        } else {
            name.to_string()
        };

        let mut definition = Definition::new(name.clone());
        definition.description = schema.description.clone();
        definition.synthetic = synthetic;
        for (prop_name, prop_schema) in &schema.properties {
            let context = format!("{}{}", name, to_pascal_case(prop_name));
            let property = Property {
                name: prop_name.clone(),
                ty: self.type_of(prop_schema, &context),
                required: schema.required.contains(prop_name),
                rule: self.rule_of(prop_schema),
                description: prop_schema.description.clone(),
            };
            definition.properties.insert(prop_name.clone(), property);
        }
        self.definitions.insert(name.clone(), definition);
        name
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.definitions.contains_key(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}{}", base, n))
            .find(|candidate| !self.definitions.contains_key(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Map a schema to a type, naming inline objects after `context`.
    fn type_of(&mut self, schema: &RawSchema, context: &str) -> TypeDef {
        if let Some(reference) = &schema.reference {
            return self.referenced(reference_name(reference));
        }
        match schema.type_name() {
            Some("string") => TypeDef::Primitive(match schema.format.as_deref() {
                Some("date") => Primitive::Date,
                Some("date-time") => Primitive::DateTime,
                Some("binary") => Primitive::Binary,
                _ => Primitive::String,
            }),
            Some("integer") => TypeDef::Primitive(match schema.format.as_deref() {
                Some("int64") => Primitive::Long,
                _ => Primitive::Int,
            }),
            Some("number") => TypeDef::Primitive(match schema.format.as_deref() {
                Some("float") => Primitive::Float,
                _ => Primitive::Double,
            }),
            Some("boolean") => TypeDef::Primitive(Primitive::Boolean),
            Some("file") => TypeDef::Primitive(Primitive::Binary),
            Some("array") => {
                let item = match &schema.items {
                    Some(items) => self.type_of(items, &format!("{}Item", context)),
                    None => TypeDef::Any,
                };
                TypeDef::Array(Box::new(item))
            }
            Some("object") | None if schema.is_object() => {
                TypeDef::Named(self.define(context, schema, true))
            }
            Some("object") | None => match &schema.additional_properties {
                Some(RawAdditional::Schema(value)) => {
                    TypeDef::Map(Box::new(self.type_of(value, &format!("{}Value", context))))
                }
                Some(RawAdditional::Allowed(true)) => TypeDef::Map(Box::new(TypeDef::Any)),
                Some(RawAdditional::Allowed(false)) | None => TypeDef::Any,
            },
            Some(_) => TypeDef::Any,
        }
    }

    /// Type of a `$ref`. Declared objects stay named, any other declared
    /// schema resolves to the type it aliases.
    fn referenced(&mut self, name: &str) -> TypeDef {
        if let Some(ty) = self.aliases.get(name) {
            return ty.clone();
        }
        let schemas = self.schemas;
        let Some(schema) = schemas.get(name).filter(|schema| !schema.is_object()) else {
            return TypeDef::Named(name.to_string());
        };
        // A cycle of aliases never reaches a concrete type
        if self.resolving.iter().any(|pending| pending == name) {
            return TypeDef::Named(name.to_string());
        }

        self.resolving.push(name.to_string());
        let ty = self.type_of(schema, name);
        self.resolving.pop();
        self.aliases.insert(name.to_string(), ty.clone());
        ty
    }

    /// Validation rule of a schema, falling back to the aliased schema's.
    fn rule_of(&self, schema: &RawSchema) -> Option<Rule> {
        let aliased = schema
            .reference
            .as_deref()
            .and_then(|reference| self.schemas.get(reference_name(reference)))
            .filter(|target| !target.is_object());
        match aliased {
            Some(target) => schema.rule().or_else(|| target.rule()),
            None => schema.rule(),
        }
    }

    fn operation(
        &mut self,
        path: &str,
        method: HttpMethod,
        raw: &RawOperation,
        item: &RawPathItem,
        shared: &IndexMap<String, RawParameter>,
    ) -> Result<Operation> {
        let operation_id = raw.operation_id.clone().unwrap_or_else(|| {
            let cleaned: String = path.chars().filter(|c| !matches!(c, '{' | '}')).collect();
            to_camel_case(&format!("{} {}", method, cleaned))
        });
        let context = to_pascal_case(&operation_id);

        // Operation level parameters override path level ones
        let mut raw_params: IndexMap<(String, String), RawParameter> = IndexMap::new();
        for param in item.parameters.iter().chain(&raw.parameters) {
            let param = resolve_parameter(param, shared)?;
            raw_params.insert((param.name.clone(), param.location.clone()), param);
        }

        let mut parameters = Vec::new();
        let mut request_body = None;
        for param in raw_params.values() {
            let location = match param.location.as_str() {
                "path" => ParameterLocation::Path,
                "query" => ParameterLocation::Query,
                "header" => ParameterLocation::Header,
                "cookie" => ParameterLocation::Cookie,
                "formData" => ParameterLocation::Form,
                "body" => {
                    let schema = param.schema.clone().unwrap_or_default();
                    request_body = Some(self.type_of(&schema, &format!("{}Request", context)));
                    continue;
                }
                _ => continue,
            };
            let schema = param.schema.as_ref().unwrap_or(&param.inline);
            let context = format!("{}{}", context, to_pascal_case(&param.name));
            let mut parameter = Parameter::new(&param.name, location, self.type_of(schema, &context))
                .required(param.required);
            parameter.rule = self.rule_of(schema);
            parameter.description = param.description.clone();
            parameters.push(parameter);
        }

        if let Some(schema) = raw
            .request_body
            .as_ref()
            .and_then(|body| preferred_schema(&body.content))
        {
            request_body = Some(self.type_of(schema, &format!("{}Request", context)));
        }

        let mut operation = Operation::new(method, path, operation_id.clone());
        operation.summary = raw.summary.clone();
        operation.description = raw.description.clone();
        operation.tags = raw.tags.clone();
        operation.parameters = parameters;
        operation.request_body = request_body;

        let mut success = false;
        for (code, response) in &raw.responses {
            let Ok(status) = code.parse::<u16>() else {
                continue;
            };
            let schema = response
                .schema
                .as_ref()
                .or_else(|| preferred_schema(&response.content));
            if (200..300).contains(&status) {
                if !success {
                    success = true;
                    operation.response_type = match schema {
                        Some(schema) => self.type_of(schema, &format!("{}Response", context)),
                        None => TypeDef::Void,
                    };
                    operation.response_description = Some(response.description.clone())
                        .filter(|description| !description.is_empty());
                }
            } else {
                let ty = schema.map(|schema| self.type_of(schema, &format!("{}Error{}", context, status)));
                operation.error_responses.push(ErrorResponse {
                    status,
                    description: response.description.clone(),
                    ty,
                });
            }
        }
        Ok(operation)
    }
}

/// Last segment of a JSON pointer (`#/definitions/Pet` -> `Pet`).
fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

fn resolve_parameter(
    param: &RawParameter,
    shared: &IndexMap<String, RawParameter>,
) -> Result<RawParameter> {
    let Some(reference) = param.reference.as_deref() else {
        return Ok(param.clone());
    };
    shared
        .get(reference_name(reference))
        .cloned()
        .ok_or_else(|| {
            Box::new(ParseError::UnresolvedReference {
                reference: reference.to_string(),
            })
        })
}

/// Schema of the JSON media type, or of the first one declared.
fn preferred_schema(content: &IndexMap<String, RawMediaType>) -> Option<&RawSchema> {
    content
        .get("application/json")
        .or_else(|| content.values().next())
        .and_then(|media| media.schema.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWAGGER2: &str = r##"{
  "swagger": "2.0",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "paths": {
    "/pet/{petId}": {
      "get": {
        "operationId": "getPetById",
        "parameters": [
          { "name": "petId", "in": "path", "required": true, "type": "integer", "format": "int64", "minimum": 1 }
        ],
        "responses": {
          "200": { "description": "successful operation", "schema": { "$ref": "#/definitions/Pet" } },
          "404": { "description": "Pet not found" }
        }
      }
    },
    "/pet": {
      "post": {
        "parameters": [
          { "in": "body", "name": "body", "required": true, "schema": { "$ref": "#/definitions/Pet" } }
        ],
        "responses": { "405": { "description": "Invalid input" } }
      }
    }
  },
  "definitions": {
    "Pet": {
      "type": "object",
      "required": ["name"],
      "properties": {
        "id": { "type": "integer", "format": "int64" },
        "name": { "type": "string", "minLength": 1 },
        "tags": { "type": "array", "items": { "type": "string" } },
        "owner": { "type": "object", "properties": { "email": { "type": "string" } } }
      }
    }
  }
}"##;

    #[test]
    fn test_swagger2_definitions() {
        let model = SwaggerModel::from_json_str(SWAGGER2).unwrap();
        let pet = model.definition("Pet").unwrap();

        assert!(!pet.synthetic);
        assert_eq!(pet.properties.keys().collect::<Vec<_>>(), ["id", "name", "tags", "owner"]);
        assert_eq!(pet.properties["id"].ty, TypeDef::Primitive(Primitive::Long));
        assert!(pet.properties["name"].required);
        assert!(!pet.properties["id"].required);
        assert_eq!(pet.properties["name"].rule.as_ref().and_then(|r| r.min_length), Some(1));
        assert_eq!(pet.properties["tags"].ty, TypeDef::array(TypeDef::string()));
        assert_eq!(pet.properties["owner"].ty, TypeDef::named("PetOwner"));
        assert!(model.definition("PetOwner").unwrap().synthetic);
        assert!(model.check_references().is_ok());
    }

    #[test]
    fn test_swagger2_operations() {
        let model = SwaggerModel::from_json_str(SWAGGER2).unwrap();
        let get = &model.operations[0];

        assert_eq!(get.operation_id, "getPetById");
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.response_type, TypeDef::named("Pet"));
        assert_eq!(get.response_description.as_deref(), Some("successful operation"));
        assert_eq!(get.parameters[0].location, ParameterLocation::Path);
        assert_eq!(get.parameters[0].rule.as_ref().and_then(|r| r.minimum), Some(1.0));
        assert_eq!(get.error_responses[0].status, 404);

        let post = &model.operations[1];
        assert_eq!(post.operation_id, "postPet");
        assert_eq!(post.request_body, Some(TypeDef::named("Pet")));
        assert!(post.parameters.is_empty());
        assert!(post.response_type.is_void());
    }

    #[test]
    fn test_openapi3_yaml() {
        let yaml = r#"
openapi: 3.0.0
info:
  title: Auth
  version: "1"
paths:
  /login:
    post:
      operationId: login
      requestBody:
        content:
          application/json:
            schema:
              type: object
              required: [username, password]
              properties:
                username: { type: string }
                password: { type: string }
      responses:
        "200":
          description: token issued
          content:
            application/json:
              schema:
                type: object
                properties:
                  token: { type: string }
        "401":
          description: bad credentials
components:
  schemas:
    Counts:
      type: object
      additionalProperties:
        type: integer
"#;
        let model = SwaggerModel::from_yaml_str(yaml).unwrap();
        let login = &model.operations[0];

        assert_eq!(login.request_body, Some(TypeDef::named("LoginRequest")));
        assert_eq!(login.response_type, TypeDef::named("LoginResponse"));
        assert!(model.definition("LoginRequest").unwrap().synthetic);
        assert_eq!(login.error_responses[0].status, 401);
        assert!(model.definition("Counts").is_none());
        assert!(model.check_references().is_ok());
    }

    #[test]
    fn test_declared_aliases_resolve_to_their_type() {
        let yaml = r##"
openapi: 3.0.0
info: { title: Shop, version: "1" }
paths:
  /pets:
    get:
      operationId: listPets
      parameters:
        - name: status
          in: query
          schema: { $ref: "#/components/schemas/Status" }
      responses:
        "200":
          description: all pets
          content:
            application/json:
              schema: { $ref: "#/components/schemas/Pets" }
components:
  schemas:
    Pet:
      type: object
      properties:
        name: { type: string }
        status: { $ref: "#/components/schemas/Status" }
        counts: { $ref: "#/components/schemas/Counts" }
        labels: { $ref: "#/components/schemas/Labels" }
    Pets:
      type: array
      items: { $ref: "#/components/schemas/Pet" }
    Status:
      type: string
      enum: [available, sold]
      minLength: 1
    Counts:
      type: object
      additionalProperties: { type: integer }
    Labels:
      type: object
      additionalProperties: true
"##;
        let model = SwaggerModel::from_yaml_str(yaml).unwrap();

        assert_eq!(model.definitions.keys().collect::<Vec<_>>(), ["Pet"]);
        let list = &model.operations[0];
        assert_eq!(list.response_type, TypeDef::array(TypeDef::named("Pet")));
        assert_eq!(list.parameters[0].ty, TypeDef::string());
        assert_eq!(list.parameters[0].rule.as_ref().and_then(|r| r.min_length), Some(1));

        let pet = model.definition("Pet").unwrap();
        assert_eq!(pet.properties["status"].ty, TypeDef::string());
        assert_eq!(pet.properties["status"].rule.as_ref().and_then(|r| r.min_length), Some(1));
        assert_eq!(
            pet.properties["counts"].ty,
            TypeDef::Map(Box::new(TypeDef::Primitive(Primitive::Int)))
        );
        assert_eq!(pet.properties["labels"].ty, TypeDef::Map(Box::new(TypeDef::Any)));
        assert!(model.check_references().is_ok());
    }

    #[test]
    fn test_alias_cycle_fails_reference_check() {
        let yaml = r##"
openapi: 3.0.0
info: { title: Loop, version: "1" }
paths: {}
components:
  schemas:
    Holder:
      type: object
      properties:
        value: { $ref: "#/components/schemas/A" }
    A: { $ref: "#/components/schemas/B" }
    B: { $ref: "#/components/schemas/A" }
"##;
        let model = SwaggerModel::from_yaml_str(yaml).unwrap();
        assert!(model.check_references().is_err());
    }

    #[test]
    fn test_unresolved_parameter_reference() {
        let json = r##"{
  "swagger": "2.0",
  "info": { "title": "Pets", "version": "1" },
  "paths": {
    "/pets": {
      "get": {
        "parameters": [{ "$ref": "#/parameters/limit" }],
        "responses": { "200": { "description": "ok" } }
      }
    }
  }
}"##;
        let err = SwaggerModel::from_json_str(json).unwrap_err();
        assert!(matches!(
            *err,
            ParseError::UnresolvedReference { ref reference } if reference == "#/parameters/limit"
        ));
    }

    #[test]
    fn test_shared_parameter_reference() {
        let json = r##"{
  "swagger": "2.0",
  "info": { "title": "Pets", "version": "1" },
  "parameters": {
    "limit": { "name": "limit", "in": "query", "type": "integer", "maximum": 100 }
  },
  "paths": {
    "/pets": {
      "get": {
        "parameters": [{ "$ref": "#/parameters/limit" }],
        "responses": { "200": { "description": "ok" } }
      }
    }
  }
}"##;
        let model = SwaggerModel::from_json_str(json).unwrap();
        let limit = &model.operations[0].parameters[0];
        assert_eq!(limit.name, "limit");
        assert_eq!(limit.location, ParameterLocation::Query);
        assert_eq!(limit.rule.as_ref().and_then(|r| r.maximum), Some(100.0));
    }

    #[test]
    fn test_unsupported_versions() {
        let err = SwaggerModel::from_json_str(r#"{"swagger": "1.2"}"#).unwrap_err();
        assert!(matches!(*err, ParseError::UnsupportedDocument { .. }));

        let err = SwaggerModel::from_json_str(r#"{"info": {}}"#).unwrap_err();
        assert!(matches!(*err, ParseError::UnsupportedDocument { .. }));
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = SwaggerModel::from_json_str("{\n  \"swagger\": 2.0,,\n}").unwrap_err();
        match *err {
            ParseError::Json { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
