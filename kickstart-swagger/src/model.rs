//! Structural description of an API.

use std::fmt;

use indexmap::IndexMap;
use kickstart_codegen::{Error, Result};
use kickstart_core::quote;

/// Scalar schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Long,
    Float,
    Double,
    String,
    Boolean,
    Date,
    DateTime,
    Binary,
}

impl Primitive {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Primitive::Int | Primitive::Long | Primitive::Float | Primitive::Double
        )
    }
}

/// Type of a property, parameter, body or response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDef {
    Primitive(Primitive),
    Array(Box<TypeDef>),
    /// String-keyed map with the given value type
    Map(Box<TypeDef>),
    /// Reference to an entry of [`SwaggerModel::definitions`]
    Named(String),
    /// Free-form value
    Any,
    /// No content
    Void,
}

impl TypeDef {
    pub fn string() -> Self {
        TypeDef::Primitive(Primitive::String)
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeDef::Named(name.into())
    }

    pub fn array(item: TypeDef) -> Self {
        TypeDef::Array(Box::new(item))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDef::Void)
    }

    /// Every definition name this type refers to.
    pub fn references(&self) -> Vec<&str> {
        match self {
            TypeDef::Named(name) => vec![name.as_str()],
            TypeDef::Array(item) | TypeDef::Map(item) => item.references(),
            TypeDef::Primitive(_) | TypeDef::Any | TypeDef::Void => Vec::new(),
        }
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDef::Primitive(p) => write!(f, "{:?}", p),
            TypeDef::Array(item) => write!(f, "[{}]", item),
            TypeDef::Map(value) => write!(f, "{{string: {}}}", value),
            TypeDef::Named(name) => f.write_str(name),
            TypeDef::Any => f.write_str("any"),
            TypeDef::Void => f.write_str("void"),
        }
    }
}

/// Validation constraints declared on a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: bool,
    pub exclusive_maximum: bool,
    pub pattern: Option<String>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

impl Rule {
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.minimum.is_none()
            && self.maximum.is_none()
            && self.pattern.is_none()
            && self.min_items.is_none()
            && self.max_items.is_none()
    }

    /// `None` when no constraint is set.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    /// Render as a Kotlin boolean expression over `subject`.
    ///
    /// ```
    /// use kickstart_swagger::{Primitive, Rule, TypeDef};
    ///
    /// let rule = Rule { minimum: Some(1.0), maximum: Some(10.0), ..Default::default() };
    /// let ty = TypeDef::Primitive(Primitive::Long);
    /// assert_eq!(rule.to_kotlin("petId", &ty), "petId >= 1L && petId <= 10L");
    /// ```
    pub fn to_kotlin(&self, subject: &str, ty: &TypeDef) -> String {
        let mut conditions = Vec::new();
        if let Some(min) = self.min_length {
            conditions.push(format!("{}.length >= {}", subject, min));
        }
        if let Some(max) = self.max_length {
            conditions.push(format!("{}.length <= {}", subject, max));
        }
        if let Some(pattern) = &self.pattern {
            conditions.push(format!("{}.matches(Regex({}))", subject, quote(pattern)));
        }
        if let Some(min) = self.minimum {
            let op = if self.exclusive_minimum { ">" } else { ">=" };
            conditions.push(format!("{} {} {}", subject, op, number_literal(min, ty)));
        }
        if let Some(max) = self.maximum {
            let op = if self.exclusive_maximum { "<" } else { "<=" };
            conditions.push(format!("{} {} {}", subject, op, number_literal(max, ty)));
        }
        if let Some(min) = self.min_items {
            conditions.push(format!("{}.size >= {}", subject, min));
        }
        if let Some(max) = self.max_items {
            conditions.push(format!("{}.size <= {}", subject, max));
        }
        if conditions.is_empty() {
            "true".to_string()
        } else {
            conditions.join(" && ")
        }
    }
}

fn number_literal(value: f64, ty: &TypeDef) -> String {
    let integral = value.fract() == 0.0;
    match ty {
        TypeDef::Primitive(Primitive::Int) if integral => format!("{}", value as i64),
        TypeDef::Primitive(Primitive::Long) if integral => format!("{}L", value as i64),
        TypeDef::Primitive(Primitive::Float) if integral => format!("{:.1}f", value),
        TypeDef::Primitive(Primitive::Float) => format!("{}f", value),
        _ if integral => format!("{:.1}", value),
        _ => format!("{}", value),
    }
}

/// One property of a definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: TypeDef,
    pub required: bool,
    pub rule: Option<Rule>,
    pub description: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeDef, required: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            required,
            rule: None,
            description: None,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule.non_empty();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub description: Option<String>,
    /// Properties in declaration order
    pub properties: IndexMap<String, Property>,
    /// Generated for an inline schema rather than declared by name
    pub synthetic: bool,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            properties: IndexMap::new(),
            synthetic: false,
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Properties carrying a validation rule, in declaration order.
    pub fn ruled_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values().filter(|p| p.rule.is_some())
    }
}

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Lowercase name, also the name of the routing builder function.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a request parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Form,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub ty: TypeDef,
    pub rule: Option<Rule>,
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation, ty: TypeDef) -> Self {
        Self {
            name: name.into(),
            location,
            // Path parameters are always required
            required: location == ParameterLocation::Path,
            ty,
            rule: None,
            description: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required || self.location == ParameterLocation::Path;
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule.non_empty();
        self
    }
}

/// A declared non-success response.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    pub description: String,
    pub ty: Option<TypeDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<TypeDef>,
    /// Type of the first success response, [`TypeDef::Void`] if it has no content
    pub response_type: TypeDef,
    pub response_description: Option<String>,
    pub error_responses: Vec<ErrorResponse>,
}

impl Operation {
    pub fn new(method: HttpMethod, path: impl Into<String>, operation_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            operation_id: operation_id.into(),
            summary: None,
            description: None,
            tags: Vec::new(),
            parameters: Vec::new(),
            request_body: None,
            response_type: TypeDef::Void,
            response_description: None,
            error_responses: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_body(mut self, ty: TypeDef) -> Self {
        self.request_body = Some(ty);
        self
    }

    pub fn with_response(mut self, ty: TypeDef) -> Self {
        self.response_type = ty;
        self
    }

    pub fn with_error(mut self, status: u16, description: impl Into<String>) -> Self {
        self.error_responses.push(ErrorResponse {
            status,
            description: description.into(),
            ty: None,
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

/// Type definitions and operations of an API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwaggerModel {
    pub info: ApiInfo,
    pub definitions: IndexMap<String, Definition>,
    pub operations: Vec<Operation>,
}

impl SwaggerModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definitions.insert(definition.name.clone(), definition);
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Fail on the first type name that is neither a primitive nor declared.
    pub fn check_references(&self) -> Result<()> {
        let properties = self
            .definitions
            .values()
            .flat_map(|def| def.properties.values().map(|p| &p.ty));
        let operations = self.operations.iter().flat_map(|op| {
            op.parameters
                .iter()
                .map(|p| &p.ty)
                .chain(op.request_body.iter())
                .chain(std::iter::once(&op.response_type))
                .chain(op.error_responses.iter().filter_map(|e| e.ty.as_ref()))
        });
        for ty in properties.chain(operations) {
            self.resolve_all(ty)?;
        }
        Ok(())
    }

    /// Fail if `ty` refers to an undeclared definition.
    pub fn resolve_all(&self, ty: &TypeDef) -> Result<()> {
        match ty.references().into_iter().find(|name| !self.definitions.contains_key(*name)) {
            Some(missing) => Err(Error::SchemaReference {
                type_name: missing.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long() -> TypeDef {
        TypeDef::Primitive(Primitive::Long)
    }

    #[test]
    fn test_rule_string() {
        let rule = Rule {
            min_length: Some(1),
            max_length: Some(64),
            pattern: Some("^[a-z]+$".to_string()),
            ..Default::default()
        };
        assert_eq!(
            rule.to_kotlin("it", &TypeDef::string()),
            r#"it.length >= 1 && it.length <= 64 && it.matches(Regex("^[a-z]+\$"))"#
        );
    }

    #[test]
    fn test_rule_pattern_is_a_kotlin_literal() {
        let rule = Rule {
            pattern: Some(r"^\d{3}-\d+$".to_string()),
            ..Default::default()
        };
        // Backslashes are doubled and `$` cannot start a string template
        assert_eq!(
            rule.to_kotlin("code", &TypeDef::string()),
            r#"code.matches(Regex("^\\d{3}-\\d+\$"))"#
        );
    }

    #[test]
    fn test_rule_numbers() {
        let rule = Rule {
            minimum: Some(0.0),
            maximum: Some(1.5),
            exclusive_maximum: true,
            ..Default::default()
        };
        assert_eq!(
            rule.to_kotlin("x", &TypeDef::Primitive(Primitive::Double)),
            "x >= 0.0 && x < 1.5"
        );
        assert_eq!(
            rule.to_kotlin("x", &TypeDef::Primitive(Primitive::Float)),
            "x >= 0.0f && x < 1.5f"
        );

        let rule = Rule {
            minimum: Some(5.0),
            ..Default::default()
        };
        assert_eq!(rule.to_kotlin("n", &TypeDef::Primitive(Primitive::Int)), "n >= 5");
        assert_eq!(rule.to_kotlin("n", &long()), "n >= 5L");
    }

    #[test]
    fn test_rule_items_and_empty() {
        let rule = Rule {
            min_items: Some(1),
            ..Default::default()
        };
        assert_eq!(rule.to_kotlin("tags", &TypeDef::array(TypeDef::string())), "tags.size >= 1");
        assert!(Rule::default().non_empty().is_none());
        assert_eq!(Rule::default().to_kotlin("x", &long()), "true");
    }

    #[test]
    fn test_path_parameters_are_required() {
        let param = Parameter::new("petId", ParameterLocation::Path, long()).required(false);
        assert!(param.required);
        let param = Parameter::new("status", ParameterLocation::Query, TypeDef::string());
        assert!(!param.required);
    }

    #[test]
    fn test_check_references() {
        let model = SwaggerModel::new()
            .with_definition(
                Definition::new("Pet").with_property(Property::new("tag", TypeDef::named("Tag"), false)),
            )
            .with_definition(Definition::new("Tag"));
        assert!(model.check_references().is_ok());

        let model = SwaggerModel::new().with_operation(
            Operation::new(HttpMethod::Get, "/pets", "listPets")
                .with_response(TypeDef::array(TypeDef::named("Pet"))),
        );
        let err = model.check_references().unwrap_err();
        assert!(matches!(err, Error::SchemaReference { ref type_name } if type_name == "Pet"));
    }
}
