//! Type mapping between schema types and Kotlin type strings.

use kickstart_codegen::Result;

use crate::{Primitive, SwaggerModel, TypeDef};

/// Trait for mapping schema types to language-specific type strings.
pub trait TypeMapper {
    /// Map a primitive schema type
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Type used for free-form values
    fn map_any(&self) -> &'static str;

    /// Map any schema type. Named types must exist in `model`.
    fn map_type(&self, ty: &TypeDef, model: &SwaggerModel) -> Result<String> {
        model.resolve_all(ty)?;
        Ok(match ty {
            TypeDef::Primitive(p) => self.map_primitive(*p).to_string(),
            TypeDef::Array(item) => format!("List<{}>", self.map_type(item, model)?),
            TypeDef::Map(value) => format!("Map<String, {}>", self.map_type(value, model)?),
            TypeDef::Named(name) => name.clone(),
            TypeDef::Any => self.map_any().to_string(),
            TypeDef::Void => "Unit".to_string(),
        })
    }

    /// Map a type that may be absent
    fn map_optional_type(&self, ty: &TypeDef, model: &SwaggerModel) -> Result<String> {
        Ok(format!("{}?", self.map_type(ty, model)?))
    }
}

/// Kotlin type mapper for annotated serializers: every primitive has a
/// dedicated type.
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Int => "Int",
            Primitive::Long => "Long",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
            Primitive::String => "String",
            Primitive::Boolean => "Boolean",
            Primitive::Date | Primitive::DateTime => "Date",
            Primitive::Binary => "ByteArray",
        }
    }

    fn map_any(&self) -> &'static str {
        "JsonElement"
    }
}

/// Kotlin type mapper for hand-rolled serializers: types without a direct JSON
/// representation fall back to the `Any` placeholder.
pub struct PlaceholderTypeMapper;

impl TypeMapper for PlaceholderTypeMapper {
    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Date | Primitive::DateTime | Primitive::Binary => "Any",
            other => KotlinTypeMapper.map_primitive(other),
        }
    }

    fn map_any(&self) -> &'static str {
        "Any"
    }
}
