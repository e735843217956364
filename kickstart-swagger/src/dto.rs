//! Data class emission for schema definitions.

use std::{fmt, str::FromStr};

use kickstart_codegen::{Result, builder::Indenter};
use kickstart_core::{kotlin_ident, quote};
use serde::{Deserialize, Serialize};

use crate::{
    Definition, KotlinTypeMapper, PlaceholderTypeMapper, Primitive, Property, SwaggerModel,
    TypeDef, TypeMapper, doc::operation_doc,
};

/// Strategy turning definitions into Kotlin data classes.
pub trait DtoEmitter {
    fn name(&self) -> &'static str;

    /// Imports the emitted declarations rely on.
    fn imports(&self) -> &'static [&'static str];

    fn emit_definition(
        &self,
        ind: &mut Indenter,
        definition: &Definition,
        model: &SwaggerModel,
    ) -> Result<()>;

    /// Emit every definition of `model` in declaration order.
    fn emit_data_types(&self, ind: &mut Indenter, model: &SwaggerModel) -> Result<()> {
        for definition in model.definitions.values() {
            ind.try_separator(|ind| self.emit_definition(ind, definition, model))?;
        }
        Ok(())
    }
}

/// Data classes serialized through kotlinx.serialization annotations.
pub struct AnnotatedDtos;

/// Data classes with field-by-field `toJson`/`fromJson` over plain maps.
pub struct HandRolledDtos;

impl DtoEmitter for AnnotatedDtos {
    fn name(&self) -> &'static str {
        "annotated"
    }

    fn imports(&self) -> &'static [&'static str] {
        &["kotlinx.serialization.*", "java.util.*"]
    }

    fn emit_definition(
        &self,
        ind: &mut Indenter,
        definition: &Definition,
        model: &SwaggerModel,
    ) -> Result<()> {
        let mapper = KotlinTypeMapper;
        let mut fields = Vec::with_capacity(definition.properties.len());
        for prop in definition.properties.values() {
            let ident = kotlin_ident(&prop.name);
            let serial_name = if ident.trim_matches('`') != prop.name {
                format!("@SerialName({}) ", quote(&prop.name))
            } else {
                String::new()
            };
            fields.push(if prop.required {
                format!("{}val {}: {}", serial_name, ident, mapper.map_type(&prop.ty, model)?)
            } else {
                format!(
                    "{}@Optional val {}: {} = null",
                    serial_name,
                    ident,
                    mapper.map_optional_type(&prop.ty, model)?
                )
            });
        }

        class_doc(ind, definition);
        ind.line("@Serializable");
        if definition.synthetic {
            ind.line("// Synthetic class name");
        }
        let header = open_class(ind, &definition.name, &fields);
        ind.scope(header, |ind| {
            ind.separator(|ind| emit_checks(ind, definition));
            ind.separator(|ind| {
                operation_doc(
                    ind,
                    Some("serializes this object to a JSON string"),
                    None,
                    [],
                    Some("JSON representation of this object"),
                );
                ind.line("fun toJson() = json.stringify(serializer(), this)");
            });
            ind.separator(|ind| {
                ind.scope("companion object", |ind| {
                    operation_doc(
                        ind,
                        Some("deserializes the given JSON to an object of this kind"),
                        None,
                        [("string", Some("JSON string"))],
                        Some("deserialized object"),
                    );
                    ind.line("fun fromJson(string: String) = json.parse(serializer(), string)");
                });
            });
        });
        Ok(())
    }
}

impl DtoEmitter for HandRolledDtos {
    fn name(&self) -> &'static str {
        "hand-rolled"
    }

    fn imports(&self) -> &'static [&'static str] {
        &[]
    }

    fn emit_definition(
        &self,
        ind: &mut Indenter,
        definition: &Definition,
        model: &SwaggerModel,
    ) -> Result<()> {
        let mapper = PlaceholderTypeMapper;
        let mut fields = Vec::with_capacity(definition.properties.len());
        for prop in definition.properties.values() {
            let ident = kotlin_ident(&prop.name);
            fields.push(if prop.required {
                format!("val {}: {}", ident, mapper.map_type(&prop.ty, model)?)
            } else {
                format!("val {}: {} = null", ident, mapper.map_optional_type(&prop.ty, model)?)
            });
        }

        let mut args = Vec::with_capacity(definition.properties.len());
        for prop in definition.properties.values() {
            args.push(format!(
                "{} = {}",
                kotlin_ident(&prop.name),
                from_json_value(prop, &mapper, model)?
            ));
        }
        let entries: Vec<String> = definition
            .properties
            .values()
            .map(|prop| format!("{} to {}", quote(&prop.name), to_json_value(prop)))
            .collect();

        let name = &definition.name;
        class_doc(ind, definition);
        if definition.synthetic {
            ind.line("// Synthetic class name");
        }
        let header = open_class(ind, name, &fields);
        ind.scope(header, |ind| {
            ind.separator(|ind| emit_checks(ind, definition));
            ind.separator(|ind| call_list(ind, "fun toJson(): Map<String, Any?> = mapOf", &entries));
            ind.separator(|ind| {
                ind.scope("companion object", |ind| {
                    call_list(
                        ind,
                        &format!("fun fromJson(map: Map<String, Any?>): {} = {}", name, name),
                        &args,
                    );
                });
            });
        });
        Ok(())
    }
}

fn class_doc(ind: &mut Indenter, definition: &Definition) {
    let params = definition
        .properties
        .values()
        .filter_map(|p| p.description.as_deref().map(|d| (p.name.as_str(), Some(d))));
    operation_doc(ind, None, definition.description.as_deref(), params, None);
}

/// Emit `data class X(` with one field per line and return the header of the
/// class body scope. Classes without fields are declared as `class X()`.
fn open_class(ind: &mut Indenter, name: &str, fields: &[String]) -> String {
    if fields.is_empty() {
        return format!("class {}()", name);
    }
    ind.line(format!("data class {}(", name));
    ind.indented(|ind| {
        for (i, field) in fields.iter().enumerate() {
            let comma = if i + 1 < fields.len() { "," } else { "" };
            ind.line(format!("{}{}", field, comma));
        }
    });
    ")".to_string()
}

/// `head(a, b)` with one argument per line.
fn call_list(ind: &mut Indenter, head: &str, args: &[String]) {
    if args.is_empty() {
        ind.line(format!("{}()", head));
        return;
    }
    ind.delimited(format!("{}(", head), ")", |ind| {
        for (i, arg) in args.iter().enumerate() {
            let comma = if i + 1 < args.len() { "," } else { "" };
            ind.line(format!("{}{}", arg, comma));
        }
    });
}

/// Init block verifying every ruled property.
fn emit_checks(ind: &mut Indenter, definition: &Definition) {
    let checks: Vec<String> = definition
        .ruled_properties()
        .filter_map(|prop| {
            let rule = prop.rule.as_ref()?;
            let ident = kotlin_ident(&prop.name);
            let receiver = if prop.required { ident } else { format!("{}?", ident) };
            Some(format!(
                "{}.verifyParam({}) {{ {} }}",
                receiver,
                quote(&prop.name),
                rule.to_kotlin("it", &prop.ty)
            ))
        })
        .collect();
    if checks.is_empty() {
        return;
    }
    ind.scope("init", |ind| {
        for check in &checks {
            ind.line(check);
        }
    });
}

fn to_json_value(prop: &Property) -> String {
    let ident = kotlin_ident(&prop.name);
    let safe = if prop.required { "." } else { "?." };
    match &prop.ty {
        TypeDef::Named(_) => format!("{}{}toJson()", ident, safe),
        TypeDef::Array(item) if matches!(**item, TypeDef::Named(_)) => {
            format!("{}{}map {{ it.toJson() }}", ident, safe)
        }
        _ => ident,
    }
}

fn from_json_value(prop: &Property, mapper: &PlaceholderTypeMapper, model: &SwaggerModel) -> Result<String> {
    let raw = format!("map[{}]", quote(&prop.name));
    let opt = if prop.required { "" } else { "?" };
    Ok(match &prop.ty {
        TypeDef::Primitive(p) if p.is_numeric() => {
            let convert = match p {
                Primitive::Int => "toInt",
                Primitive::Long => "toLong",
                Primitive::Float => "toFloat",
                _ => "toDouble",
            };
            format!("({} as Number{}){}.{}()", raw, opt, opt, convert)
        }
        TypeDef::Named(name) => {
            if prop.required {
                format!("{}.fromJson({} as Map<String, Any?>)", name, raw)
            } else {
                format!("({} as Map<String, Any?>?)?.let {{ {}.fromJson(it) }}", raw, name)
            }
        }
        TypeDef::Array(item) if matches!(**item, TypeDef::Named(_)) => {
            let item = mapper.map_type(item, model)?;
            format!(
                "({} as List<Map<String, Any?>>{}){}.map {{ {}.fromJson(it) }}",
                raw, opt, opt, item
            )
        }
        TypeDef::Any | TypeDef::Primitive(Primitive::Date | Primitive::DateTime | Primitive::Binary)
            if !prop.required =>
        {
            raw
        }
        ty => format!("{} as {}{}", raw, mapper.map_type(ty, model)?, opt),
    })
}

/// Which [`DtoEmitter`] a generation uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DtoStyle {
    #[default]
    Annotated,
    HandRolled,
}

impl DtoStyle {
    pub fn as_str(&self) -> &'static str {
        self.emitter().name()
    }

    pub fn emitter(&self) -> &'static dyn DtoEmitter {
        match self {
            DtoStyle::Annotated => &AnnotatedDtos,
            DtoStyle::HandRolled => &HandRolledDtos,
        }
    }
}

impl fmt::Display for DtoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DtoStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "annotated" => Ok(DtoStyle::Annotated),
            "hand-rolled" => Ok(DtoStyle::HandRolled),
            other => Err(format!(
                "unknown DTO style '{}', expected 'annotated' or 'hand-rolled'",
                other
            )),
        }
    }
}
