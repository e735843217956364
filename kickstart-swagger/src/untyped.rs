//! Tagged payload tree used for sample responses.

use std::collections::HashSet;

use indexmap::IndexMap;
use kickstart_core::quote;

use crate::{Primitive, SwaggerModel, TypeDef};

/// A dynamically shaped value rendered as a Kotlin literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Untyped {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Verbatim Kotlin expression (a variable name)
    Identifier(String),
    Array(Vec<Untyped>),
    Object(IndexMap<String, Untyped>),
}

impl Untyped {
    /// Sample value for `ty`, expanding named definitions.
    ///
    /// Recursive definitions are cut off with `null` at the first repetition.
    pub fn default_for(ty: &TypeDef, model: &SwaggerModel) -> Untyped {
        default_for(ty, model, &mut HashSet::new())
    }

    pub fn get_path(&self, path: &[String]) -> Option<&Untyped> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };
        match self {
            Untyped::Object(fields) => fields.get(first)?.get_path(rest),
            _ => None,
        }
    }

    /// Replace the value at `path`, creating missing object keys along it.
    ///
    /// Returns `false`, leaving the tree unchanged, when a non-object value
    /// sits on the path.
    pub fn set_path(&mut self, path: &[String], value: Untyped) -> bool {
        let Some((first, rest)) = path.split_first() else {
            *self = value;
            return true;
        };
        match self {
            Untyped::Object(fields) => {
                if !rest.is_empty() && !fields.contains_key(first) {
                    fields.insert(first.clone(), Untyped::Object(IndexMap::new()));
                }
                match fields.get_mut(first) {
                    Some(child) => child.set_path(rest, value),
                    None => {
                        fields.insert(first.clone(), value);
                        true
                    }
                }
            }
            _ => false,
        }
    }

    /// Render as a Kotlin expression (`mapOf`, `listOf` and literals).
    pub fn to_kotlin(&self) -> String {
        match self {
            Untyped::Null => "null".to_string(),
            Untyped::Bool(value) => value.to_string(),
            Untyped::Int(value) => value.to_string(),
            Untyped::Float(value) if value.fract() == 0.0 => format!("{:.1}", value),
            Untyped::Float(value) => value.to_string(),
            Untyped::Str(value) => quote(value),
            Untyped::Identifier(name) => name.clone(),
            Untyped::Array(items) => format!(
                "listOf({})",
                items
                    .iter()
                    .map(Untyped::to_kotlin)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Untyped::Object(fields) => format!(
                "mapOf({})",
                fields
                    .iter()
                    .map(|(key, value)| format!("{} to {}", quote(key), value.to_kotlin()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }

    /// Path to the first string leaf whose key mentions "token".
    pub fn find_token_path(&self) -> Option<Vec<String>> {
        match self {
            Untyped::Object(fields) => fields.iter().find_map(|(key, value)| match value {
                Untyped::Str(_) if key.to_lowercase().contains("token") => Some(vec![key.clone()]),
                Untyped::Object(_) => value.find_token_path().map(|mut rest| {
                    rest.insert(0, key.clone());
                    rest
                }),
                _ => None,
            }),
            _ => None,
        }
    }
}

fn default_for(ty: &TypeDef, model: &SwaggerModel, visiting: &mut HashSet<String>) -> Untyped {
    match ty {
        TypeDef::Primitive(p) => match p {
            Primitive::Int | Primitive::Long => Untyped::Int(0),
            Primitive::Float | Primitive::Double => Untyped::Float(0.0),
            Primitive::String => Untyped::Str("string".to_string()),
            Primitive::Boolean => Untyped::Bool(false),
            Primitive::Date => Untyped::Str("2018-01-01".to_string()),
            Primitive::DateTime => Untyped::Str("2018-01-01T00:00:00Z".to_string()),
            Primitive::Binary => Untyped::Str(String::new()),
        },
        TypeDef::Array(item) => Untyped::Array(vec![default_for(item, model, visiting)]),
        TypeDef::Map(_) | TypeDef::Any => Untyped::Object(IndexMap::new()),
        TypeDef::Named(name) => {
            let Some(definition) = model.definition(name) else {
                return Untyped::Null;
            };
            if !visiting.insert(name.clone()) {
                return Untyped::Null;
            }
            let fields = definition
                .properties
                .values()
                .map(|prop| (prop.name.clone(), default_for(&prop.ty, model, visiting)))
                .collect();
            visiting.remove(name);
            Untyped::Object(fields)
        }
        TypeDef::Void => Untyped::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Definition, Property};

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    fn model() -> SwaggerModel {
        SwaggerModel::new()
            .with_definition(
                Definition::new("Session")
                    .with_property(Property::new("user", TypeDef::string(), true))
                    .with_property(Property::new("auth", TypeDef::named("Auth"), true)),
            )
            .with_definition(
                Definition::new("Auth")
                    .with_property(Property::new("accessToken", TypeDef::string(), true))
                    .with_property(Property::new("expires", TypeDef::Primitive(Primitive::Long), true)),
            )
            .with_definition(
                Definition::new("Node")
                    .with_property(Property::new("next", TypeDef::named("Node"), false)),
            )
    }

    #[test]
    fn test_default_for_named() {
        let value = Untyped::default_for(&TypeDef::named("Session"), &model());
        assert_eq!(
            value.to_kotlin(),
            r#"mapOf("user" to "string", "auth" to mapOf("accessToken" to "string", "expires" to 0))"#
        );
    }

    #[test]
    fn test_default_for_recursive() {
        let value = Untyped::default_for(&TypeDef::named("Node"), &model());
        assert_eq!(value.to_kotlin(), r#"mapOf("next" to null)"#);
    }

    #[test]
    fn test_default_for_collections() {
        let model = model();
        let list = Untyped::default_for(&TypeDef::array(TypeDef::Primitive(Primitive::Double)), &model);
        assert_eq!(list.to_kotlin(), "listOf(0.0)");
        let map = Untyped::default_for(&TypeDef::Map(Box::new(TypeDef::string())), &model);
        assert_eq!(map.to_kotlin(), "mapOf()");
    }

    #[test]
    fn test_token_path() {
        let value = Untyped::default_for(&TypeDef::named("Session"), &model());
        assert_eq!(value.find_token_path(), Some(path(&["auth", "accessToken"])));
        assert_eq!(Untyped::Str("x".into()).find_token_path(), None);
    }

    #[test]
    fn test_set_and_get_path() {
        let mut value = Untyped::default_for(&TypeDef::named("Session"), &model());
        let token = path(&["auth", "accessToken"]);

        assert!(value.set_path(&token, Untyped::Identifier("token".into())));
        assert_eq!(value.get_path(&token), Some(&Untyped::Identifier("token".into())));
        assert!(value.to_kotlin().contains(r#""accessToken" to token"#));

        assert!(value.set_path(&path(&["meta", "issued"]), Untyped::Bool(true)));
        assert_eq!(value.get_path(&path(&["meta", "issued"])), Some(&Untyped::Bool(true)));

        // "user" holds a string, so nothing can be nested under it
        assert!(!value.set_path(&path(&["user", "id"]), Untyped::Int(1)));
    }

    #[test]
    fn test_set_root() {
        let mut value = Untyped::Str("string".into());
        assert!(value.set_path(&[], Untyped::Identifier("token".into())));
        assert_eq!(value.to_kotlin(), "token");
    }
}
