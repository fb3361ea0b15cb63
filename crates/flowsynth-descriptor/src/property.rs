use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// PropertyConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PropertyConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: PropertyType,

    #[serde(default)]
    pub value: Value,
}

///
/// PropertyType
///
/// Declared type tag of a property. Serialized in lowercase, parsed without
/// regard to case (along with the long-form names), emitted as the matching
/// `data::Type` variant.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[remain::sorted]
pub enum PropertyType {
    Any,
    Array,
    Bool,
    Bytes,
    Connection,
    DateTime,
    Float32,
    Float64,
    Int,
    Int32,
    Int64,
    Map,
    Object,
    Params,
    String,
}

impl PropertyType {
    /// Variant name of the runtime `data::Type` enum.
    #[must_use]
    #[remain::check]
    pub const fn variant_name(self) -> &'static str {
        #[remain::sorted]
        match self {
            Self::Any => "Any",
            Self::Array => "Array",
            Self::Bool => "Bool",
            Self::Bytes => "Bytes",
            Self::Connection => "Connection",
            Self::DateTime => "DateTime",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Map => "Map",
            Self::Object => "Object",
            Self::Params => "Params",
            Self::String => "String",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let ty = match tag.trim().to_ascii_lowercase().as_str() {
            "any" => Self::Any,
            "array" => Self::Array,
            "bool" | "boolean" => Self::Bool,
            "bytes" => Self::Bytes,
            "connection" => Self::Connection,
            "datetime" => Self::DateTime,
            "float32" | "float" => Self::Float32,
            "float64" | "double" => Self::Float64,
            "int" | "integer" => Self::Int,
            "int32" => Self::Int32,
            "int64" | "long" => Self::Int64,
            "map" => Self::Map,
            "object" => Self::Object,
            "params" => Self::Params,
            "string" => Self::String,
            _ => return Err(UnknownPropertyType(tag.to_string())),
        };

        Ok(ty)
    }
}

impl TryFrom<String> for PropertyType {
    type Error = UnknownPropertyType;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

///
/// UnknownPropertyType
///

#[derive(Debug, ThisError)]
#[error("unknown property type '{0}'")]
pub struct UnknownPropertyType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boolean_alias() {
        let ty: PropertyType = serde_json::from_str(r#""boolean""#).expect("alias should parse");

        assert_eq!(ty, PropertyType::Bool);
    }

    #[test]
    fn lowercase_tags_map_to_variants() {
        let ty: PropertyType = serde_json::from_str(r#""datetime""#).expect("tag should parse");

        assert_eq!(ty.variant_name(), "DateTime");
    }

    #[test]
    fn long_form_names_are_accepted() {
        for (tag, expected) in [
            ("integer", PropertyType::Int),
            ("long", PropertyType::Int64),
            ("float", PropertyType::Float32),
            ("double", PropertyType::Float64),
        ] {
            let ty: PropertyType = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
            assert_eq!(ty, expected, "{tag}");
        }
    }

    #[test]
    fn tags_ignore_case() {
        for (tag, expected) in [
            ("Integer", PropertyType::Int),
            ("String", PropertyType::String),
            ("DateTime", PropertyType::DateTime),
            ("BOOLEAN", PropertyType::Bool),
        ] {
            let ty: PropertyType = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
            assert_eq!(ty, expected, "{tag}");
        }
    }

    #[test]
    fn serializes_canonical_lowercase() {
        let ty: PropertyType = serde_json::from_str(r#""Double""#).unwrap();

        assert_eq!(serde_json::to_string(&ty).unwrap(), r#""float64""#);
    }

    #[test]
    fn rejects_unknown_tag() {
        assert!(serde_json::from_str::<PropertyType>(r#""decimal""#).is_err());
    }
}
