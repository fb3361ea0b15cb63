use crate::{
    ActionConfig, DescriptorError, Import, ImportError, PropertyConfig, ResourceConfig, SchemaDef,
    TriggerConfig, import::parse_imports,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

/// The only descriptor type marker synthesis accepts.
pub const APP_TYPE: &str = "flogo:app";

///
/// Descriptor
///
/// Declarative application description. Every list is ordered and that order
/// is the traversal order of the synthesized program.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub app_model: String,

    #[serde(default)]
    pub imports: Vec<String>,

    #[serde(default)]
    pub properties: Vec<PropertyConfig>,

    #[serde(default)]
    pub channels: Vec<String>,

    #[serde(default)]
    pub resources: Vec<ResourceConfig>,

    #[serde(default)]
    pub schemas: BTreeMap<String, SchemaDef>,

    #[serde(default)]
    pub actions: Vec<ActionConfig>,

    #[serde(default)]
    pub triggers: Vec<TriggerConfig>,
}

impl Descriptor {
    /// Parse a descriptor from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a descriptor file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DescriptorError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    #[must_use]
    pub fn is_app(&self) -> bool {
        self.kind == APP_TYPE
    }

    /// Parse the import list in declaration order.
    pub fn parsed_imports(&self) -> Result<Vec<Import>, ImportError> {
        parse_imports(&self.imports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "name": "sample",
        "type": "flogo:app",
        "version": "1.0.0",
        "appModel": "1.1.0",
        "imports": [
            "github.com/project-flogo/contrib/trigger/rest",
            "flow github.com/project-flogo/flow@v1.2.0"
        ],
        "properties": [{ "name": "x", "type": "string", "value": "hello" }],
        "channels": ["A,10"],
        "resources": [{ "id": "flow:main", "data": { "tasks": [] } }],
        "actions": [{ "id": "a1", "ref": "#flow", "settings": { "flowURI": "res://flow:main" } }],
        "triggers": [{
            "id": "t1",
            "ref": "#rest",
            "settings": { "port": 8080 },
            "handlers": [{
                "settings": { "method": "GET" },
                "actions": [{ "id": "a1", "if": "$.ok", "input": { "in": "=$.content" } }]
            }]
        }]
    }"##;

    #[test]
    fn parses_flogo_shaped_json() {
        let descriptor = Descriptor::from_json(SAMPLE).expect("sample descriptor should parse");

        assert!(descriptor.is_app());
        assert_eq!(descriptor.app_model, "1.1.0");
        assert_eq!(descriptor.channels, vec!["A,10".to_string()]);
        assert_eq!(descriptor.properties[0].name, "x");

        let handler_action = &descriptor.triggers[0].handlers[0].actions[0];
        assert_eq!(handler_action.action.id, "a1");
        assert_eq!(handler_action.condition, "$.ok");
        assert_eq!(handler_action.input.len(), 1);
        assert!(handler_action.output.is_empty());
    }

    #[test]
    fn keeps_resource_bytes_verbatim() {
        let descriptor = Descriptor::from_json(SAMPLE).expect("sample descriptor should parse");

        assert_eq!(descriptor.resources[0].data_bytes(), br#"{ "tasks": [] }"#);
    }

    #[test]
    fn parses_imports_in_order() {
        let descriptor = Descriptor::from_json(SAMPLE).expect("sample descriptor should parse");
        let imports = descriptor.parsed_imports().expect("imports should parse");

        let aliases: Vec<_> = imports.iter().map(Import::canonical_alias).collect();
        assert_eq!(aliases, vec!["rest", "flow"]);
    }

    #[test]
    fn rejects_missing_type_marker() {
        let err = Descriptor::from_json(r#"{ "name": "x" }"#).expect_err("type is required");

        assert!(matches!(err, DescriptorError::Json(_)));
    }
}
